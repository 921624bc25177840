//! 表单更新逻辑

use phonebook_core::{Action, CoreResult};

use super::report_error;
use crate::message::FormMessage;
use crate::model::{App, TextInput};

/// 处理表单消息
pub fn update(app: &mut App, msg: FormMessage) {
    match msg {
        FormMessage::Action(action) => run_action(app, action),
        FormMessage::NextField => app.phonebook.form_mut().focus_next(),
        FormMessage::PrevField => app.phonebook.form_mut().focus_previous(),
        FormMessage::Input(ch) => edit(app, |input| input.insert(ch)),
        FormMessage::Backspace => edit(app, TextInput::backspace),
        FormMessage::Delete => edit(app, TextInput::delete),
        FormMessage::CursorLeft => edit(app, TextInput::move_left),
        FormMessage::CursorRight => edit(app, TextInput::move_right),
        FormMessage::CursorHome => edit(app, TextInput::move_home),
        FormMessage::CursorEnd => edit(app, TextInput::move_end),
    }
}

/// 编辑焦点输入框；只读时忽略
fn edit(app: &mut App, f: impl FnOnce(&mut TextInput)) {
    if let Some(input) = app.phonebook.form_mut().focused_input_mut() {
        f(input);
    }
}

/// 执行按钮动作
fn run_action(app: &mut App, action: Action) {
    app.clear_status();
    log::debug!("Action {action:?}");

    let result: CoreResult<()> = match action {
        Action::Load => {
            let path = app.default_path();
            app.modal.show_open_file(&path);
            Ok(())
        }
        // 先提交并生成文档，再询问保存路径
        Action::Save => app.phonebook.save().map(|document| {
            let path = app.default_path();
            app.modal.show_save_file(&path, document);
        }),
        Action::Add => app.phonebook.add(),
        Action::Delete => app.phonebook.delete(),
        Action::Previous => app.phonebook.previous(),
        Action::Next => app.phonebook.next(),
        Action::Exit => {
            if app.phonebook.exit() {
                app.should_quit = true;
            }
            Ok(())
        }
    };

    if let Err(err) = result {
        report_error(app, &err);
    }
}
