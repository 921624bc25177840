//! 弹窗更新逻辑

use std::path::PathBuf;

use phonebook_core::LoadOutcome;

use super::report_error;
use crate::message::ModalMessage;
use crate::model::state::{CONFIRM_NO, CONFIRM_YES};
use crate::model::{App, Modal};

const EMPTY_PATH_ERROR: &str = "Please enter a file path";

/// 处理弹窗消息
pub fn update(app: &mut App, msg: ModalMessage) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { .. } | Modal::Help => handle_simple_modal(app, msg),
        Modal::Confirm { .. } => handle_confirm(app, msg),
        Modal::OpenFile { .. } => handle_path_modal(app, msg, open_file),
        Modal::SaveFile { .. } => handle_path_modal(app, msg, save_file),
    }
}

/// 错误 / 帮助弹窗：任意确认或关闭都直接关闭
fn handle_simple_modal(app: &mut App, msg: ModalMessage) {
    if matches!(msg, ModalMessage::Close | ModalMessage::Confirm) {
        app.modal.close();
    }
}

/// 确认弹窗
fn handle_confirm(app: &mut App, msg: ModalMessage) {
    let Some(Modal::Confirm { ref mut focus, .. }) = app.modal.active else {
        return;
    };

    match msg {
        ModalMessage::ToggleFocus => {
            *focus = if *focus == CONFIRM_YES { CONFIRM_NO } else { CONFIRM_YES };
        }
        ModalMessage::Confirm => {
            let yes = *focus == CONFIRM_YES;
            answer_confirm(app, yes);
        }
        ModalMessage::Input('y' | 'Y') => answer_confirm(app, true),
        ModalMessage::Input('n' | 'N') | ModalMessage::Close => answer_confirm(app, false),
        _ => {}
    }
}

/// 关闭确认弹窗；选择 Yes 时记录答案并重放 Exit
fn answer_confirm(app: &mut App, yes: bool) {
    app.modal.close();
    if !yes {
        log::debug!("Exit cancelled");
        return;
    }

    app.phonebook.form_mut().answer_confirmation(true);
    if app.phonebook.exit() {
        app.should_quit = true;
    }
}

/// 路径弹窗：编辑输入框，确认时执行 `on_confirm`
fn handle_path_modal(app: &mut App, msg: ModalMessage, on_confirm: fn(&mut App, PathBuf)) {
    if msg == ModalMessage::Close {
        app.modal.close();
        return;
    }

    let Some(modal) = app.modal.active.as_mut() else {
        return;
    };
    let Some(input) = modal.path_input_mut() else {
        return;
    };

    match msg {
        ModalMessage::Input(ch) => input.insert(ch),
        ModalMessage::Backspace => input.backspace(),
        ModalMessage::Delete => input.delete(),
        ModalMessage::CursorLeft => input.move_left(),
        ModalMessage::CursorRight => input.move_right(),
        ModalMessage::CursorHome => input.move_home(),
        ModalMessage::CursorEnd => input.move_end(),
        ModalMessage::Confirm => {
            let path = input.value().trim().to_string();
            if path.is_empty() {
                modal.set_error(EMPTY_PATH_ERROR);
            } else {
                on_confirm(app, PathBuf::from(path));
            }
        }
        ModalMessage::Close | ModalMessage::ToggleFocus => {}
    }
}

/// 加载文件；损坏或无法读取的文件由 controller 弹出提示并开始新的通讯录
fn open_file(app: &mut App, path: PathBuf) {
    app.modal.close();

    match app.phonebook.load_file(&path) {
        LoadOutcome::Loaded(count) => {
            app.set_status(format!("Loaded {count} records from {}", path.display()));
            app.remember_file(&path);
        }
        LoadOutcome::Recovered(reason) => {
            log::warn!("Started a new phonebook instead of {}: {reason}", path.display());
            app.set_status("Started a new phonebook");
        }
    }
}

/// 写入已生成的文档
fn save_file(app: &mut App, path: PathBuf) {
    let Some(Modal::SaveFile { document, .. }) = app.modal.take() else {
        return;
    };

    match app.phonebook.write_document(&path, &document) {
        Ok(()) => {
            let count = app.phonebook.store().len();
            app.set_status(format!("Saved {count} records to {}", path.display()));
            app.remember_file(&path);
        }
        Err(err) => report_error(app, &err),
    }
}
