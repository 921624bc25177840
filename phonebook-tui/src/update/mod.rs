//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ FormMsg   │          ┌──────────┐         │   │
//！│  │   │  View   │          │           │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 读写配置          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   config.json     │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/update/mod.rs
//! Update 层：状态更新逻辑
//!
//! Update 层负责处理 Message，更新 Model 状态。
//! 是唯一可以修改 Model 的地方。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod form;               // 表单子消息处理（按钮动作、文本编辑）
//!         mod modal;              // 弹窗子消息处理
//!
//!         pub fn update(app: &mut App, msg: AppMessage) {...}
//!
//!
//!     主更新函数：
//!             pub fn update(app: &mut App, msg: AppMessage) {
//!                 match msg {
//!                     AppMessage::Quit => app.should_quit = true,
//!                     AppMessage::Form(form_msg) => form::update(app, form_msg),
//!                     AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),
//!                     ...
//!                 }
//!                 app.sync_alerts();
//!             }
//!
//!         每条消息处理完之后都会调用 sync_alerts：
//!         NavigationController 通过 Form trait 排队的错误或确认请求，
//!         在这里变成弹窗。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 表单更新（form.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     FormMessage::Action(action) 调用 NavigationController 的对应方法：
//!
//!         Load        → 打开路径弹窗（真正加载发生在弹窗确认时）
//!         Save        → controller.save() 生成文档，再打开路径弹窗
//!         Add         → controller.add()
//!         Delete      → controller.delete()
//!         Previous    → controller.previous()
//!         Next        → controller.next()
//!         Exit        → controller.exit()，首次调用只会弹出确认框
//!
//!     返回 Err 时按 CoreError::is_expected 分级记录日志，
//!     校验失败等用户可见的错误已经由 controller 通过表单弹出。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗更新（modal.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     - Confirm 弹窗选择 Yes：记录答案并重放 Exit
//!     - OpenFile 弹窗确认：controller.load_file(path)
//!     - SaveFile 弹窗确认：controller.write_document(path, document)
//!     - 加载或保存成功后记住文件路径（写回配置）
//!
//!
//! Update 完成后，控制权返回主循环（app.rs）。
//! 下一轮循环时，View 层会读取更新后的 Model 来重新渲染。
//!

mod form;
mod modal;

use phonebook_core::CoreError;

use crate::message::AppMessage;
use crate::model::App;

/// 处理应用消息，更新状态
pub fn update(app: &mut App, msg: AppMessage) {
    match msg {
        AppMessage::Quit => {
            log::info!("Quit without confirmation");
            app.should_quit = true;
        }

        AppMessage::Form(form_msg) => {
            form::update(app, form_msg);
        }

        AppMessage::Modal(modal_msg) => {
            modal::update(app, modal_msg);
        }

        AppMessage::ShowHelp => {
            app.modal.show_help();
        }

        AppMessage::Noop => {}
    }

    app.sync_alerts();
}

/// 记录 controller 返回的错误
fn report_error(app: &mut App, err: &CoreError) {
    if err.is_expected() {
        log::warn!("{err}");
    } else {
        log::error!("{err}");
    }

    if let CoreError::ActionUnavailable(action) = err {
        app.set_status(format!("\"{}\" is not available now", action.label()));
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use std::fs;
    use std::path::Path;

    use phonebook_core::services::{EXIT_TITLE, VALIDATION_ERROR_TITLE};
    use phonebook_core::{Action, RecordField};

    use super::*;
    use crate::message::{FormMessage, ModalMessage};
    use crate::model::state::CONFIRM_YES;
    use crate::model::Modal;
    use crate::test_utils::{test_app, type_in_modal, type_text};

    const TWO_RECORDS: &str = "<records>\
        <record><name>John Smith</name><state>New York</state><phone>(212) 555 - 1234</phone></record>\
        <record><name>Mary Ann</name><state>Texas</state><phone>(713) 200 - 0001</phone></record>\
        </records>";

    fn action(app: &mut App, action: Action) {
        update(app, AppMessage::Form(FormMessage::Action(action)));
    }

    fn modal(app: &mut App, msg: ModalMessage) {
        update(app, AppMessage::Modal(msg));
    }

    fn open(app: &mut App, path: &Path) {
        app.modal.show_open_file(&path.display().to_string());
        modal(app, ModalMessage::Confirm);
    }

    #[test]
    fn load_prompt_is_prefilled_with_default_path() {
        let (mut app, _dir) = test_app();
        action(&mut app, Action::Load);

        match app.modal.active {
            Some(Modal::OpenFile { ref path, .. }) => assert_eq!(path.value(), "phonebook.xml"),
            ref other => panic!("unexpected modal {other:?}"),
        }
    }

    #[test]
    fn loading_a_file_shows_first_record_and_remembers_it() {
        let (mut app, dir) = test_app();
        let path = dir.path().join("friends.xml");
        fs::write(&path, TWO_RECORDS).unwrap();

        open(&mut app, &path);

        let display = app.phonebook.form().display();
        assert_eq!(display.counter_label(), "1 of 2");
        assert_eq!(display.file_label(), "File: friends.xml");
        assert!(!app.modal.is_open());
        assert_eq!(app.config.last_file.as_deref(), Some(path.as_path()));

        let saved = fs::read_to_string(dir.path().join("config.json")).unwrap();
        assert!(saved.contains("friends.xml"));
    }

    #[test]
    fn damaged_file_raises_error_modal() {
        let (mut app, dir) = test_app();
        let path = dir.path().join("broken.xml");
        fs::write(&path, "<contacts/>").unwrap();

        open(&mut app, &path);

        match app.modal.active {
            Some(Modal::Error { ref message, .. }) => {
                assert_eq!(message, "File broken.xml is damaged. Creating new Phonebook");
            }
            ref other => panic!("unexpected modal {other:?}"),
        }
        assert!(app.phonebook.store().is_empty());
        assert_eq!(app.config.last_file, None);
    }

    #[test]
    fn invalid_field_blocks_navigation_with_error_modal() {
        let (mut app, dir) = test_app();
        let path = dir.path().join("friends.xml");
        fs::write(&path, TWO_RECORDS).unwrap();
        open(&mut app, &path);

        // 在名字末尾追加数字使其非法
        type_text(&mut app, "9");
        action(&mut app, Action::Next);

        match app.modal.active {
            Some(Modal::Error { ref title, ref message }) => {
                assert_eq!(title, VALIDATION_ERROR_TITLE);
                assert_eq!(message, RecordField::Name.message());
            }
            ref other => panic!("unexpected modal {other:?}"),
        }
        assert_eq!(app.phonebook.current_index(), 0);
        assert_eq!(app.phonebook.store().records()[0].name, "John Smith");
    }

    #[test]
    fn add_and_save_through_prompts() {
        let (mut app, dir) = test_app();
        let source = dir.path().join("empty.xml");
        fs::write(&source, "<records/>").unwrap();
        open(&mut app, &source);

        action(&mut app, Action::Add);
        type_text(&mut app, "Ann Lee");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "Ohio");
        update(&mut app, AppMessage::Form(FormMessage::NextField));
        type_text(&mut app, "(614) 555 - 0199");

        action(&mut app, Action::Save);
        assert!(matches!(app.modal.active, Some(Modal::SaveFile { .. })));

        let target = dir.path().join("saved.xml");
        modal(&mut app, ModalMessage::CursorHome);
        for _ in 0..app.default_path().chars().count() {
            modal(&mut app, ModalMessage::Delete);
        }
        type_in_modal(&mut app, &target.display().to_string());
        modal(&mut app, ModalMessage::Confirm);

        assert!(!app.modal.is_open());
        let written = fs::read_to_string(&target).unwrap();
        assert!(written.contains("<name>Ann Lee</name>"));
        assert_eq!(app.phonebook.form().display().file_label(), "File: saved.xml");
        assert_eq!(app.config.last_file.as_deref(), Some(target.as_path()));
    }

    #[test]
    fn empty_path_keeps_prompt_open() {
        let (mut app, _dir) = test_app();
        app.modal.show_open_file("");
        modal(&mut app, ModalMessage::Confirm);

        match app.modal.active {
            Some(Modal::OpenFile { ref error, .. }) => assert!(error.is_some()),
            ref other => panic!("unexpected modal {other:?}"),
        }
    }

    #[test]
    fn exit_requires_explicit_yes() {
        let (mut app, _dir) = test_app();

        action(&mut app, Action::Exit);
        match app.modal.active {
            Some(Modal::Confirm { ref title, focus, .. }) => {
                assert_eq!(title, EXIT_TITLE);
                assert_ne!(focus, CONFIRM_YES);
            }
            ref other => panic!("unexpected modal {other:?}"),
        }

        // 默认焦点是 No
        modal(&mut app, ModalMessage::Confirm);
        assert!(!app.should_quit);
        assert!(!app.modal.is_open());

        action(&mut app, Action::Exit);
        modal(&mut app, ModalMessage::ToggleFocus);
        modal(&mut app, ModalMessage::Confirm);
        assert!(app.should_quit);
    }

    #[test]
    fn y_key_confirms_exit() {
        let (mut app, _dir) = test_app();
        action(&mut app, Action::Exit);
        modal(&mut app, ModalMessage::Input('y'));

        assert!(app.should_quit);
    }

    #[test]
    fn unavailable_action_only_sets_status() {
        let (mut app, _dir) = test_app();
        action(&mut app, Action::Add);

        assert!(!app.modal.is_open());
        assert!(app
            .status_message
            .as_deref()
            .is_some_and(|s| s.contains("not available")));
        assert!(app.phonebook.store().is_empty());
    }

    #[test]
    fn read_only_form_ignores_typing() {
        let (mut app, _dir) = test_app();
        type_text(&mut app, "abc");

        assert_eq!(app.phonebook.form().input(RecordField::Name).value(), "");
    }
}
