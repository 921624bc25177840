//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::{App, Modal};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        // 终端窗口大小改变时主循环会自动重绘
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，避免 Windows 终端上按键重复
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何情况下都直接退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 如果有弹窗打开，优先处理弹窗输入
    if let Some(ref modal) = app.modal.active {
        return handle_modal_keys(key, modal);
    }

    if DefaultKeymap::is_help(&key) {
        return AppMessage::ShowHelp;
    }

    if let Some(action) = DefaultKeymap::action_for(&key) {
        return AppMessage::Form(FormMessage::Action(action));
    }

    handle_form_keys(key)
}

/// 普通字符：无修饰键或仅 Shift
fn plain_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            Some(ch)
        }
        _ => None,
    }
}

/// 处理表单中的按键：字段切换与文本编辑
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    if let Some(ch) = plain_char(&key) {
        return AppMessage::Form(FormMessage::Input(ch));
    }

    let msg = match key.code {
        // Tab / ↓ / Enter: 下一个字段
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => FormMessage::NextField,
        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => FormMessage::PrevField,
        KeyCode::Backspace => FormMessage::Backspace,
        KeyCode::Delete => FormMessage::Delete,
        KeyCode::Left => FormMessage::CursorLeft,
        KeyCode::Right => FormMessage::CursorRight,
        KeyCode::Home => FormMessage::CursorHome,
        KeyCode::End => FormMessage::CursorEnd,
        _ => return AppMessage::Noop,
    };
    AppMessage::Form(msg)
}

/// 处理弹窗中的按键
fn handle_modal_keys(key: KeyEvent, modal: &Modal) -> AppMessage {
    let msg = match modal {
        // 帮助和错误弹窗只响应关闭按键
        Modal::Help | Modal::Error { .. } => match key.code {
            KeyCode::Enter | KeyCode::Esc => Some(ModalMessage::Close),
            _ => None,
        },
        Modal::Confirm { .. } => handle_confirm_keys(key),
        Modal::OpenFile { .. } | Modal::SaveFile { .. } => handle_path_keys(key),
    };
    msg.map_or(AppMessage::Noop, AppMessage::Modal)
}

/// 处理确认弹窗的按键
fn handle_confirm_keys(key: KeyEvent) -> Option<ModalMessage> {
    match key.code {
        // Tab 或 ← →: 切换焦点
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
            Some(ModalMessage::ToggleFocus)
        }
        KeyCode::Enter => Some(ModalMessage::Confirm),
        KeyCode::Esc => Some(ModalMessage::Close),
        // y / n 快捷回答
        _ => plain_char(&key).map(ModalMessage::Input),
    }
}

/// 处理路径输入弹窗的按键
fn handle_path_keys(key: KeyEvent) -> Option<ModalMessage> {
    if let Some(ch) = plain_char(&key) {
        return Some(ModalMessage::Input(ch));
    }
    let msg = match key.code {
        KeyCode::Esc => ModalMessage::Close,
        KeyCode::Enter => ModalMessage::Confirm,
        KeyCode::Backspace => ModalMessage::Backspace,
        KeyCode::Delete => ModalMessage::Delete,
        KeyCode::Left => ModalMessage::CursorLeft,
        KeyCode::Right => ModalMessage::CursorRight,
        KeyCode::Home => ModalMessage::CursorHome,
        KeyCode::End => ModalMessage::CursorEnd,
        _ => return None,
    };
    Some(msg)
}

#[cfg(test)]
mod tests {
    use phonebook_core::Action;

    use super::*;
    use crate::test_utils::test_app;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn letters_type_into_the_form() {
        let (app, _dir) = test_app();

        assert_eq!(
            handle_event(press(KeyCode::Char('J'), KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::Input('J'))
        );
        assert_eq!(
            handle_event(press(KeyCode::BackTab, KeyModifiers::SHIFT), &app),
            AppMessage::Form(FormMessage::PrevField)
        );
    }

    #[test]
    fn shortcuts_become_button_actions() {
        let (app, _dir) = test_app();

        assert_eq!(
            handle_event(press(KeyCode::Char('o'), KeyModifiers::ALT), &app),
            AppMessage::Form(FormMessage::Action(Action::Load))
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Form(FormMessage::Action(Action::Exit))
        );
        assert_eq!(
            handle_event(press(KeyCode::F(1), KeyModifiers::NONE), &app),
            AppMessage::ShowHelp
        );
    }

    #[test]
    fn open_modal_captures_keys_except_force_quit() {
        let (mut app, _dir) = test_app();
        app.modal.show_open_file("book.xml");

        assert_eq!(
            handle_event(press(KeyCode::Char('x'), KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Input('x'))
        );
        assert_eq!(
            handle_event(press(KeyCode::Esc, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Close)
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('s'), KeyModifiers::ALT), &app),
            AppMessage::Noop
        );
        assert_eq!(
            handle_event(press(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            AppMessage::Quit
        );
    }

    #[test]
    fn confirm_modal_toggles_with_arrows() {
        let (mut app, _dir) = test_app();
        app.modal.show_confirm("Exit", "Are you sure you want to exit?");

        assert_eq!(
            handle_event(press(KeyCode::Left, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::ToggleFocus)
        );
        assert_eq!(
            handle_event(press(KeyCode::Enter, KeyModifiers::NONE), &app),
            AppMessage::Modal(ModalMessage::Confirm)
        );
    }

    #[test]
    fn key_release_is_ignored() {
        let (app, _dir) = test_app();
        let mut key = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;

        assert_eq!(handle_event(Event::Key(key), &app), AppMessage::Noop);
    }
}
