//! 快捷键配置
//!
//! 按钮动作统一用 Alt 组合键，避免与输入框中的普通字符冲突。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use phonebook_core::Action;

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::F(1)),
        KeyBinding::alt(KeyCode::Char('h')),
    ];

    // 按钮
    pub const LOAD: [KeyBinding; 1] = [KeyBinding::alt(KeyCode::Char('o'))];
    pub const SAVE: [KeyBinding; 1] = [KeyBinding::alt(KeyCode::Char('s'))];
    pub const ADD: [KeyBinding; 1] = [KeyBinding::alt(KeyCode::Char('a'))];
    pub const DELETE: [KeyBinding; 1] = [KeyBinding::alt(KeyCode::Char('d'))];
    pub const PREVIOUS: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::PageUp),
        KeyBinding::alt(KeyCode::Char('p')),
    ];
    pub const NEXT: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::PageDown),
        KeyBinding::alt(KeyCode::Char('n')),
    ];
    pub const EXIT: [KeyBinding; 2] = [
        KeyBinding::key(KeyCode::Esc),
        KeyBinding::alt(KeyCode::Char('q')),
    ];

    /// 某个按钮的全部绑定
    pub fn bindings(action: Action) -> &'static [KeyBinding] {
        match action {
            Action::Load => &Self::LOAD,
            Action::Save => &Self::SAVE,
            Action::Add => &Self::ADD,
            Action::Delete => &Self::DELETE,
            Action::Previous => &Self::PREVIOUS,
            Action::Next => &Self::NEXT,
            Action::Exit => &Self::EXIT,
        }
    }

    /// 按键对应的按钮动作
    pub fn action_for(key: &KeyEvent) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|&action| Self::bindings(action).iter().any(|b| b.matches(key)))
    }

    pub fn is_help(key: &KeyEvent) -> bool {
        Self::HELP.iter().any(|b| b.matches(key))
    }

    /// 按钮上显示的主快捷键
    pub fn hint(action: Action) -> &'static str {
        match action {
            Action::Load => "Alt+O",
            Action::Save => "Alt+S",
            Action::Add => "Alt+A",
            Action::Delete => "Alt+D",
            Action::Previous => "PgUp",
            Action::Next => "PgDn",
            Action::Exit => "Esc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alt(ch: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(ch), KeyModifiers::ALT)
    }

    #[test]
    fn alt_letters_map_to_buttons() {
        assert_eq!(DefaultKeymap::action_for(&alt('o')), Some(Action::Load));
        assert_eq!(DefaultKeymap::action_for(&alt('s')), Some(Action::Save));
        assert_eq!(DefaultKeymap::action_for(&alt('a')), Some(Action::Add));
        assert_eq!(DefaultKeymap::action_for(&alt('d')), Some(Action::Delete));
        assert_eq!(DefaultKeymap::action_for(&alt('p')), Some(Action::Previous));
        assert_eq!(DefaultKeymap::action_for(&alt('n')), Some(Action::Next));
        assert_eq!(DefaultKeymap::action_for(&alt('q')), Some(Action::Exit));
    }

    #[test]
    fn page_keys_and_escape() {
        let page_up = KeyEvent::new(KeyCode::PageUp, KeyModifiers::NONE);
        let page_down = KeyEvent::new(KeyCode::PageDown, KeyModifiers::NONE);
        let esc = KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE);

        assert_eq!(DefaultKeymap::action_for(&page_up), Some(Action::Previous));
        assert_eq!(DefaultKeymap::action_for(&page_down), Some(Action::Next));
        assert_eq!(DefaultKeymap::action_for(&esc), Some(Action::Exit));
    }

    #[test]
    fn plain_letters_are_not_actions() {
        let key = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::NONE);
        assert_eq!(DefaultKeymap::action_for(&key), None);
        assert!(DefaultKeymap::is_help(&KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)));
    }
}
