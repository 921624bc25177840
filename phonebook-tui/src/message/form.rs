//! 表单消息类型

use phonebook_core::Action;

/// 记录表单相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 按下某个按钮（Load / Save / + / - / < / > / Exit）
    Action(Action),

    /// 下一个输入框
    NextField,

    /// 上一个输入框
    PrevField,

    /// 输入字符
    Input(char),

    /// 删除光标前的字符（Backspace）
    Backspace,

    /// 删除光标处的字符（Delete）
    Delete,

    /// 光标左移
    CursorLeft,

    /// 光标右移
    CursorRight,

    /// 光标移到行首
    CursorHome,

    /// 光标移到行尾
    CursorEnd,
}
