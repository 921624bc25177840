//! 弹窗消息类型

/// 弹窗相关消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// 关闭弹窗（确认弹窗中等同于选择 No）
    Close,

    /// 确认/提交
    Confirm,

    /// 在确认弹窗中切换 Yes/No 焦点
    ToggleFocus,

    /// 输入字符
    Input(char),

    /// 删除字符（Backspace）
    Backspace,

    /// 删除光标后的字符（Delete）
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
