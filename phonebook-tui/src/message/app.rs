//! 应用主消息枚举

use super::{FormMessage, ModalMessage};

/// 应用主消息
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// 立即退出（Ctrl+C，不经确认）
    Quit,

    /// 表单相关消息
    Form(FormMessage),

    /// 弹窗相关消息
    Modal(ModalMessage),

    /// 显示帮助
    ShowHelp,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
