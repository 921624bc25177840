//! 弹窗/对话框状态

use crate::model::input::TextInput;

/// 确认弹窗的按钮：0=No, 1=Yes
pub const CONFIRM_NO: usize = 0;
pub const CONFIRM_YES: usize = 1;

/// 弹窗类型
#[derive(Debug, Clone)]
pub enum Modal {
    /// 错误提示（校验失败、文件损坏、写入失败）
    Error { title: String, message: String },
    /// 是/否确认（目前只有退出确认）
    Confirm {
        title: String,
        message: String,
        /// 焦点：0=No, 1=Yes
        focus: usize,
    },
    /// 输入要加载的文件路径
    OpenFile {
        path: TextInput,
        /// 错误信息
        error: Option<String>,
    },
    /// 输入保存路径；文档在弹窗打开前已经生成
    SaveFile {
        path: TextInput,
        document: Vec<u8>,
        /// 错误信息
        error: Option<String>,
    },
    /// 帮助信息
    Help,
}

impl Modal {
    /// 路径输入弹窗的输入框
    pub fn path_input_mut(&mut self) -> Option<&mut TextInput> {
        match self {
            Self::OpenFile { path, .. } | Self::SaveFile { path, .. } => Some(path),
            _ => None,
        }
    }

    /// 设置路径弹窗的错误信息
    pub fn set_error(&mut self, message: impl Into<String>) {
        if let Self::OpenFile { error, .. } | Self::SaveFile { error, .. } = self {
            *error = Some(message.into());
        }
    }
}

/// 弹窗状态
#[derive(Debug, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    /// 创建新的弹窗状态
    pub fn new() -> Self {
        Self::default()
    }

    /// 显示弹窗
    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    /// 关闭弹窗
    pub fn close(&mut self) {
        self.active = None;
    }

    /// 取出当前弹窗（同时关闭）
    pub fn take(&mut self) -> Option<Modal> {
        self.active.take()
    }

    /// 是否有活动弹窗
    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    /// 显示错误弹窗
    pub fn show_error(&mut self, title: &str, message: &str) {
        self.show(Modal::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    /// 显示确认弹窗，默认焦点在 No
    pub fn show_confirm(&mut self, title: &str, message: &str) {
        self.show(Modal::Confirm {
            title: title.to_string(),
            message: message.to_string(),
            focus: CONFIRM_NO,
        });
    }

    /// 显示打开文件弹窗
    pub fn show_open_file(&mut self, default_path: &str) {
        self.show(Modal::OpenFile {
            path: TextInput::with_value(default_path),
            error: None,
        });
    }

    /// 显示保存文件弹窗
    pub fn show_save_file(&mut self, default_path: &str, document: Vec<u8>) {
        self.show(Modal::SaveFile {
            path: TextInput::with_value(default_path),
            document,
            error: None,
        });
    }

    /// 显示帮助弹窗
    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }
}
