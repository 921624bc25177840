//! 表单显示状态

use serde::Serialize;

use super::Record;

/// 表单上的用户操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Action {
    Load,
    Save,
    Add,
    Delete,
    Previous,
    Next,
    Exit,
}

impl Action {
    /// 按钮顺序
    pub const ALL: [Self; 7] = [
        Self::Load,
        Self::Save,
        Self::Delete,
        Self::Add,
        Self::Previous,
        Self::Next,
        Self::Exit,
    ];

    /// 按钮文本
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Load => "Load",
            Self::Save => "Save",
            Self::Add => "+",
            Self::Delete => "-",
            Self::Previous => "<",
            Self::Next => ">",
            Self::Exit => "Exit",
        }
    }
}

/// 每次刷新后推送给表单的完整显示状态
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DisplayState {
    /// 三个输入框的内容
    pub fields: Record,
    /// 输入框是否可编辑
    pub editable: bool,
    pub has_previous: bool,
    pub has_next: bool,
    pub can_delete: bool,
    pub can_add: bool,
    pub can_save: bool,
    /// 显示的位置（从 1 开始；空通讯录为 0）
    pub position: usize,
    /// 显示的总数（包含待提交的新记录）
    pub total: usize,
    /// 当前文件名
    pub file_name: Option<String>,
}

impl DisplayState {
    /// "N of M" 计数标签
    #[must_use]
    pub fn counter_label(&self) -> String {
        format!("{} of {}", self.position, self.total)
    }

    /// 文件标签
    #[must_use]
    pub fn file_label(&self) -> String {
        match self.file_name {
            Some(ref name) => format!("File: {name}"),
            None => "File: -".to_string(),
        }
    }

    /// 按钮是否可用
    #[must_use]
    pub fn is_enabled(&self, action: Action) -> bool {
        match action {
            Action::Load | Action::Exit => true,
            Action::Save => self.can_save,
            Action::Add => self.can_add,
            Action::Delete => self.can_delete,
            Action::Previous => self.has_previous,
            Action::Next => self.has_next,
        }
    }
}

/// 加载结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// 成功加载的记录数
    Loaded(usize),
    /// 文件损坏或不可读，已回退为空通讯录
    Recovered(String),
}
