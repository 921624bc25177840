//! 测试辅助模块
//!
//! 提供 mock 表单实现和常用测试记录。

use crate::traits::Form;
use crate::types::{DisplayState, Record};

// ===== RecordingForm =====

/// 记录所有渲染、错误与确认调用的表单
///
/// 与真实表单一样，`render` 会用显示状态覆盖输入框内容。
#[derive(Debug, Default)]
pub struct RecordingForm {
    pub fields: Record,
    pub renders: Vec<DisplayState>,
    pub errors: Vec<(String, String)>,
    pub confirmations: Vec<(String, String)>,
    /// `confirm` 的返回值
    pub confirm_answer: bool,
}

impl RecordingForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// 模拟用户在三个输入框中输入
    pub fn type_record(&mut self, record: &Record) {
        self.fields = record.clone();
    }

    pub fn last_render(&self) -> &DisplayState {
        self.renders
            .last()
            .expect("controller renders on construction")
    }
}

impl Form for RecordingForm {
    fn read_fields(&self) -> Record {
        self.fields.clone()
    }

    fn render(&mut self, state: &DisplayState) {
        self.fields = state.fields.clone();
        self.renders.push(state.clone());
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.errors.push((title.to_string(), message.to_string()));
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        self.confirmations
            .push((title.to_string(), message.to_string()));
        self.confirm_answer
    }
}

// ===== 测试记录 =====

pub fn john() -> Record {
    Record::new("John Smith", "New York", "(212) 555 - 1234")
}

pub fn mary() -> Record {
    Record::new("Mary Ann", "Texas", "(713) 200 - 0001")
}
