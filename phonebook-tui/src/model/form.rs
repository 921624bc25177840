//! 记录表单状态
//!
//! `FormState` 是 `phonebook_core::Form` 在终端里的实现：
//!
//!     read_fields()   读取三个输入框的当前文本
//!     render()        用 DisplayState 覆盖输入框并记下按钮状态
//!     show_error()    把错误排入 alerts 队列，由 Update 层转成弹窗
//!     confirm()       见下文
//!
//! TEA 主循环里无法"阻塞等待"用户回答，因此 confirm 分两步：
//!     1. 第一次调用时没有已记录的答案，排入一个确认请求并返回 false
//!     2. 用户在确认弹窗中选择 Yes 后，Update 层调用 answer_confirmation(true)
//!        并重放原动作；这一次 confirm 取走答案并返回 true

use std::collections::VecDeque;

use phonebook_core::{DisplayState, Form, Record, RecordField};

use super::input::TextInput;

/// 等待 Update 层转成弹窗的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    Error { title: String, message: String },
    Confirm { title: String, message: String },
}

/// 终端表单
#[derive(Debug, Default)]
pub struct FormState {
    name: TextInput,
    state: TextInput,
    phone: TextInput,
    /// 当前焦点所在的输入框
    pub focus: RecordField,
    /// 最近一次 render 收到的显示状态
    display: DisplayState,
    alerts: VecDeque<Alert>,
    confirmation: Option<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn input(&self, field: RecordField) -> &TextInput {
        match field {
            RecordField::Name => &self.name,
            RecordField::State => &self.state,
            RecordField::Phone => &self.phone,
        }
    }

    fn input_mut(&mut self, field: RecordField) -> &mut TextInput {
        match field {
            RecordField::Name => &mut self.name,
            RecordField::State => &mut self.state,
            RecordField::Phone => &mut self.phone,
        }
    }

    /// 可编辑时返回焦点输入框
    pub fn focused_input_mut(&mut self) -> Option<&mut TextInput> {
        if self.display.editable {
            Some(self.input_mut(self.focus))
        } else {
            None
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_previous(&mut self) {
        self.focus = self.focus.previous();
    }

    /// 取出下一条待显示的提示
    pub fn pop_alert(&mut self) -> Option<Alert> {
        self.alerts.pop_front()
    }

    /// 记录确认弹窗的答案，供下一次 `confirm` 使用
    pub fn answer_confirmation(&mut self, answer: bool) {
        self.confirmation = Some(answer);
    }
}

impl Form for FormState {
    fn read_fields(&self) -> Record {
        Record::new(self.name.value(), self.state.value(), self.phone.value())
    }

    fn render(&mut self, state: &DisplayState) {
        for field in RecordField::ALL {
            self.input_mut(field).set_value(state.fields.field(field));
        }
        self.display = state.clone();
    }

    fn show_error(&mut self, title: &str, message: &str) {
        self.alerts.push_back(Alert::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn confirm(&mut self, title: &str, message: &str) -> bool {
        if let Some(answer) = self.confirmation.take() {
            return answer;
        }
        self.alerts.push_back(Alert::Confirm {
            title: title.to_string(),
            message: message.to_string(),
        });
        false
    }
}
