//! 界面状态模块
//!
//! 目前只有弹窗状态；表单状态见 `model/form.rs`。

mod modal;

pub use modal::{Modal, ModalState, CONFIRM_NO, CONFIRM_YES};
