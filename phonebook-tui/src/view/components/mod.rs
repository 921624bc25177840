//! 可复用 UI 组件

pub mod modal;
pub mod statusbar;
pub mod text_input;
