//! 类型定义模块

mod display;
mod record;

pub use display::{Action, DisplayState, LoadOutcome};
pub use record::{Record, RecordField};
