//! 外部协作者抽象 trait 定义

mod form;

pub use form::Form;
