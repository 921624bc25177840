//! 页面

pub mod phonebook;
