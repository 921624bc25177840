//!
//! src/view/mod.rs
//! View 层：UI 渲染
//!
//! View 层只读取 Model，不修改任何状态。
//!
//!
//! 有模块结构：
//!     src/view/mod.rs
//!         mod layout;             // 主布局：标题栏 + 表单 + 状态栏
//!         mod components;         // 可复用组件：输入框、弹窗、状态栏
//!         mod pages;              // 页面：通讯录表单
//!         pub mod theme;          // 主题颜色和常用样式
//!
//!
//!     屏幕结构：
//!         ┌──────────────────────────────────────────────┐
//!         │ Phonebook v0.1.0                             │  标题栏
//!         ├─ Phonebook ──────────────────────────────────┤
//!         │ File: friends.xml                    1 of 2  │
//!         │        ┌────────────────────────────────┐    │
//!         │ Name   │ John Smith                     │    │
//!         │        └────────────────────────────────┘    │
//!         │ ...                                          │
//!         │ [Load] [Save] [-] [+] [<] [>] [Exit]         │  按钮栏
//!         ├──────────────────────────────────────────────┤
//!         │ Tab Next Field │ F1 Help │ ...               │  状态栏
//!         └──────────────────────────────────────────────┘
//!
//!     弹窗最后渲染，覆盖在最上层。
//!

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
