//！┌─────────────────────────────────────────────────────────────────────────────┐
//！│                              主循环 (app.rs)                               │
//！│                                                                            │
//！│  ┌────────────────────────────── UI 层 ───────────────────────────────┐   │
//！│  │                                                                     │   │
//！│  │   ┌─────────┐          ┌───────────┐          ┌──────────┐         │   │
//！│  │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │         │   │
//！│  │   │   层    │   翻译    │    层     │   消费    │    层    │         │   │
//！│  │   └─────────┘          │           │          └────┬─────┘         │   │
//！│  │        ▲               │ AppMessage│               │ 修改          │   │
//！│  │        │               │ ModalMsg  │               ▼               │   │
//！│  │   ┌─────────┐          │ FormMsg   │          ┌──────────┐         │   │
//！│  │   │  View   │          │           │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 读写配置          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │   config.json     │           │
//！│                                           │                   │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘


//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 所有状态变更都通过 Update 层来触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod form;           // 记录表单（实现 phonebook_core::Form）
//!         mod input;          // 单行文本输入框
//!
//!         pub mod state;      // 弹窗状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、主应用状态（App）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/model/app.rs 中定义：
//!
//!         pub struct App {
//!             pub should_quit: bool,                              // 退出标志
//!             pub phonebook: NavigationController<FormState>,     // 通讯录状态机
//!             pub status_message: Option<String>,                 // 状态栏消息（可选）
//!             pub modal: ModalState,                              // 弹窗状态
//!             pub config: AppConfig,                              // 当前配置
//!         }
//!
//!     记录、当前位置、待提交标志都归 NavigationController 所有，
//!     App 不复制这些状态，View 层通过 phonebook.form().display() 读取。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单（FormState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     NavigationController 通过 Form trait 与表单交流：
//!
//!         read_fields ─── 读取三个输入框
//!         render ──────── 刷新输入框、按钮、计数与文件名
//!         show_error ──── 排队一个错误提示
//!         confirm ─────── 排队一个确认请求（或消费已记录的答案）
//!
//!     排队的提示由 App::sync_alerts 转成弹窗，一次一个。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、弹窗（ModalState）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Modal::Error        错误提示，Enter/Esc 关闭
//!     Modal::Confirm      Yes/No 确认，默认焦点为 No
//!     Modal::OpenFile     输入要加载的路径
//!     Modal::SaveFile     输入保存路径（文档已生成）
//!     Modal::Help         快捷键帮助
//!
//!     弹窗打开时，所有按键都交给弹窗处理（Ctrl+C 除外）。
//!

mod app;
mod form;
mod input;
pub mod state;

pub use app::App;
pub use input::TextInput;
pub use state::Modal;
