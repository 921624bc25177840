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
//！│  │   ┌─────────┐          │ ContentMsg│          ┌──────────┐         │   │
//！│  │   │  View   │          │ NavMsg    │   ┌───── │  Model   │         │   │
//！│  │   │   层    │          └───────────┘   │      │    层    │         │   │
//！│  │   └────┬────┘ ◀──────── 读取 ──────────┘      └────┬─────┘         │   │
//！│  │        │                                           │               │   │
//！│  └────────│───────────────────────────────────────────│───────────────┘   │
//！│           │                                           │ 异步调用          │
//！│           ▼                                           ▼                   │
//！│      ┌─────────┐                                ┌──────────┐              │
//！│      │  终端   │                                │ Backend  │              │
//！│      │ (Util)  │                                │    层    │              │
//！│      └─────────┘                                └────┬─────┘              │
//！│                                                      │                    │
//！│                                                      ▼                    │
//！│                                           ┌───────────────────┐           │
//！│                                           │dns-orchestrator-  │           │
//！│                                           │      core         │           │
//！│                                           └───────────────────┘           │
//！└─────────────────────────────────────────────────────────────────────────────┘

//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event → Update 之间的桥梁
//! 所有的用户操作和状态变更都通过 Message 来表达。
//! 相当于将形形色色的 Events 翻译成 Update 能够看懂的 Messages
//! Update 层根据 Message 来更新 Model。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;
//!         mod form;
//!         mod modal;
//!
//!         pub use app::AppMessage;
//!         pub use form::FormMessage;
//!         pub use modal::ModalMessage;
//!
//!
//!     在 app::AppMessage 中进行主消息的枚举：
//!
//!         pub enum AppMessage {
//!             Quit,                       // 立即退出（Ctrl+C）
//!             Form(FormMessage),          // 表单子消息：按钮动作与文本编辑
//!             Modal(ModalMessage),        // 弹窗子消息
//!             ShowHelp,                   // 显示帮助
//!             Noop,                       // 无操作，用于代替 Option::None
//!         }
//!
//!
//!     分别分出
//!         form.rs         表单中的子消息，FormMessage::Action 直接携带 core 的 Action
//!         modal.rs        弹窗相关的子消息
//!
//!
//!     注意 Exit 按钮与 Quit 的区别：
//!         FormMessage::Action(Action::Exit)   先弹出 "Are you sure you want to exit?"
//!         AppMessage::Quit                    直接退出，未保存的修改会丢失
//!
//!
//! 最后，Event 将从 Message 处获取的消息传入 Update 层进行处理。
//!     → 去往 src/update/mod.rs 吧
//!

mod app;
mod form;
mod modal;

pub use app::AppMessage;
pub use form::FormMessage;
pub use modal::ModalMessage;
