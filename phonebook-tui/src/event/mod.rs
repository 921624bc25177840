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
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责将键盘输入事件转换为 Message。
//!
//!
//! 有模块结构：
//!     src/event/mod.rs
//!         mod handler;        // 事件处理器
//!         mod keymap;         // 快捷键映射
//!
//!         pub use handler::{handle_event, poll_event};
//!
//!
//!     其中有：
//!         · poll_event      事件轮询，受 ~/app.rs 调用
//!
//!         pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
//!             if event::poll(timeout)? {                  // 此处阻塞以等待事件，最长等待 timeout
//!                 Ok(Some(event::read()?))
//!             } else {
//!                 Ok(None)
//!             }
//!         }
//!
//!
//!         · handle_event    事件分发
//!
//!             当接收到键盘事件时，转入 handle_key_event()
//!             判断顺序：
//!                 1. Ctrl+C                   → AppMessage::Quit（任何时候）
//!                 2. 有弹窗打开时              → handle_modal_keys
//!                 3. F1 / Alt+H               → AppMessage::ShowHelp
//!                 4. 按钮快捷键                → FormMessage::Action(..)
//!                 5. 其余按键                  → handle_form_keys（字段切换与编辑）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 快捷键一览（定义于 src/event/keymap.rs）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     Alt+O               Load
//!     Alt+S               Save
//!     Alt+A               +   (Add)
//!     Alt+D               -   (Delete)
//!     PageUp / Alt+P      <   (Previous)
//!     PageDown / Alt+N    >   (Next)
//!     Esc / Alt+Q         Exit（需确认）
//!     F1 / Alt+H          帮助
//!     Ctrl+C              立即退出
//!
//!     Tab / ↓ / Enter     下一个字段
//!     Shift+Tab / ↑       上一个字段
//!     ← → Home End        移动光标
//!     Backspace / Delete  删除字符
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 弹窗键盘处理
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     错误 / 帮助弹窗:
//!         Enter / Esc   → ModalMessage::Close
//!
//!     确认弹窗:
//!         Tab / ← / →   → ModalMessage::ToggleFocus
//!         Enter         → ModalMessage::Confirm
//!         y / n         → ModalMessage::Input(c)
//!         Esc           → ModalMessage::Close（等同 No）
//!
//!     路径弹窗:
//!         字符输入       → ModalMessage::Input(c)
//!         Enter         → ModalMessage::Confirm
//!         Esc           → ModalMessage::Close
//!
//!     handler.rs 只创建消息，真正的状态修改发生在 Update 层：
//!         update::update(app, msg);
//!

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
pub use keymap::DefaultKeymap;
