//！┌─────────────────────────────────────────────────────────────────────────┐
//！│                           主循环 (app.rs)                                │
//！│                                                                         │
//！│    ┌─────────┐     ┌─────────┐     ┌──────────┐     ┌─────────┐         │
//！│    │ 用户按键 │ ─▶ │  Event  │ ─▶ │ Message  │ ──▶ │ Update  │         │
//！│    └─────────┘     │  层     │     │   层     │     │   层    │          │
//！│         ▲          └─────────┘     └──────────┘     └────┬────┘         │
//！│         │                                                │              │
//！│         │          ┌─────────┐     ┌──────────┐          ▼              │
//！│         │          │  Util   │     │  Model   │ ◀───────────           │
//！│         │          │  层     │     │   层     │                         │
//！│         │          └─────────┘     └────┬─────┘                         │
//！│         │                               │                               │
//！│         │          ┌─────────┐          ▼                               │
//！│         └──────────│  View   │ ◀── 读取状态                             │
//！│           屏幕输出  │   层    │                                          │
//！│                    └─────────┘                                          │
//！└─────────────────────────────────────────────────────────────────────────┘

//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! Util 层提供与业务逻辑无关的基础设施代码，
//! 负责终端的初始化和恢复，以及文件日志的安装。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod logging;        // 文件日志（tracing-subscriber）
//!         mod terminal;       // 终端初始化和恢复
//!
//!         pub use logging::init_logging;
//!         pub use terminal::{init_terminal, restore_terminal, Term};
//!
//!
//!     日志：
//!         终端被 UI 独占，日志无法输出到 stderr，
//!         因此写入 <data_local_dir>/phonebook/phonebook.log。
//!
//!             RUST_LOG 未设置时默认 info 级别
//!             core 与 tui 均使用 log 宏，经 tracing-log 桥接进入订阅器
//!
//!         日志目录或文件无法创建时，init_logging 返回 None，程序照常运行。
//!
//!
//!     初始化终端：
//!         · Raw Mode（原始模式）
//!             - 关闭行缓冲：无需按 Enter，每个按键立即生效
//!             - 关闭字符回显：按键不会显示在终端上
//!             - 捕获所有按键：包括 Ctrl+C、PageUp 等特殊键
//!
//!         · Alternate Screen（备用屏幕）
//!             - TUI 应用在备用屏幕运行
//!             - 退出后自动恢复主屏幕内容
//!
//!
//!     恢复终端：
//!         无论程序是正常退出还是发生错误，都必须调用 restore_terminal！
//!         否则终端会保持在原始模式，用户输入不会正常显示。
//!
//!     → 去往 src/app.rs 主循环吧
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
