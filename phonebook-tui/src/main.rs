//! Phonebook TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 配置服务 (`backend/`)
//!
//! 通讯录本身的导航与校验状态机位于 `phonebook-core`，
//! 本 crate 只负责把按键翻译成动作，并把 `DisplayState` 画到终端上。
//!
//!
//! main.rs
//! 程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     init_logging()          // 日志写入文件，终端留给 UI
//!     model::App::new()       // 读取配置，创建 APP 实例
//!     init_terminal()         // 初始化终端
//!     app::run()              // 运行 app.rs 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;

use backend::LocalConfigService;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 初始化日志（失败时静默运行）
    if let Some(path) = init_logging() {
        log::info!("Phonebook started, logging to {}", path.display());
    }

    // 2. 创建应用实例
    let mut app = model::App::new(Box::new(LocalConfigService::new()));

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 运行主循环
    let result = app::run(&mut terminal, &mut app);

    // 5. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    log::info!("Phonebook exited");
    result
}
