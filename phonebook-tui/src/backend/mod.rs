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
//!
//! src/backend/mod.rs
//! Backend 层：本地服务
//!
//! 通讯录的记录、校验与文件读写全部由 phonebook-core 的
//! NavigationController 完成，Model 层直接持有它。
//! Backend 层只剩下与 UI 偏好相关的持久化：配置文件。
//!
//!
//! 有模块结构：
//!     src/backend/mod.rs
//!         mod config_service;     // 配置服务（JSON 文件）
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 配置服务（ConfigService）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     在 src/backend/config_service.rs 中定义：
//!
//!         pub trait ConfigService {
//!             fn load(&self) -> Result<AppConfig>;
//!             fn save(&self, config: &AppConfig) -> Result<()>;
//!         }
//!
//!         LocalConfigService 把 AppConfig 以 JSON 存放在
//!         <config_dir>/phonebook/config.json。
//!
//!         AppConfig 保存：
//!             - theme         主题（dark / light）
//!             - lastFile      最近打开或保存的文件
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 数据流
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     启动时 App::new 调用 ConfigService::load
//!         ↓  失败则记录 warn 日志并使用默认配置
//!     用户在路径弹窗中确认加载 / 保存
//!         ↓
//!     Update 层成功完成文件操作后更新 config.last_file
//!         ↓
//!     调用 ConfigService::save（失败只记录日志，不打断操作）
//!

mod config_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
