//! 文件日志初始化

use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

const LOG_DIR: &str = "phonebook";
const LOG_FILE: &str = "phonebook.log";

/// 安装文件日志订阅器，返回日志文件路径
///
/// 任何一步失败都返回 `None`，调用方继续在无日志模式下运行。
pub fn init_logging() -> Option<PathBuf> {
    let dir = dirs::data_local_dir()?.join(LOG_DIR);
    fs::create_dir_all(&dir).ok()?;

    let path = dir.join(LOG_FILE);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .ok()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .with(filter)
        .try_init()
        .ok()?;

    Some(path)
}
