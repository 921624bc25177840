//! 配置服务
//!
//! 配置文件位于 `<config_dir>/phonebook/config.json`，格式：
//!
//! ```json
//! { "theme": "dark", "lastFile": "/home/me/friends.xml" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::view::theme::Theme;

const CONFIG_DIR: &str = "phonebook";
const CONFIG_FILE: &str = "config.json";

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
    /// 最近一次成功打开或保存的文件，用作路径输入框的默认值
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_file: Option<PathBuf>,
}

/// 配置服务 trait
pub trait ConfigService {
    /// 加载配置
    fn load(&self) -> Result<AppConfig>;

    /// 保存配置
    fn save(&self, config: &AppConfig) -> Result<()>;
}

/// 本地 JSON 文件配置服务
pub struct LocalConfigService {
    path: Option<PathBuf>,
}

impl LocalConfigService {
    /// 使用平台配置目录
    pub fn new() -> Self {
        Self {
            path: dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE)),
        }
    }

    /// 使用指定的配置文件路径
    #[cfg(test)]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

impl Default for LocalConfigService {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigService for LocalConfigService {
    fn load(&self) -> Result<AppConfig> {
        let Some(path) = self.path() else {
            log::debug!("No config directory on this platform, using defaults");
            return Ok(AppConfig::default());
        };

        if !path.exists() {
            return Ok(AppConfig::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;

        Ok(config)
    }

    fn save(&self, config: &AppConfig) -> Result<()> {
        let Some(path) = self.path() else {
            return Ok(());
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create config dir {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)
            .with_context(|| format!("failed to write config file {}", path.display()))?;

        log::debug!("Config saved to {}", path.display());
        Ok(())
    }
}
