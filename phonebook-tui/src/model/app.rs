//! 应用主状态结构

use std::path::Path;

use phonebook_core::NavigationController;

use super::form::{Alert, FormState};
use super::state::ModalState;
use crate::backend::{AppConfig, ConfigService};
use crate::view::theme;

/// 路径弹窗在没有历史记录时的默认值
pub const DEFAULT_FILE: &str = "phonebook.xml";

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 通讯录状态机，持有记录表单
    pub phonebook: NavigationController<FormState>,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 弹窗状态
    pub modal: ModalState,

    /// 当前配置
    pub config: AppConfig,

    config_service: Box<dyn ConfigService>,
}

impl App {
    /// 创建新的应用实例，配置读取失败时使用默认配置
    pub fn new(config_service: Box<dyn ConfigService>) -> Self {
        let config = config_service.load().unwrap_or_else(|err| {
            log::warn!("Failed to load config, using defaults: {err:#}");
            AppConfig::default()
        });
        theme::set_theme(config.theme);

        Self {
            should_quit: false,
            phonebook: NavigationController::new(FormState::new()),
            status_message: None,
            modal: ModalState::new(),
            config,
            config_service,
        }
    }

    /// 设置状态消息
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// 清除状态消息
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// 路径弹窗的默认值：上次使用的文件
    pub fn default_path(&self) -> String {
        self.config
            .last_file
            .as_ref()
            .map_or_else(|| DEFAULT_FILE.to_string(), |p| p.display().to_string())
    }

    /// 记住最近使用的文件并写回配置
    pub fn remember_file(&mut self, path: &Path) {
        if self.config.last_file.as_deref() == Some(path) {
            return;
        }
        self.config.last_file = Some(path.to_path_buf());
        if let Err(err) = self.config_service.save(&self.config) {
            log::warn!("Failed to save config: {err:#}");
        }
    }

    /// 把表单排队的提示转成弹窗；已有弹窗时等它关闭后再显示
    pub fn sync_alerts(&mut self) {
        if self.modal.is_open() {
            return;
        }
        match self.phonebook.form_mut().pop_alert() {
            Some(Alert::Error { title, message }) => self.modal.show_error(&title, &message),
            Some(Alert::Confirm { title, message }) => self.modal.show_confirm(&title, &message),
            None => {}
        }
    }
}
