//! 测试辅助

#![allow(clippy::expect_used)]

use tempfile::TempDir;

use crate::backend::LocalConfigService;
use crate::message::{AppMessage, FormMessage, ModalMessage};
use crate::model::App;
use crate::update::update;

/// 配置文件位于临时目录中的 App；TempDir 需要在测试期间保持存活
pub fn test_app() -> (App, TempDir) {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let service = LocalConfigService::with_path(dir.path().join("config.json"));
    (App::new(Box::new(service)), dir)
}

/// 逐字符输入到当前焦点字段
pub fn type_text(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Form(FormMessage::Input(ch)));
    }
}

/// 逐字符输入到当前弹窗
pub fn type_in_modal(app: &mut App, text: &str) {
    for ch in text.chars() {
        update(app, AppMessage::Modal(ModalMessage::Input(ch)));
    }
}
