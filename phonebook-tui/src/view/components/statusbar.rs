//! 底部状态栏组件

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::model::{App, Modal};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    // 如果有状态消息，显示在右侧
    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Styles::statusbar());
    frame.render_widget(paragraph, area);
}

/// 根据当前弹窗生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    match app.modal.active {
        None => vec![
            ("Tab", "Next Field"),
            ("Alt+O", "Load"),
            ("Alt+S", "Save"),
            ("F1", "Help"),
            ("Esc", "Exit"),
        ],
        Some(Modal::Confirm { .. }) => vec![("←→", "Switch"), ("Enter", "Choose"), ("y/n", "Answer")],
        Some(Modal::OpenFile { .. } | Modal::SaveFile { .. }) => {
            vec![("Enter", "Confirm"), ("Esc", "Cancel")]
        }
        Some(Modal::Error { .. } | Modal::Help) => vec![("Enter", "Close")],
    }
}
