//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::model::state::CONFIRM_YES;
use crate::model::{App, Modal, TextInput};
use crate::view::components::text_input;
use crate::view::theme::colors;

/// 渲染弹窗（如果有活动弹窗）
pub fn render(app: &App, frame: &mut Frame) {
    let Some(ref modal) = app.modal.active else {
        return;
    };

    match modal {
        Modal::Error { title, message } => render_error(frame, title, message),
        Modal::Confirm {
            title,
            message,
            focus,
        } => render_confirm(frame, title, message, *focus),
        Modal::OpenFile { path, error } => {
            render_path_prompt(frame, " Open Phonebook ", path, error.as_deref());
        }
        Modal::SaveFile { path, error, .. } => {
            render_path_prompt(frame, " Save Phonebook ", path, error.as_deref());
        }
        Modal::Help => render_help(frame),
    }
}

/// 计算居中弹窗区域
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

/// 去掉边框和左右留白后的内容区域
fn content_area(area: Rect) -> Rect {
    Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    )
}

fn modal_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .style(Style::default().bg(colors().bg))
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let c = colors();
    let area = centered_rect(60, 9, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" {title} ");
    frame.render_widget(modal_block(&title, c.error), area);

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled("Press Esc or Enter to close", Style::default().fg(c.muted)),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, content_area(area));
}

/// 渲染是/否确认弹窗
fn render_confirm(frame: &mut Frame, title: &str, message: &str, focus: usize) {
    let c = colors();
    let area = centered_rect(44, 8, frame.area());
    frame.render_widget(Clear, area);

    let title = format!(" {title} ");
    frame.render_widget(modal_block(&title, c.warning), area);

    let no_style = if focus == CONFIRM_YES {
        Style::default().fg(c.fg)
    } else {
        Style::default().fg(c.selected_fg).bg(c.selected_bg)
    };
    let yes_style = if focus == CONFIRM_YES {
        Style::default().fg(Color::Black).bg(c.warning)
    } else {
        Style::default().fg(c.warning)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(message, Style::default().fg(c.fg)),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Yes ", yes_style),
            Span::raw("    "),
            Span::styled(" No ", no_style),
        ]),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, content_area(area));
}

/// 渲染路径输入弹窗
fn render_path_prompt(frame: &mut Frame, title: &str, path: &TextInput, error: Option<&str>) {
    let c = colors();
    let area = centered_rect(64, 9, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(title, c.border_focused), area);

    let inner = content_area(area);
    frame.render_widget(
        Paragraph::new("File path").style(Style::default().fg(c.muted)),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );
    text_input::render(
        frame,
        Rect::new(inner.x, inner.y + 1, inner.width, 3),
        path,
        true,
        true,
    );

    let footer = error.map_or_else(
        || Line::styled("Enter to confirm, Esc to cancel", Style::default().fg(c.muted)),
        |message| Line::styled(message.to_string(), Style::default().fg(c.error)),
    );
    frame.render_widget(
        Paragraph::new(footer),
        Rect::new(inner.x, inner.y + 5, inner.width, 1),
    );
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let c = colors();
    let area = centered_rect(52, 22, frame.area());
    frame.render_widget(Clear, area);
    frame.render_widget(modal_block(" Help ", c.border_focused), area);

    let heading = Style::default().fg(c.highlight).add_modifier(Modifier::BOLD);
    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<18}"), Style::default().fg(Color::Yellow)),
            Span::styled(desc, Style::default().fg(c.fg)),
        ])
    };

    let lines = vec![
        Line::styled("Buttons", heading),
        entry("Alt+O", "Load a phonebook file"),
        entry("Alt+S", "Save the phonebook"),
        entry("Alt+A", "+  New record"),
        entry("Alt+D", "-  Delete record"),
        entry("PgUp / Alt+P", "<  Previous record"),
        entry("PgDn / Alt+N", ">  Next record"),
        entry("Esc / Alt+Q", "Exit"),
        Line::from(""),
        Line::styled("Editing", heading),
        entry("Tab / ↓ / Enter", "Next field"),
        entry("Shift+Tab / ↑", "Previous field"),
        entry("← → Home End", "Move cursor"),
        entry("Backspace / Del", "Delete character"),
        Line::from(""),
        entry("F1 / Alt+H", "This help"),
        entry("Ctrl+C", "Quit without asking"),
        Line::from(""),
        Line::styled("Press Esc to close the help", Style::default().fg(c.muted)),
    ];

    frame.render_widget(Paragraph::new(lines), content_area(area));
}
