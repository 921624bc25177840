//! 通讯录表单页面

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use phonebook_core::{Action, RecordField};

use crate::event::DefaultKeymap;
use crate::model::App;
use crate::view::components::text_input;
use crate::view::theme::{colors, Styles};

const LABEL_WIDTH: u16 = 8;

/// 渲染表单
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let form = app.phonebook.form();
    let display = form.display();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 文件名 + 计数
            Constraint::Length(1),
            Constraint::Length(3), // Name
            Constraint::Length(3), // State
            Constraint::Length(3), // Phone
            Constraint::Length(1),
            Constraint::Length(1), // 按钮栏
            Constraint::Min(0),
        ])
        .split(area);

    render_header(frame, rows[0], &display.file_label(), &display.counter_label());

    // 弹窗打开时不显示表单光标
    let cursor_allowed = !app.modal.is_open();
    for (field, row) in RecordField::ALL.into_iter().zip(&rows[2..5]) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(10)])
            .split(*row);

        let focused = form.focus == field;
        let label_style = if focused && display.editable {
            Style::default()
                .fg(colors().highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors().fg)
        };
        // 标签与输入框文字对齐（边框占一行）
        let label_area = Rect::new(columns[0].x, columns[0].y + 1, columns[0].width, 1);
        frame.render_widget(Paragraph::new(field.label()).style(label_style), label_area);

        text_input::render(
            frame,
            columns[1],
            form.input(field),
            focused && cursor_allowed,
            display.editable,
        );
    }

    frame.render_widget(
        Paragraph::new(button_bar(|action| display.is_enabled(action))),
        rows[6],
    );
}

/// 第一行：左侧文件名，右侧 "N of M"
fn render_header(frame: &mut Frame, area: Rect, file_label: &str, counter: &str) {
    let c = colors();
    frame.render_widget(
        Paragraph::new(file_label).style(Style::default().fg(c.muted)),
        area,
    );
    frame.render_widget(
        Paragraph::new(counter)
            .alignment(Alignment::Right)
            .style(Styles::title()),
        area,
    );
}

/// 按钮栏：可用按钮高亮，禁用按钮变灰
fn button_bar(is_enabled: impl Fn(Action) -> bool) -> Line<'static> {
    let mut spans = Vec::new();
    for action in Action::ALL {
        let style = if is_enabled(action) {
            Styles::button()
        } else {
            Styles::disabled()
        };
        spans.push(Span::styled(format!("[ {} ]", action.label()), style));
        spans.push(Span::styled(
            format!(" {}  ", DefaultKeymap::hint(action)),
            Styles::disabled(),
        ));
    }
    Line::from(spans)
}
