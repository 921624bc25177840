//! 单行输入框组件

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::model::TextInput;
use crate::view::theme::{colors, Styles};

/// 渲染带边框的输入框
///
/// `focused` 为 true 时高亮边框并把终端光标放到输入位置。
pub fn render(frame: &mut Frame, area: Rect, input: &TextInput, focused: bool, enabled: bool) {
    let c = colors();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Styles::input_border(focused && enabled));
    let inner = block.inner(area);

    let (visible, cursor_col) = visible_window(input, usize::from(inner.width));
    let text_style = if enabled {
        Style::default().fg(c.fg)
    } else {
        Styles::disabled()
    };

    frame.render_widget(Paragraph::new(visible).style(text_style).block(block), area);

    if focused && enabled && inner.width > 0 {
        let col = u16::try_from(cursor_col).unwrap_or(inner.width - 1);
        frame.set_cursor_position(Position::new(inner.x + col.min(inner.width - 1), inner.y));
    }
}

/// 计算可见文本和光标所在列
///
/// 文本宽于输入框时向左滚动，保证光标始终可见。
fn visible_window(input: &TextInput, width: usize) -> (String, usize) {
    if width == 0 {
        return (String::new(), 0);
    }

    let cursor_width = input.before_cursor().width();
    // 光标本身占一列
    let offset = cursor_width.saturating_sub(width - 1);

    let mut skipped = 0;
    let mut used = 0;
    let mut visible = String::new();
    for ch in input.value().chars() {
        let w = ch.width().unwrap_or(0);
        if skipped < offset {
            skipped += w;
            continue;
        }
        if used + w > width {
            break;
        }
        used += w;
        visible.push(ch);
    }

    (visible, cursor_width.saturating_sub(skipped))
}
