//! Narration pane: frame descriptions up to the cursor

use super::border_style;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the narration log; the last entry is the frame on display
pub fn render_narration_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[&str],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(" Narration ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no frames)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let last = lines.len() - 1;
    let all_items: Vec<ListItem> = lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let text = format!("{:>4}  {}", i + 1, line);
            let style = if i == last {
                Style::default()
                    .fg(DEFAULT_THEME.border_focused)
                    .bg(DEFAULT_THEME.current_line_bg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.fg)
            };
            ListItem::new(text).style(style)
        })
        .collect();

    let visible_height = area.height.saturating_sub(2).max(1) as usize; // borders, min 1
    *scroll_offset = clamp_scroll(*scroll_offset, all_items.len(), visible_height);

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    frame.render_widget(List::new(visible_items).block(block), area);
}

/// Largest useful offset is the one that shows the final line at the bottom
fn clamp_scroll(offset: usize, total: usize, visible: usize) -> usize {
    if total > visible {
        offset.min(total - visible)
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        assert_eq!(clamp_scroll(usize::MAX, 30, 10), 20);
        assert_eq!(clamp_scroll(5, 30, 10), 5);
        assert_eq!(clamp_scroll(5, 8, 10), 0);
    }
}
