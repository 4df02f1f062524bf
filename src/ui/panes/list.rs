//! Linked list pane: the node chain with Floyd's slow/fast pointers beneath it

use super::border_style;
use crate::frame::{FloydEvent, FloydFrame};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const LINK: &str = " → ";

/// Render the list pane
pub fn render_list_pane(
    frame: &mut Frame,
    area: Rect,
    values: &[i64],
    cycle_to_index: Option<usize>,
    current: Option<&FloydFrame>,
    is_focused: bool,
) {
    let block = Block::default()
        .title(" Floyd Cycle Detection ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 1, 1, 0));

    let (slow, fast) = current.map_or((None, None), |f| (f.slow, f.fast));
    let met = current.is_some_and(|f| f.kind == FloydEvent::Meet);
    let cells: Vec<String> = values.iter().map(|v| format!("[{}]", v)).collect();

    let mut chain = Vec::with_capacity(cells.len() * 2 + 1);
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            chain.push(Span::styled(LINK, Style::default().fg(DEFAULT_THEME.comment)));
        }
        let style = if met && Some(i) == slow {
            Style::default().fg(DEFAULT_THEME.error).add_modifier(Modifier::BOLD)
        } else if Some(i) == slow || Some(i) == fast {
            Style::default().fg(DEFAULT_THEME.secondary).add_modifier(Modifier::BOLD)
        } else if Some(i) == cycle_to_index {
            Style::default().fg(DEFAULT_THEME.pivot)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        };
        chain.push(Span::styled(cell.clone(), style));
    }

    let tail = match cycle_to_index {
        Some(index) => format!(" ↺ back to #{}", index),
        None => " → null".to_string(),
    };
    chain.push(Span::styled(tail, Style::default().fg(DEFAULT_THEME.pivot)));

    let lines = vec![
        Line::from(chain),
        Line::from(Span::styled(
            marker_row(&cells, slow, fast),
            Style::default().fg(DEFAULT_THEME.secondary),
        )),
        Line::default(),
        Line::from(vec![
            Span::styled(" S ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(format!("slow = {}", describe(slow)), Style::default().fg(DEFAULT_THEME.fg)),
            Span::raw("   "),
            Span::styled(" F ", Style::default().fg(DEFAULT_THEME.secondary)),
            Span::styled(format!("fast = {}", describe(fast)), Style::default().fg(DEFAULT_THEME.fg)),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn describe(pointer: Option<usize>) -> String {
    pointer.map_or_else(|| "null".to_string(), |i| format!("#{}", i))
}

/// Pointer markers aligned under their cells: `S`, `F`, or `SF` when both
/// pointers share a node
fn marker_row(cells: &[String], slow: Option<usize>, fast: Option<usize>) -> String {
    let link_width = LINK.chars().count();
    let mut row = String::new();

    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            row.push_str(&" ".repeat(link_width));
        }
        let marker = match (Some(i) == slow, Some(i) == fast) {
            (true, true) => "SF",
            (true, false) => "S",
            (false, true) => "F",
            (false, false) => "",
        };
        row.push_str(&format!("{:^width$}", marker, width = cell.chars().count()));
    }

    row.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marker_row_alignment() {
        let cells: Vec<String> = ["[1]", "[2]", "[30]"].iter().map(|s| s.to_string()).collect();
        assert_eq!(marker_row(&cells, Some(0), Some(2)), " S           F");
        assert_eq!(marker_row(&cells, Some(1), Some(1)), "      SF");
        assert_eq!(marker_row(&cells, None, None), "");
    }
}
