//! Array pane: one vertical bar per element
//!
//! Bars are coloured by the role their index plays in the current frame:
//! compared indices in blue, swapped or written ones in orange, the pivot in
//! pink, and everything green once the `done` frame is reached.

use super::border_style;
use crate::frame::{SortEvent, SortFrame, TraceMetrics};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const MAX_BAR_WIDTH: usize = 6;

/// Render the array pane for the frame under the cursor
pub fn render_array_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    current: Option<&SortFrame>,
    metrics: TraceMetrics,
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .title_bottom(Line::from(format!(
            " {} comparisons · {} swaps · {} writes ",
            metrics.comparisons, metrics.swaps, metrics.writes
        )))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let Some(current) = current else {
        let paragraph = Paragraph::new("(nothing recorded)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let inner_width = area.width.saturating_sub(2) as usize;
    let inner_height = area.height.saturating_sub(2) as usize;
    let count = current.array.len().max(1);
    let bar_width = (inner_width / count).saturating_sub(1).clamp(1, MAX_BAR_WIDTH);

    // Two rows are reserved for the value and index labels
    let heights = scaled_heights(&current.array, inner_height.saturating_sub(2));
    let colors: Vec<Color> = (0..current.array.len())
        .map(|i| bar_color(current, i))
        .collect();

    let mut lines = Vec::with_capacity(inner_height);
    for row in (1..=inner_height.saturating_sub(2)).rev() {
        let spans: Vec<Span> = heights
            .iter()
            .zip(&colors)
            .map(|(&height, &color)| {
                if height >= row {
                    Span::styled(format!("{} ", "█".repeat(bar_width)), Style::default().fg(color))
                } else {
                    Span::raw(" ".repeat(bar_width + 1))
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(label_row(&current.array, &colors, bar_width, |v| v.to_string()));
    let indices: Vec<i64> = (0..current.array.len() as i64).collect();
    let index_colors = vec![DEFAULT_THEME.comment; indices.len()];
    lines.push(label_row(&indices, &index_colors, bar_width, |i| i.to_string()));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn label_row(
    values: &[i64],
    colors: &[Color],
    bar_width: usize,
    label: impl Fn(i64) -> String,
) -> Line<'static> {
    let spans: Vec<Span> = values
        .iter()
        .zip(colors)
        .map(|(&v, &color)| {
            let mut text = label(v);
            text.truncate(bar_width);
            Span::styled(
                format!("{:^width$} ", text, width = bar_width),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )
        })
        .collect();
    Line::from(spans)
}

fn bar_color(frame: &SortFrame, index: usize) -> Color {
    if frame.kind == SortEvent::Done {
        DEFAULT_THEME.success
    } else if frame.pivot.contains(&index) {
        DEFAULT_THEME.pivot
    } else if frame.swap.contains(&index) {
        DEFAULT_THEME.secondary
    } else if frame.comparison.contains(&index) {
        DEFAULT_THEME.primary
    } else {
        DEFAULT_THEME.bar
    }
}

/// Scale values to bar heights in `0..=rows`, keeping every positive value visible
fn scaled_heights(values: &[i64], rows: usize) -> Vec<usize> {
    let max = values.iter().copied().max().unwrap_or(0);
    if max <= 0 || rows == 0 {
        return vec![0; values.len()];
    }
    values
        .iter()
        .map(|&v| {
            if v <= 0 {
                0
            } else {
                ((v as usize * rows) / max as usize).max(1)
            }
        })
        .collect()
}
