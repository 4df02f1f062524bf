//! Graph pane: adjacency listing with the current frame's vertices highlighted

use super::border_style;
use crate::frame::{GraphEvent, GraphFrame};
use crate::graph::GraphSnapshot;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Render the graph pane.
///
/// `seen` holds every vertex highlighted by frames up to the cursor, so the
/// explored part of the graph stays visible between steps.
pub fn render_graph_pane(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    graph: &GraphSnapshot<String>,
    current: Option<&GraphFrame<String>>,
    seen: &[String],
    is_focused: bool,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused))
        .padding(Padding::new(1, 0, 0, 0));

    if graph.nodes.is_empty() {
        let paragraph = Paragraph::new("(empty graph)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let highlighted: &[String] = current
        .map(|f| f.highlighted_nodes.as_slice())
        .unwrap_or_default();
    let kind = current.map(|f| f.kind);
    let vertex_style = |vertex: &String| -> Style {
        if highlighted.contains(vertex) {
            Style::default()
                .fg(highlight_color(kind))
                .add_modifier(Modifier::BOLD)
        } else if seen.contains(vertex) {
            Style::default().fg(DEFAULT_THEME.visited)
        } else {
            Style::default().fg(DEFAULT_THEME.fg)
        }
    };

    let mut lines = Vec::with_capacity(graph.nodes.len() + 2);
    for vertex in &graph.nodes {
        let mut spans = vec![
            Span::styled(format!("{:>4}", vertex), vertex_style(vertex)),
            Span::styled("  ", Style::default()),
        ];

        for edge in graph.edges.iter().filter(|e| &e.from == vertex) {
            spans.push(Span::styled("─", Style::default().fg(DEFAULT_THEME.comment)));
            spans.push(Span::styled(
                format!("{}", edge.weight),
                Style::default().fg(DEFAULT_THEME.comment),
            ));
            spans.push(Span::styled("─ ", Style::default().fg(DEFAULT_THEME.comment)));
            spans.push(Span::styled(edge.to.clone(), vertex_style(&edge.to)));
            spans.push(Span::raw("  "));
        }
        lines.push(Line::from(spans));
    }

    if let Some(current) = current {
        lines.push(Line::default());
        lines.push(Line::from(vec![
            Span::styled(
                format!(" {} ", current.kind),
                Style::default()
                    .bg(highlight_color(Some(current.kind)))
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(current.highlighted_nodes.join(", "), Style::default().fg(DEFAULT_THEME.fg)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn highlight_color(kind: Option<GraphEvent>) -> Color {
    match kind {
        Some(GraphEvent::Path | GraphEvent::Add | GraphEvent::Component) => DEFAULT_THEME.success,
        Some(GraphEvent::Cycle | GraphEvent::Conflict) => DEFAULT_THEME.error,
        Some(GraphEvent::Relax | GraphEvent::Backtrack | GraphEvent::Skip) => DEFAULT_THEME.pivot,
        Some(GraphEvent::Inspect) => DEFAULT_THEME.primary,
        _ => DEFAULT_THEME.secondary,
    }
}
