//! src/panels/edges.rs
//!
//! Edge list panel: one line per declared edge, in declaration order.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::VertexGraph;

/// Lists as many edges as fit in the panel height.
pub struct EdgeListPanel<'a> {
    pub graph: &'a VertexGraph,
}

impl<'a> EdgeListPanel<'a> {
    pub fn new(graph: &'a VertexGraph) -> Self {
        Self { graph }
    }
}

impl crate::ui::Panel for EdgeListPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let height = area.height.saturating_sub(2) as usize;

        let lines: Vec<Line> = self
            .graph
            .edge_indices()
            .take(height)
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                Some(Line::from(vec![
                    Span::styled(self.graph[a].clone(), Style::default().fg(Color::Green)),
                    Span::styled(" -- ", Style::default().fg(Color::DarkGray)),
                    Span::styled(self.graph[b].clone(), Style::default().fg(Color::Green)),
                    Span::raw("  "),
                    Span::styled(self.graph[e].to_string(), Style::default().fg(Color::Cyan)),
                ]))
            })
            .collect();

        let block = Block::default().title("Edges").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
