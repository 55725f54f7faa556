//! src/panels/info.rs
//!
//! Info panel: vertex/edge/component counts and the simulation state.

use petgraph::algo::connected_components;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::graph::{ForceLayout, VertexGraph, build};

/// Read-only summary of the graph being displayed.
pub struct InfoPanel<'a> {
    pub graph: &'a VertexGraph,
    pub layout: &'a ForceLayout,
    pub paused: bool,
}

impl<'a> InfoPanel<'a> {
    pub fn new(graph: &'a VertexGraph, layout: &'a ForceLayout, paused: bool) -> Self {
        Self {
            graph,
            layout,
            paused,
        }
    }
}

impl crate::ui::Panel for InfoPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let state = if self.paused {
            "paused"
        } else if self.layout.settled() {
            "settled"
        } else {
            "running"
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("vertices ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(format!(
                    "{}  edges {}",
                    self.graph.node_count(),
                    self.graph.edge_count()
                )),
            ]),
            Line::from(Span::raw(format!(
                "components {}  isolated {}",
                connected_components(self.graph),
                build::isolated_count(self.graph)
            ))),
            Line::from(Span::raw(format!(
                "bipartite {}",
                if build::is_bipartite(self.graph) {
                    "yes"
                } else {
                    "no"
                }
            ))),
            Line::from(Span::raw(format!("layout {}", state))),
        ];

        let block = Block::default().title("Info").borders(Borders::ALL);
        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
