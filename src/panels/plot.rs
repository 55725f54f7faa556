//! src/panels/plot.rs
//!
//! Plot panel: draws the laid-out graph on a braille canvas.
//!
//! Gray edges with their weight printed at the midpoint, light-blue node
//! markers, bold vertex names next to each node. The block title carries the
//! graph's display name.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Block, Borders,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use crate::graph::{ForceLayout, VertexGraph};

/// Borrows the graph and its layout for one frame.
pub struct PlotPanel<'a> {
    pub graph: &'a VertexGraph,
    pub layout: &'a ForceLayout,
    pub title: &'a str,
}

impl<'a> PlotPanel<'a> {
    pub fn new(graph: &'a VertexGraph, layout: &'a ForceLayout, title: &'a str) -> Self {
        Self {
            graph,
            layout,
            title,
        }
    }
}

impl crate::ui::Panel for PlotPanel<'_> {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let (lo, hi) = self.layout.bounds();
        // Nudge labels off their anchor point so markers stay visible.
        let label_offset = (hi - lo) * 0.015;

        let canvas = Canvas::default()
            .block(
                Block::default()
                    .title(self.title.to_string())
                    .borders(Borders::ALL),
            )
            .marker(symbols::Marker::Braille)
            .x_bounds([lo, hi])
            .y_bounds([lo, hi])
            .paint(|ctx| {
                // Edges first, weights at midpoints.
                for e in self.graph.edge_indices() {
                    let Some((a, b)) = self.graph.edge_endpoints(e) else {
                        continue;
                    };
                    let (x1, y1) = self.layout.position(a);
                    let (x2, y2) = self.layout.position(b);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: Color::Gray,
                    });
                    let weight = self.graph[e];
                    ctx.print(
                        (x1 + x2) / 2.0,
                        (y1 + y2) / 2.0 + label_offset,
                        Line::from(Span::styled(
                            weight.to_string(),
                            Style::default().fg(Color::Gray),
                        )),
                    );
                }

                // Nodes and their names on top of the edge layer.
                ctx.layer();
                for n in self.graph.node_indices() {
                    let (x, y) = self.layout.position(n);
                    ctx.draw(&Points {
                        coords: &[(x, y)],
                        color: Color::LightBlue,
                    });
                    ctx.print(
                        x + label_offset,
                        y + label_offset,
                        Line::from(Span::styled(
                            self.graph[n].clone(),
                            Style::default()
                                .fg(Color::LightBlue)
                                .add_modifier(Modifier::BOLD),
                        )),
                    );
                }
            });

        f.render_widget(canvas, area);
    }
}
