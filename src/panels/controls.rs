//! src/panels/controls.rs
//!
//! Footer panel listing the key bindings. The bindings never change at
//! runtime, so the panel carries no state.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const BINDINGS: [(&str, &str); 3] = [
    ("Q", "quit"),
    ("Space", "pause/resume layout"),
    ("R", "reshuffle layout"),
];

pub struct ControlsPanel;

impl crate::ui::Panel for ControlsPanel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();
        for (i, (key, action)) in BINDINGS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("   "));
            }
            spans.push(Span::styled(
                *key,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(format!(" {action}")));
        }

        let p = Paragraph::new(Line::from(spans))
            .block(Block::default().title("Controls").borders(Borders::ALL));
        f.render_widget(p, area);
    }
}
