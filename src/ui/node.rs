//! src/ui/node.rs
//!
//! Recursive layout Node + Panel trait used across the UI.
//!
//! Panels borrow the viewer state for the duration of one frame, so the node
//! tree carries a lifetime instead of shared ownership.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Panel trait: any renderable surface implements this.
pub trait Panel {
    fn draw(&self, f: &mut Frame<'_>, area: Rect);
}

/// Node tree used to compose the UI each frame.
pub enum Node<'a> {
    Group {
        direction: Direction,
        constraints: Vec<Constraint>,
        children: Vec<Node<'a>>,
    },
    Leaf {
        panel: Box<dyn Panel + 'a>,
    },
}

impl Node<'_> {
    /// Draw the node into the given area.
    pub fn draw(&self, f: &mut Frame<'_>, area: Rect) {
        match self {
            Node::Group {
                direction,
                constraints,
                children,
            } => {
                let chunks = Layout::default()
                    .direction(*direction)
                    .constraints(constraints.clone())
                    .split(area);
                for (child, chunk) in children.iter().zip(chunks.iter()) {
                    child.draw(f, *chunk);
                }
            }
            Node::Leaf { panel } => {
                panel.draw(f, area);
            }
        }
    }
}

/// Helper: create a group node.
pub fn group<'a>(
    direction: Direction,
    constraints: Vec<Constraint>,
    children: Vec<Node<'a>>,
) -> Node<'a> {
    Node::Group {
        direction,
        constraints,
        children,
    }
}

/// Helper: create a leaf node.
pub fn leaf<'a>(panel: Box<dyn Panel + 'a>) -> Node<'a> {
    Node::Leaf { panel }
}
