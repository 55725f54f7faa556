//! src/panels.rs
//!
//! Top-level panels module and re-exports.

pub mod controls;
pub mod edges;
pub mod info;
pub mod plot;
pub mod title;

pub use controls::ControlsPanel;
pub use edges::EdgeListPanel;
pub use info::InfoPanel;
pub use plot::PlotPanel;
pub use title::TitlePanel;
