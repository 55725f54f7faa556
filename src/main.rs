//! src/main.rs
//!
//! Entrypoint delegating to `app::run()`.

mod app;
mod graph;
mod panels;
mod parse;
mod ui;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    app::run()
}
