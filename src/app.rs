//! src/app.rs
//!
//! Terminal viewer for weighted graph description files.
//!
//! Reads one input file, builds the graph, and displays it with a
//! force-directed layout until the user quits. The pipeline is a straight
//! line: parse, build, lay out, draw.
//!
//! # Input format
//!
//! ```text
//! // comments and blank lines are ignored
//! MyGraph          <- first surviving line: graph name
//! A -- B 5         <- edge with integer weight
//! B -- C 2
//! D                <- isolated vertex
//! ```
//!
//! # Usage
//!
//! ```text
//! grafo-view <input-file>
//! ```
//!
//! A wrong argument count prints a usage line and exits with code 1. An
//! unreadable file or a malformed edge line is fatal: the error names the
//! file and the offending line, and nothing is drawn.
//!
//! # Keys
//!
//! - **q** — quit and restore the terminal.
//! - **Space** — pause/resume the layout simulation.
//! - **r** — re-randomize node positions and run the simulation again.
//!
//! Layout coordinates start from random placement with no fixed seed, so the
//! picture differs between runs of the same file.

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use clap::Parser;
use clap::error::ErrorKind;
use color_eyre::eyre::Result;

use crate::graph::{ForceLayout, VertexGraph, build};
use crate::panels::{ControlsPanel, EdgeListPanel, InfoPanel, PlotPanel, TitlePanel};
use crate::parse;
use crate::ui::{group, leaf};

/// Simulation steps applied per rendered frame.
const STEPS_PER_FRAME: usize = 4;

/// Frame pacing (~30 fps).
const FRAME_TIME: Duration = Duration::from_millis(33);

#[derive(Parser, Debug)]
#[command(version, about = "Plot a graph description file in the terminal")]
struct Args {
    /// Input graph description file
    input: PathBuf,
}

pub fn run() -> Result<()> {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("Usage: grafo-view <input-file>");
            std::process::exit(1);
        }
    };

    let desc = parse::load(&args.input)?;
    let graph = build(&desc);
    let mut layout = ForceLayout::new(&graph);

    let mut terminal = ratatui::init();
    let res = view_loop(&mut terminal, &graph, &mut layout, desc.title());
    ratatui::restore();
    res
}

/// Draw frames and handle keys until the user quits.
fn view_loop(
    terminal: &mut ratatui::DefaultTerminal,
    graph: &VertexGraph,
    layout: &mut ForceLayout,
    title: &str,
) -> Result<()> {
    let mut paused = false;
    let mut running = true;

    while running {
        let frame_start = std::time::Instant::now();

        if !paused && !layout.settled() {
            for _ in 0..STEPS_PER_FRAME {
                layout.step(graph);
            }
        }

        let root = group(
            ratatui::layout::Direction::Vertical,
            vec![
                ratatui::layout::Constraint::Length(3),
                ratatui::layout::Constraint::Min(3),
                ratatui::layout::Constraint::Length(3),
            ],
            vec![
                leaf(Box::new(TitlePanel::new(title))),
                group(
                    ratatui::layout::Direction::Horizontal,
                    vec![
                        ratatui::layout::Constraint::Percentage(72),
                        ratatui::layout::Constraint::Percentage(28),
                    ],
                    vec![
                        leaf(Box::new(PlotPanel::new(graph, layout, title))),
                        group(
                            ratatui::layout::Direction::Vertical,
                            vec![
                                ratatui::layout::Constraint::Percentage(60),
                                ratatui::layout::Constraint::Percentage(40),
                            ],
                            vec![
                                leaf(Box::new(EdgeListPanel::new(graph))),
                                leaf(Box::new(InfoPanel::new(graph, layout, paused))),
                            ],
                        ),
                    ],
                ),
                leaf(Box::new(ControlsPanel)),
            ],
        );

        terminal.draw(|f| root.draw(f, f.area()))?;
        drop(root);

        while crossterm::event::poll(Duration::from_millis(0))? {
            if let crossterm::event::Event::Key(key) = crossterm::event::read()? {
                match key.code {
                    crossterm::event::KeyCode::Char('q') => running = false,
                    crossterm::event::KeyCode::Char(' ') => paused = !paused,
                    crossterm::event::KeyCode::Char('r') => {
                        layout.reset(graph);
                        paused = false;
                    }
                    _ => {}
                }
            }
        }

        if !running {
            break;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_TIME {
            thread::sleep(FRAME_TIME - elapsed);
        }
    }

    Ok(())
}
