//! src/graph/layout.rs
//!
//! Force-directed placement: spring attraction along edges, pairwise
//! repulsion, and a weak pull toward the origin so disconnected pieces stay
//! on screen. Initial positions are random (no fixed seed), so coordinates
//! differ between runs; only the final shape matters.

use petgraph::graph::NodeIndex;
use rand::Rng;

use super::build::VertexGraph;

/// Tuning constants for the simulation.
#[derive(Clone, Debug)]
pub struct LayoutConfig {
    /// Rest length of the spring along each edge.
    pub spring_length: f64,

    /// Spring stiffness (attraction per unit of stretch).
    pub spring_k: f64,

    /// Pairwise repulsion strength (inverse-square falloff).
    pub repulsion_k: f64,

    /// Velocity retained per step; below 1.0 to prevent oscillation.
    pub damping: f64,

    /// Velocity magnitude cap per step.
    pub max_velocity: f64,

    /// Pull toward the origin, per unit of distance.
    pub centering: f64,

    /// Fastest node speed below which the layout counts as settled.
    pub settle_threshold: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            spring_length: 22.0,
            spring_k: 0.06,
            repulsion_k: 900.0,
            damping: 0.85,
            max_velocity: 8.0,
            centering: 0.01,
            settle_threshold: 0.05,
        }
    }
}

/// Node positions plus the velocities driving them.
///
/// Positions are indexed by `NodeIndex::index()`; the graph must not change
/// shape while a layout is alive (it never does in this tool).
pub struct ForceLayout {
    pub config: LayoutConfig,
    positions: Vec<(f64, f64)>,
    velocities: Vec<(f64, f64)>,
    last_movement: f64,
}

impl ForceLayout {
    /// Create a layout with random initial placement.
    pub fn new(graph: &VertexGraph) -> Self {
        Self::with_rng(graph, LayoutConfig::default(), &mut rand::rng())
    }

    /// Create a layout using the given config and randomness source.
    pub fn with_rng<R: Rng>(graph: &VertexGraph, config: LayoutConfig, rng: &mut R) -> Self {
        let mut layout = Self {
            config,
            positions: Vec::new(),
            velocities: Vec::new(),
            last_movement: f64::INFINITY,
        };
        layout.scatter(graph, rng);
        layout
    }

    /// Re-randomize all positions and restart the simulation.
    pub fn reset(&mut self, graph: &VertexGraph) {
        self.scatter(graph, &mut rand::rng());
    }

    fn scatter<R: Rng>(&mut self, graph: &VertexGraph, rng: &mut R) {
        let n = graph.node_count();
        let radius = self.config.spring_length * (n as f64).sqrt().max(1.0);
        self.positions.clear();
        self.velocities.clear();
        for i in 0..n {
            // Jittered ring: spreads nodes out without stacking any two.
            let angle = std::f64::consts::TAU * (i as f64) / (n as f64)
                + rng.random_range(-0.3..0.3);
            let r = radius * rng.random_range(0.5..1.0);
            self.positions.push((r * angle.cos(), r * angle.sin()));
            self.velocities.push((0.0, 0.0));
        }
        self.last_movement = f64::INFINITY;
    }

    /// Advance the simulation by one step.
    pub fn step(&mut self, graph: &VertexGraph) {
        let n = self.positions.len();
        if n == 0 {
            self.last_movement = 0.0;
            return;
        }
        let cfg = &self.config;
        let mut forces = vec![(0.0_f64, 0.0_f64); n];

        // Pairwise repulsion, inverse-square.
        for i in 0..n {
            for j in (i + 1)..n {
                let (dx, dy) = delta(self.positions[i], self.positions[j]);
                let dist = (dx * dx + dy * dy).sqrt().max(0.01);
                let f = cfg.repulsion_k / (dist * dist);
                let (ux, uy) = (dx / dist, dy / dist);
                forces[i].0 += ux * f;
                forces[i].1 += uy * f;
                forces[j].0 -= ux * f;
                forces[j].1 -= uy * f;
            }
        }

        // Spring attraction along edges.
        for e in graph.edge_indices() {
            let Some((a, b)) = graph.edge_endpoints(e) else {
                continue;
            };
            let (i, j) = (a.index(), b.index());
            if i == j {
                continue;
            }
            let (dx, dy) = delta(self.positions[i], self.positions[j]);
            let dist = (dx * dx + dy * dy).sqrt().max(0.01);
            let f = cfg.spring_k * (dist - cfg.spring_length);
            let (ux, uy) = (dx / dist, dy / dist);
            forces[i].0 -= ux * f;
            forces[i].1 -= uy * f;
            forces[j].0 += ux * f;
            forces[j].1 += uy * f;
        }

        // Weak centering keeps disconnected components from drifting apart.
        for i in 0..n {
            forces[i].0 -= self.positions[i].0 * cfg.centering;
            forces[i].1 -= self.positions[i].1 * cfg.centering;
        }

        // Integrate with damping and a velocity cap.
        let mut fastest = 0.0_f64;
        for i in 0..n {
            let mut vx = (self.velocities[i].0 + forces[i].0) * cfg.damping;
            let mut vy = (self.velocities[i].1 + forces[i].1) * cfg.damping;
            let speed = (vx * vx + vy * vy).sqrt();
            if speed > cfg.max_velocity {
                vx *= cfg.max_velocity / speed;
                vy *= cfg.max_velocity / speed;
            }
            self.velocities[i] = (vx, vy);
            self.positions[i].0 += vx;
            self.positions[i].1 += vy;
            fastest = fastest.max(speed.min(cfg.max_velocity));
        }
        self.last_movement = fastest;
    }

    /// Whether node movement has fallen below the settle threshold.
    pub fn settled(&self) -> bool {
        self.last_movement < self.config.settle_threshold
    }

    /// Position of a node.
    pub fn position(&self, node: NodeIndex) -> (f64, f64) {
        self.positions[node.index()]
    }

    /// Square `(min, max)` bounds around all positions, padded so labels
    /// near the edge of the plot stay visible.
    pub fn bounds(&self) -> (f64, f64) {
        let mut extent = 0.0_f64;
        for &(x, y) in &self.positions {
            extent = extent.max(x.abs()).max(y.abs());
        }
        let extent = extent.max(1.0) + self.config.spring_length * 0.5;
        (-extent, extent)
    }
}

fn delta(a: (f64, f64), b: (f64, f64)) -> (f64, f64) {
    (a.0 - b.0, a.1 - b.1)
}
