//! Basic 2D types and tolerances shared by the predicates.
//!
//! - `GeomCfg`: centralizes epsilons and the degenerate-case policy for
//!   horizontal edges in the ray-parity test.
//! - `Orientation`: three-way result of the cross-product sign test.
//! - `EdgeCrossing`: a boundary edge hit by a query segment.
//!
//! Code cross-refs: `predicates::orientation`, `containment::is_ray_segment_cross`

use nalgebra::Vector2;

/// How the ray-parity test treats an edge with (near) zero Y extent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HorizontalEdgePolicy {
    /// Horizontal edges never count. Together with the half-open Y-span rule
    /// on the neighbouring edges this gives the exact crossing parity.
    #[default]
    Ignore,
    /// Count a horizontal edge collinear with the ray whenever the ray origin
    /// lies left of either endpoint. Approximate; kept for callers that rely
    /// on the legacy behaviour.
    CountIfLeft,
}

/// Geometry configuration (tolerances).
///
/// All epsilons are absolute. Cross products scale with the squared
/// coordinate magnitude, so inputs far from unit scale may need adjusted
/// values.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    /// `|cross| <= eps_orient` is treated as collinear.
    pub eps_orient: f64,
    /// `|d_a × d_b| <= eps_parallel` is treated as parallel.
    pub eps_parallel: f64,
    /// Lengths and coordinate slacks at or below this are treated as zero.
    pub eps_length: f64,
    pub horizontal_edges: HorizontalEdgePolicy,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            eps_orient: 1e-12,
            eps_parallel: 1e-12,
            eps_length: 1e-12,
            horizontal_edges: HorizontalEdgePolicy::Ignore,
        }
    }
}

impl GeomCfg {
    /// Same tolerances with a single epsilon for every comparison.
    #[inline]
    pub fn with_eps(eps: f64) -> Self {
        Self {
            eps_orient: eps,
            eps_parallel: eps,
            eps_length: eps,
            ..Self::default()
        }
    }
}

/// Side of the directed line A→B that a point falls on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Left of A→B (positive cross product).
    CounterClockwise,
    /// Right of A→B (negative cross product).
    Clockwise,
    Collinear,
}

impl Orientation {
    /// +1, -1 or 0.
    #[inline]
    pub fn sign(self) -> i8 {
        match self {
            Orientation::CounterClockwise => 1,
            Orientation::Clockwise => -1,
            Orientation::Collinear => 0,
        }
    }
}

/// Boundary edge `points[edge] → points[(edge + 1) % n]` crossed at `point`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeCrossing {
    pub edge: usize,
    pub point: Vector2<f64>,
}
