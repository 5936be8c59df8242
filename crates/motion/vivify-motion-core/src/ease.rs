//! Easing curves for keyframe segments.
//!
//! Named curves are the canonical CSS cubic-beziers; `Bezier` carries explicit
//! control points `(x1, y1, x2, y2)`. Evaluation inverts the x-bezier by
//! bisection, then evaluates the y-bezier at the found parameter.

use serde::{Deserialize, Serialize};

/// One timing curve.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ease {
    Linear,
    /// ease-in: (0.42, 0, 1, 1)
    In,
    /// ease-out: (0, 0, 0.58, 1)
    Out,
    /// ease-in-out: (0.42, 0, 0.58, 1)
    InOut,
    /// Explicit cubic-bezier control points (x1, y1, x2, y2).
    Bezier([f32; 4]),
}

impl Ease {
    fn control_points(self) -> [f32; 4] {
        match self {
            Ease::Linear => [0.0, 0.0, 1.0, 1.0],
            Ease::In => [0.42, 0.0, 1.0, 1.0],
            Ease::Out => [0.0, 0.0, 0.58, 1.0],
            Ease::InOut => [0.42, 0.0, 0.58, 1.0],
            Ease::Bezier(ctrl) => ctrl,
        }
    }

    /// Map linear progress `t` in [0,1] through this curve.
    pub fn apply(self, t: f32) -> f32 {
        let [x1, y1, x2, y2] = self.control_points();
        bezier_ease_t(t, x1, y1, x2, y2)
    }
}

impl Default for Ease {
    fn default() -> Self {
        Ease::Linear
    }
}

/// How a preset distributes easing over its keyframe segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum EaseSpec {
    /// One curve for every segment.
    Uniform(Ease),
    /// One curve per segment, in order. Length must equal `keyframes - 1`.
    PerSegment(Vec<Ease>),
}

impl EaseSpec {
    /// Curve for segment `i` (between keyframes `i` and `i + 1`).
    pub fn for_segment(&self, i: usize) -> Ease {
        match self {
            EaseSpec::Uniform(e) => *e,
            EaseSpec::PerSegment(list) => list.get(i).copied().unwrap_or_default(),
        }
    }
}

/// Linear interpolation of scalars.
#[inline]
pub fn lerp_f32(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Cubic Bezier basis function
#[inline]
fn cubic_bezier(p0: f32, p1: f32, p2: f32, p3: f32, t: f32) -> f32 {
    let u = 1.0 - t;
    u * u * u * p0 + 3.0 * u * u * t * p1 + 3.0 * u * t * t * p2 + t * t * t * p3
}

/// Given control points (x1, y1, x2, y2) and an input t in [0,1],
/// compute the eased y by inverting the x bezier via binary search.
#[inline]
fn bezier_ease_t(t: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    // Fast path: Bezier(0,0,1,1) is exactly linear -> eased t == t
    if x1 == 0.0 && y1 == 0.0 && x2 == 1.0 && y2 == 1.0 {
        return t;
    }
    // Monotonic X in [0,1] assumed for x1/x2 ∈ [0,1]
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut mid = t;
    for _ in 0..24 {
        let x = cubic_bezier(0.0, x1, x2, 1.0, mid);
        if (x - t).abs() < 1e-6 {
            break;
        }
        if x < t {
            lo = mid;
        } else {
            hi = mid;
        }
        mid = 0.5 * (lo + hi);
    }
    cubic_bezier(0.0, y1, y2, 1.0, mid)
}
