//! Distance measures for heuristics and step costs.

use hexfield_core::{Point, Vec2};

/// True hex-step distance between two tile indices on the doublewidth
/// offset layout.
///
/// Offset coordinates convert to cube coordinates (odd columns staggered
/// down), where distance is half the L1 norm of the difference. With unit
/// step costs this is exact, hence admissible as an A* heuristic — unlike
/// the squared world-space distance sometimes used for hex picking demos,
/// which overestimates wildly in step units.
pub fn hex_steps(a: Point, b: Point) -> i32 {
    let (aq, ar) = axial(a);
    let (bq, br) = axial(b);
    let dq = aq - bq;
    let dr = ar - br;
    (dq.abs() + dr.abs() + (dq + dr).abs()) / 2
}

/// Offset → axial, odd columns shifted down. Exact for negative columns
/// too: `x & 1` is the true parity in two's complement.
#[inline]
fn axial(p: Point) -> (i32, i32) {
    (p.x, p.y - (p.x - (p.x & 1)) / 2)
}

/// Euclidean distance between two world points.
#[inline]
pub fn euclidean(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}
