/// Result of projecting a point onto a line segment.
#[derive(Debug, Clone, Copy)]
pub struct SegmentProjection {
    /// X coordinate of the closest point on the segment.
    pub x: f64,
    /// Y coordinate of the closest point on the segment.
    pub y: f64,
    /// Clamped parameter in `[0, 1]` along the segment.
    pub t: f64,
    /// Distance from the query point to the closest point.
    pub distance: f64,
}

/// Returns the closest point on the line segment from `(ax, ay)` to
/// `(bx, by)` for the query point `(px, py)`.
#[must_use]
pub fn project_onto_segment(
    px: f64,
    py: f64,
    ax: f64,
    ay: f64,
    bx: f64,
    by: f64,
) -> SegmentProjection {
    let dx = bx - ax;
    let dy = by - ay;
    let len_sq = dx * dx + dy * dy;

    if len_sq < 1e-20 {
        // Degenerate segment (zero length).
        let distance = ((px - ax).powi(2) + (py - ay).powi(2)).sqrt();
        return SegmentProjection {
            x: ax,
            y: ay,
            t: 0.0,
            distance,
        };
    }

    // Project point onto the infinite line, clamp to [0, 1].
    let t = ((px - ax) * dx + (py - ay) * dy) / len_sq;
    let t = t.clamp(0.0, 1.0);

    let x = ax + t * dx;
    let y = ay + t * dy;
    let distance = ((px - x).powi(2) + (py - y).powi(2)).sqrt();

    SegmentProjection { x, y, t, distance }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn perpendicular_projection() {
        // Point (1, 1) to segment (0,0)→(2,0). Closest at (1,0), dist = 1.
        let p = project_onto_segment(1.0, 1.0, 0.0, 0.0, 2.0, 0.0);
        assert!((p.x - 1.0).abs() < TOL, "x={}", p.x);
        assert!(p.y.abs() < TOL, "y={}", p.y);
        assert!((p.t - 0.5).abs() < TOL, "t={}", p.t);
        assert!((p.distance - 1.0).abs() < TOL, "d={}", p.distance);
    }

    #[test]
    fn clamps_to_start() {
        // Point (-1, 0) to segment (0,0)→(2,0). Closest at (0,0), dist = 1.
        let p = project_onto_segment(-1.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!(p.x.abs() < TOL, "x={}", p.x);
        assert!(p.t.abs() < TOL, "t={}", p.t);
        assert!((p.distance - 1.0).abs() < TOL, "d={}", p.distance);
    }

    #[test]
    fn clamps_to_end() {
        // Point (3, 0) to segment (0,0)→(2,0). Closest at (2,0), dist = 1.
        let p = project_onto_segment(3.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!((p.x - 2.0).abs() < TOL, "x={}", p.x);
        assert!((p.t - 1.0).abs() < TOL, "t={}", p.t);
        assert!((p.distance - 1.0).abs() < TOL, "d={}", p.distance);
    }

    #[test]
    fn point_on_segment() {
        let p = project_onto_segment(1.0, 0.0, 0.0, 0.0, 2.0, 0.0);
        assert!(p.distance.abs() < TOL, "d={}", p.distance);
    }

    #[test]
    fn degenerate_segment() {
        // Zero-length segment: closest point is the segment start.
        let p = project_onto_segment(3.0, 4.0, 0.0, 0.0, 0.0, 0.0);
        assert!(p.x.abs() < TOL);
        assert!(p.y.abs() < TOL);
        assert!(p.t.abs() < TOL);
        assert!((p.distance - 5.0).abs() < TOL, "d={}", p.distance);
    }

    #[test]
    fn diagonal_segment() {
        // Point (0, 2) to segment (0,0)→(2,2). Closest at (1,1), dist = √2.
        let p = project_onto_segment(0.0, 2.0, 0.0, 0.0, 2.0, 2.0);
        assert!((p.x - 1.0).abs() < TOL, "x={}", p.x);
        assert!((p.y - 1.0).abs() < TOL, "y={}", p.y);
        assert!((p.distance - 2.0_f64.sqrt()).abs() < TOL, "d={}", p.distance);
    }
}
