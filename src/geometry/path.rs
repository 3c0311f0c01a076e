use crate::error::{GeometryError, Result};
use crate::math::distance_2d::project_onto_segment;
use crate::math::Point2;

use super::Segment;

/// Closest location on a path for a query point.
#[derive(Debug, Clone, Copy)]
pub struct SnapResult {
    /// The closest point lying on the path.
    pub point: Point2,
    /// Arc-length position of the closest point, measured from the path start.
    pub arc_length: f64,
    /// Distance from the query point to the closest point.
    pub distance: f64,
    /// Index of the matched segment.
    pub segment_index: usize,
}

/// An ordered sequence of segments merged into one logical polyline.
///
/// The path is parameterized by arc length, from `0` at the start of the
/// first segment to [`Path::length`] at the end of the last. Input order is
/// the canonical traversal order; arc length is non-decreasing along it.
/// Immutable after construction.
#[derive(Debug, Clone)]
pub struct Path {
    segments: Vec<Segment>,
    /// `cumulative[i]` is the arc length at the start of segment `i`;
    /// the final entry is the total length.
    cumulative: Vec<f64>,
}

impl Path {
    /// Merges a sequence of segments into a single logical path.
    ///
    /// Input order is preserved as the traversal order. Zero-length segments
    /// are retained; they contribute no arc length.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPath`] if `segments` is empty.
    pub fn build(segments: Vec<Segment>) -> Result<Self> {
        if segments.is_empty() {
            return Err(GeometryError::EmptyPath.into());
        }

        let mut cumulative = Vec::with_capacity(segments.len() + 1);
        let mut total = 0.0;
        cumulative.push(0.0);
        for seg in &segments {
            total += seg.length();
            cumulative.push(total);
        }

        Ok(Self {
            segments,
            cumulative,
        })
    }

    /// Creates a path from a sequence of points, with a segment between each
    /// consecutive pair.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::EmptyPath`] if fewer than 2 points are given.
    pub fn from_points(points: &[Point2]) -> Result<Self> {
        if points.len() < 2 {
            return Err(GeometryError::EmptyPath.into());
        }
        let segments = points
            .windows(2)
            .map(|pair| Segment::new(pair[0], pair[1]))
            .collect();
        Self::build(segments)
    }

    /// Returns the total planar length of the path.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Returns the merged segments in traversal order.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Returns the closest location on the path for the given query point.
    ///
    /// Every segment is scanned; the query is projected onto each (clamped
    /// to the segment's endpoints) and the closest hit wins. Ties resolve to
    /// the first segment in traversal order.
    #[must_use]
    pub fn snap(&self, query: Point2) -> SnapResult {
        let mut best = self.project_segment(query, 0);
        for index in 1..self.segments.len() {
            let candidate = self.project_segment(query, index);
            if candidate.distance < best.distance {
                best = candidate;
            }
        }
        best
    }

    /// Returns the arc-length position of a point known to lie on (or very
    /// near) the path.
    ///
    /// Implemented on top of [`Path::snap`] so both share one
    /// floating-point code path.
    #[must_use]
    pub fn locate(&self, point_on_path: Point2) -> f64 {
        self.snap(point_on_path).arc_length
    }

    /// Returns the point at arc-length position `s` along the path.
    ///
    /// Walks segments in order, subtracting each segment's length from `s`
    /// until the containing segment is found, then interpolates within it.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::ArcLengthOutOfRange`] if `s` is outside
    /// `[0, length]`. The comparison is strict; callers are expected to
    /// guard the range rather than rely on this error.
    pub fn interpolate(&self, s: f64) -> Result<Point2> {
        let length = self.length();
        if !(0.0..=length).contains(&s) {
            return Err(GeometryError::ArcLengthOutOfRange {
                value: s,
                min: 0.0,
                max: length,
            }
            .into());
        }

        let mut remaining = s;
        for seg in &self.segments {
            let seg_len = seg.length();
            if remaining <= seg_len {
                if seg_len < 1e-20 {
                    // Zero-length segment; remaining is necessarily 0 here.
                    return Ok(seg.start);
                }
                return Ok(seg.point_at(remaining / seg_len));
            }
            remaining -= seg_len;
        }

        // Accumulated rounding can leave a sliver when s == length; clamp to
        // the path end.
        Ok(self.segments[self.segments.len() - 1].end)
    }

    fn project_segment(&self, query: Point2, index: usize) -> SnapResult {
        let seg = &self.segments[index];
        let proj = project_onto_segment(
            query.x, query.y, seg.start.x, seg.start.y, seg.end.x, seg.end.y,
        );
        let point = Point2::new(proj.x, proj.y);
        SnapResult {
            point,
            arc_length: self.cumulative[index] + (point - seg.start).norm(),
            distance: proj.distance,
            segment_index: index,
        }
    }
}
