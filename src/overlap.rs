//! Overlap detection for closed 1-D line segments.
//!
//! Two segments overlap when they share at least one point. Boundaries are
//! inclusive: `[1, 3]` and `[3, 5]` overlap at `3`.

use crate::error::{InsightError, Result};
use std::fmt;
use std::str::FromStr;

/// A closed interval `[start, end]` on a single axis.
///
/// Endpoints may be given in either order; they are stored with
/// `start <= end`. A segment whose endpoints are equal is a single point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    start: f64,
    end: f64,
}

impl Segment {
    /// Create a segment between `a` and `b`.
    ///
    /// # Errors
    ///
    /// Returns [`InsightError::InvalidInput`] if either endpoint is NaN or
    /// infinite.
    pub fn new(a: f64, b: f64) -> Result<Self> {
        if !a.is_finite() || !b.is_finite() {
            return Err(InsightError::InvalidInput(format!(
                "segment endpoints must be finite numbers, got ({a}, {b})"
            )));
        }
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self { start, end })
    }

    /// The lower endpoint.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// The upper endpoint.
    pub fn end(&self) -> f64 {
        self.end
    }

    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// Whether `point` lies within the segment, endpoints included.
    pub fn contains(&self, point: f64) -> bool {
        self.start <= point && point <= self.end
    }
}

impl TryFrom<(f64, f64)> for Segment {
    type Error = InsightError;

    fn try_from((a, b): (f64, f64)) -> Result<Self> {
        Self::new(a, b)
    }
}

/// Parses `"a,b"`, e.g. `"1,5"` or `"-2.5, 7"`.
impl FromStr for Segment {
    type Err = InsightError;

    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',');
        let start = parse_endpoint(parts.next(), s)?;
        let end = parse_endpoint(parts.next(), s)?;
        if parts.next().is_some() {
            return Err(InsightError::InvalidInput(format!(
                "segment {s:?} has more than two endpoints"
            )));
        }
        Self::new(start, end)
    }
}

fn parse_endpoint(part: Option<&str>, whole: &str) -> Result<f64> {
    let raw = part.map(str::trim).unwrap_or_default();
    if raw.is_empty() {
        return Err(InsightError::InvalidInput(format!(
            "segment {whole:?} is missing an endpoint"
        )));
    }
    raw.parse::<f64>().map_err(|_| {
        InsightError::InvalidInput(format!("segment endpoint {raw:?} is not a number"))
    })
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Whether `a` and `b` share at least one point.
pub fn overlaps(a: &Segment, b: &Segment) -> bool {
    a.start <= b.end && b.start <= a.end
}

/// The interval shared by `a` and `b`, if any.
pub fn overlap_region(a: &Segment, b: &Segment) -> Option<Segment> {
    let start = a.start.max(b.start);
    let end = a.end.min(b.end);
    (start <= end).then_some(Segment { start, end })
}

/// Whether any two of `segments` overlap.
///
/// Empty and single-segment inputs have no pair and return `false`.
pub fn any_overlap(segments: &[Segment]) -> bool {
    find_overlap(segments).is_some()
}

/// Indices `(i, j)` with `i < j` of one overlapping pair, if any exists.
///
/// Sorts by start and sweeps, comparing each start against the furthest
/// end seen so far: O(n log n) time, O(n) space.
pub fn find_overlap(segments: &[Segment]) -> Option<(usize, usize)> {
    let mut order: Vec<usize> = (0..segments.len()).collect();
    order.sort_by(|&i, &j| segments[i].start.total_cmp(&segments[j].start));

    let mut furthest: Option<usize> = None;
    for index in order {
        let current = &segments[index];
        match furthest {
            Some(reach) if current.start <= segments[reach].end => {
                return Some((reach.min(index), reach.max(index)));
            }
            Some(reach) if current.end <= segments[reach].end => {}
            _ => furthest = Some(index),
        }
    }
    None
}
