//! Horizontal scanline intervals.
//!
//! A [`Span`] is the half-open pixel range `[left, right)` that a row
//! request covers. Coordinates are signed: overscan regions to the left
//! of the frame origin are legal and common in compositing pipelines.
//!
//! # Coordinate Convention
//!
//! Both edges follow the half-open convention - `left` is included,
//! `right` is excluded - matching the rest of the workspace.

/// A half-open horizontal interval `[left, right)` of pixel positions.
///
/// # Invariants
///
/// - A span with `right <= left` is considered empty.
///
/// # Example
///
/// ```rust
/// use stereo_core::Span;
///
/// let span = Span::new(0, 10);
/// assert_eq!(span.len(), 10);
/// assert!(span.contains(9));
/// assert!(!span.contains(10)); // right edge excluded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// Leftmost pixel position (inclusive).
    pub left: i32,
    /// One past the rightmost pixel position (exclusive).
    pub right: i32,
}

impl Span {
    /// Creates a new span covering `[left, right)`.
    #[inline]
    pub const fn new(left: i32, right: i32) -> Self {
        Self { left, right }
    }

    /// Creates a span from the frame origin with the given width.
    #[inline]
    pub const fn from_width(width: u32) -> Self {
        Self::new(0, width as i32)
    }

    /// Number of pixels in the span (zero for degenerate spans).
    #[inline]
    pub const fn len(&self) -> usize {
        if self.right > self.left {
            (self.right - self.left) as usize
        } else {
            0
        }
    }

    /// Returns `true` if the span covers no pixels.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left
    }

    /// Returns `true` if the absolute position `x` lies inside the span.
    #[inline]
    pub const fn contains(&self, x: i32) -> bool {
        x >= self.left && x < self.right
    }

    /// Translates an absolute pixel position into a buffer offset.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `x` is inside the span.
    #[inline]
    pub fn offset_of(&self, x: i32) -> usize {
        debug_assert!(self.contains(x), "position outside span");
        (x - self.left) as usize
    }

    /// Iterates over all absolute pixel positions, left to right.
    #[inline]
    pub fn positions(&self) -> impl Iterator<Item = i32> {
        self.left..self.right
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.left, self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        assert_eq!(Span::new(0, 10).len(), 10);
        assert_eq!(Span::new(-5, 5).len(), 10);
        assert_eq!(Span::new(3, 3).len(), 0);
        assert_eq!(Span::new(5, 3).len(), 0);
    }

    #[test]
    fn test_span_contains() {
        let span = Span::new(-2, 4);
        assert!(span.contains(-2));
        assert!(span.contains(3));
        assert!(!span.contains(4));
        assert!(!span.contains(-3));
    }

    #[test]
    fn test_span_offset() {
        let span = Span::new(-2, 4);
        assert_eq!(span.offset_of(-2), 0);
        assert_eq!(span.offset_of(3), 5);
    }

    #[test]
    fn test_span_positions() {
        let xs: Vec<_> = Span::new(-1, 2).positions().collect();
        assert_eq!(xs, vec![-1, 0, 1]);
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1920).to_string(), "[0, 1920)");
    }
}
