//! Stereo view identifiers.

/// Identifier of one rendered view, as assigned by the hosting pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ViewId(pub i32);

impl std::fmt::Display for ViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "view {}", self.0)
    }
}

/// Which stereo eye a view maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Eye {
    /// Left eye.
    Left,
    /// Right eye.
    Right,
}

/// The two view identifiers an operator is configured to treat as the
/// stereo pair.
///
/// The pair is configuration state, not per-request data. `left == right`
/// is a caller misconfiguration and is not detected here; [`Self::eye_of`]
/// resolves such a pair as the left eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewPair {
    /// View rendered as the left eye.
    pub left: ViewId,
    /// View rendered as the right eye.
    pub right: ViewId,
}

impl Default for ViewPair {
    /// Views 1 and 2, the conventional host assignment.
    fn default() -> Self {
        Self {
            left: ViewId(1),
            right: ViewId(2),
        }
    }
}

impl ViewPair {
    /// Creates a pair from explicit view identifiers.
    #[inline]
    pub const fn new(left: ViewId, right: ViewId) -> Self {
        Self { left, right }
    }

    /// Maps a view to its eye, or `None` for views outside the pair.
    #[inline]
    pub fn eye_of(&self, view: ViewId) -> Option<Eye> {
        if view == self.left {
            Some(Eye::Left)
        } else if view == self.right {
            Some(Eye::Right)
        } else {
            None
        }
    }
}
