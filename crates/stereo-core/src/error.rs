//! Error types for stereo row processing.
//!
//! The [`Error`] enum covers the failure modes of row exchange between
//! an operator and its upstream sources. There is no retry policy at
//! this layer: a row request either succeeds or fails the whole row.

use crate::{Channel, Span};
use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while producing or consuming rows.
#[derive(Debug, Error)]
pub enum Error {
    /// An upstream source could not supply the requested row.
    ///
    /// Fatal for the current row request; surfaced to the caller
    /// without local recovery.
    #[error("input {input} cannot supply row y={y} over {span}: {reason}")]
    UpstreamUnavailable {
        /// Input slot index (0 = image, 1 = disparity).
        input: usize,
        /// Requested scanline.
        y: i32,
        /// Requested span.
        span: Span,
        /// Why the source failed.
        reason: String,
    },

    /// A required channel is absent from a fetched row.
    #[error("channel {channel} missing from {what} row")]
    MissingChannel {
        /// The absent channel.
        channel: Channel,
        /// Which row lacked it (e.g. "image", "disparity").
        what: String,
    },

    /// A fetched row covers a different span than requested.
    #[error("span mismatch: requested {requested}, got {got}")]
    SpanMismatch {
        /// The span that was requested.
        requested: Span,
        /// The span the source produced.
        got: Span,
    },

    /// A plane buffer does not match the span length.
    #[error("plane length {got} does not match span length {expected}")]
    PlaneLength {
        /// Expected number of samples (span length).
        expected: usize,
        /// Number of samples provided.
        got: usize,
    },
}

impl Error {
    /// Creates an [`Error::UpstreamUnavailable`] error.
    #[inline]
    pub fn upstream_unavailable(
        input: usize,
        y: i32,
        span: Span,
        reason: impl Into<String>,
    ) -> Self {
        Self::UpstreamUnavailable {
            input,
            y,
            span,
            reason: reason.into(),
        }
    }

    /// Creates an [`Error::MissingChannel`] error.
    #[inline]
    pub fn missing_channel(channel: Channel, what: impl Into<String>) -> Self {
        Self::MissingChannel {
            channel,
            what: what.into(),
        }
    }

    /// Creates an [`Error::SpanMismatch`] error.
    #[inline]
    pub fn span_mismatch(requested: Span, got: Span) -> Self {
        Self::SpanMismatch { requested, got }
    }

    /// Creates an [`Error::PlaneLength`] error.
    #[inline]
    pub fn plane_length(expected: usize, got: usize) -> Self {
        Self::PlaneLength { expected, got }
    }

    /// Returns `true` if this error came from an upstream source.
    #[inline]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::UpstreamUnavailable { .. })
    }

    /// Re-attributes an upstream failure to the given input slot.
    ///
    /// Sources do not know which slot they are wired to; the operator
    /// does, and uses this when propagating fetch errors. Other error
    /// variants pass through unchanged.
    pub fn with_input(self, input: usize) -> Self {
        match self {
            Self::UpstreamUnavailable {
                y, span, reason, ..
            } => Self::UpstreamUnavailable {
                input,
                y,
                span,
                reason,
            },
            other => other,
        }
    }
}
