//! # stereo-core
//!
//! Core types for scanline-based stereo image processing.
//!
//! This crate provides the foundational types used by the stereo-rs
//! operator crates:
//!
//! - [`Span`] - Half-open horizontal pixel interval `[left, right)`
//! - [`Channel`], [`ChannelSet`] - Channel identifiers and stable-order sets
//! - [`Row`] - One scanline's per-channel `f32` buffers within a span
//! - [`ViewId`], [`ViewPair`], [`Eye`] - Stereo view selection
//! - [`Error`], [`Result`] - Shared error handling
//!
//! ## Crate Structure
//!
//! `stereo-core` has no internal dependencies; the operator crates build
//! on it:
//!
//! ```text
//! stereo-core (this crate)
//!    ^
//!    |
//!    +-- stereo-ops (row sources, disparity displacement, rendering)
//! ```
//!
//! Rows are request-scoped: a [`Row`] is created for one scanline of one
//! evaluation and discarded once the consumer has copied its contents.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod channel;
pub mod error;
pub mod row;
pub mod span;
pub mod view;

pub use channel::{Channel, ChannelSet};
pub use error::{Error, Result};
pub use row::Row;
pub use span::Span;
pub use view::{Eye, ViewId, ViewPair};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use stereo_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::channel::{Channel, ChannelSet};
    pub use crate::error::{Error, Result};
    pub use crate::row::Row;
    pub use crate::span::Span;
    pub use crate::view::{Eye, ViewId, ViewPair};
}
