//! # stereo-ops
//!
//! Disparity-driven mono-to-stereo row operators.
//!
//! This crate turns a mono image plus a two-channel disparity map into
//! the two eyes of a stereo pair, one scanline at a time. The hosting
//! pipeline injects its inputs as [`RowSource`] capabilities and pulls
//! rows from the [`DisparityShift`] operator.
//!
//! # Modules
//!
//! - [`disparity`] - The [`DisparityShift`] operator and its parameters
//! - [`source`] - The [`RowSource`] trait and in-memory [`BufferSource`]
//! - [`render`] - Whole-frame helpers driving the operator per view
//!
//! # Example
//!
//! ```rust
//! use stereo_core::{Channel, ChannelSet, ViewId};
//! use stereo_ops::{render_view, BufferSource, DisparityShift};
//!
//! let image = BufferSource::constant(16, 4, ChannelSet::rgb(), 0.25);
//! let disparity = BufferSource::constant(
//!     16,
//!     4,
//!     ChannelSet::single(Channel::Red).with(Channel::Green),
//!     1.0,
//! );
//!
//! let op = DisparityShift::default();
//! let left = render_view(&op, &image, &disparity, ViewId(1), &ChannelSet::rgb()).unwrap();
//! assert_eq!(left.len(), 4);
//! ```
//!
//! # Parallelism
//!
//! With the default `parallel` feature the render helpers evaluate the
//! rows of a frame on the rayon thread pool. Rows are independent, so
//! output is identical with the feature disabled.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod disparity;
pub mod render;
pub mod source;

pub use error::{OpsError, OpsResult};

pub use disparity::{DisparityShift, ParamSpec, INPUT_DISPARITY, INPUT_IMAGE, MULTIPLY};
pub use render::{collect_plane, eye_for, render_stereo, render_view};
pub use source::{BufferSource, RegionRequest, RowSource, SourceFormat};
