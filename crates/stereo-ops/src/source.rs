//! Upstream row providers.
//!
//! Operators in this crate never subclass a host type; the hosting
//! pipeline injects its inputs as [`RowSource`] capabilities. A source
//! answers three calls: describe its full-frame format, accept a region
//! declaration ahead of fetching, and produce one scanline row.
//!
//! [`BufferSource`] is the in-memory implementation used by the frame
//! render helpers and by tests.

use crate::{OpsError, OpsResult};
use stereo_core::{Channel, ChannelSet, Error, Result, Row, Span};

/// Full-frame properties of an upstream source.
///
/// The disparity operator's `validate` step copies this from its image
/// input unchanged, declaring that its output format mirrors the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceFormat {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// Channels the source can produce.
    pub channels: ChannelSet,
}

/// A region an operator declares it will fetch from a source.
///
/// Declarations carry the identical span and channel set the operator
/// itself was asked for; there is no expansion or cropping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionRequest {
    /// Horizontal extent of the region.
    pub span: Span,
    /// Vertical extent of the region, half-open `[top, bottom)`.
    pub rows: Span,
    /// Channels that will be fetched.
    pub channels: ChannelSet,
    /// How many times each row is expected to be fetched.
    pub count: usize,
}

/// Capability injected by the hosting pipeline: one upstream image input.
///
/// Fetches are synchronous and either complete or fail outright; there
/// is no retry, timeout, or backpressure at this layer. Implementations
/// must be `Sync` because independent row evaluations may fetch
/// concurrently from worker threads.
pub trait RowSource: Sync {
    /// Properties of the full frame this source produces.
    fn format(&self) -> SourceFormat;

    /// Advance notice of a region about to be fetched.
    ///
    /// Sources that prefetch or cache can use this; the default ignores
    /// the declaration.
    fn request(&self, _region: &RegionRequest) {}

    /// Produces the row for scanline `y` covering `span`, containing at
    /// least the channels in `channels`.
    ///
    /// # Errors
    ///
    /// Any failure to supply the requested span or channels is fatal for
    /// the current row and must be surfaced as an error.
    fn fetch_row(&self, y: i32, span: Span, channels: &ChannelSet) -> Result<Row>;
}

/// An in-memory planar frame acting as a [`RowSource`].
///
/// Planes are stored full-frame in row-major order, one `Vec<f32>` per
/// channel. Fetching copies the requested window out of the plane, so
/// rows handed to an operator are always independently owned.
///
/// # Example
///
/// ```rust
/// use stereo_core::{Channel, ChannelSet, Span};
/// use stereo_ops::{BufferSource, RowSource};
///
/// let source = BufferSource::new(4, 2)
///     .with_plane(Channel::Red, vec![0.0; 8])
///     .unwrap();
///
/// let row = source
///     .fetch_row(1, Span::new(0, 4), &ChannelSet::single(Channel::Red))
///     .unwrap();
/// assert_eq!(row.channel(Channel::Red).unwrap().len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct BufferSource {
    width: u32,
    height: u32,
    planes: Vec<(Channel, Vec<f32>)>,
}

impl BufferSource {
    /// Creates a source with no planes.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            planes: Vec::new(),
        }
    }

    /// Adds a full-frame plane for `channel`.
    ///
    /// # Errors
    ///
    /// Returns [`OpsError::InvalidDimensions`] if `data.len()` is not
    /// `width * height`. A plane already present for `channel` is
    /// replaced.
    pub fn with_plane(mut self, channel: Channel, data: Vec<f32>) -> OpsResult<Self> {
        let expected = self.width as usize * self.height as usize;
        if data.len() != expected {
            return Err(OpsError::InvalidDimensions(format!(
                "plane {} has {} samples, expected {}",
                channel,
                data.len(),
                expected
            )));
        }
        self.planes.retain(|(c, _)| *c != channel);
        self.planes.push((channel, data));
        Ok(self)
    }

    /// Creates a source whose listed channels are all one constant value.
    pub fn constant(width: u32, height: u32, channels: ChannelSet, value: f32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            planes: channels.iter().map(|c| (c, vec![value; len])).collect(),
        }
    }

    fn plane(&self, channel: Channel) -> Option<&[f32]> {
        self.planes
            .iter()
            .find(|(c, _)| *c == channel)
            .map(|(_, p)| p.as_slice())
    }
}

impl RowSource for BufferSource {
    fn format(&self) -> SourceFormat {
        SourceFormat {
            width: self.width,
            height: self.height,
            channels: self.planes.iter().map(|(c, _)| *c).collect(),
        }
    }

    fn fetch_row(&self, y: i32, span: Span, channels: &ChannelSet) -> Result<Row> {
        if y < 0 || y >= self.height as i32 {
            return Err(Error::upstream_unavailable(
                0,
                y,
                span,
                format!("scanline outside frame of height {}", self.height),
            ));
        }
        if span.is_empty() || span.left < 0 || span.right > self.width as i32 {
            return Err(Error::upstream_unavailable(
                0,
                y,
                span,
                format!("span outside frame of width {}", self.width),
            ));
        }

        let mut row = Row::new(span);
        let offset = y as usize * self.width as usize;
        let window = offset + span.left as usize..offset + span.right as usize;
        for channel in channels.iter() {
            let plane = self
                .plane(channel)
                .ok_or_else(|| Error::missing_channel(channel, "buffer"))?;
            row.set_plane(channel, plane[window.clone()].to_vec())?;
        }
        Ok(row)
    }
}
