//! Scanline row buffers.
//!
//! A [`Row`] holds one scanline's worth of pixel data for a set of
//! channels over a [`Span`]. Each channel is a separate `f32` plane of
//! exactly `span.len()` samples, indexed by buffer offset (absolute
//! position minus `span.left`).
//!
//! # Lifecycle
//!
//! Rows are created per output-row request, filled by an upstream fetch
//! or by an operator, and discarded once the consumer has taken their
//! contents. They never outlive a single request.
//!
//! # Snapshots
//!
//! [`Row::snapshot`] produces a deep copy of selected planes. The copy
//! shares no storage with the original, so an operator can scatter into
//! the original's writable planes while reading the snapshot without
//! re-reading values it has already displaced.

use crate::{Channel, ChannelSet, Error, Result, Span};

/// One scanline's per-channel `f32` buffers within a span.
///
/// # Example
///
/// ```rust
/// use stereo_core::{Channel, Row, Span};
///
/// let mut row = Row::new(Span::new(0, 4));
/// row.writable(Channel::Red).copy_from_slice(&[0.1, 0.2, 0.3, 0.4]);
///
/// assert_eq!(row.sample(Channel::Red, 2), Some(0.3));
/// assert_eq!(row.channel(Channel::Green), None);
/// ```
#[derive(Debug, Clone)]
pub struct Row {
    span: Span,
    planes: [Option<Box<[f32]>>; Channel::COUNT],
}

impl Row {
    /// Creates a row over `span` with no planes allocated.
    pub fn new(span: Span) -> Self {
        Self {
            span,
            planes: [const { None }; Channel::COUNT],
        }
    }

    /// The span this row covers.
    #[inline]
    pub fn span(&self) -> Span {
        self.span
    }

    /// The set of channels that currently have a plane.
    pub fn channels(&self) -> ChannelSet {
        Channel::ALL
            .into_iter()
            .filter(|c| self.planes[c.index()].is_some())
            .collect()
    }

    /// Returns `true` if every channel in `set` has a plane.
    pub fn has_channels(&self, set: &ChannelSet) -> bool {
        set.is_subset(&self.channels())
    }

    /// Read-only access to a channel's plane, if present.
    #[inline]
    pub fn channel(&self, channel: Channel) -> Option<&[f32]> {
        self.planes[channel.index()].as_deref()
    }

    /// Writable access to a channel's plane, allocating a zeroed plane
    /// on first use.
    pub fn writable(&mut self, channel: Channel) -> &mut [f32] {
        let len = self.span.len();
        self.planes[channel.index()]
            .get_or_insert_with(|| vec![0.0; len].into_boxed_slice())
    }

    /// Installs a plane from owned data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PlaneLength`] if `data.len() != span.len()`.
    pub fn set_plane(&mut self, channel: Channel, data: Vec<f32>) -> Result<()> {
        if data.len() != self.span.len() {
            return Err(Error::plane_length(self.span.len(), data.len()));
        }
        self.planes[channel.index()] = Some(data.into_boxed_slice());
        Ok(())
    }

    /// Fills a channel's plane with a constant value, allocating it if
    /// absent.
    pub fn fill(&mut self, channel: Channel, value: f32) {
        self.writable(channel).fill(value);
    }

    /// Sample at absolute position `x`, or `None` if the channel is
    /// absent or `x` lies outside the span.
    #[inline]
    pub fn sample(&self, channel: Channel, x: i32) -> Option<f32> {
        if !self.span.contains(x) {
            return None;
        }
        self.channel(channel).map(|p| p[self.span.offset_of(x)])
    }

    /// Writes `value` at absolute position `x`, allocating the plane if
    /// absent.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `x` is inside the span.
    #[inline]
    pub fn put(&mut self, channel: Channel, x: i32, value: f32) {
        let offset = self.span.offset_of(x);
        self.writable(channel)[offset] = value;
    }

    /// Deep-copies the selected planes into a new row over the same span.
    ///
    /// Channels in `set` that have no plane in `self` are skipped. The
    /// returned row owns its buffers; mutating `self` afterwards never
    /// affects the snapshot.
    pub fn snapshot(&self, set: &ChannelSet) -> Row {
        let mut copy = Row::new(self.span);
        for channel in set.iter() {
            if let Some(plane) = self.channel(channel) {
                copy.planes[channel.index()] = Some(plane.to_vec().into_boxed_slice());
            }
        }
        copy
    }
}
