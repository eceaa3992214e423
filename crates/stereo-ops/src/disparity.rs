//! Mono-to-stereo disparity displacement.
//!
//! [`DisparityShift`] turns a mono image plus a two-channel disparity
//! map into one eye of a stereo pair, one scanline at a time. For every
//! pixel of a fetched row it computes an integer horizontal offset from
//! the disparity sample and scatter-writes the pixel to the offset
//! destination:
//!
//! - **Left eye**: ascending scan, offset from the Red disparity plane,
//!   destination `x + offset`.
//! - **Right eye**: descending scan, offset from the Green disparity
//!   plane, destination `x - offset`.
//!
//! The scan directions are load-bearing: when several source pixels land
//! on the same destination, the one scanned last wins, which resolves
//! overlap from disparity compression consistently at the edge each eye
//! compresses toward.
//!
//! Offsets truncate toward zero. Negative disparity samples (or a
//! negative product with the multiply parameter) displace in the
//! opposite direction; this is intentional and not clamped. Writes that
//! would land outside the row's span are dropped silently.
//!
//! Destination positions no scatter reaches keep the fetched input
//! value, so unwritten pixels pass through rather than holding garbage.

use crate::source::{RegionRequest, RowSource, SourceFormat};
use crate::{OpsError, OpsResult};
use std::sync::atomic::{AtomicU32, Ordering};
use stereo_core::{Channel, ChannelSet, Error, Eye, Row, Span, ViewId, ViewPair};
use tracing::{debug, trace};

/// Input slot of the main image.
pub const INPUT_IMAGE: usize = 0;
/// Input slot of the disparity map.
pub const INPUT_DISPARITY: usize = 1;

/// Description of one numeric operator parameter, as shown by a host UI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamSpec {
    /// Stable identifier used in change notifications.
    pub name: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Help text.
    pub tooltip: &'static str,
    /// Default value.
    pub default: f32,
    /// Suggested UI minimum.
    pub min: f32,
    /// Suggested UI maximum.
    pub max: f32,
}

/// The multiply parameter: scales raw disparity samples into pixel
/// offsets. Range clamping, if any, is the host UI's responsibility;
/// the operator accepts any received value as-is.
pub const MULTIPLY: ParamSpec = ParamSpec {
    name: "multiply",
    label: "Multiply",
    tooltip: "Increase disparity map by this amount",
    default: 1.0,
    min: 0.0,
    max: 5.0,
};

/// The disparity displacement operator.
///
/// Holds only configuration state: the stereo [`ViewPair`] and the
/// multiply factor. Row evaluations share nothing else, so any number
/// of `(y, view)` requests may run concurrently against one operator.
/// The multiply factor is stored atomically and read exactly once per
/// row evaluation, so a mid-render [`set_multiply`](Self::set_multiply)
/// never tears a single scan.
///
/// # Example
///
/// ```rust
/// use stereo_core::{Channel, ChannelSet, Span, ViewId};
/// use stereo_ops::{BufferSource, DisparityShift};
///
/// let image = BufferSource::constant(8, 1, ChannelSet::rgb(), 0.5);
/// let disparity = BufferSource::constant(
///     8,
///     1,
///     ChannelSet::single(Channel::Red).with(Channel::Green),
///     0.0,
/// );
///
/// let op = DisparityShift::default();
/// let row = op
///     .engine(0, Span::new(0, 8), &ChannelSet::rgb(), ViewId(1), &image, &disparity)
///     .unwrap();
/// assert_eq!(row.sample(Channel::Red, 3), Some(0.5));
/// ```
#[derive(Debug)]
pub struct DisparityShift {
    views: ViewPair,
    multiply_bits: AtomicU32,
}

impl Default for DisparityShift {
    fn default() -> Self {
        Self::new(ViewPair::default())
    }
}

impl DisparityShift {
    /// Operator name, as registered with a host.
    pub const NAME: &'static str = "DisparityShift";

    /// One-line operator help text.
    pub const HELP: &'static str =
        "Mono to stereo - offsets pixels in each eye by pixel values in disparity map";

    /// Creates an operator for the given stereo pair with the default
    /// multiply factor.
    pub fn new(views: ViewPair) -> Self {
        Self {
            views,
            multiply_bits: AtomicU32::new(MULTIPLY.default.to_bits()),
        }
    }

    /// Sets the multiply factor at construction time.
    pub fn with_multiply(self, multiply: f32) -> Self {
        self.set_multiply(multiply);
        self
    }

    /// The configured stereo pair.
    #[inline]
    pub fn views(&self) -> ViewPair {
        self.views
    }

    /// Current multiply factor.
    #[inline]
    pub fn multiply(&self) -> f32 {
        f32::from_bits(self.multiply_bits.load(Ordering::Relaxed))
    }

    /// Updates the multiply factor.
    ///
    /// Takes effect atomically: evaluations already past their initial
    /// read finish with the old value, later ones see the new value.
    #[inline]
    pub fn set_multiply(&self, multiply: f32) {
        self.multiply_bits
            .store(multiply.to_bits(), Ordering::Relaxed);
    }

    /// Parameter-change notification from the host.
    ///
    /// Returns `true` if the parameter was recognized and applied.
    pub fn param_changed(&self, name: &str, value: f32) -> bool {
        if name == MULTIPLY.name {
            debug!(value, "multiply changed");
            self.set_multiply(value);
            true
        } else {
            false
        }
    }

    /// Human-readable label for an input slot.
    pub fn input_label(&self, input: usize) -> Option<&'static str> {
        match input {
            INPUT_IMAGE => Some("Img"),
            INPUT_DISPARITY => Some("Dis"),
            _ => None,
        }
    }

    /// Declares the operator's output format: the image input's format,
    /// copied unchanged.
    pub fn validate(&self, image: &dyn RowSource) -> SourceFormat {
        image.format()
    }

    /// Answers a downstream region request by declaring the identical
    /// span and channel set to both inputs.
    pub fn declare_region(
        &self,
        region: &RegionRequest,
        image: &dyn RowSource,
        disparity: &dyn RowSource,
    ) {
        image.request(region);
        disparity.request(region);
    }

    /// Produces the output row for scanline `y` over `span` at `view`.
    ///
    /// Views outside the configured pair pass the image row through
    /// untouched; the disparity input is not consulted for them.
    ///
    /// # Errors
    ///
    /// Fails if either input cannot supply the requested span, or if the
    /// disparity row lacks its Red or Green plane. The failure is fatal
    /// for this row; nothing is retried.
    pub fn engine(
        &self,
        y: i32,
        span: Span,
        channels: &ChannelSet,
        view: ViewId,
        image: &dyn RowSource,
        disparity: &dyn RowSource,
    ) -> OpsResult<Row> {
        let multiply = self.multiply();
        trace!(y, %span, %channels, %view, multiply, "disparity engine");

        let row = image
            .fetch_row(y, span, channels)
            .map_err(|e| e.with_input(INPUT_IMAGE))?;
        check_span(&row, span)?;
        check_channels(&row, channels, "image")?;

        let Some(eye) = self.views.eye_of(view) else {
            return Ok(row);
        };

        let disp_channels = ChannelSet::single(Channel::Red).with(Channel::Green);
        let disp = disparity
            .fetch_row(y, span, &disp_channels)
            .map_err(|e| e.with_input(INPUT_DISPARITY))?;
        check_span(&disp, span)?;
        let disp_red = disp
            .channel(Channel::Red)
            .ok_or_else(|| Error::missing_channel(Channel::Red, "disparity"))?;
        let disp_green = disp
            .channel(Channel::Green)
            .ok_or_else(|| Error::missing_channel(Channel::Green, "disparity"))?;

        // The fetched row doubles as the output buffer; the snapshot is
        // the immutable pre-displacement copy every read goes through.
        // Positions no scatter reaches keep the input value.
        let snapshot = row.snapshot(channels);
        let mut row = row;

        let width = span.len();
        for channel in channels.iter() {
            let Some(src) = snapshot.channel(channel) else {
                continue;
            };
            let dst = row.writable(channel);

            match eye {
                Eye::Left => {
                    for i in 0..width {
                        let offset = (disp_red[i] * multiply) as isize;
                        let dest = i as isize + offset;
                        if dest >= 0 && (dest as usize) < width {
                            dst[dest as usize] = src[i];
                        }
                    }
                }
                Eye::Right => {
                    for i in (0..width).rev() {
                        let offset = (disp_green[i] * multiply) as isize;
                        let dest = i as isize - offset;
                        if dest >= 0 && (dest as usize) < width {
                            dst[dest as usize] = src[i];
                        }
                    }
                }
            }
        }

        Ok(row)
    }
}

fn check_span(row: &Row, requested: Span) -> OpsResult<()> {
    if row.span() != requested {
        return Err(OpsError::Core(Error::span_mismatch(requested, row.span())));
    }
    Ok(())
}

fn check_channels(row: &Row, channels: &ChannelSet, what: &str) -> OpsResult<()> {
    for channel in channels.iter() {
        if row.channel(channel).is_none() {
            return Err(OpsError::Core(Error::missing_channel(channel, what)));
        }
    }
    Ok(())
}
