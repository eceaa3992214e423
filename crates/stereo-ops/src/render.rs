//! Whole-frame rendering helpers.
//!
//! [`DisparityShift::engine`] produces one scanline; these helpers drive
//! it over a full frame. With the default `parallel` feature the rows of
//! a frame are evaluated on the rayon thread pool; rows are independent,
//! so the parallel and sequential paths produce identical output.

use crate::disparity::DisparityShift;
use crate::source::{RegionRequest, RowSource};
use crate::{OpsError, OpsResult};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use stereo_core::{ChannelSet, Eye, Row, Span, ViewId};
use tracing::debug;

/// Renders every row of one view.
///
/// Validates against the image input, declares the full frame to both
/// inputs, then evaluates each scanline. Rows come back in top-to-bottom
/// order, `y = 0` first.
///
/// # Errors
///
/// Returns [`OpsError::InvalidDimensions`] for an empty frame, or the
/// first row evaluation failure.
pub fn render_view(
    op: &DisparityShift,
    image: &dyn RowSource,
    disparity: &dyn RowSource,
    view: ViewId,
    channels: &ChannelSet,
) -> OpsResult<Vec<Row>> {
    let format = op.validate(image);
    if format.width == 0 || format.height == 0 {
        return Err(OpsError::InvalidDimensions(format!(
            "cannot render {}x{} frame",
            format.width, format.height
        )));
    }

    let span = Span::from_width(format.width);
    let rows = Span::from_width(format.height);
    op.declare_region(
        &RegionRequest {
            span,
            rows,
            channels: *channels,
            count: 1,
        },
        image,
        disparity,
    );
    debug!(%view, width = format.width, height = format.height, "render view");

    render_rows(op, image, disparity, view, channels, span, format.height)
}

/// Renders both eyes of the operator's configured pair.
///
/// Returns `(left, right)` frames as row vectors.
///
/// # Errors
///
/// Fails as [`render_view`] does, on whichever eye fails first.
pub fn render_stereo(
    op: &DisparityShift,
    image: &dyn RowSource,
    disparity: &dyn RowSource,
    channels: &ChannelSet,
) -> OpsResult<(Vec<Row>, Vec<Row>)> {
    let views = op.views();
    let left = render_view(op, image, disparity, views.left, channels)?;
    let right = render_view(op, image, disparity, views.right, channels)?;
    Ok((left, right))
}

#[cfg(feature = "parallel")]
fn render_rows(
    op: &DisparityShift,
    image: &dyn RowSource,
    disparity: &dyn RowSource,
    view: ViewId,
    channels: &ChannelSet,
    span: Span,
    height: u32,
) -> OpsResult<Vec<Row>> {
    (0..height as i32)
        .into_par_iter()
        .map(|y| op.engine(y, span, channels, view, image, disparity))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn render_rows(
    op: &DisparityShift,
    image: &dyn RowSource,
    disparity: &dyn RowSource,
    view: ViewId,
    channels: &ChannelSet,
    span: Span,
    height: u32,
) -> OpsResult<Vec<Row>> {
    (0..height as i32)
        .map(|y| op.engine(y, span, channels, view, image, disparity))
        .collect()
}

/// Flattens rendered rows back into one full-frame plane.
///
/// Convenience for comparing render output against flat buffers. Rows
/// missing the channel contribute zeros.
pub fn collect_plane(rows: &[Row], channel: stereo_core::Channel) -> Vec<f32> {
    let mut out = Vec::new();
    for row in rows {
        match row.channel(channel) {
            Some(plane) => out.extend_from_slice(plane),
            None => out.extend(std::iter::repeat_n(0.0, row.span().len())),
        }
    }
    out
}

/// Selects the eye a rendered view corresponds to, if any.
///
/// Thin forwarding to the operator's view pair, useful for callers that
/// render by [`ViewId`] but label output by eye.
#[inline]
pub fn eye_for(op: &DisparityShift, view: ViewId) -> Option<Eye> {
    op.views().eye_of(view)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BufferSource;
    use stereo_core::Channel;

    fn gradient_image(width: u32, height: u32) -> BufferSource {
        let data: Vec<f32> = (0..width * height).map(|i| i as f32).collect();
        BufferSource::new(width, height)
            .with_plane(Channel::Red, data)
            .unwrap()
    }

    fn uniform_disparity(width: u32, height: u32, red: f32, green: f32) -> BufferSource {
        let len = (width * height) as usize;
        BufferSource::new(width, height)
            .with_plane(Channel::Red, vec![red; len])
            .unwrap()
            .with_plane(Channel::Green, vec![green; len])
            .unwrap()
    }

    #[test]
    fn test_render_view_row_order() {
        let img = gradient_image(4, 3);
        let disp = uniform_disparity(4, 3, 0.0, 0.0);
        let op = DisparityShift::default();

        let rows = render_view(&op, &img, &disp, ViewId(1), &ChannelSet::single(Channel::Red))
            .unwrap();
        assert_eq!(rows.len(), 3);
        // Zero disparity: each row equals its input scanline.
        assert_eq!(collect_plane(&rows, Channel::Red), gradient_plane(4, 3));
    }

    fn gradient_plane(width: u32, height: u32) -> Vec<f32> {
        (0..width * height).map(|i| i as f32).collect()
    }

    #[test]
    fn test_render_stereo_eyes_diverge() {
        let img = gradient_image(6, 2);
        let disp = uniform_disparity(6, 2, 1.0, 2.0);
        let op = DisparityShift::default();

        let (left, right) =
            render_stereo(&op, &img, &disp, &ChannelSet::single(Channel::Red)).unwrap();
        assert_eq!(left.len(), 2);
        assert_eq!(right.len(), 2);
        assert_ne!(
            collect_plane(&left, Channel::Red),
            collect_plane(&right, Channel::Red)
        );
    }

    #[test]
    fn test_render_empty_frame_rejected() {
        let img = BufferSource::new(0, 0);
        let disp = BufferSource::new(0, 0);
        let op = DisparityShift::default();

        let err = render_view(&op, &img, &disp, ViewId(1), &ChannelSet::single(Channel::Red))
            .unwrap_err();
        assert!(matches!(err, OpsError::InvalidDimensions(_)));
    }

    #[test]
    fn test_render_propagates_row_failure() {
        let img = gradient_image(4, 2);
        // Disparity frame is one row short of the image.
        let disp = uniform_disparity(4, 1, 0.0, 0.0);
        let op = DisparityShift::default();

        let err = render_view(&op, &img, &disp, ViewId(1), &ChannelSet::single(Channel::Red))
            .unwrap_err();
        assert!(matches!(
            err,
            OpsError::Core(stereo_core::Error::UpstreamUnavailable { .. })
        ));
    }

    #[test]
    fn test_eye_for_forwards_pair() {
        let op = DisparityShift::default();
        assert_eq!(eye_for(&op, ViewId(1)), Some(Eye::Left));
        assert_eq!(eye_for(&op, ViewId(2)), Some(Eye::Right));
        assert_eq!(eye_for(&op, ViewId(3)), None);
    }
}
