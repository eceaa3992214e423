//! Integration tests for the stereo-rs crates.
//!
//! This crate contains end-to-end tests that verify the interaction
//! between stereo-core and stereo-ops: full-frame stereo renders driven
//! through the injected source interface.

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use stereo_core::{Channel, ChannelSet, Span, ViewId, ViewPair};
    use stereo_ops::{
        collect_plane, render_stereo, render_view, BufferSource, DisparityShift, RowSource,
    };

    fn gradient_frame(width: u32, height: u32, channels: ChannelSet) -> BufferSource {
        let len = (width * height) as usize;
        channels.iter().enumerate().fold(
            BufferSource::new(width, height),
            |source, (n, channel)| {
                let data: Vec<f32> = (0..len).map(|i| (i + n * len) as f32).collect();
                source.with_plane(channel, data).unwrap()
            },
        )
    }

    fn disparity_frame(width: u32, height: u32, red: f32, green: f32) -> BufferSource {
        let len = (width * height) as usize;
        BufferSource::new(width, height)
            .with_plane(Channel::Red, vec![red; len])
            .unwrap()
            .with_plane(Channel::Green, vec![green; len])
            .unwrap()
    }

    /// Full pipeline: zero disparity must reproduce the input exactly
    /// in both eyes, every channel.
    #[test]
    fn test_zero_disparity_full_frame_identity() {
        let img = gradient_frame(32, 8, ChannelSet::rgb());
        let disp = disparity_frame(32, 8, 0.0, 0.0);
        let op = DisparityShift::default();

        let (left, right) = render_stereo(&op, &img, &disp, &ChannelSet::rgb()).unwrap();
        for channel in ChannelSet::rgb().iter() {
            let span = Span::from_width(32);
            let expected: Vec<f32> = (0..8)
                .flat_map(|y| {
                    img.fetch_row(y, span, &ChannelSet::single(channel))
                        .unwrap()
                        .channel(channel)
                        .unwrap()
                        .to_vec()
                })
                .collect();
            assert_eq!(collect_plane(&left, channel), expected);
            assert_eq!(collect_plane(&right, channel), expected);
        }
    }

    /// Uniform positive disparity pushes the left eye rightward and the
    /// right eye leftward by the same magnitude.
    #[test]
    fn test_uniform_disparity_opposite_shifts() {
        let width = 16u32;
        let img = gradient_frame(width, 2, ChannelSet::single(Channel::Red));
        let disp = disparity_frame(width, 2, 3.0, 3.0);
        let op = DisparityShift::default();

        let (left, right) =
            render_stereo(&op, &img, &disp, &ChannelSet::single(Channel::Red)).unwrap();
        let left_plane = collect_plane(&left, Channel::Red);
        let right_plane = collect_plane(&right, Channel::Red);

        // Interior pixels away from both edges and the pass-through
        // margins: left[x] == src[x - 3], right[x] == src[x + 3].
        for y in 0..2usize {
            for x in 3..(width as usize) {
                let src = (y * width as usize + x - 3) as f32;
                assert_abs_diff_eq!(left_plane[y * width as usize + x], src);
            }
            for x in 0..(width as usize - 3) {
                let src = (y * width as usize + x + 3) as f32;
                assert_abs_diff_eq!(right_plane[y * width as usize + x], src);
            }
        }
    }

    /// The multiply parameter scales displacement; a frame rendered at
    /// multiply 2 with unit disparity matches one rendered at multiply 1
    /// with doubled disparity.
    #[test]
    fn test_multiply_equivalent_to_scaled_disparity() {
        let img = gradient_frame(24, 4, ChannelSet::single(Channel::Red));
        let unit = disparity_frame(24, 4, 1.0, 1.0);
        let doubled = disparity_frame(24, 4, 2.0, 2.0);
        let channels = ChannelSet::single(Channel::Red);

        let scaled_op = DisparityShift::default().with_multiply(2.0);
        let plain_op = DisparityShift::default();

        let (l1, r1) = render_stereo(&scaled_op, &img, &unit, &channels).unwrap();
        let (l2, r2) = render_stereo(&plain_op, &img, &doubled, &channels).unwrap();
        assert_eq!(
            collect_plane(&l1, Channel::Red),
            collect_plane(&l2, Channel::Red)
        );
        assert_eq!(
            collect_plane(&r1, Channel::Red),
            collect_plane(&r2, Channel::Red)
        );
    }

    /// A view outside the configured pair renders as pass-through even
    /// when the disparity map is non-zero everywhere.
    #[test]
    fn test_unpaired_view_renders_input() {
        let img = gradient_frame(8, 3, ChannelSet::single(Channel::Red));
        let disp = disparity_frame(8, 3, 4.0, 4.0);
        let op = DisparityShift::default();

        let rows = render_view(
            &op,
            &img,
            &disp,
            ViewId(7),
            &ChannelSet::single(Channel::Red),
        )
        .unwrap();
        let expected: Vec<f32> = (0..24).map(|i| i as f32).collect();
        assert_eq!(collect_plane(&rows, Channel::Red), expected);
    }

    /// A custom view pair routes eyes by id, not by the default 1/2.
    #[test]
    fn test_custom_view_pair() {
        let img = gradient_frame(8, 1, ChannelSet::single(Channel::Red));
        let disp = disparity_frame(8, 1, 2.0, 2.0);
        let channels = ChannelSet::single(Channel::Red);

        let custom = DisparityShift::new(ViewPair::new(ViewId(10), ViewId(20)));
        let default = DisparityShift::default();

        let custom_left = render_view(&custom, &img, &disp, ViewId(10), &channels).unwrap();
        let default_left = render_view(&default, &img, &disp, ViewId(1), &channels).unwrap();
        assert_eq!(
            collect_plane(&custom_left, Channel::Red),
            collect_plane(&default_left, Channel::Red)
        );

        // Id 1 is nothing special to the custom pair.
        let passthrough = render_view(&custom, &img, &disp, ViewId(1), &channels).unwrap();
        let expected: Vec<f32> = (0..8).map(|i| i as f32).collect();
        assert_eq!(collect_plane(&passthrough, Channel::Red), expected);
    }

    /// Parameter changes between renders take effect on the next frame.
    #[test]
    fn test_param_change_between_renders() {
        let img = gradient_frame(12, 1, ChannelSet::single(Channel::Red));
        let disp = disparity_frame(12, 1, 1.0, 1.0);
        let channels = ChannelSet::single(Channel::Red);
        let op = DisparityShift::default();

        let before = render_view(&op, &img, &disp, ViewId(1), &channels).unwrap();
        assert!(op.param_changed("multiply", 0.0));
        let after = render_view(&op, &img, &disp, ViewId(1), &channels).unwrap();

        assert_ne!(
            collect_plane(&before, Channel::Red),
            collect_plane(&after, Channel::Red)
        );
        // Multiply 0 is the identity.
        let expected: Vec<f32> = (0..12).map(|i| i as f32).collect();
        assert_eq!(collect_plane(&after, Channel::Red), expected);
    }

    /// Disparity planes of different widths than the image are rejected,
    /// not silently cropped.
    #[test]
    fn test_mismatched_disparity_frame_fails() {
        let img = gradient_frame(16, 2, ChannelSet::single(Channel::Red));
        let disp = disparity_frame(8, 2, 1.0, 1.0);
        let op = DisparityShift::default();

        let result = render_view(
            &op,
            &img,
            &disp,
            ViewId(1),
            &ChannelSet::single(Channel::Red),
        );
        assert!(result.is_err());
    }
}
