//! Channel identifiers and channel sets.
//!
//! Image rows carry one `f32` buffer per channel. [`Channel`] names the
//! buffers an operator can consume or produce; [`ChannelSet`] is a small
//! bitmask-backed set with a stable iteration order (ascending channel
//! index), so repeated evaluations of the same request visit channels in
//! the same order.
//!
//! # Usage
//!
//! ```rust
//! use stereo_core::{Channel, ChannelSet};
//!
//! let set = ChannelSet::rgba();
//! assert!(set.contains(Channel::Red));
//! assert_eq!(set.len(), 4);
//!
//! let order: Vec<_> = set.iter().collect();
//! assert_eq!(order[0], Channel::Red);
//! assert_eq!(order[3], Channel::Alpha);
//! ```

/// Identifier for one per-pixel data plane.
///
/// `Red` and `Green` double as the disparity encoding convention: in a
/// disparity map row, the Red plane holds left-eye displacement and the
/// Green plane right-eye displacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Channel {
    /// Red color component (left-eye disparity in a disparity map).
    Red = 0,
    /// Green color component (right-eye disparity in a disparity map).
    Green = 1,
    /// Blue color component.
    Blue = 2,
    /// Alpha / opacity.
    Alpha = 3,
    /// Depth (Z distance).
    Depth = 4,
    /// Matte / mask data.
    Mask = 5,
}

impl Channel {
    /// Number of distinct channels.
    pub const COUNT: usize = 6;

    /// All channels in index order.
    pub const ALL: [Channel; Self::COUNT] = [
        Channel::Red,
        Channel::Green,
        Channel::Blue,
        Channel::Alpha,
        Channel::Depth,
        Channel::Mask,
    ];

    /// Dense index for plane storage and set membership.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Channel for a given dense index, if valid.
    #[inline]
    pub const fn from_index(index: usize) -> Option<Channel> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    /// Short conventional name ("R", "G", "B", "A", "Z", "M").
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
            Channel::Alpha => "A",
            Channel::Depth => "Z",
            Channel::Mask => "M",
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of channels, iterated in ascending channel-index order.
///
/// The iteration order is stable across evaluations; no other ordering
/// guarantee is implied.
///
/// # Example
///
/// ```rust
/// use stereo_core::{Channel, ChannelSet};
///
/// let set = ChannelSet::empty()
///     .with(Channel::Green)
///     .with(Channel::Red);
///
/// // Ascending index order, regardless of insertion order
/// let order: Vec<_> = set.iter().collect();
/// assert_eq!(order, vec![Channel::Red, Channel::Green]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ChannelSet {
    bits: u8,
}

impl ChannelSet {
    /// Creates an empty set.
    #[inline]
    pub const fn empty() -> Self {
        Self { bits: 0 }
    }

    /// Creates a set containing a single channel.
    #[inline]
    pub const fn single(channel: Channel) -> Self {
        Self {
            bits: 1 << channel.index(),
        }
    }

    /// Red, Green, Blue.
    #[inline]
    pub const fn rgb() -> Self {
        Self::empty()
            .with(Channel::Red)
            .with(Channel::Green)
            .with(Channel::Blue)
    }

    /// Red, Green, Blue, Alpha.
    #[inline]
    pub const fn rgba() -> Self {
        Self::rgb().with(Channel::Alpha)
    }

    /// Returns this set with `channel` added.
    #[inline]
    pub const fn with(self, channel: Channel) -> Self {
        Self {
            bits: self.bits | (1 << channel.index()),
        }
    }

    /// Adds a channel in place.
    #[inline]
    pub fn insert(&mut self, channel: Channel) {
        self.bits |= 1 << channel.index();
    }

    /// Returns `true` if the channel is in the set.
    #[inline]
    pub const fn contains(&self, channel: Channel) -> bool {
        self.bits & (1 << channel.index()) != 0
    }

    /// Number of channels in the set.
    #[inline]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Channels present in either set.
    #[inline]
    pub const fn union(&self, other: &ChannelSet) -> ChannelSet {
        ChannelSet {
            bits: self.bits | other.bits,
        }
    }

    /// Channels present in both sets.
    #[inline]
    pub const fn intersection(&self, other: &ChannelSet) -> ChannelSet {
        ChannelSet {
            bits: self.bits & other.bits,
        }
    }

    /// Returns `true` if every channel of `self` is also in `other`.
    #[inline]
    pub const fn is_subset(&self, other: &ChannelSet) -> bool {
        self.bits & other.bits == self.bits
    }

    /// Iterates over the channels in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = Channel> + '_ {
        let bits = self.bits;
        Channel::ALL
            .into_iter()
            .filter(move |c| bits & (1 << c.index()) != 0)
    }
}

impl FromIterator<Channel> for ChannelSet {
    fn from_iter<I: IntoIterator<Item = Channel>>(iter: I) -> Self {
        let mut set = ChannelSet::empty();
        for c in iter {
            set.insert(c);
        }
        set
    }
}

impl std::fmt::Display for ChannelSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for c in self.iter() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(c.name())?;
            first = false;
        }
        Ok(())
    }
}
