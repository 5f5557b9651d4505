#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

impl Axis {
    /// Picks the along-axis component of a `width` x `height` size.
    pub fn main(self, width: f32, height: f32) -> f32 {
        match self {
            Self::Horizontal => width,
            Self::Vertical => height,
        }
    }
}

/// Where the focused item rests inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapAnchor {
    /// The focused item's leading edge is aligned with the viewport's leading edge.
    Start,
    /// The focused item is centered in the viewport.
    #[default]
    Middle,
    /// The focused item's trailing edge is aligned with the viewport's trailing edge.
    End,
}

/// A scroll sample reported by the host when a gesture ends.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollMetrics {
    /// Live scroll position. May be negative or exceed `max_offset` while overscrolling.
    pub offset: f32,
    /// Maximum reachable scroll position for the current content extent.
    pub max_offset: f32,
}

impl ScrollMetrics {
    pub fn new(offset: f32, max_offset: f32) -> Self {
        Self { offset, max_offset }
    }
}

/// Placement of one item along the scroll axis, in content coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub index: usize,
    /// Start of the item in visual order (already flipped for reversed lists).
    pub start: f32,
    /// Along-axis footprint of the item (the item pitch).
    pub size: f32,
}

impl ItemSlot {
    pub fn end(&self) -> f32 {
        self.start + self.size
    }

    pub fn center(&self) -> f32 {
        self.start + self.size / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollKind {
    Animate,
    Jump,
}

/// A deferred scroll request, issued on the scroll surface at the next `tick`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollCommand {
    /// Target scroll offset.
    pub offset: f32,
    pub kind: ScrollKind,
}
