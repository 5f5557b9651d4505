//! Coordinate transforms between scroll offsets and item indices.
//!
//! Offsets live in "item space": because the list is padded by the leading inset,
//! offset `0` rests item `0` on the snap anchor and offset `i * pitch` rests item `i`
//! there. None of these functions depend on the viewport size.

use crate::{ItemSlot, SnapAnchor};

/// Indices below this value survive the `offset_for_index` -> `target_index` round trip
/// for any finite pitch.
///
/// Offsets are `f32`, so past this point the rounding error of `index * pitch` can reach
/// half a pitch and the snap target drifts to a neighbor.
pub const MAX_EXACT_INDEX: usize = 1 << 21;

/// Returns the index whose slot the viewport should settle on for a raw scroll `offset`.
///
/// Computes `ceil((offset - pitch / 2) / pitch)`: the target only advances once the
/// scroll has moved past half a pitch. The result is unclamped and may be negative
/// (or past the end) while overscrolling; NaN maps to `0`.
pub fn target_index(offset: f32, item_pitch: f32) -> isize {
    ceil_to_isize((offset - item_pitch / 2.0) / item_pitch)
}

/// Same as [`target_index`], clamped to `[0, item_count)`.
///
/// Returns `None` for an empty list.
pub fn snap_index(offset: f32, item_pitch: f32, item_count: usize) -> Option<usize> {
    if item_count == 0 {
        return None;
    }
    let raw = target_index(offset, item_pitch);
    if raw <= 0 {
        return Some(0);
    }
    Some((raw as usize).min(item_count - 1))
}

/// Scroll offset that rests item `index` on the snap anchor.
///
/// Exact enough to map back to `index` while `index < MAX_EXACT_INDEX`.
pub fn offset_for_index(index: usize, item_pitch: f32) -> f32 {
    index as f32 * item_pitch
}

/// Whether `offset` is within `tolerance` of `max_offset`.
pub fn is_end_of_list(offset: f32, max_offset: f32, tolerance: f32) -> bool {
    offset >= max_offset - tolerance
}

/// Distance of item `index` from the snap anchor, in pitches.
///
/// `0.0` means the item rests exactly on the anchor; `1.0` means one full item away.
pub fn focus_distance(offset: f32, index: usize, item_pitch: f32) -> f32 {
    let d = (offset - offset_for_index(index, item_pitch)) / item_pitch;
    if d < 0.0 { -d } else { d }
}

fn ceil_to_isize(x: f32) -> isize {
    // `as` truncates toward zero and saturates; NaN becomes 0.
    let t = x as isize;
    if (t as f32) < x { t.saturating_add(1) } else { t }
}

/// Viewport geometry derived from the viewport extent, the item pitch and the anchor.
///
/// Insets are computed on every call, so a `Geometry` built from the latest extent is
/// never stale.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Geometry {
    pub viewport_extent: f32,
    pub item_pitch: f32,
    pub anchor: SnapAnchor,
}

impl Geometry {
    pub fn new(viewport_extent: f32, item_pitch: f32, anchor: SnapAnchor) -> Self {
        Self {
            viewport_extent,
            item_pitch,
            anchor,
        }
    }

    /// Padding before the first item.
    ///
    /// For [`SnapAnchor::Middle`] this is `viewport / 2 - pitch / 2`. Not clamped: a
    /// viewport narrower than one pitch yields a negative inset.
    pub fn leading_inset(&self) -> f32 {
        let v = self.viewport_extent;
        let p = self.item_pitch;
        match self.anchor {
            SnapAnchor::Start => 0.0,
            SnapAnchor::Middle => v / 2.0 - p / 2.0,
            SnapAnchor::End => v - p,
        }
    }

    /// Padding after the last item.
    pub fn trailing_inset(&self) -> f32 {
        let v = self.viewport_extent;
        let p = self.item_pitch;
        match self.anchor {
            SnapAnchor::Start => v - p,
            SnapAnchor::Middle => v / 2.0 - p / 2.0,
            SnapAnchor::End => 0.0,
        }
    }

    pub fn content_extent(&self, item_count: usize) -> f32 {
        self.leading_inset() + item_count as f32 * self.item_pitch + self.trailing_inset()
    }

    pub fn max_scroll_offset(&self, item_count: usize) -> f32 {
        (self.content_extent(item_count) - self.viewport_extent).max(0.0)
    }

    /// Placement of item `index` in visual order.
    ///
    /// For reversed lists index `0` sits at the visual end of the content.
    pub fn item_slot(&self, index: usize, item_count: usize, reversed: bool) -> Option<ItemSlot> {
        if index >= item_count {
            return None;
        }
        let p = self.item_pitch;
        let forward = self.leading_inset() + index as f32 * p;
        let start = if reversed {
            self.content_extent(item_count) - forward - p
        } else {
            forward
        };
        Some(ItemSlot {
            index,
            start,
            size: p,
        })
    }
}
