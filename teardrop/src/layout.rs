use egui::{Pos2, Rect, Vec2, pos2, vec2};

use crate::MarkerStyle;

/// Where the parts of a marker go within its bounds.
///
/// The pin is top-aligned and horizontally centered. Its tip is the marker's anchor, i.e. the
/// point that should touch the annotated location. The caption hangs below the tip, centered on
/// it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarkerLayout {
    pub pin: Rect,
    pub tip: Pos2,
    /// Caption background. Collapsed to a zero-sized rect at the tip when there is no caption.
    pub label: Rect,
}

impl MarkerLayout {
    /// Lay out a marker whose caption text measures `label_size`.
    pub fn new(bounds: Rect, label_size: Vec2, style: &MarkerStyle) -> Self {
        let pin = Rect::from_min_size(
            pos2(bounds.center().x - style.pin_size.x / 2., bounds.top()),
            style.pin_size,
        );
        let tip = pin.center_bottom();

        let label = match label_extent(label_size, style) {
            Some(extent) => Rect::from_min_size(
                pos2(tip.x - extent.x / 2., tip.y + style.label_gap),
                extent,
            ),
            None => Rect::from_min_size(tip, Vec2::ZERO),
        };

        Self { pin, tip, label }
    }

    /// Smallest size that fits the pin and a caption measuring `label_size`, stacked
    /// vertically.
    pub fn preferred_size(label_size: Vec2, style: &MarkerStyle) -> Vec2 {
        match label_extent(label_size, style) {
            Some(extent) => vec2(
                style.pin_size.x.max(extent.x),
                style.pin_size.y + style.label_gap + extent.y + style.padding,
            ),
            None => vec2(style.pin_size.x, style.pin_size.y + style.padding),
        }
    }

    /// Offset from the top-left corner of the preferred bounds to the tip of the pin.
    pub fn anchor_offset(label_size: Vec2, style: &MarkerStyle) -> Vec2 {
        let size = Self::preferred_size(label_size, style);
        vec2(size.x / 2., style.pin_size.y)
    }

    /// Whether `point` hits the pin or the caption.
    pub fn contains(&self, point: Pos2) -> bool {
        self.pin.contains(point) || (self.label.is_positive() && self.label.contains(point))
    }

    /// Rectangle covering the pin and the caption.
    pub fn bounding_rect(&self) -> Rect {
        if self.label.is_positive() {
            self.pin.union(self.label)
        } else {
            self.pin
        }
    }
}

/// Size of the caption background, or `None` if there is nothing to write.
fn label_extent(label_size: Vec2, style: &MarkerStyle) -> Option<Vec2> {
    (label_size != Vec2::ZERO).then(|| label_size + Vec2::splat(2. * style.label_padding))
}
