use egui::{Color32, FontId, Painter, Vec2, vec2};

/// Measures a single line of caption text.
///
/// Markers need the size of their caption before anything is painted, so that the map widget can
/// place them. [`Painter`] measures with the real fonts; [`FixedAdvance`] is an estimate usable
/// without an egui context.
pub trait TextMetrics {
    /// Size of `text` laid out on one line without wrapping. Empty text is always
    /// [`Vec2::ZERO`].
    fn measure(&self, text: &str, font: &FontId) -> Vec2;
}

impl TextMetrics for Painter {
    fn measure(&self, text: &str, font: &FontId) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        self.layout_no_wrap(text.to_owned(), font.clone(), Color32::PLACEHOLDER)
            .size()
    }
}

/// Every character is `advance` ems wide and the line is `line_height` ems tall.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvance {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for FixedAdvance {
    fn default() -> Self {
        Self {
            advance: 0.6,
            line_height: 1.2,
        }
    }
}

impl TextMetrics for FixedAdvance {
    fn measure(&self, text: &str, font: &FontId) -> Vec2 {
        if text.is_empty() {
            return Vec2::ZERO;
        }

        let chars = text.chars().count() as f32;
        vec2(
            self.advance * font.size * chars,
            self.line_height * font.size,
        )
    }
}
