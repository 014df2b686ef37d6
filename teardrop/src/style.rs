use egui::{Color32, FontId, Stroke, Vec2, vec2};

/// Reason why a [`MarkerStyle`] was rejected.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum InvalidStyle {
    #[error("pin size must be finite and positive")]
    PinSize,
    #[error("pin must be at least as tall as it is wide")]
    PinTooFlat,
    #[error("pin stroke must be finite, non-negative and narrower than the pin")]
    PinStroke,
    #[error("label font size must be finite and positive")]
    FontSize,
    #[error("{0} must be finite and non-negative")]
    Spacing(&'static str),
}

/// Visual style of a marker. It is fixed for the lifetime of a view; only the caption text follows
/// the bound annotation.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct MarkerStyle {
    /// Width and height of the pin. The head is a circle as wide as the pin, the tip is at the
    /// bottom.
    pub pin_size: Vec2,
    /// Fill of the teardrop.
    pub pin_fill: Color32,
    /// Outline of the teardrop. It is drawn inside `pin_size`.
    pub pin_stroke: Stroke,
    /// Color of the hole punched in the pin's head.
    pub pin_dot: Color32,
    /// Font of the caption.
    pub label_font: FontId,
    /// Color of the caption text.
    pub label_color: Color32,
    /// Background drawn behind the caption text.
    pub label_background: Color32,
    /// Rounding of the caption background.
    pub label_corner_radius: f32,
    /// Space between the caption text and the edge of its background.
    pub label_padding: f32,
    /// Space between the pin's tip and the caption background.
    pub label_gap: f32,
    /// Space left below everything else.
    pub padding: f32,
}

impl Default for MarkerStyle {
    fn default() -> Self {
        Self {
            pin_size: vec2(20., 30.),
            pin_fill: Color32::from_rgb(0xd9, 0x3a, 0x2b),
            pin_stroke: Stroke::new(1., Color32::BLACK.gamma_multiply(0.6)),
            pin_dot: Color32::WHITE.gamma_multiply(0.9),
            label_font: FontId::proportional(12.),
            label_color: Color32::from_gray(230),
            label_background: Color32::BLACK.gamma_multiply(0.8),
            label_corner_radius: 4.,
            label_padding: 3.,
            label_gap: 2.,
            padding: 2.,
        }
    }
}

impl MarkerStyle {
    /// Check that the style describes something drawable.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), InvalidStyle> {
        let Vec2 { x: width, y: height } = self.pin_size;
        if !(width.is_finite() && height.is_finite() && width > 0. && height > 0.) {
            return Err(InvalidStyle::PinSize);
        }

        // Otherwise the head would stick out below the tip.
        if height < width {
            return Err(InvalidStyle::PinTooFlat);
        }

        let stroke = self.pin_stroke.width;
        if !(stroke.is_finite() && stroke >= 0. && stroke < width) {
            return Err(InvalidStyle::PinStroke);
        }

        if !(self.label_font.size.is_finite() && self.label_font.size > 0.) {
            return Err(InvalidStyle::FontSize);
        }

        for (name, value) in [
            ("label_corner_radius", self.label_corner_radius),
            ("label_padding", self.label_padding),
            ("label_gap", self.label_gap),
            ("padding", self.padding),
        ] {
            if !(value.is_finite() && value >= 0.) {
                return Err(InvalidStyle::Spacing(name));
            }
        }

        Ok(())
    }
}
