//! The teardrop glyph.

use std::f32::consts::{FRAC_PI_2, TAU};

use egui::{Painter, Pos2, Rect, Shape, pos2, vec2};

use crate::MarkerStyle;

/// Number of segments used to approximate the head's arc.
const ARC_SEGMENTS: usize = 24;

/// Outline of a teardrop filling `rect`: a circle as wide as the rect at the top, joined by two
/// tangents to a tip at the bottom-center. Points are clockwise on screen, starting at the tip.
pub(crate) fn outline(rect: Rect) -> Vec<Pos2> {
    let radius = rect.width() / 2.;
    let center = pos2(rect.center().x, rect.top() + radius);
    let tip = rect.center_bottom();

    // Angle between the axis and the tangent points, as seen from the center of the head.
    let distance = tip.y - center.y;
    let spread = (radius / distance).clamp(-1., 1.).acos();

    // Screen Y grows downwards, so increasing angle goes clockwise and FRAC_PI_2 points at the tip.
    let start = FRAC_PI_2 + spread;
    let sweep = TAU - 2. * spread;

    let mut points = Vec::with_capacity(ARC_SEGMENTS + 2);
    points.push(tip);
    points.extend((0..=ARC_SEGMENTS).map(|i| {
        let angle = start + sweep * i as f32 / ARC_SEGMENTS as f32;
        center + radius * vec2(angle.cos(), angle.sin())
    }));
    points
}

/// The stroked teardrop. The outline is inset by half the stroke width, so the stroke does not
/// spill out of `rect`.
pub(crate) fn shape(rect: Rect, style: &MarkerStyle) -> Shape {
    Shape::convex_polygon(
        outline(rect.shrink(style.pin_stroke.width / 2.)),
        style.pin_fill,
        style.pin_stroke,
    )
}

/// Paint the pin into `rect`.
pub(crate) fn paint(painter: &Painter, rect: Rect, style: &MarkerStyle) {
    painter.add(shape(rect, style));

    let radius = rect.width() / 2.;
    painter.circle_filled(
        pos2(rect.center().x, rect.top() + radius),
        radius * 0.4,
        style.pin_dot,
    );
}
