use egui::{Pos2, Rect, pos2};
use teardrop::Position;

/// Stretches a set of positions over a screen rectangle, longitude to the right and latitude
/// upwards. Good enough for a handful of points within one city.
pub struct Canvas {
    west: f64,
    north: f64,
    width: f64,
    height: f64,
    rect: Rect,
}

impl Canvas {
    pub fn new(positions: impl IntoIterator<Item = Position>, rect: Rect) -> Self {
        let (mut west, mut east) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut south, mut north) = (f64::INFINITY, f64::NEG_INFINITY);

        for position in positions {
            west = west.min(position.x());
            east = east.max(position.x());
            south = south.min(position.y());
            north = north.max(position.y());
        }

        if west > east {
            // No positions at all.
            (west, east, south, north) = (0., 0., 0., 0.);
        }

        Self {
            west,
            north,
            width: (east - west).max(f64::EPSILON),
            height: (north - south).max(f64::EPSILON),
            rect,
        }
    }

    pub fn project(&self, position: Position) -> Pos2 {
        let x = (position.x() - self.west) / self.width;
        let y = (self.north - position.y()) / self.height;
        pos2(
            self.rect.left() + x as f32 * self.rect.width(),
            self.rect.top() + y as f32 * self.rect.height(),
        )
    }
}
