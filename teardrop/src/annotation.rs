//! Records that markers are bound to.

/// Geographical position with latitude and longitude.
pub type Position = geo_types::Point;

/// Construct `Position` from latitude and longitude.
pub fn lat_lon(lat: f64, lon: f64) -> Position {
    Position::new(lon, lat)
}

/// Construct `Position` from longitude and latitude. Note that it is common standard to write
/// coordinates starting with the latitude instead.
pub fn lon_lat(lon: f64, lat: f64) -> Position {
    Position::new(lon, lat)
}

/// A point of interest shown on the map.
///
/// Markers only read the title. The position is there for the map widget, which projects it to
/// find the screen point that the pin's tip should touch.
pub trait Annotation {
    /// Geographical position of the point of interest.
    fn position(&self) -> Position;

    /// Text written under the pin. `None` and an empty string both leave the pin without a
    /// caption.
    fn title(&self) -> Option<&str>;
}

/// The simplest [`Annotation`]: a position with an optional title.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(::serde::Serialize, ::serde::Deserialize))]
pub struct PointAnnotation {
    /// Geographical position.
    pub position: Position,

    /// Text written under the pin.
    pub title: Option<String>,
}

impl PointAnnotation {
    pub fn new(position: Position) -> Self {
        Self {
            position,
            title: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Annotation for PointAnnotation {
    fn position(&self) -> Position {
        self.position
    }

    fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }
}
