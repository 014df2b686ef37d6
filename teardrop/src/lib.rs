#![doc = include_str!("../README.md")]
#![deny(clippy::unwrap_used, rustdoc::broken_intra_doc_links)]

mod annotation;
mod layout;
mod metrics;
mod pin;
mod style;
mod view;

pub use annotation::{Annotation, PointAnnotation, Position, lat_lon, lon_lat};
pub use layout::MarkerLayout;
pub use metrics::{FixedAdvance, TextMetrics};
pub use style::{InvalidStyle, MarkerStyle};
pub use view::{AnnotationMarkerView, MarkerView};
