//! WGS 84 coordinates and routes.

mod coordinate;
mod route;

pub use coordinate::{Coordinate, Latitude, Longitude};
pub use route::GeoRoute;
pub use valida_rules::{LatLon, Segment};
