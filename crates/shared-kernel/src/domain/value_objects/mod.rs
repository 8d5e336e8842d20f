// crates/shared-kernel/src/domain/value_objects/mod.rs

mod geo_point;
mod latitude;
mod longitude;
mod value_object;


pub use geo_point::{distance_km, GeoPoint, EARTH_RADIUS_KM};
pub use latitude::Latitude;
pub use longitude::Longitude;
pub use value_object::ValueObject;
