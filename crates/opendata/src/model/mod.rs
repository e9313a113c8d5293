//! Response schemas of the transport.opendata.ch API.
//!
//! Only the fields this service reads are declared, everything else in the
//! upstream payload is ignored. Required fields are not optional here so that a
//! payload missing them fails to decode instead of producing half-filled models.

pub mod connection;
pub mod location;

pub use connection::{CheckpointSchema, ConnectionSchema, ConnectionsResponse, SectionSchema};
pub use location::{CoordinateSchema, LocationsResponse, StationSchema};
