//! Data transfer objects for the presentation boundary.
//!
//! Plain structured records, serializable via `serde`: landmark frames come
//! in from the pose estimator, classification and round reports go out to
//! whatever renders them. No binary framing; field names match the wire.
mod request;
mod response;

pub use request::*;
pub use response::*;
