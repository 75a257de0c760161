//! Network access point entities.

pub mod model;
pub mod status;

pub use model::{AccessPoint, CreateAccessPoint, normalize_mac_address};
pub use status::AccessPointStatus;
