//! Domain definitions.

pub mod booking;
pub mod listing;

pub use self::listing::Listing;
