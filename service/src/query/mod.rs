//! [`Query`] definition.

pub mod check_publish_gate;
pub mod quote_booking;
pub mod validate_listing;

/// [`Query`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Query;

pub use self::{
    check_publish_gate::CheckPublishGate, quote_booking::QuoteBooking,
    validate_listing::ValidateListing,
};
