//! [`Command`] definition.

pub mod publish_listing;
pub mod save_listing_draft;
pub mod unpublish_listing;

/// [`Command`] of the [`Service`].
///
/// [`Service`]: crate::Service
pub use common::Handler as Command;

pub use self::{
    publish_listing::PublishListing, save_listing_draft::SaveListingDraft,
    unpublish_listing::UnpublishListing,
};
