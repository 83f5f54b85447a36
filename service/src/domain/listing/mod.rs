//! [`Listing`] definitions.

pub mod draft;
pub mod publish_gate;
pub mod validation;

#[cfg(doc)]
use common::DateTime;
use common::{define_kind, unit, DateTimeOf};
use derive_more::{Display, From, FromStr, Into};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub use self::{
    draft::Draft,
    publish_gate::{Check, CheckStatus, Failures, PublishGate},
    validation::Errors,
};

/// Accommodation listed on the marketplace by a host.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    /// ID of this [`Listing`].
    pub id: Id,

    /// [`Status`] of this [`Listing`].
    pub status: Status,

    /// Latest saved [`Draft`] of this [`Listing`].
    pub draft: Draft,

    /// [`DateTime`] when this [`Listing`] was created.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub created_at: CreationDateTime,

    /// [`DateTime`] when this [`Listing`] was last saved.
    #[serde(with = "common::datetime::serde::rfc3339")]
    pub updated_at: UpdateDateTime,

    /// [`DateTime`] when this [`Listing`] was last published, if it was.
    #[serde(default, with = "common::datetime::serde::rfc3339::option")]
    pub published_at: Option<PublicationDateTime>,
}

impl Listing {
    /// Creates a new [`Status::Draft`] [`Listing`] out of the provided
    /// [`Draft`].
    #[must_use]
    pub fn new(draft: Draft) -> Self {
        let now = DateTimeOf::<()>::now();
        Self {
            id: Id::new(),
            status: Status::Draft,
            draft,
            created_at: now.coerce(),
            updated_at: now.coerce(),
            published_at: None,
        }
    }

    /// Indicates whether this [`Listing`] is publicly visible.
    #[must_use]
    pub fn is_public(&self) -> bool {
        self.status == Status::Active
    }
}

/// ID of a [`Listing`].
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    Eq,
    From,
    FromStr,
    Hash,
    Into,
    PartialEq,
    Serialize,
)]
pub struct Id(Uuid);

impl Id {
    /// Creates a new random [`Id`].
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

define_kind! {
    #[doc = "Visibility status of a [`Listing`]."]
    enum Status {
        #[doc = "Saved, but not visible to guests."]
        #[code = "DRAFT"]
        Draft,

        #[doc = "Published and visible to guests."]
        #[code = "ACTIVE"]
        Active,

        #[doc = "Hidden by the host after being published."]
        #[code = "INACTIVE"]
        Inactive,
    }
}

/// [`DateTime`] of a [`Listing`] creation.
pub type CreationDateTime = DateTimeOf<(Listing, unit::Creation)>;

/// [`DateTime`] of a [`Listing`] update.
pub type UpdateDateTime = DateTimeOf<(Listing, unit::Update)>;

/// [`DateTime`] of a [`Listing`] publication.
pub type PublicationDateTime = DateTimeOf<(Listing, unit::Publication)>;
