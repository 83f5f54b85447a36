//! [`PublishGate`] of a [`Draft`].
//!
//! Saving a [`Draft`] and publishing it have different bars.
//! Every blocking [`validation`] check has a counterpart here, while the
//! [`Check::Introduction`] and [`Check::BasePrice`] checks raise the quality
//! bar further.

use common::define_kind;
use derive_more::Display;
use itertools::Itertools as _;
use rust_decimal::Decimal;
use serde::{ser::SerializeStruct as _, Serialize, Serializer};

use super::{
    validation::{self, ErrorKind},
    Draft,
};

/// Minimal length of an introduction in characters required to publish.
pub const MIN_INTRODUCTION_LENGTH: usize = 50;

/// Minimal number of main photos required to publish.
pub const MIN_PHOTOS: usize = 1;

define_kind! {
    #[doc = "Single check of a [`PublishGate`]."]
    enum Check {
        #[doc = "Room name is present and not too long."]
        #[code = "roomName"]
        RoomName,

        #[doc = "Address is present."]
        #[code = "address"]
        Address,

        #[doc = "Accommodation type is chosen."]
        #[code = "accommodationType"]
        AccommodationType,

        #[doc = "At least one usage type is chosen."]
        #[code = "usageTypes"]
        UsageTypes,

        #[doc = "At least one main photo is uploaded."]
        #[code = "photos"]
        Photos,

        #[doc = "At least one room is specified."]
        #[code = "rooms"]
        Rooms,

        #[doc = "At least one guest fits."]
        #[code = "capacity"]
        Capacity,

        #[doc = "Introduction is long enough."]
        #[code = "introduction"]
        Introduction,

        #[doc = "Base price is positive."]
        #[code = "basePrice"]
        BasePrice,
    }
}

impl Check {
    /// Returns the localization key of the message explaining why this
    /// [`Check`] fails.
    ///
    /// Checks shared with the blocking validation may be explained more
    /// precisely by the failed [`ErrorKind`], see
    /// [`CheckStatus::message_key`].
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::RoomName => "validation.roomNameRequired",
            Self::Address => "validation.addressRequired",
            Self::AccommodationType => "validation.accommodationTypeRequired",
            Self::UsageTypes => "validation.usageTypesRequired",
            Self::Photos => "validation.publishGate.photosRequired",
            Self::Rooms => "validation.roomsRequired",
            Self::Capacity => "validation.capacityMin",
            Self::Introduction => "validation.publishGate.introductionRequired",
            Self::BasePrice => "validation.publishGate.basePriceRequired",
        }
    }
}

/// Outcome of a single [`Check`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatus {
    /// Indicator whether the [`Check`] passed.
    pub passed: bool,

    /// Current count or length the [`Check`] is decided by, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current: Option<i64>,

    /// Localization key of the message explaining the failure, if the
    /// [`Check`] failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_key: Option<&'static str>,
}

impl CheckStatus {
    /// Creates a [`CheckStatus`] of a [`Check`] not backed by any count.
    #[must_use]
    pub const fn flag(check: Check, passed: bool) -> Self {
        Self {
            passed,
            current: None,
            message_key: Self::explain(check, passed),
        }
    }

    /// Creates a [`CheckStatus`] of a [`Check`] decided by the provided
    /// `current` count or length.
    #[must_use]
    pub const fn counted(check: Check, passed: bool, current: i64) -> Self {
        Self {
            passed,
            current: Some(current),
            message_key: Self::explain(check, passed),
        }
    }

    /// Creates a [`CheckStatus`] out of the blocking validation result of
    /// the same [`Draft`] field.
    #[must_use]
    pub fn validated(error: Option<ErrorKind>) -> Self {
        Self {
            passed: error.is_none(),
            current: None,
            message_key: error.map(ErrorKind::message_key),
        }
    }

    /// Returns the [`CheckStatus::message_key`] of a [`Check`] with the
    /// provided outcome.
    const fn explain(check: Check, passed: bool) -> Option<&'static str> {
        if passed {
            None
        } else {
            Some(check.message_key())
        }
    }
}

/// Set of [`Check`]s a [`Draft`] must fully pass to become publicly visible.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PublishGate {
    /// [`Check::RoomName`] status.
    pub room_name: CheckStatus,

    /// [`Check::Address`] status.
    pub address: CheckStatus,

    /// [`Check::AccommodationType`] status.
    pub accommodation_type: CheckStatus,

    /// [`Check::UsageTypes`] status.
    pub usage_types: CheckStatus,

    /// [`Check::Photos`] status.
    pub photos: CheckStatus,

    /// [`Check::Rooms`] status.
    pub rooms: CheckStatus,

    /// [`Check::Capacity`] status.
    pub capacity: CheckStatus,

    /// [`Check::Introduction`] status.
    pub introduction: CheckStatus,

    /// [`Check::BasePrice`] status.
    pub base_price: CheckStatus,
}

impl PublishGate {
    /// Evaluates all the [`Check`]s against the provided [`Draft`].
    #[must_use]
    pub fn evaluate(draft: &Draft) -> Self {
        let photo_count = draft.photo_count();
        let introduction_len = draft.introduction_len();
        let capacity = draft.space.capacity;

        Self {
            room_name: CheckStatus::validated(validation::room_name(
                &draft.room_name,
            )),
            address: CheckStatus::validated(validation::address(
                &draft.address,
            )),
            accommodation_type: CheckStatus::validated(
                validation::accommodation_type(draft.accommodation_type),
            ),
            usage_types: CheckStatus::validated(validation::usage_types(
                draft.usage_types.len(),
            )),
            photos: CheckStatus::counted(
                Check::Photos,
                photo_count >= MIN_PHOTOS,
                saturating_i64(photo_count),
            ),
            rooms: CheckStatus::validated(validation::rooms(
                draft.space.rooms.total(),
            )),
            capacity: CheckStatus {
                current: Some(capacity),
                ..CheckStatus::validated(validation::capacity(capacity))
            },
            introduction: CheckStatus::counted(
                Check::Introduction,
                introduction_len >= MIN_INTRODUCTION_LENGTH,
                saturating_i64(introduction_len),
            ),
            base_price: CheckStatus::flag(
                Check::BasePrice,
                draft.pricing.base_price > Decimal::ZERO,
            ),
        }
    }

    /// Returns the [`CheckStatus`] of the provided [`Check`].
    #[must_use]
    pub const fn status(&self, check: Check) -> CheckStatus {
        match check {
            Check::RoomName => self.room_name,
            Check::Address => self.address,
            Check::AccommodationType => self.accommodation_type,
            Check::UsageTypes => self.usage_types,
            Check::Photos => self.photos,
            Check::Rooms => self.rooms,
            Check::Capacity => self.capacity,
            Check::Introduction => self.introduction,
            Check::BasePrice => self.base_price,
        }
    }

    /// Iterates over all the [`Check`]s with their [`CheckStatus`]es.
    pub fn checks(&self) -> impl Iterator<Item = (Check, CheckStatus)> + '_ {
        Check::ALL.iter().map(|&c| (c, self.status(c)))
    }

    /// Iterates over the failed [`Check`]s.
    pub fn failures(&self) -> impl Iterator<Item = Check> + '_ {
        self.checks().filter(|(_, s)| !s.passed).map(|(c, _)| c)
    }

    /// Collects the failed [`Check`]s into [`Failures`].
    #[must_use]
    pub fn to_failures(&self) -> Failures {
        Failures(self.failures().collect())
    }

    /// Indicates whether all the [`Check`]s passed.
    #[must_use]
    pub fn can_publish(&self) -> bool {
        self.checks().all(|(_, s)| s.passed)
    }
}

/// Failed [`Check`]s of a [`PublishGate`], in [`Check`] order.
#[derive(Clone, Debug, Default, Display, Eq, PartialEq, Serialize)]
#[display("{}", _0.iter().join(", "))]
#[serde(transparent)]
pub struct Failures(Vec<Check>);

impl Failures {
    /// Returns the failed [`Check`]s.
    #[must_use]
    pub fn as_slice(&self) -> &[Check] {
        &self.0
    }
}

impl Serialize for PublishGate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state =
            serializer.serialize_struct("PublishGate", Check::ALL.len() + 1)?;
        for (check, status) in self.checks() {
            state.serialize_field(check.code(), &status)?;
        }
        state.serialize_field("canPublish", &self.can_publish())?;
        state.end()
    }
}

impl Draft {
    /// Evaluates the [`PublishGate`] of this [`Draft`].
    #[must_use]
    pub fn publish_gate(&self) -> PublishGate {
        PublishGate::evaluate(self)
    }
}

/// Converts the provided count into an [`i64`], saturating on overflow.
fn saturating_i64(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}
