//! Blocking validation of a [`Draft`].
//!
//! A [`Draft`] without any [`Errors`] may be saved. Publishing requires
//! passing the stricter [`PublishGate`] on top of that.
//!
//! [`PublishGate`]: super::PublishGate

use std::collections::BTreeMap;

use common::define_kind;
use derive_more::Display;
use itertools::Itertools as _;
use rust_decimal::Decimal;
use serde::Serialize;

use super::{draft::AccommodationType, Draft};

/// Maximal length of a [`Draft::room_name`] in characters.
pub const ROOM_NAME_MAX_LENGTH: usize = 100;

/// Minimal [`Space::capacity`] of a [`Draft`].
///
/// [`Space::capacity`]: super::draft::Space::capacity
pub const MIN_CAPACITY: i64 = 1;

define_kind! {
    #[doc = "[`Draft`] field being validated."]
    enum Field {
        #[doc = "[`Draft::room_name`]."]
        #[code = "roomName"]
        RoomName,

        #[doc = "[`Draft::address`]."]
        #[code = "address"]
        Address,

        #[doc = "[`Draft::accommodation_type`]."]
        #[code = "accommodationType"]
        AccommodationType,

        #[doc = "[`Draft::usage_types`]."]
        #[code = "usageTypes"]
        UsageTypes,

        #[doc = "[`Draft::main_photos`]."]
        #[code = "mainPhotos"]
        MainPhotos,

        #[doc = "Rooms of the [`Draft::space`]."]
        #[code = "rooms"]
        Rooms,

        #[doc = "Base price of the [`Draft::pricing`]."]
        #[code = "basePrice"]
        BasePrice,

        #[doc = "Capacity of the [`Draft::space`]."]
        #[code = "capacity"]
        Capacity,
    }
}

define_kind! {
    #[doc = "Kind of a [`Draft`] validation error."]
    enum ErrorKind {
        #[doc = "Room name is empty."]
        #[code = "ROOM_NAME_REQUIRED"]
        RoomNameRequired,

        #[doc = "Room name is too long."]
        #[code = "ROOM_NAME_MAX_LENGTH"]
        RoomNameMaxLength,

        #[doc = "Address is empty."]
        #[code = "ADDRESS_REQUIRED"]
        AddressRequired,

        #[doc = "Accommodation type is not chosen."]
        #[code = "ACCOMMODATION_TYPE_REQUIRED"]
        AccommodationTypeRequired,

        #[doc = "No usage type is chosen."]
        #[code = "USAGE_TYPES_REQUIRED"]
        UsageTypesRequired,

        #[doc = "No main photo is uploaded."]
        #[code = "MAIN_PHOTOS_REQUIRED"]
        MainPhotosRequired,

        #[doc = "No room is specified."]
        #[code = "ROOMS_REQUIRED"]
        RoomsRequired,

        #[doc = "Base price is negative."]
        #[code = "BASE_PRICE_MIN"]
        BasePriceMin,

        #[doc = "Capacity is less than one guest."]
        #[code = "CAPACITY_MIN"]
        CapacityMin,
    }
}

impl ErrorKind {
    /// Returns the localization key of the message describing this
    /// [`ErrorKind`].
    #[must_use]
    pub const fn message_key(self) -> &'static str {
        match self {
            Self::RoomNameRequired => "validation.roomNameRequired",
            Self::RoomNameMaxLength => "validation.roomNameMaxLength",
            Self::AddressRequired => "validation.addressRequired",
            Self::AccommodationTypeRequired => {
                "validation.accommodationTypeRequired"
            }
            Self::UsageTypesRequired => "validation.usageTypesRequired",
            Self::MainPhotosRequired => "validation.mainPhotosRequired",
            Self::RoomsRequired => "validation.roomsRequired",
            Self::BasePriceMin => "validation.basePriceMin",
            Self::CapacityMin => "validation.capacityMin",
        }
    }
}

/// Blocking validation errors of a [`Draft`], at most one per [`Field`].
#[derive(Clone, Debug, Default, Display, Eq, PartialEq, Serialize)]
#[display("{}", _0.iter().map(|(f, e)| format!("{f}: {e}")).join(", "))]
#[serde(transparent)]
pub struct Errors(BTreeMap<Field, ErrorKind>);

impl Errors {
    /// Validates the provided [`Draft`].
    ///
    /// Every [`Field`] is checked independently against the same snapshot,
    /// so the result doesn't depend on the order of the checks.
    #[must_use]
    pub fn of(draft: &Draft) -> Self {
        let checks = [
            (Field::RoomName, room_name(&draft.room_name)),
            (Field::Address, address(&draft.address)),
            (
                Field::AccommodationType,
                accommodation_type(draft.accommodation_type),
            ),
            (Field::UsageTypes, usage_types(draft.usage_types.len())),
            (Field::MainPhotos, main_photos(draft.photo_count())),
            (Field::Rooms, rooms(draft.space.rooms.total())),
            (Field::BasePrice, base_price(draft.pricing.base_price)),
            (Field::Capacity, capacity(draft.space.capacity)),
        ];

        Self(
            checks
                .into_iter()
                .filter_map(|(field, err)| Some((field, err?)))
                .collect(),
        )
    }

    /// Indicates whether there are no errors at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of invalid [`Field`]s.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns the [`ErrorKind`] of the provided [`Field`], if it's invalid.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<ErrorKind> {
        self.0.get(&field).copied()
    }

    /// Iterates over all the invalid [`Field`]s in their declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, ErrorKind)> + '_ {
        self.0.iter().map(|(f, e)| (*f, *e))
    }
}

impl Draft {
    /// Computes blocking validation [`Errors`] of this [`Draft`].
    #[must_use]
    pub fn validate(&self) -> Errors {
        Errors::of(self)
    }
}

/// Checks whether the provided string is empty or consists only of
/// whitespace.
fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Validates a [`Draft::room_name`].
pub(super) fn room_name(name: &str) -> Option<ErrorKind> {
    if is_blank(name) {
        Some(ErrorKind::RoomNameRequired)
    } else if name.chars().count() > ROOM_NAME_MAX_LENGTH {
        Some(ErrorKind::RoomNameMaxLength)
    } else {
        None
    }
}

/// Validates a [`Draft::address`].
pub(super) fn address(address: &str) -> Option<ErrorKind> {
    is_blank(address).then_some(ErrorKind::AddressRequired)
}

/// Validates a [`Draft::accommodation_type`].
pub(super) fn accommodation_type(
    kind: Option<AccommodationType>,
) -> Option<ErrorKind> {
    kind.is_none().then_some(ErrorKind::AccommodationTypeRequired)
}

/// Validates the number of [`Draft::usage_types`].
pub(super) fn usage_types(count: usize) -> Option<ErrorKind> {
    (count == 0).then_some(ErrorKind::UsageTypesRequired)
}

/// Validates the total number of [`Draft::main_photos`].
pub(super) fn main_photos(count: usize) -> Option<ErrorKind> {
    (count == 0).then_some(ErrorKind::MainPhotosRequired)
}

/// Validates the total number of rooms.
pub(super) fn rooms(total: u64) -> Option<ErrorKind> {
    (total == 0).then_some(ErrorKind::RoomsRequired)
}

/// Validates a base price.
pub(super) fn base_price(price: Decimal) -> Option<ErrorKind> {
    (price < Decimal::ZERO).then_some(ErrorKind::BasePriceMin)
}

/// Validates a capacity.
pub(super) fn capacity(capacity: i64) -> Option<ErrorKind> {
    (capacity < MIN_CAPACITY).then_some(ErrorKind::CapacityMin)
}

#[cfg(test)]
mod spec {
    use std::collections::BTreeSet;

    use rust_decimal::Decimal;

    use super::{
        super::draft::{
            AccommodationType, Draft, Photo, PhotoCategory, Rooms, UsageType,
        },
        ErrorKind, Errors, Field,
    };

    fn valid_draft() -> Draft {
        let mut draft = Draft {
            room_name: "Sunny room near the river".to_owned(),
            address: "12 Riverside Rd".to_owned(),
            accommodation_type: Some(AccommodationType::Apartment),
            usage_types: BTreeSet::from([UsageType::Stay]),
            main_photos: vec![PhotoCategory {
                photos: vec![Photo::default()],
                ..PhotoCategory::default()
            }],
            ..Draft::default()
        };
        draft.space.rooms = Rooms {
            room: 1,
            ..Rooms::default()
        };
        draft.space.capacity = 2;
        draft
    }

    #[test]
    fn accepts_valid_draft() {
        assert_eq!(valid_draft().validate(), Errors::default());
    }

    #[test]
    fn reports_every_field_of_empty_draft() {
        let errors = Draft::default().validate();

        assert_eq!(
            errors.iter().collect::<Vec<_>>(),
            vec![
                (Field::RoomName, ErrorKind::RoomNameRequired),
                (Field::Address, ErrorKind::AddressRequired),
                (
                    Field::AccommodationType,
                    ErrorKind::AccommodationTypeRequired,
                ),
                (Field::UsageTypes, ErrorKind::UsageTypesRequired),
                (Field::MainPhotos, ErrorKind::MainPhotosRequired),
                (Field::Rooms, ErrorKind::RoomsRequired),
                (Field::Capacity, ErrorKind::CapacityMin),
            ],
        );
        assert_eq!(errors.get(Field::BasePrice), None);
    }

    #[test]
    fn is_deterministic() {
        let draft = Draft {
            room_name: "x".repeat(150),
            ..valid_draft()
        };

        assert_eq!(draft.validate(), draft.validate());
    }

    #[test]
    fn trims_required_strings() {
        let blank = Draft {
            room_name: "   ".to_owned(),
            address: "\t\n".to_owned(),
            ..valid_draft()
        };
        let empty = Draft {
            room_name: String::new(),
            address: String::new(),
            ..valid_draft()
        };

        assert_eq!(blank.validate(), empty.validate());
        assert_eq!(
            blank.validate().get(Field::RoomName),
            Some(ErrorKind::RoomNameRequired),
        );
        assert_eq!(
            blank.validate().get(Field::Address),
            Some(ErrorKind::AddressRequired),
        );
    }

    #[test]
    fn limits_room_name_length() {
        let exact = Draft {
            room_name: "a".repeat(100),
            ..valid_draft()
        };
        assert_eq!(exact.validate().get(Field::RoomName), None);

        let long = Draft {
            room_name: "a".repeat(101),
            ..valid_draft()
        };
        assert_eq!(
            long.validate().get(Field::RoomName),
            Some(ErrorKind::RoomNameMaxLength),
        );

        let multibyte = Draft {
            room_name: "방".repeat(100),
            ..valid_draft()
        };
        assert_eq!(multibyte.validate().get(Field::RoomName), None);
    }

    #[test]
    fn counts_photos_across_categories() {
        let draft = Draft {
            main_photos: vec![
                PhotoCategory::default(),
                PhotoCategory {
                    photos: vec![Photo::default()],
                    ..PhotoCategory::default()
                },
            ],
            ..valid_draft()
        };
        assert_eq!(draft.validate().get(Field::MainPhotos), None);

        let no_photos = Draft {
            main_photos: vec![PhotoCategory::default(); 3],
            ..valid_draft()
        };
        assert_eq!(
            no_photos.validate().get(Field::MainPhotos),
            Some(ErrorKind::MainPhotosRequired),
        );
    }

    #[test]
    fn requires_any_room() {
        let mut draft = valid_draft();
        draft.space.rooms = Rooms {
            terrace: 1,
            ..Rooms::default()
        };
        assert_eq!(draft.validate().get(Field::Rooms), None);

        draft.space.rooms = Rooms::default();
        assert_eq!(
            draft.validate().get(Field::Rooms),
            Some(ErrorKind::RoomsRequired),
        );
    }

    #[test]
    fn compares_numbers_strictly() {
        let mut draft = valid_draft();

        draft.space.capacity = 0;
        assert_eq!(
            draft.validate().get(Field::Capacity),
            Some(ErrorKind::CapacityMin),
        );
        draft.space.capacity = -3;
        assert_eq!(
            draft.validate().get(Field::Capacity),
            Some(ErrorKind::CapacityMin),
        );
        draft.space.capacity = 1;
        assert_eq!(draft.validate().get(Field::Capacity), None);

        draft.pricing.base_price = Decimal::ZERO;
        assert_eq!(draft.validate().get(Field::BasePrice), None);
        draft.pricing.base_price = Decimal::NEGATIVE_ONE;
        assert_eq!(
            draft.validate().get(Field::BasePrice),
            Some(ErrorKind::BasePriceMin),
        );
    }

    #[test]
    fn displays_every_error() {
        let draft = Draft {
            room_name: String::new(),
            ..valid_draft()
        };
        assert_eq!(draft.validate().to_string(), "roomName: ROOM_NAME_REQUIRED");
        assert_eq!(draft.validate().len(), 1);
    }

    #[test]
    fn error_codes_and_keys() {
        assert_eq!(ErrorKind::RoomNameRequired.code(), "ROOM_NAME_REQUIRED");
        assert_eq!(ErrorKind::CapacityMin.to_string(), "CAPACITY_MIN");
        assert_eq!(
            ErrorKind::RoomNameMaxLength.message_key(),
            "validation.roomNameMaxLength",
        );
        assert_eq!(Field::BasePrice.code(), "basePrice");
    }
}
