//! [`Draft`] definitions.

use std::collections::BTreeSet;

use common::define_kind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(doc)]
use super::Listing;

/// In-progress form data of a [`Listing`].
///
/// Any value is representable here, including the ones failing validation:
/// a [`Draft`] mirrors whatever the host has typed so far.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Draft {
    /// Name of the room shown to guests.
    pub room_name: String,

    /// Street address of the accommodation.
    pub address: String,

    /// Detailed address part (building, floor, unit).
    pub address_detail: String,

    /// Postal code of the [`Draft::address`].
    pub zip_code: String,

    /// [`AccommodationType`] of the accommodation, if chosen.
    pub accommodation_type: Option<AccommodationType>,

    /// [`BuildingType`] of the accommodation, if chosen.
    pub building_type: Option<BuildingType>,

    /// [`UsageType`]s the accommodation is offered for.
    pub usage_types: BTreeSet<UsageType>,

    /// Minimal number of days a reservation may last.
    pub min_reservation_days: u32,

    /// Ordered [`PhotoCategory`]s of the main photos.
    pub main_photos: Vec<PhotoCategory>,

    /// [`Space`] description.
    pub space: Space,

    /// [`Pricing`] of the accommodation.
    pub pricing: Pricing,

    /// Facility codes available in the accommodation.
    pub facilities: Vec<String>,

    /// Amenity codes available in the accommodation.
    pub amenities: Vec<String>,

    /// Indicator whether the host currently operates the accommodation.
    pub is_operating: bool,
}

impl Draft {
    /// Returns the total number of main photos across all the
    /// [`PhotoCategory`]s.
    #[must_use]
    pub fn photo_count(&self) -> usize {
        self.main_photos.iter().map(|c| c.photos.len()).sum()
    }

    /// Returns the length of the [`Space::introduction`] in characters.
    ///
    /// A missing introduction has zero length.
    #[must_use]
    pub fn introduction_len(&self) -> usize {
        self.space
            .introduction
            .as_deref()
            .map_or(0, |s| s.chars().count())
    }
}

/// Named group of photos.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct PhotoCategory {
    /// ID of this [`PhotoCategory`].
    pub id: String,

    /// Human-readable name of this [`PhotoCategory`].
    pub name: String,

    /// Ordered [`Photo`]s of this [`PhotoCategory`].
    pub photos: Vec<Photo>,

    /// Position of this [`PhotoCategory`] among the others.
    pub order: u32,
}

/// Reference to an uploaded photo.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct Photo {
    /// ID of this [`Photo`] in the storage.
    pub id: String,

    /// Public URL of this [`Photo`].
    pub url: String,

    /// Position of this [`Photo`] inside its [`PhotoCategory`].
    pub order: u32,
}

/// Space of an accommodation.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Space {
    /// [`Rooms`] of the accommodation.
    pub rooms: Rooms,

    /// [`Beds`] of the accommodation.
    pub beds: Beds,

    /// Maximal number of guests.
    ///
    /// Signed, so that any value typed into the form is representable.
    pub capacity: i64,

    /// [`GenderRule`]s applied to guests.
    pub gender_rules: BTreeSet<GenderRule>,

    /// Size in square meters, if specified.
    pub size_m2: Option<Decimal>,

    /// Free-form house rules.
    pub house_rules: Option<String>,

    /// Free-form introduction shown on the listing page.
    pub introduction: Option<String>,
}

/// Number of rooms of each type.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize,
)]
#[serde(default, rename_all = "camelCase")]
pub struct Rooms {
    /// Number of bedrooms.
    pub room: u32,

    /// Number of living rooms.
    pub living_room: u32,

    /// Number of kitchens.
    pub kitchen: u32,

    /// Number of bathrooms.
    pub bathroom: u32,

    /// Number of terraces.
    pub terrace: u32,
}

impl Rooms {
    /// Returns the total number of rooms of all types.
    #[must_use]
    pub fn total(&self) -> u64 {
        let Self {
            room,
            living_room,
            kitchen,
            bathroom,
            terrace,
        } = *self;
        [room, living_room, kitchen, bathroom, terrace]
            .into_iter()
            .map(u64::from)
            .sum()
    }
}

/// Number of beds of each type.
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize,
)]
#[serde(default, rename_all = "camelCase")]
pub struct Beds {
    /// Number of king-size beds.
    pub king: u32,

    /// Number of queen-size beds.
    pub queen: u32,

    /// Number of single beds.
    pub single: u32,

    /// Number of super single beds.
    pub super_single: u32,

    /// Number of bunk beds.
    pub bunk_bed: u32,
}

/// Pricing of an accommodation.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Pricing {
    /// Price of a single night.
    pub base_price: Decimal,

    /// Indicator whether utilities are included into the
    /// [`Pricing::base_price`].
    pub includes_utilities: bool,

    /// Price of a single night on [`Pricing::weekend_days`], if it differs.
    pub weekend_price: Option<Decimal>,

    /// [`Weekday`]s charged with the [`Pricing::weekend_price`].
    pub weekend_days: BTreeSet<Weekday>,

    /// Monthly management fee, if any.
    pub management_fee: Option<Decimal>,

    /// One-time cleaning fee, if any.
    pub cleaning_fee: Option<Decimal>,

    /// Fee for every guest above the base occupancy, if any.
    pub extra_person_fee: Option<Decimal>,

    /// Fee for staying with a pet, if any.
    pub pet_fee: Option<Decimal>,

    /// Other named fees.
    pub additional_fees: Vec<AdditionalFee>,
}

/// Named fee charged on top of the [`Pricing::base_price`].
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default)]
pub struct AdditionalFee {
    /// ID of this [`AdditionalFee`].
    pub id: String,

    /// Human-readable name of this [`AdditionalFee`].
    pub name: String,

    /// Amount of this [`AdditionalFee`].
    pub amount: Decimal,
}

define_kind! {
    #[doc = "Type of an accommodation."]
    enum AccommodationType {
        #[doc = "Whole house."]
        #[code = "house"]
        House,

        #[doc = "Room shared with other guests."]
        #[code = "share_room"]
        #[alias = "shared_room"]
        SharedRoom,

        #[doc = "House shared with other guests."]
        #[code = "share_house"]
        #[alias = "shared_house"]
        SharedHouse,

        #[doc = "Whole apartment."]
        #[code = "apartment"]
        Apartment,
    }
}

define_kind! {
    #[doc = "Purpose an accommodation is offered for."]
    enum UsageType {
        #[doc = "Regular stay."]
        #[code = "stay"]
        Stay,

        #[doc = "Short-term rent."]
        #[code = "short_term"]
        ShortTerm,
    }
}

define_kind! {
    #[doc = "Rule restricting guests of an accommodation."]
    enum GenderRule {
        #[doc = "Only male guests are accepted."]
        #[code = "male_only"]
        MaleOnly,

        #[doc = "Only female guests are accepted."]
        #[code = "female_only"]
        FemaleOnly,

        #[doc = "Guests may stay with pets."]
        #[code = "pet_allowed"]
        PetAllowed,
    }
}

define_kind! {
    #[doc = "Type of a building an accommodation is located in."]
    enum BuildingType {
        #[doc = "Apartment complex."]
        #[code = "apartment"]
        Apartment,

        #[doc = "Low-rise multi-family villa."]
        #[code = "villa"]
        Villa,

        #[doc = "Detached house."]
        #[code = "house"]
        House,

        #[doc = "Mixed office and residential building."]
        #[code = "officetel"]
        Officetel,
    }
}

define_kind! {
    #[doc = "Day of a week."]
    enum Weekday {
        #[doc = "Sunday."]
        #[code = "sun"]
        Sunday,

        #[doc = "Monday."]
        #[code = "mon"]
        Monday,

        #[doc = "Tuesday."]
        #[code = "tue"]
        Tuesday,

        #[doc = "Wednesday."]
        #[code = "wed"]
        Wednesday,

        #[doc = "Thursday."]
        #[code = "thu"]
        Thursday,

        #[doc = "Friday."]
        #[code = "fri"]
        Friday,

        #[doc = "Saturday."]
        #[code = "sat"]
        Saturday,
    }
}
