// src/data/listing.rs
use serde::{de, Deserialize, Deserializer};

/// One row of the cleaned listings file.
/// Columns not named here are ignored on load.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Listing {
    pub neighbourhood_group: String,
    pub neighbourhood: String,
    pub room_type: String,
    pub price: f64,
    #[serde(deserialize_with = "whole_number")]
    pub minimum_nights: i64,
    #[serde(deserialize_with = "whole_number")]
    pub number_of_reviews: i64,
    #[serde(deserialize_with = "whole_number")]
    pub availability_365: i64,
    #[serde(deserialize_with = "whole_number")]
    pub days_from_last_review: i64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_to_city_center: f64,
}

/// Accepts `7` as well as `7.0`; rejects `7.5`.
fn whole_number<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = f64::deserialize(deserializer)?;
    if raw.fract() != 0.0 || !raw.is_finite() {
        return Err(de::Error::custom(format!("expected a whole number, got {raw}")));
    }
    Ok(raw as i64)
}

/// Categorical columns that charts group or color by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    NeighbourhoodGroup,
    Neighbourhood,
    RoomType,
}

impl Category {
    pub fn of(self, listing: &Listing) -> &str {
        match self {
            Category::NeighbourhoodGroup => &listing.neighbourhood_group,
            Category::Neighbourhood => &listing.neighbourhood,
            Category::RoomType => &listing.room_type,
        }
    }

    /// Column name, used for axis and legend titles.
    pub fn column(self) -> &'static str {
        match self {
            Category::NeighbourhoodGroup => "neighbourhood_group",
            Category::Neighbourhood => "neighbourhood",
            Category::RoomType => "room_type",
        }
    }
}

/// Numeric columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measure {
    Price,
    MinimumNights,
    NumberOfReviews,
    Availability365,
    DaysFromLastReview,
    Latitude,
    Longitude,
    DistanceToCityCenter,
}

impl Measure {
    pub fn of(self, listing: &Listing) -> f64 {
        match self {
            Measure::Price => listing.price,
            Measure::MinimumNights => listing.minimum_nights as f64,
            Measure::NumberOfReviews => listing.number_of_reviews as f64,
            Measure::Availability365 => listing.availability_365 as f64,
            Measure::DaysFromLastReview => listing.days_from_last_review as f64,
            Measure::Latitude => listing.latitude,
            Measure::Longitude => listing.longitude,
            Measure::DistanceToCityCenter => listing.distance_to_city_center,
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Measure::Price => "price",
            Measure::MinimumNights => "minimum_nights",
            Measure::NumberOfReviews => "number_of_reviews",
            Measure::Availability365 => "availability_365",
            Measure::DaysFromLastReview => "days_from_last_review",
            Measure::Latitude => "latitude",
            Measure::Longitude => "longitude",
            Measure::DistanceToCityCenter => "distance_to_city_center",
        }
    }
}
