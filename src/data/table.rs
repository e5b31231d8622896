// src/data/table.rs
use crate::data::aggregate::distinct;
use crate::data::{Category, Listing};
use serde::{Deserialize, Deserializer};
use std::collections::HashSet;

/// The listings held in memory for the lifetime of the process.
/// Built once by the loader; there is no mutation API.
#[derive(Debug, Clone)]
pub struct ListingTable {
    rows: Vec<Listing>,
    neighbourhood_groups: Vec<String>,
    room_types: Vec<String>,
}

impl ListingTable {
    pub fn from_rows(rows: Vec<Listing>) -> Self {
        let neighbourhood_groups = distinct(&rows, Category::NeighbourhoodGroup);
        let room_types = distinct(&rows, Category::RoomType);
        Self {
            rows,
            neighbourhood_groups,
            room_types,
        }
    }

    pub fn rows(&self) -> &[Listing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Distinct groups in first-appearance order.
    pub fn neighbourhood_groups(&self) -> &[String] {
        &self.neighbourhood_groups
    }

    /// Distinct room types in first-appearance order.
    pub fn room_types(&self) -> &[String] {
        &self.room_types
    }

    /// Rows whose group is selected AND whose room type is selected.
    /// Table order is preserved.
    pub fn filter(&self, selection: &Selection) -> Vec<&Listing> {
        let groups: HashSet<&str> = selection
            .neighbourhood_groups
            .iter()
            .map(String::as_str)
            .collect();
        let room_types: HashSet<&str> = selection.room_types.iter().map(String::as_str).collect();

        if groups.is_empty() || room_types.is_empty() {
            return Vec::new();
        }

        self.rows
            .iter()
            .filter(|l| {
                groups.contains(l.neighbourhood_group.as_str())
                    && room_types.contains(l.room_type.as_str())
            })
            .collect()
    }
}

/// The two dropdown states. Values unknown to the table match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Selection {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub neighbourhood_groups: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub room_types: Vec<String>,
}

impl Selection {
    pub fn new(neighbourhood_groups: Vec<String>, room_types: Vec<String>) -> Self {
        Self {
            neighbourhood_groups,
            room_types,
        }
    }

    /// Every distinct value on both dimensions; the page's initial state.
    pub fn all(table: &ListingTable) -> Self {
        Self::new(
            table.neighbourhood_groups().to_vec(),
            table.room_types().to_vec(),
        )
    }
}

// A cleared dropdown may post `null` instead of `[]`.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
