// src/data/loader.rs
use crate::data::{Listing, ListingTable};
use crate::errors::StartupError;
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Load the listings file into an immutable table.
///
/// Header names are trimmed before matching, so `" price "` binds to `price`.
pub fn load_listings(path: &Path) -> Result<ListingTable, StartupError> {
    let file = File::open(path).map_err(|source| StartupError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let table = read_listings(file)?;
    log::info!(
        "Loaded {} listings from {} ({} neighbourhood groups, {} room types)",
        table.len(),
        path.display(),
        table.neighbourhood_groups().len(),
        table.room_types().len()
    );
    Ok(table)
}

/// Parse CSV from any reader. Used by `load_listings` and by tests.
pub fn read_listings<R: Read>(reader: R) -> Result<ListingTable, StartupError> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(reader);

    let rows = csv_reader
        .deserialize::<Listing>()
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ListingTable::from_rows(rows))
}
