pub mod aggregate;
pub mod listing;
pub mod loader;
pub mod table;

pub use listing::{Category, Listing, Measure};
pub use loader::load_listings;
pub use table::{ListingTable, Selection};
