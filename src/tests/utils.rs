use crate::charts::figure::Trace;
use crate::dashboard::Dashboard;
use crate::data::{Listing, ListingTable};
use astra::Response;
use std::io::Read;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

pub const GROUPS: [&str; 3] = ["Manhattan", "Brooklyn", "Queens"];
pub const ROOM_TYPES: [&str; 3] = ["Entire home", "Private room", "Shared room"];

pub fn listing(group: &str, neighbourhood: &str, room_type: &str, price: f64) -> Listing {
    Listing {
        neighbourhood_group: group.to_string(),
        neighbourhood: neighbourhood.to_string(),
        room_type: room_type.to_string(),
        price,
        minimum_nights: 2,
        number_of_reviews: 10,
        availability_365: 180,
        days_from_last_review: 30,
        latitude: 40.7,
        longitude: -73.9,
        distance_to_city_center: 5.0,
    }
}

/// The three-row table used in the filtering example.
pub fn tiny_table() -> ListingTable {
    ListingTable::from_rows(vec![
        listing("Manhattan", "Midtown", "Entire home", 200.0),
        listing("Brooklyn", "Williamsburg", "Private room", 80.0),
        listing("Manhattan", "Harlem", "Private room", 150.0),
    ])
}

/// Every group/room-type pair, with varied numeric columns.
pub fn city_table() -> ListingTable {
    let mut rows = Vec::new();
    for (g, group) in GROUPS.iter().enumerate() {
        for (r, room_type) in ROOM_TYPES.iter().enumerate() {
            for k in 0..2 {
                let i = g * 6 + r * 2 + k;
                let mut row = listing(
                    group,
                    &format!("{group} {k}"),
                    room_type,
                    50.0 + (i as f64) * 10.0,
                );
                row.minimum_nights = (i % 5) as i64 + 1;
                row.number_of_reviews = i as i64;
                row.availability_365 = (i * 20) as i64;
                row.distance_to_city_center = 1.0 + g as f64;
                rows.push(row);
            }
        }
    }
    ListingTable::from_rows(rows)
}

pub fn city_dashboard() -> Dashboard {
    Dashboard::new(city_table()).expect("dashboard should build")
}

/// Write `contents` to a unique file under the system temp dir.
pub fn write_temp_csv(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "listings_test_{}_{}.csv",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos()
    ));
    std::fs::write(&path, contents).expect("failed to write temp csv");
    path
}

pub fn read_body(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body()
        .reader()
        .read_to_string(&mut body)
        .unwrap();
    body
}

/// Legend name of a trace; pies and histograms have none.
pub fn trace_name(trace: &Trace) -> Option<&str> {
    match trace {
        Trace::Pie(_) | Trace::Histogram(_) => None,
        Trace::Box(t) => Some(&t.name),
        Trace::Bar(t) => Some(&t.name),
        Trace::Scatter(t) => Some(&t.name),
    }
}
