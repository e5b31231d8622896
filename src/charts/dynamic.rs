// src/charts/dynamic.rs
use crate::charts::figure::{Figure, Marker, Scatter, Trace};
use crate::charts::palette::{self, pick};
use crate::data::aggregate::partition_by;
use crate::data::{Category, Listing, Measure};
use serde::Serialize;

pub const MAP_TITLE: &str = "Filtered Airbnb Listings in NYC";
pub const PRICE_DISTANCE_TITLE: &str = "Filtered Price vs Distance to City Center";
pub const PRICE_DISTANCE_OPACITY: f64 = 0.6;

/// Largest rendered marker diameter, in pixels.
const MAX_MARKER_SIZE: f64 = 20.0;

/// The two charts recomputed on every selection change.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DynamicCharts {
    pub map: Figure,
    pub price_distance: Figure,
}

impl DynamicCharts {
    pub fn build(rows: &[&Listing]) -> Self {
        Self {
            map: listings_map(rows),
            price_distance: price_vs_distance(rows),
        }
    }
}

/// Latitude/longitude scatter, colored by group, sized by price.
pub fn listings_map(rows: &[&Listing]) -> Figure {
    let max_price = rows
        .iter()
        .map(|l| l.price)
        .fold(f64::NEG_INFINITY, f64::max);
    let sizeref = if max_price > 0.0 {
        2.0 * max_price / (MAX_MARKER_SIZE * MAX_MARKER_SIZE)
    } else {
        1.0
    };

    let traces = partition_by(rows.iter().copied(), Category::NeighbourhoodGroup)
        .into_iter()
        .enumerate()
        .map(|(i, (group, members))| {
            let hovertemplate = format!(
                "<b>%{{hovertext}}</b><br><br>{}={}<br>{}=%{{x}}<br>{}=%{{y}}<br>{}=%{{marker.size}}<extra></extra>",
                Category::NeighbourhoodGroup.column(),
                group,
                Measure::Latitude.column(),
                Measure::Longitude.column(),
                Measure::Price.column(),
            );
            Trace::Scatter(Scatter {
                mode: "markers",
                x: column(&members, Measure::Latitude),
                y: column(&members, Measure::Longitude),
                marker: Marker {
                    color: Some(pick(palette::BOLD, i)),
                    size: Some(column(&members, Measure::Price)),
                    sizemode: Some("area"),
                    sizeref: Some(sizeref),
                    ..Marker::default()
                },
                hovertext: Some(members.iter().map(|l| l.neighbourhood.clone()).collect()),
                customdata: None,
                hovertemplate,
                name: group,
            })
        });

    Figure::new(MAP_TITLE).with_traces(traces).with_layout(|l| {
        l.bind(
            Measure::Latitude.column(),
            Measure::Longitude.column(),
            Some(Category::NeighbourhoodGroup.column()),
        );
        l.xaxis.showgrid = Some(false);
        l.yaxis.showgrid = Some(false);
    })
}

/// Price against distance to the center, colored by room type.
pub fn price_vs_distance(rows: &[&Listing]) -> Figure {
    let traces = partition_by(rows.iter().copied(), Category::RoomType)
        .into_iter()
        .enumerate()
        .map(|(i, (room_type, members))| {
            let hovertemplate = format!(
                "{}={}<br>{}=%{{x}}<br>{}=%{{y}}<br>{}=%{{customdata[0]}}<br>{}=%{{customdata[1]}}<extra></extra>",
                Category::RoomType.column(),
                room_type,
                Measure::DistanceToCityCenter.column(),
                Measure::Price.column(),
                Category::Neighbourhood.column(),
                Category::NeighbourhoodGroup.column(),
            );
            Trace::Scatter(Scatter {
                mode: "markers",
                x: column(&members, Measure::DistanceToCityCenter),
                y: column(&members, Measure::Price),
                marker: Marker {
                    color: Some(pick(palette::BOLD, i)),
                    opacity: Some(PRICE_DISTANCE_OPACITY),
                    ..Marker::default()
                },
                hovertext: None,
                customdata: Some(
                    members
                        .iter()
                        .map(|l| vec![l.neighbourhood.clone(), l.neighbourhood_group.clone()])
                        .collect(),
                ),
                hovertemplate,
                name: room_type,
            })
        });

    Figure::new(PRICE_DISTANCE_TITLE)
        .with_traces(traces)
        .with_layout(|l| {
            l.bind(
                Measure::DistanceToCityCenter.column(),
                Measure::Price.column(),
                Some(Category::RoomType.column()),
            )
        })
}

fn column(rows: &[&Listing], measure: Measure) -> Vec<f64> {
    rows.iter().map(|l| measure.of(l)).collect()
}
