// src/charts/static_set.rs
use crate::charts::figure::{Bar, BoxPlot, Figure, Histogram, Marker, Pie, Trace};
use crate::charts::palette::{self, pick};
use crate::data::aggregate::{count_by, mean_by, top_by_mean, values_by};
use crate::data::{Category, ListingTable, Measure};

pub const HISTOGRAM_BINS: usize = 50;
pub const TOP_NEIGHBOURHOODS: usize = 10;

/// Charts computed once from the full table at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct StaticCharts {
    pub group_share: Figure,
    pub room_type_share: Figure,
    pub price_distribution: Figure,
    pub nights_by_room_type: Figure,
    pub reviews_by_group: Figure,
    pub availability_by_group: Figure,
    pub days_since_review: Figure,
    pub top_neighbourhoods: Figure,
    pub distance_by_group: Figure,
}

impl StaticCharts {
    pub fn build(table: &ListingTable) -> Self {
        Self {
            group_share: share_pie(
                table,
                Category::NeighbourhoodGroup,
                "Neighbourhood Group Distribution",
                palette::RD_BU,
            ),
            room_type_share: share_pie(
                table,
                Category::RoomType,
                "Room Type Distribution",
                palette::AGSUNSET,
            ),
            price_distribution: histogram(
                table,
                Measure::Price,
                "Price Distribution",
                palette::ORANGE,
            ),
            nights_by_room_type: box_by(
                table,
                Category::RoomType,
                Measure::MinimumNights,
                "Minimum Nights by Room Type",
            )
            .with_layout(|l| l.yaxis.range = Some([0.0, 30.0])),
            reviews_by_group: mean_bar(
                mean_by(table.rows(), Category::NeighbourhoodGroup, Measure::NumberOfReviews),
                Category::NeighbourhoodGroup,
                Measure::NumberOfReviews,
                "Avg. Number of Reviews per Neighbourhood Group",
            ),
            availability_by_group: mean_bar(
                mean_by(table.rows(), Category::NeighbourhoodGroup, Measure::Availability365),
                Category::NeighbourhoodGroup,
                Measure::Availability365,
                "Average Yearly Availability by Neighbourhood Group",
            ),
            days_since_review: histogram(
                table,
                Measure::DaysFromLastReview,
                "Days Since Last Review",
                palette::BLUE,
            ),
            top_neighbourhoods: mean_bar(
                top_by_mean(
                    table.rows(),
                    Category::Neighbourhood,
                    Measure::Price,
                    TOP_NEIGHBOURHOODS,
                ),
                Category::Neighbourhood,
                Measure::Price,
                "Top 10 Expensive Neighbourhoods (Avg. Price)",
            ),
            distance_by_group: box_by(
                table,
                Category::NeighbourhoodGroup,
                Measure::DistanceToCityCenter,
                "Distance to City Center by Neighbourhood Group",
            ),
        }
    }

    /// Charts in page order, each with its element id.
    /// The last one spans the full width below the grid.
    pub fn panels(&self) -> [(&'static str, &Figure); 9] {
        [
            ("neighbourhood-share", &self.group_share),
            ("room-type-share", &self.room_type_share),
            ("price-distribution", &self.price_distribution),
            ("nights-by-room-type", &self.nights_by_room_type),
            ("reviews-by-group", &self.reviews_by_group),
            ("availability-by-group", &self.availability_by_group),
            ("days-since-review", &self.days_since_review),
            ("top-neighbourhoods", &self.top_neighbourhoods),
            ("distance-by-group", &self.distance_by_group),
        ]
    }
}

fn share_pie(
    table: &ListingTable,
    category: Category,
    title: &str,
    colors: &[&'static str],
) -> Figure {
    let counts = count_by(table.rows(), category);
    let slice_colors = (0..counts.len()).map(|i| pick(colors, i)).collect();
    let (labels, values) = counts
        .into_iter()
        .map(|(label, n)| (label, n as f64))
        .unzip();

    Figure::new(title)
        .with_trace(Trace::Pie(Pie {
            labels,
            values,
            marker: Marker {
                colors: Some(slice_colors),
                ..Marker::default()
            },
            textposition: "inside",
            textinfo: "percent+label",
        }))
        .with_layout(|l| l.showlegend = Some(false))
}

fn histogram(table: &ListingTable, measure: Measure, title: &str, color: &'static str) -> Figure {
    let x = table.rows().iter().map(|l| measure.of(l)).collect();
    Figure::new(title)
        .with_trace(Trace::Histogram(Histogram {
            x,
            nbinsx: HISTOGRAM_BINS,
            marker: Marker::colored(color),
        }))
        .with_layout(|l| l.bind(measure.column(), "count", None))
}

fn box_by(table: &ListingTable, category: Category, measure: Measure, title: &str) -> Figure {
    let traces = values_by(table.rows(), category, measure)
        .into_iter()
        .enumerate()
        .map(|(i, (name, y))| {
            Trace::Box(BoxPlot {
                x: vec![name.clone(); y.len()],
                name,
                y,
                marker: Marker::colored(pick(palette::BOLD, i)),
            })
        });

    Figure::new(title).with_traces(traces).with_layout(|l| {
        l.bind(category.column(), measure.column(), Some(category.column()));
        l.boxmode = Some("overlay");
    })
}

/// One single-bar trace per category so each bar takes its own color.
fn mean_bar(means: Vec<(String, f64)>, category: Category, measure: Measure, title: &str) -> Figure {
    let traces = means.into_iter().enumerate().map(|(i, (name, mean))| {
        Trace::Bar(Bar {
            x: vec![name.clone()],
            name,
            y: vec![mean],
            marker: Marker::colored(pick(palette::BOLD, i)),
        })
    });

    Figure::new(title)
        .with_traces(traces)
        .with_layout(|l| l.bind(category.column(), measure.column(), Some(category.column())))
}
