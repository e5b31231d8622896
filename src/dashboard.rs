// src/dashboard.rs
use crate::charts::{DynamicCharts, StaticCharts};
use crate::data::{ListingTable, Selection};
use crate::errors::StartupError;
use crate::templates::pages::{dashboard_page, DashboardVm};
use maud::Markup;

/// Process-wide state, built before the server accepts requests
/// and only read afterwards.
pub struct Dashboard {
    table: ListingTable,
    /// Rendered once; holds the static charts inline.
    page: Markup,
}

impl Dashboard {
    pub fn new(table: ListingTable) -> Result<Self, StartupError> {
        if table.is_empty() {
            log::warn!("No listings loaded; every chart will be empty");
        }

        let static_charts = StaticCharts::build(&table);
        let page = dashboard_page(&DashboardVm {
            neighbourhood_groups: table.neighbourhood_groups(),
            room_types: table.room_types(),
            selection: &Selection::all(&table),
            charts: &static_charts,
        })?;

        Ok(Self { table, page })
    }

    pub fn table(&self) -> &ListingTable {
        &self.table
    }

    /// The rendered page. Identical for every request.
    pub fn page(&self) -> Markup {
        self.page.clone()
    }

    /// Recompute the two filtered charts. Pure: the table is never touched.
    pub fn update(&self, selection: &Selection) -> DynamicCharts {
        let rows = self.table.filter(selection);
        let charts = DynamicCharts::build(&rows);
        log::debug!(
            "Selection matched {} of {} listings ({} map points)",
            rows.len(),
            self.table.len(),
            charts.map.point_count()
        );
        charts
    }
}
