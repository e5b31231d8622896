use crate::charts::StaticCharts;
use crate::data::Selection;
use crate::templates::components::{graph, multi_select, static_graph};
use crate::templates::dashboard_layout;
use maud::{html, Markup, PreEscaped};

pub const PAGE_TITLE: &str = "Airbnb Listings in NYC";
pub const MAP_GRAPH_ID: &str = "map-graph";
pub const PRICE_DISTANCE_GRAPH_ID: &str = "price-distance-graph";

// Posts both selections to /update and redraws the two filtered charts.
// Responses older than the latest request are dropped; failed requests leave
// the charts as they were.
const UPDATE_SCRIPT: &str = r#"
function startDashboard(mapId, priceDistanceId) {
  let latest = 0;

  function selected(name) {
    return Array.from(document.querySelectorAll('input[name="' + name + '"]:checked'), el => el.value);
  }

  function summarize(dropdown) {
    const values = Array.from(dropdown.querySelectorAll('input:checked'), el => el.value);
    dropdown.querySelector('.summary-text').textContent = values.length ? values.join(', ') : 'None selected';
  }

  async function refresh() {
    const seq = ++latest;
    try {
      const resp = await fetch('/update', {
        method: 'POST',
        headers: { 'Content-Type': 'application/json' },
        body: JSON.stringify({
          neighbourhood_groups: selected('neighbourhood_group'),
          room_types: selected('room_type'),
        }),
      });
      if (!resp.ok || seq !== latest) return;
      const charts = await resp.json();
      if (seq !== latest) return;
      Plotly.react(mapId, charts.map.data, charts.map.layout, { responsive: true });
      Plotly.react(priceDistanceId, charts.price_distance.data, charts.price_distance.layout, { responsive: true });
    } catch (err) {
      console.warn('dashboard update failed', err);
    }
  }

  document.querySelectorAll('details.dropdown').forEach(dropdown => {
    dropdown.addEventListener('change', () => { summarize(dropdown); refresh(); });
  });
  refresh();
}
"#;

pub struct DashboardVm<'a> {
    pub neighbourhood_groups: &'a [String],
    pub room_types: &'a [String],
    /// Initial dropdown state.
    pub selection: &'a Selection,
    pub charts: &'a StaticCharts,
}

pub fn dashboard_page(vm: &DashboardVm) -> Result<Markup, serde_json::Error> {
    let mut panels = vm
        .charts
        .panels()
        .into_iter()
        .map(|(id, figure)| static_graph(id, figure))
        .collect::<Result<Vec<_>, _>>()?;
    let full_width = panels.pop();

    let start = format!("startDashboard({MAP_GRAPH_ID:?}, {PRICE_DISTANCE_GRAPH_ID:?});");

    Ok(dashboard_layout(
        PAGE_TITLE,
        html! {
            h1 class="banner" { (PAGE_TITLE) }

            div class="filters" {
                (multi_select(
                    "neighbourhood-dropdown",
                    "Select Neighbourhood Group:",
                    "neighbourhood_group",
                    vm.neighbourhood_groups,
                    &vm.selection.neighbourhood_groups,
                ))
                (multi_select(
                    "room-type-dropdown",
                    "Select Room Type:",
                    "room_type",
                    vm.room_types,
                    &vm.selection.room_types,
                ))
            }

            (graph(MAP_GRAPH_ID))
            (graph(PRICE_DISTANCE_GRAPH_ID))

            div class="grid" {
                @for panel in &panels {
                    div { (panel) }
                }
            }

            @if let Some(panel) = full_width {
                (panel)
            }

            script { (PreEscaped(UPDATE_SCRIPT)) (PreEscaped(start)) }
        },
    ))
}
