// src/charts/figure.rs
//
// Chart specifications in the JSON shape Plotly.js renders directly:
// `{"data": [trace, ...], "layout": {...}}`.
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(title: &str) -> Self {
        Self {
            data: Vec::new(),
            layout: Layout::titled(title),
        }
    }

    pub fn with_trace(mut self, trace: Trace) -> Self {
        self.data.push(trace);
        self
    }

    pub fn with_traces(mut self, traces: impl IntoIterator<Item = Trace>) -> Self {
        self.data.extend(traces);
        self
    }

    pub fn with_layout(mut self, f: impl FnOnce(&mut Layout)) -> Self {
        f(&mut self.layout);
        self
    }

    /// Number of data points across all traces.
    pub fn point_count(&self) -> usize {
        self.data.iter().map(Trace::point_count).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Pie(Pie),
    Histogram(Histogram),
    Box(BoxPlot),
    Bar(Bar),
    Scatter(Scatter),
}

impl Trace {
    pub fn point_count(&self) -> usize {
        match self {
            Trace::Pie(t) => t.values.len(),
            Trace::Histogram(t) => t.x.len(),
            Trace::Box(t) => t.y.len(),
            Trace::Bar(t) => t.y.len(),
            Trace::Scatter(t) => t.x.len(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pie {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub marker: Marker,
    pub textposition: &'static str,
    pub textinfo: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    pub x: Vec<f64>,
    pub nbinsx: usize,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxPlot {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scatter {
    pub name: String,
    pub mode: &'static str,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub marker: Marker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertext: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customdata: Option<Vec<Vec<String>>>,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Marker {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<&'static str>,
    /// Per-slice colors (pie only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<&'static str>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Vec<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizemode: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sizeref: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
}

impl Marker {
    pub fn colored(color: &'static str) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    pub xaxis: Axis,
    pub yaxis: Axis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxmode: Option<&'static str>,
}

impl Layout {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Title::new(title),
            showlegend: None,
            legend: None,
            xaxis: Axis::default(),
            yaxis: Axis::default(),
            boxmode: None,
        }
    }

    /// Axis titles plus a legend headed by the color column.
    pub fn bind(&mut self, x: &str, y: &str, color: Option<&str>) {
        self.xaxis.title = Some(Title::new(x));
        self.yaxis.title = Some(Title::new(y));
        self.legend = color.map(|c| Legend {
            title: Title::new(c),
        });
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Legend {
    pub title: Title,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Axis {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showgrid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<[f64; 2]>,
}
