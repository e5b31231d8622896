use crate::charts::Figure;
use maud::{html, Markup, PreEscaped};

/// Empty container that Plotly draws into.
pub fn graph(id: &str) -> Markup {
    html! {
        div id=(id) class="graph" {}
    }
}

/// Container plus an inline script drawing `figure` into it.
pub fn static_graph(id: &str, figure: &Figure) -> Result<Markup, serde_json::Error> {
    let json = script_json(figure)?;
    let script = format!(
        "(function () {{ const fig = {json}; Plotly.newPlot({id:?}, fig.data, fig.layout, {{responsive: true}}); }})();"
    );

    Ok(html! {
        (graph(id))
        script { (PreEscaped(script)) }
    })
}

/// JSON safe to place inside a `<script>` element: no raw `<` survives.
pub fn script_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace('<', "\\u003c"))
}
