use maud::{html, Markup, PreEscaped, DOCTYPE};

pub const PLOTLY_JS: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

const STYLE: &str = r#"
body { margin: 0; background-color: #f0f2f5; font-family: 'Segoe UI', system-ui, sans-serif; }
main { padding: 30px; }
.banner { text-align: center; color: #2c3e50; background-color: #f7f7f7; padding: 20px; border-radius: 10px; }
.filters { display: flex; justify-content: space-between; padding: 20px; }
.filter { width: 48%; }
.filter-label { display: block; margin-bottom: 6px; }
details.dropdown { background: #fff; border: 1px solid #ccc; border-radius: 4px; }
details.dropdown summary { padding: 8px; cursor: pointer; }
details.dropdown .options { display: flex; flex-direction: column; padding: 4px 8px 8px; }
.grid { display: grid; grid-template-columns: 1fr 1fr; }
.graph { min-height: 450px; }
"#;

pub fn dashboard_layout(title: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                script src=(PLOTLY_JS) charset="utf-8" {}
                style { (PreEscaped(STYLE)) }
            }
            body {
                main { (content) }
            }
        }
    }
}
