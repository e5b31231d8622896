use maud::{html, Markup};

/// Multi-select dropdown. An option starts checked when it is in `selected`.
/// Checked values are posted under `name`.
pub fn multi_select(
    id: &str,
    label: &str,
    name: &str,
    options: &[String],
    selected: &[String],
) -> Markup {
    html! {
        div class="filter" {
            span class="filter-label" { (label) }
            details class="dropdown" id=(id) {
                summary { span class="summary-text" { (summary_text(selected)) } }
                div class="options" {
                    @for option in options {
                        label {
                            input
                                type="checkbox"
                                name=(name)
                                value=(option)
                                checked[selected.contains(option)];
                            " " (option)
                        }
                    }
                }
            }
        }
    }
}

fn summary_text(selected: &[String]) -> String {
    if selected.is_empty() {
        "None selected".to_string()
    } else {
        selected.join(", ")
    }
}
