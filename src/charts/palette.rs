// Color sequences, as shipped with Plotly.

/// Qualitative "Bold".
pub const BOLD: &[&str] = &[
    "rgb(127, 60, 141)",
    "rgb(17, 165, 121)",
    "rgb(57, 105, 172)",
    "rgb(242, 183, 1)",
    "rgb(231, 63, 116)",
    "rgb(128, 186, 90)",
    "rgb(230, 131, 16)",
    "rgb(0, 134, 149)",
    "rgb(207, 28, 144)",
    "rgb(249, 123, 114)",
    "rgb(165, 170, 153)",
];

/// Sequential "RdBu".
pub const RD_BU: &[&str] = &[
    "rgb(103,0,31)",
    "rgb(178,24,43)",
    "rgb(214,96,77)",
    "rgb(244,165,130)",
    "rgb(253,219,199)",
    "rgb(247,247,247)",
    "rgb(209,229,240)",
    "rgb(146,197,222)",
    "rgb(67,147,195)",
    "rgb(33,102,172)",
    "rgb(5,48,97)",
];

/// Sequential "Agsunset".
pub const AGSUNSET: &[&str] = &[
    "rgb(75, 41, 145)",
    "rgb(135, 44, 162)",
    "rgb(192, 54, 157)",
    "rgb(234, 79, 136)",
    "rgb(250, 120, 118)",
    "rgb(246, 169, 122)",
    "rgb(237, 217, 163)",
];

pub const ORANGE: &str = "#FF7F0E";
pub const BLUE: &str = "#636EFA";

/// The `i`-th color, wrapping around the sequence.
pub fn pick(palette: &[&'static str], i: usize) -> &'static str {
    palette[i % palette.len()]
}
