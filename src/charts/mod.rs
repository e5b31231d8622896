pub mod dynamic;
pub mod figure;
pub mod palette;
pub mod static_set;

pub use dynamic::DynamicCharts;
pub use figure::Figure;
pub use static_set::StaticCharts;
