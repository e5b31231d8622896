pub mod dropdown;
pub mod error;
pub mod graph;

pub use dropdown::multi_select;
pub use error::error_page;
pub use graph::{graph, static_graph};
