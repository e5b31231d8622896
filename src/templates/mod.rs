pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::error_page;
pub use layouts::dashboard::dashboard_layout;
