use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    /// CSV file with the cleaned listings.
    pub data_path: PathBuf,
    pub addr: SocketAddr,
    /// Upper bound on astra's worker threads.
    pub max_workers: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("cleaned_airbnb.csv"),
            addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            max_workers: 8,
        }
    }
}
