use crate::config::Config;
use crate::dashboard::Dashboard;
use crate::router::handle;
use astra::Server;
use std::sync::Arc;

mod charts;
mod config;
mod dashboard;
mod data;
mod errors;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::default();

    // 1️⃣ Load the listings and build every static chart before serving
    let dashboard = match data::load_listings(&config.data_path).and_then(Dashboard::new) {
        Ok(dashboard) => Arc::new(dashboard),
        Err(e) => {
            log::error!("Startup failed: {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Start the server
    log::info!(
        "Starting server at http://{} ({} listings)",
        config.addr,
        dashboard.table().len()
    );
    let server = Server::bind(&config.addr).max_workers(config.max_workers);

    // 3️⃣ Serve requests, sharing the read-only dashboard across workers
    let result = server.serve(move |req, _info| match handle(req, &dashboard) {
        Ok(resp) => resp,
        Err(err) => {
            log::warn!("Request failed: {err}");
            responses::error_response(err)
        }
    });

    if let Err(e) = result {
        log::error!("Server ended with error: {e}");
    }

    log::info!("Server shut down cleanly.");
}
