//! HTTP status API
//!
//! Read-mostly endpoints exposing the monitoring session: daemon liveness,
//! target status, metric samples, alerts and incidents.

pub mod routes;
pub mod server;
pub mod state;
mod utils;


pub use server::HttpServer;
pub use state::AppState;
