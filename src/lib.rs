pub mod assets;
pub mod config;
pub mod content;
pub mod db;
pub mod error;
pub mod middleware;
pub mod migrate;
pub mod observability;
pub mod routes;
pub mod server;
pub mod template;

pub use config::Config;
pub use routes::AppState;
