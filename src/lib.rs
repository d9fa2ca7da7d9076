pub mod activity;
pub mod app;
pub mod cache;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod loader;
pub mod media;
pub mod models;
pub mod state;
pub mod summary;
pub mod table;
pub mod ui;

pub use app::router;
pub use config::Config;
pub use loader::HttpForecastSource;
pub use state::AppState;
