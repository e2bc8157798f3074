pub mod app;
pub mod chart;
pub mod errors;
pub mod export;
pub mod handlers;
pub mod models;
pub mod reminder;
pub mod repo;
pub mod state;
pub mod storage;
pub mod ui;

pub use app::router;
pub use state::AppState;
pub use storage::{load_data, resolve_data_path};
