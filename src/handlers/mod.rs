pub mod show_handlers;

pub use show_handlers::{tv_show_handler, AppState};
