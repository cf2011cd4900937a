pub mod config;
pub mod console;
pub mod dto;
pub mod errors;
pub mod models;
pub mod routes;
pub mod states;

pub use console::Console;
pub use errors::FeedError;
pub use states::AppState;
