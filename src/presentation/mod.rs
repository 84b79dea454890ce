pub mod config;
pub mod handlers;
pub mod router;
pub mod security_headers;
pub mod state;

pub use config::{Environment, ProviderFamily, Settings};
pub use router::create_router;
pub use state::AppState;
