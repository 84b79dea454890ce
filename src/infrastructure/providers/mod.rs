pub(crate) mod http;
mod provider_set_factory;

pub use provider_set_factory::{ProviderConfigError, ProviderSetFactory};
