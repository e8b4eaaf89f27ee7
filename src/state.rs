use crate::config::Config;
use crate::parameter_store::ParameterStore;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ParameterStore>,
    pub config: Arc<Config>,
}
