use std::sync::Arc;

use crate::config::Config;
use crate::domain::services::catalog::CatalogService;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<CatalogService>,
}
