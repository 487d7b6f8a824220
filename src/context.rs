use std::sync::Arc;

use crate::config::AppConfig;
use crate::services::CommentPublisher;

#[derive(Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub publisher: Arc<dyn CommentPublisher>,
}

impl AppContext {
    pub fn new(config: AppConfig, publisher: Arc<dyn CommentPublisher>) -> Self {
        Self { config, publisher }
    }
}
