use async_trait::async_trait;

use crate::domain::comment::PublishReceipt;
use crate::error::AppResult;

#[async_trait]
pub trait CommentPublisher: Send + Sync {
    /// Posts `body` as a new comment. A rejected request is reported through
    /// the receipt's status; only failures to reach the server are errors.
    async fn publish(&self, body: &str) -> AppResult<PublishReceipt>;
}
