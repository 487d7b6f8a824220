pub mod comment_publisher;

pub use comment_publisher::CommentPublisher;
