pub mod comment;
pub mod plan;
pub mod show;
pub mod summary;
