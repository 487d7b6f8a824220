pub mod github;
pub mod plan_file;
