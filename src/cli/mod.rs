pub mod api_version;
pub mod deps;
pub mod merge;
pub mod package;
pub mod stamp;
