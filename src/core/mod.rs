pub mod deps;
pub mod error;
pub mod merger;
pub mod packager;
pub mod stamper;
pub mod version;
