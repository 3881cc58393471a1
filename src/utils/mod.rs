pub mod args;
pub mod xml;
