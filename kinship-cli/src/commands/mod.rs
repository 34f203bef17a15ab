pub mod config;
pub mod family;
pub mod members;
pub mod relations;
pub mod table;
