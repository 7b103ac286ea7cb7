pub mod app;
pub mod config;
pub mod feature;
pub mod feed;
pub mod synthesis;
