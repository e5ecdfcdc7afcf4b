pub mod city;
pub mod client;
pub mod config;
pub mod constants;
pub mod fetch;
pub mod mapping;
pub mod palette;
pub mod report;

pub use config::get_config;
