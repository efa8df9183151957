pub mod config;
pub mod display;
pub mod duration;
pub mod errors;
pub mod events;
