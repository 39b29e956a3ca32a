pub mod client;
pub mod repositories;
pub mod services;
