pub mod fixtures;
pub mod zip_server;
