pub mod api_client;
pub mod data_source;
pub mod fixtures;
