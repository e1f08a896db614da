pub mod aggregation_service;
pub mod data_service;
