pub mod cli;
pub mod config_store;
pub mod errors;
pub mod execute;
pub mod header_parser;
pub mod http_request_executor;
pub mod request_config;
