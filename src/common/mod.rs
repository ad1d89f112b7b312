pub mod config;
pub mod errors;
pub mod utils;

pub const DEFAULT_REGION: &str = "us-west-2";
pub const LISTEN_ADDR_DEFAULT: &str = "localhost:8080";
