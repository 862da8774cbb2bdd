pub mod logic;

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080/";
