//! Service configuration, read from the environment once at startup
//!
//! Every setting has a default, so the service starts with no configuration at all.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const ADDR_VAR: &str = "ROUTING_ADDR";
pub const CSV_PATH_VAR: &str = "ROUTING_CSV_PATH";
pub const STATIC_DIR_VAR: &str = "ROUTING_STATIC_DIR";

pub const DEFAULT_ADDR: ([u8; 4], u16) = ([127, 0, 0, 1], 8080);
pub const DEFAULT_CSV_PATH: &str = "data/banks.csv";

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceConfig {
    /// Where the server listens
    pub addr: SocketAddr,
    /// The bank routing table
    pub csv_path: PathBuf,
    /// Directory of static files to serve; none are served if unset
    pub static_dir: Option<PathBuf>,
}

impl ServiceConfig {
    /// Reads `ROUTING_ADDR`, `ROUTING_CSV_PATH` and `ROUTING_STATIC_DIR`.
    pub fn from_env() -> Self {
        Self::from_values(
            env::var(ADDR_VAR).ok(),
            env::var(CSV_PATH_VAR).ok(),
            env::var(STATIC_DIR_VAR).ok(),
        )
    }

    /// **Builds a config from optional raw values**
    ///
    /// - A missing or unparsable address falls back to [`DEFAULT_ADDR`].
    /// - A missing or empty CSV path falls back to [`DEFAULT_CSV_PATH`].
    /// - A missing or empty static directory disables static files.
    pub fn from_values(
        addr: Option<String>,
        csv_path: Option<String>,
        static_dir: Option<String>,
    ) -> Self {
        let csv_path = match csv_path.filter(|p| !p.trim().is_empty()) {
            Some(path) => PathBuf::from(path),
            None => {
                log::info!(
                    "No {} provided; using default: {}",
                    CSV_PATH_VAR,
                    DEFAULT_CSV_PATH
                );
                PathBuf::from(DEFAULT_CSV_PATH)
            }
        };

        ServiceConfig {
            addr: parse_addr(addr),
            csv_path,
            static_dir: static_dir.filter(|d| !d.trim().is_empty()).map(PathBuf::from),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        ServiceConfig {
            addr: SocketAddr::from(DEFAULT_ADDR),
            csv_path: PathBuf::from(DEFAULT_CSV_PATH),
            static_dir: None,
        }
    }
}

fn parse_addr(addr: Option<String>) -> SocketAddr {
    let default = SocketAddr::from(DEFAULT_ADDR);

    let Some(addr) = addr else {
        log::info!("No {} provided; using default: {}", ADDR_VAR, default);
        return default;
    };

    addr.trim().parse().unwrap_or_else(|_| {
        log::warn!(
            "Provided {} \"{}\" could not be parsed; using default: {}",
            ADDR_VAR,
            addr,
            default
        );
        default
    })
}
