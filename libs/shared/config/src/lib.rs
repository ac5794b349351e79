use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub availability_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = match env::var("PORT") {
            Ok(value) => value.parse().unwrap_or_else(|_| {
                warn!("PORT is not a valid port number, using default 3000");
                3000
            }),
            Err(_) => 3000,
        };

        let availability_seed = match env::var("AVAILABILITY_SEED") {
            Ok(value) => match value.parse() {
                Ok(seed) => Some(seed),
                Err(_) => {
                    warn!("AVAILABILITY_SEED is not a valid u64, ignoring");
                    None
                }
            },
            Err(_) => None,
        };

        Self {
            port,
            availability_seed,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            availability_seed: None,
        }
    }
}
