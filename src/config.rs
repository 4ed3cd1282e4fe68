use std::net::SocketAddr;

use anyhow::{Context, Result};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub seed_demo_data: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let bind_addr = env_string("RD_BIND_ADDR", "127.0.0.1:18090")
            .parse::<SocketAddr>()
            .context("RD_BIND_ADDR must be a valid host:port")?;

        let seed_demo_data = env_string("RD_SEED_DEMO_DATA", "false")
            .parse::<bool>()
            .context("RD_SEED_DEMO_DATA must be true or false")?;

        Ok(Self {
            bind_addr,
            seed_demo_data,
        })
    }
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
