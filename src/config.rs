//! Environment-driven configuration.

use std::path::PathBuf;

use directories::BaseDirs;

pub const DEFAULT_RPC_URL: &str = "https://api.devnet.solana.com";

#[derive(Clone, Debug)]
pub struct AppConfig {
    /// Solana JSON-RPC endpoint.
    pub rpc_url: String,
    /// Path to a Solana-CLI-style keypair file.
    pub keypair_path: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let rpc_url =
            std::env::var("SOLDASH_RPC_URL").unwrap_or_else(|_| DEFAULT_RPC_URL.to_string());
        let keypair_path = std::env::var_os("SOLDASH_KEYPAIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_keypair_path);
        Self {
            rpc_url,
            keypair_path,
        }
    }
}

fn default_keypair_path() -> PathBuf {
    BaseDirs::new()
        .map(|dirs| dirs.home_dir().join(".config/solana/id.json"))
        .unwrap_or_else(|| PathBuf::from("id.json"))
}
