//! Error type shared by the wallet, RPC, and transfer modules.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WalletError>;

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no wallet connected")]
    NotConnected,

    #[error("recipient address required")]
    MissingRecipient,

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid blockhash: {0}")]
    InvalidBlockhash(String),

    #[error("keypair file: {0}")]
    Keypair(String),

    #[error("signing failed: {0}")]
    Signing(String),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("rpc error: {0}")]
    Rpc(String),

    #[error("json parse error: {0}")]
    JsonParse(String),
}
