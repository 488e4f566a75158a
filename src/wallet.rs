//! Wallet adapter seam.
//!
//! Components never sign anything themselves; they hand unsigned transactions
//! to a [`WalletAdapter`] and get signed envelopes back. The concrete adapter
//! here holds a local Ed25519 keypair loaded from a Solana-CLI-style keypair
//! file (a JSON array of 64 bytes).

use std::path::Path;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ed25519_dalek::{Signer, SigningKey};

use crate::error::{Result, WalletError};
use crate::transaction::{Pubkey, SignedTransaction, TransferTransaction};

#[async_trait]
pub trait WalletAdapter: Send + Sync {
    /// Public key of the connected account, if any.
    fn pubkey(&self) -> Option<Pubkey>;

    async fn sign_transaction(&self, tx: &TransferTransaction) -> Result<SignedTransaction>;

    async fn sign_all_transactions(
        &self,
        txs: &[TransferTransaction],
    ) -> Result<Vec<SignedTransaction>>;
}

/// Session handle shared across components; `None` while disconnected.
pub type SharedWallet = Arc<Mutex<Option<LocalWallet>>>;

// ---------------------------------------------------------------------------
// LocalWallet
// ---------------------------------------------------------------------------

/// Wallet backed by an in-process Ed25519 keypair.
#[derive(Clone)]
pub struct LocalWallet {
    signing_key: SigningKey,
    pubkey: Pubkey,
}

impl LocalWallet {
    pub fn from_keypair_bytes(bytes: &[u8; 64]) -> Result<Self> {
        let signing_key = SigningKey::from_keypair_bytes(bytes)
            .map_err(|e| WalletError::Keypair(e.to_string()))?;
        let pubkey = Pubkey(signing_key.verifying_key().to_bytes());
        Ok(Self {
            signing_key,
            pubkey,
        })
    }

    /// Load a keypair file in the Solana CLI format (`id.json`).
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| WalletError::Keypair(format!("{}: {e}", path.display())))?;
        let bytes: Vec<u8> = serde_json::from_str(&raw)
            .map_err(|e| WalletError::Keypair(format!("{}: {e}", path.display())))?;
        let arr: [u8; 64] = bytes
            .try_into()
            .map_err(|v: Vec<u8>| WalletError::Keypair(format!("expected 64 bytes, got {}", v.len())))?;
        Self::from_keypair_bytes(&arr)
    }

    fn sign(&self, tx: &TransferTransaction) -> SignedTransaction {
        let signature = self.signing_key.sign(tx.message()).to_bytes();
        SignedTransaction::new(signature, tx.message())
    }
}

#[async_trait]
impl WalletAdapter for LocalWallet {
    fn pubkey(&self) -> Option<Pubkey> {
        Some(self.pubkey)
    }

    async fn sign_transaction(&self, tx: &TransferTransaction) -> Result<SignedTransaction> {
        Ok(self.sign(tx))
    }

    async fn sign_all_transactions(
        &self,
        txs: &[TransferTransaction],
    ) -> Result<Vec<SignedTransaction>> {
        Ok(txs.iter().map(|tx| self.sign(tx)).collect())
    }
}
