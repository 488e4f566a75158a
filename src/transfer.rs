//! The two transfer flows behind the tools panel.
//!
//! Both flows are plain async functions over the wallet and RPC seams so the
//! UI handlers stay thin and the flows can be driven by mock collaborators.

use tracing::debug;

use crate::error::{Result, WalletError};
use crate::rpc::SolanaRpc;
use crate::transaction::{Pubkey, TransferTransaction, LAMPORTS_PER_SOL};
use crate::wallet::WalletAdapter;

/// Amount sent by both tools. The form amount fields are display-only.
pub const TRANSFER_LAMPORTS: u64 = LAMPORTS_PER_SOL / 100;

/// Send one fixed-amount transfer to `recipient`.
///
/// Returns the one-element signature list for display.
pub async fn send_single<W, R>(wallet: &W, rpc: &R, recipient: &str) -> Result<Vec<String>>
where
    W: WalletAdapter + ?Sized,
    R: SolanaRpc + ?Sized,
{
    let payer = wallet.pubkey().ok_or(WalletError::NotConnected)?;
    let recipient = recipient.trim();
    if recipient.is_empty() {
        return Err(WalletError::MissingRecipient);
    }
    let to: Pubkey = recipient.parse()?;

    let blockhash = rpc.latest_blockhash().await?;
    let tx = TransferTransaction::transfer(&payer, &to, TRANSFER_LAMPORTS, &blockhash)?;
    let signed = wallet.sign_transaction(&tx).await?;
    debug!(signature = %signed.signature_base58(), "submitting transfer");
    let signature = rpc.send_transaction(&signed.to_base64()).await?;
    Ok(vec![signature])
}

/// Send two fixed-amount transfers signed as one batch, submitted
/// sequentially in recipient order.
pub async fn send_batched<W, R>(
    wallet: &W,
    rpc: &R,
    recipient1: &str,
    recipient2: &str,
) -> Result<Vec<String>>
where
    W: WalletAdapter + ?Sized,
    R: SolanaRpc + ?Sized,
{
    let payer = wallet.pubkey().ok_or(WalletError::NotConnected)?;
    let (recipient1, recipient2) = (recipient1.trim(), recipient2.trim());
    if recipient1.is_empty() || recipient2.is_empty() {
        return Err(WalletError::MissingRecipient);
    }
    let to1: Pubkey = recipient1.parse()?;
    let to2: Pubkey = recipient2.parse()?;

    // Each transaction gets its own blockhash fetch; the two may reference
    // different blocks.
    let blockhash1 = rpc.latest_blockhash().await?;
    let tx1 = TransferTransaction::transfer(&payer, &to1, TRANSFER_LAMPORTS, &blockhash1)?;
    let blockhash2 = rpc.latest_blockhash().await?;
    let tx2 = TransferTransaction::transfer(&payer, &to2, TRANSFER_LAMPORTS, &blockhash2)?;

    let signed = wallet.sign_all_transactions(&[tx1, tx2]).await?;

    let mut signatures = Vec::with_capacity(signed.len());
    for tx in &signed {
        let signature = rpc.send_transaction(&tx.to_base64()).await?;
        debug!(%signature, "submitted batched transfer");
        signatures.push(signature);
    }
    Ok(signatures)
}
