//! Solana legacy wire format for single-signer SOL transfers.
//!
//! Only the slice of the format this app submits is implemented: a message
//! with three static account keys (payer, recipient, System Program) and one
//! Transfer instruction, wrapped in a single-signature envelope.

use std::fmt;
use std::str::FromStr;

use base64::{engine::general_purpose, Engine as _};

use crate::error::WalletError;

pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

/// System Program instruction discriminant for Transfer.
const TRANSFER_INSTRUCTION: u32 = 2;

// ---------------------------------------------------------------------------
// Pubkey
// ---------------------------------------------------------------------------

/// A 32-byte Solana account address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pubkey(pub [u8; 32]);

impl Pubkey {
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_base58(&self) -> String {
        bs58::encode(&self.0).into_string()
    }
}

impl FromStr for Pubkey {
    type Err = WalletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = bs58::decode(s)
            .into_vec()
            .map_err(|_| WalletError::InvalidAddress(s.to_string()))?;
        let arr: [u8; 32] = bytes
            .try_into()
            .map_err(|_| WalletError::InvalidAddress(s.to_string()))?;
        Ok(Self(arr))
    }
}

impl fmt::Display for Pubkey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_base58())
    }
}

// ---------------------------------------------------------------------------
// Unsigned transfer transaction
// ---------------------------------------------------------------------------

/// An unsigned, single-signer transfer message ready for signing.
pub struct TransferTransaction {
    message: Vec<u8>,
}

impl TransferTransaction {
    /// Build the message for a SOL transfer from `payer` to `recipient`.
    ///
    /// Layout: header, account keys [payer, recipient, system program],
    /// recent blockhash, one Transfer instruction.
    pub fn transfer(
        payer: &Pubkey,
        recipient: &Pubkey,
        lamports: u64,
        recent_blockhash: &str,
    ) -> Result<Self, WalletError> {
        let blockhash_bytes = bs58::decode(recent_blockhash)
            .into_vec()
            .map_err(|_| WalletError::InvalidBlockhash(recent_blockhash.to_string()))?;
        let blockhash: [u8; 32] = blockhash_bytes
            .try_into()
            .map_err(|_| WalletError::InvalidBlockhash(recent_blockhash.to_string()))?;

        let mut msg = Vec::with_capacity(256);

        // Header
        msg.push(1); // num_required_signatures
        msg.push(0); // num_readonly_signed
        msg.push(1); // num_readonly_unsigned (system program)

        // Account keys
        append_shortvec(&mut msg, 3);
        msg.extend_from_slice(payer.as_bytes());
        msg.extend_from_slice(recipient.as_bytes());
        msg.extend_from_slice(&SYSTEM_PROGRAM_ID);

        msg.extend_from_slice(&blockhash);

        // One instruction
        append_shortvec(&mut msg, 1);
        msg.push(2); // program_id index (System Program)
        append_shortvec(&mut msg, 2); // account indexes
        msg.push(0); // payer
        msg.push(1); // recipient

        // Instruction data: 4-byte discriminant + 8-byte lamports LE
        let mut data = [0u8; 12];
        data[..4].copy_from_slice(&TRANSFER_INSTRUCTION.to_le_bytes());
        data[4..].copy_from_slice(&lamports.to_le_bytes());
        append_shortvec(&mut msg, data.len());
        msg.extend_from_slice(&data);

        Ok(Self { message: msg })
    }

    /// The serialized message bytes the wallet signs.
    pub fn message(&self) -> &[u8] {
        &self.message
    }
}

// ---------------------------------------------------------------------------
// Signed transaction
// ---------------------------------------------------------------------------

/// A fully signed transaction: `shortvec(1) ‖ signature ‖ message`.
pub struct SignedTransaction {
    wire: Vec<u8>,
}

impl SignedTransaction {
    pub fn new(signature: [u8; 64], message: &[u8]) -> Self {
        let mut wire = Vec::with_capacity(1 + 64 + message.len());
        append_shortvec(&mut wire, 1);
        wire.extend_from_slice(&signature);
        wire.extend_from_slice(message);
        Self { wire }
    }

    pub fn to_base64(&self) -> String {
        general_purpose::STANDARD.encode(&self.wire)
    }

    /// Base58 of the payer signature, usable as the transaction identifier.
    pub fn signature_base58(&self) -> String {
        bs58::encode(&self.wire[1..65]).into_string()
    }
}

/// Append a compact-u16 encoded value (Solana "shortvec").
fn append_shortvec(buf: &mut Vec<u8>, mut value: usize) {
    loop {
        let mut byte = (value & 0x7F) as u8;
        value >>= 7;
        if value != 0 {
            byte |= 0x80;
        }
        buf.push(byte);
        if value == 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pubkey(byte: u8) -> Pubkey {
        Pubkey([byte; 32])
    }

    fn blockhash(byte: u8) -> String {
        bs58::encode([byte; 32]).into_string()
    }

    #[test]
    fn test_shortvec_encoding() {
        let mut buf = Vec::new();
        append_shortvec(&mut buf, 0);
        assert_eq!(buf, vec![0]);

        buf.clear();
        append_shortvec(&mut buf, 1);
        assert_eq!(buf, vec![1]);

        buf.clear();
        append_shortvec(&mut buf, 127);
        assert_eq!(buf, vec![127]);

        buf.clear();
        append_shortvec(&mut buf, 128);
        assert_eq!(buf, vec![0x80, 0x01]);

        buf.clear();
        append_shortvec(&mut buf, 0x3FFF);
        assert_eq!(buf, vec![0xFF, 0x7F]);
    }

    #[test]
    fn pubkey_base58_round_trip() {
        let pk = pubkey(7);
        let parsed: Pubkey = pk.to_base58().parse().unwrap();
        assert_eq!(parsed, pk);
    }

    #[test]
    fn pubkey_rejects_wrong_length() {
        assert!("abc".parse::<Pubkey>().is_err());
        assert!("not-base58!!".parse::<Pubkey>().is_err());
    }

    #[test]
    fn transfer_message_layout() {
        let payer = pubkey(1);
        let recipient = pubkey(2);
        let tx =
            TransferTransaction::transfer(&payer, &recipient, 10_000_000, &blockhash(9)).unwrap();
        let msg = tx.message();

        // Header
        assert_eq!(&msg[..3], &[1, 0, 1]);
        // Account keys: count + payer + recipient + system program
        assert_eq!(msg[3], 3);
        assert_eq!(&msg[4..36], payer.as_bytes());
        assert_eq!(&msg[36..68], recipient.as_bytes());
        assert_eq!(&msg[68..100], &[0u8; 32]);
        // Blockhash
        assert_eq!(&msg[100..132], &[9u8; 32]);
        // One instruction against the system program, accounts [payer, recipient]
        assert_eq!(&msg[132..137], &[1, 2, 2, 0, 1]);
        // 12 data bytes: discriminant 2, then lamports LE
        assert_eq!(msg[137], 12);
        assert_eq!(&msg[138..142], &2u32.to_le_bytes());
        assert_eq!(&msg[142..150], &10_000_000u64.to_le_bytes());
        assert_eq!(msg.len(), 150);
    }

    #[test]
    fn transfer_rejects_bad_blockhash() {
        let err = TransferTransaction::transfer(&pubkey(1), &pubkey(2), 1, "tooshort");
        assert!(matches!(err, Err(WalletError::InvalidBlockhash(_))));
    }

    #[test]
    fn signed_transaction_envelope() {
        let tx = TransferTransaction::transfer(&pubkey(1), &pubkey(2), 1, &blockhash(3)).unwrap();
        let signed = SignedTransaction::new([5u8; 64], tx.message());
        assert_eq!(signed.wire[0], 1);
        assert_eq!(&signed.wire[1..65], &[5u8; 64]);
        assert_eq!(&signed.wire[65..], tx.message());
        assert_eq!(signed.signature_base58(), bs58::encode([5u8; 64]).into_string());

        let decoded = general_purpose::STANDARD
            .decode(signed.to_base64())
            .unwrap();
        assert_eq!(decoded, signed.wire);
    }
}
