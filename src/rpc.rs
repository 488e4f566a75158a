//! Minimal Solana JSON-RPC client.
//!
//! Only the three calls the dashboard uses are wrapped. Responses are parsed
//! straight out of `serde_json::Value`; RPC-level `error` objects become
//! [`WalletError::Rpc`].

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::{Result, WalletError};
use crate::transaction::Pubkey;

#[async_trait]
pub trait SolanaRpc: Send + Sync {
    /// Account balance in lamports.
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64>;

    /// Base58 blockhash accepted by the network as "recent".
    async fn latest_blockhash(&self) -> Result<String>;

    /// Submit a base64-encoded signed transaction; returns its signature.
    async fn send_transaction(&self, tx_base64: &str) -> Result<String>;
}

pub type SharedRpc = Arc<RpcClient>;

pub struct RpcClient {
    http: reqwest::Client,
    url: String,
}

impl RpcClient {
    pub fn new(url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.to_string(),
        }
    }

    async fn request(&self, method: &str, params: Value) -> Result<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": method,
            "params": params,
        });
        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl SolanaRpc for RpcClient {
    async fn balance(&self, pubkey: &Pubkey) -> Result<u64> {
        let v = self
            .request("getBalance", json!([pubkey.to_base58()]))
            .await?;
        parse_balance_response(&v)
    }

    async fn latest_blockhash(&self) -> Result<String> {
        let v = self.request("getLatestBlockhash", json!([])).await?;
        parse_blockhash_response(&v)
    }

    async fn send_transaction(&self, tx_base64: &str) -> Result<String> {
        let v = self
            .request(
                "sendTransaction",
                json!([tx_base64, { "encoding": "base64" }]),
            )
            .await?;
        parse_string_result(&v)
    }
}

// ---------------------------------------------------------------------------
// Response parsing
// ---------------------------------------------------------------------------

fn check_rpc_error(v: &Value) -> Result<()> {
    if let Some(err) = v.get("error") {
        let msg = err["message"].as_str().unwrap_or("unknown RPC error");
        return Err(WalletError::Rpc(msg.to_string()));
    }
    Ok(())
}

// getBalance returns: {"result":{"value": <lamports>}}
fn parse_balance_response(v: &Value) -> Result<u64> {
    check_rpc_error(v)?;
    v["result"]["value"]
        .as_u64()
        .ok_or_else(|| WalletError::JsonParse("missing balance value".into()))
}

// getLatestBlockhash returns: {"result":{"value":{"blockhash":"...","lastValidBlockHeight":N}}}
fn parse_blockhash_response(v: &Value) -> Result<String> {
    check_rpc_error(v)?;
    v["result"]["value"]["blockhash"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| WalletError::JsonParse("missing blockhash".into()))
}

// sendTransaction returns: {"result":"<signature>"}
fn parse_string_result(v: &Value) -> Result<String> {
    check_rpc_error(v)?;
    v["result"]
        .as_str()
        .map(String::from)
        .ok_or_else(|| WalletError::JsonParse("missing result string".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_balance() {
        let v = json!({"result": {"context": {"slot": 1}, "value": 12_345}});
        assert_eq!(parse_balance_response(&v).unwrap(), 12_345);
    }

    #[test]
    fn parses_blockhash() {
        let v = json!({"result": {"value": {"blockhash": "abc", "lastValidBlockHeight": 9}}});
        assert_eq!(parse_blockhash_response(&v).unwrap(), "abc");
    }

    #[test]
    fn parses_send_result() {
        let v = json!({"result": "5sig"});
        assert_eq!(parse_string_result(&v).unwrap(), "5sig");
    }

    #[test]
    fn surfaces_rpc_error_object() {
        let v = json!({"error": {"code": -32002, "message": "blockhash not found"}});
        let err = parse_string_result(&v).unwrap_err();
        assert!(matches!(err, WalletError::Rpc(msg) if msg == "blockhash not found"));
    }

    #[test]
    fn missing_result_is_a_parse_error() {
        let v = json!({"result": null});
        assert!(matches!(
            parse_balance_response(&v),
            Err(WalletError::JsonParse(_))
        ));
    }
}
