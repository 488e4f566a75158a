use std::sync::Arc;

use dioxus::prelude::*;
use tracing::warn;

use crate::config::AppConfig;
use crate::state::WalletState;
use crate::wallet::{LocalWallet, SharedWallet, WalletAdapter};

/// Wallet connect/disconnect controls. Centered while disconnected, spread
/// apart once a wallet session exists.
#[component]
pub fn Header() -> Element {
    let mut state = use_context::<Signal<WalletState>>();
    let session = use_context::<SharedWallet>();
    let config = use_context::<Arc<AppConfig>>();

    let connected = state.read().connected();
    let pubkey = state.read().pubkey;

    let session_for_disconnect = session.clone();
    let connect = move |_| {
        let session = session.clone();
        let path = config.keypair_path.clone();
        spawn(async move {
            let result = tokio::task::spawn_blocking(move || LocalWallet::load(&path))
                .await
                .unwrap();
            match result {
                Ok(wallet) => {
                    let pubkey = wallet.pubkey();
                    *session.lock().unwrap() = Some(wallet);
                    state.write().pubkey = pubkey;
                    state.write().last_error = None;
                }
                Err(e) => {
                    warn!(%e, "wallet connect failed");
                    state.write().last_error = Some(e.to_string());
                }
            }
        });
    };

    let disconnect = move |_| {
        *session_for_disconnect.lock().unwrap() = None;
        // Balance keeps its last fetched value across a disconnect.
        state.write().pubkey = None;
    };

    rsx! {
        div { class: if connected { "header" } else { "header header-centered" },
            if let Some(pk) = pubkey {
                div { class: "wallet-chip",
                    span { class: "dot" }
                    span { class: "mono", "{truncate_pubkey(&pk.to_base58())}" }
                }
                button { class: "btn btn-secondary", onclick: disconnect, "Disconnect" }
            } else {
                button { class: "btn btn-primary", onclick: connect, "Connect Wallet" }
            }
        }
        if let Some(err) = state.read().last_error.as_ref() {
            p { class: "error-text", "{err}" }
        }
    }
}

fn truncate_pubkey(pubkey: &str) -> String {
    if pubkey.len() > 12 {
        format!("{}...{}", &pubkey[..6], &pubkey[pubkey.len() - 4..])
    } else {
        pubkey.to_string()
    }
}
