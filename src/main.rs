mod components;
mod config;
mod error;
mod rpc;
mod state;
mod transaction;
mod transfer;
mod wallet;

use std::sync::{Arc, Mutex};

use dioxus::prelude::*;
use tracing_subscriber::EnvFilter;

use components::shell::Shell;
use config::AppConfig;
use rpc::{RpcClient, SharedRpc};
use state::WalletState;
use wallet::SharedWallet;

const STYLE: &str = include_str!("../assets/style.css");

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("soldash=info")),
        )
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // Provide shared state to all components
    let config = use_context_provider(|| Arc::new(AppConfig::from_env()));
    use_context_provider(|| Signal::new(WalletState::default()));
    use_context_provider::<SharedWallet>(|| Arc::new(Mutex::new(None)));
    use_context_provider::<SharedRpc>(|| Arc::new(RpcClient::new(&config.rpc_url)));

    rsx! {
        document::Style { {STYLE} }
        Shell {}
    }
}
