use dioxus::prelude::*;
use tracing::warn;

use super::header::Header;
use super::tools::Tools;
use crate::rpc::{SharedRpc, SolanaRpc};
use crate::state::{Tab, WalletState};
use crate::transaction::LAMPORTS_PER_SOL;

const SOL_LOGO_URL: &str = "https://raw.githubusercontent.com/solana-labs/token-list/main/assets/mainnet/So11111111111111111111111111111111111111112/logo.png";

/// Connection header, balance readout, and the {apps, tools} tab panel.
///
/// The panel only renders while a wallet is connected and the balance is
/// non-zero, matching the original dashboard behavior.
#[component]
pub fn Shell() -> Element {
    let mut state = use_context::<Signal<WalletState>>();
    let rpc = use_context::<SharedRpc>();
    let mut active_tab = use_signal(Tab::default);

    // Refetch the balance whenever the connected account changes. The memo
    // keeps balance writes from re-triggering the effect.
    let connected_pubkey = use_memo(move || state.read().pubkey);
    {
        let rpc = rpc.clone();
        use_effect(move || {
            let Some(pubkey) = connected_pubkey() else {
                return;
            };
            let rpc = rpc.clone();
            spawn(async move {
                match rpc.balance(&pubkey).await {
                    Ok(lamports) => state.write().balance_lamports = lamports,
                    Err(e) => warn!(%e, "balance fetch failed"),
                }
            });
        });
    }

    let connected = state.read().connected();
    let balance = state.read().balance_lamports;

    rsx! {
        div { class: "container",
            Header {}
            if connected && balance != 0 {
                div { class: "balance",
                    div { "Balance" }
                    div {
                        img { class: "token-logo", src: SOL_LOGO_URL }
                        "{format_sol(balance)} SOL"
                    }
                }
                div { class: "apps-container",
                    div { class: "tabs",
                        for tab in Tab::ALL {
                            div {
                                class: if tab == *active_tab.read() { "tab tab-active" } else { "tab" },
                                onclick: move |_| active_tab.set(tab),
                                "{tab.label()}"
                            }
                        }
                    }
                    div { class: "tab-panel",
                        match *active_tab.read() {
                            Tab::Tools => rsx! { Tools {} },
                            Tab::Apps => rsx! { "apps" },
                        }
                    }
                }
            }
        }
    }
}

fn format_sol(lamports: u64) -> String {
    let sol = lamports as f64 / LAMPORTS_PER_SOL as f64;
    format!("{sol}")
}

#[cfg(test)]
mod tests {
    use super::format_sol;

    #[test]
    fn formats_whole_and_fractional_sol() {
        assert_eq!(format_sol(1_000_000_000), "1");
        assert_eq!(format_sol(10_000_000), "0.01");
        assert_eq!(format_sol(1_500_000_000), "1.5");
    }
}
