//! Shared reactive state for the dashboard.

use crate::transaction::Pubkey;

/// Top-level state, stored in a Dioxus `Signal`.
#[derive(Clone, Debug, Default)]
pub struct WalletState {
    pub pubkey: Option<Pubkey>,
    /// Last successfully fetched balance, in lamports. Stays at its previous
    /// value across a disconnect.
    pub balance_lamports: u64,
    pub last_error: Option<String>,
}

impl WalletState {
    pub fn connected(&self) -> bool {
        self.pubkey.is_some()
    }
}

/// Content panel selector.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Tools,
    Apps,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Apps, Tab::Tools];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Tools => "tools",
            Tab::Apps => "apps",
        }
    }
}

/// Per-form submit button lifecycle: Idle → Sending → Success → Idle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SendButtonState {
    #[default]
    Idle,
    Sending,
    Success,
}

impl SendButtonState {
    pub fn label(&self) -> &'static str {
        match self {
            SendButtonState::Idle => "Send SOL",
            SendButtonState::Sending => "Sending...",
            SendButtonState::Success => "Success",
        }
    }

    pub fn start(self) -> Self {
        SendButtonState::Sending
    }

    pub fn succeed(self) -> Self {
        SendButtonState::Success
    }

    pub fn reset(self) -> Self {
        SendButtonState::Idle
    }
}

/// Single-transfer form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SingleForm {
    pub recipient: String,
    pub amount: String,
}

impl Default for SingleForm {
    fn default() -> Self {
        Self {
            recipient: String::new(),
            amount: "0.01".to_string(),
        }
    }
}

/// Batched-transfer form fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BatchForm {
    pub recipient1: String,
    pub amount1: String,
    pub recipient2: String,
    pub amount2: String,
}

impl Default for BatchForm {
    fn default() -> Self {
        Self {
            recipient1: String::new(),
            amount1: "0.01".to_string(),
            recipient2: String::new(),
            amount2: "0.01".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_lifecycle() {
        let state = SendButtonState::default();
        assert_eq!(state, SendButtonState::Idle);
        assert_eq!(state.label(), "Send SOL");

        let sending = state.start();
        assert_eq!(sending.label(), "Sending...");

        let success = sending.succeed();
        assert_eq!(success.label(), "Success");

        assert_eq!(success.reset(), SendButtonState::Idle);
    }

    #[test]
    fn form_defaults_carry_fixed_display_amount() {
        assert_eq!(SingleForm::default().amount, "0.01");
        let batch = BatchForm::default();
        assert_eq!(batch.amount1, "0.01");
        assert_eq!(batch.amount2, "0.01");
        assert!(batch.recipient1.is_empty());
    }

    #[test]
    fn disconnect_does_not_touch_balance() {
        let mut state = WalletState {
            pubkey: Some(Pubkey([1u8; 32])),
            balance_lamports: 500,
            last_error: None,
        };
        state.pubkey = None;
        assert!(!state.connected());
        assert_eq!(state.balance_lamports, 500);
    }
}
