use std::time::Duration;

use dioxus::prelude::*;
use tracing::error;

use crate::rpc::SharedRpc;
use crate::state::{BatchForm, SendButtonState, SingleForm};
use crate::transfer;
use crate::wallet::SharedWallet;

/// The two transfer forms and the shared signature readout.
///
/// Each form owns its busy flag and button-label state machine; a submit on
/// either form clears the shared signature list before running. After a
/// success the label and form revert after one second and the signatures are
/// wiped after ten — two independent timers that a later submission does not
/// cancel.
#[component]
pub fn Tools() -> Element {
    let session = use_context::<SharedWallet>();
    let rpc = use_context::<SharedRpc>();

    let mut single_form = use_signal(SingleForm::default);
    let mut batch_form = use_signal(BatchForm::default);
    let mut single_busy = use_signal(|| false);
    let mut batch_busy = use_signal(|| false);
    let mut single_button = use_signal(SendButtonState::default);
    let mut batch_button = use_signal(SendButtonState::default);
    let mut signatures = use_signal(Vec::<String>::new);

    let single_session = session.clone();
    let single_rpc = rpc.clone();
    let on_single = move |_| {
        let wallet = single_session.lock().unwrap().clone();
        let Some(wallet) = wallet else { return };
        let recipient = single_form.read().recipient.clone();
        if recipient.is_empty() {
            return;
        }
        let rpc = single_rpc.clone();

        single_busy.set(true);
        let started = single_button.read().start();
        single_button.set(started);
        signatures.set(Vec::new());

        spawn(async move {
            match transfer::send_single(&wallet, rpc.as_ref(), &recipient).await {
                Ok(sigs) => {
                    signatures.set(sigs);
                    let succeeded = single_button.read().succeed();
                    single_button.set(succeeded);

                    spawn(async move {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        let idle = single_button.read().reset();
                        single_button.set(idle);
                        single_form.set(SingleForm::default());
                    });
                    spawn(async move {
                        tokio::time::sleep(Duration::from_secs(10)).await;
                        signatures.set(Vec::new());
                    });
                }
                Err(err) => {
                    // Only the busy flag is rolled back on failure.
                    error!(%err, "single transfer failed");
                }
            }
            single_busy.set(false);
        });
    };

    let batch_session = session.clone();
    let batch_rpc = rpc.clone();
    let on_batch = move |_| {
        let wallet = batch_session.lock().unwrap().clone();
        let Some(wallet) = wallet else { return };
        let (recipient1, recipient2) = {
            let form = batch_form.read();
            (form.recipient1.clone(), form.recipient2.clone())
        };
        if recipient1.is_empty() || recipient2.is_empty() {
            return;
        }
        let rpc = batch_rpc.clone();

        batch_busy.set(true);
        let started = batch_button.read().start();
        batch_button.set(started);
        signatures.set(Vec::new());

        spawn(async move {
            match transfer::send_batched(&wallet, rpc.as_ref(), &recipient1, &recipient2).await {
                Ok(sigs) => {
                    signatures.set(sigs);
                    let succeeded = batch_button.read().succeed();
                    batch_button.set(succeeded);

                    spawn(async move {
                        tokio::time::sleep(Duration::from_secs(1)).await;
                        let idle = batch_button.read().reset();
                        batch_button.set(idle);
                        batch_form.set(BatchForm::default());
                    });
                    spawn(async move {
                        tokio::time::sleep(Duration::from_secs(10)).await;
                        signatures.set(Vec::new());
                    });
                }
                Err(err) => {
                    error!(%err, "batched transfer failed");
                }
            }
            batch_busy.set(false);
        });
    };

    let single_busy_now = *single_busy.read();
    let batch_busy_now = *batch_busy.read();
    let sigs = signatures.read();

    rsx! {
        div { class: "send-container",
            div { class: "send-single",
                div { "One transaction" }
                input {
                    r#type: "text",
                    placeholder: "SOL address",
                    disabled: single_busy_now,
                    value: "{single_form.read().recipient}",
                    oninput: move |e| single_form.write().recipient = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Amount",
                    disabled: true,
                    value: "{single_form.read().amount}",
                    oninput: move |e| single_form.write().amount = e.value(),
                }
                button {
                    disabled: single_busy_now,
                    onclick: on_single,
                    "{single_button.read().label()}"
                }
            }
            div { class: "send-multiple",
                div { "Multiple transactions" }
                input {
                    r#type: "text",
                    placeholder: "SOL address #1",
                    disabled: batch_busy_now,
                    value: "{batch_form.read().recipient1}",
                    oninput: move |e| batch_form.write().recipient1 = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Amount #1",
                    disabled: true,
                    value: "{batch_form.read().amount1}",
                    oninput: move |e| batch_form.write().amount1 = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "SOL address #2",
                    disabled: batch_busy_now,
                    value: "{batch_form.read().recipient2}",
                    oninput: move |e| batch_form.write().recipient2 = e.value(),
                }
                input {
                    r#type: "text",
                    placeholder: "Amount #2",
                    disabled: true,
                    value: "{batch_form.read().amount2}",
                    oninput: move |e| batch_form.write().amount2 = e.value(),
                }
                button {
                    disabled: batch_busy_now,
                    onclick: on_batch,
                    "{batch_button.read().label()}"
                }
            }
            if !sigs.is_empty() {
                div { class: "signatures",
                    div { "Signatures" }
                    for sig in sigs.iter() {
                        div { key: "{sig}", class: "signature", "{sig}" }
                    }
                }
            }
        }
    }
}
