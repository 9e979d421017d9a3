//! End-to-end: actors wired as in `main`, against a local endpoint

mod common;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use customer_desk::{
    AppActor, AppState, FormField, I18n, LoadState, NetworkActor, NetworkCommand,
    NetworkResponse, RenderState, UiEvent,
};

use common::{customers_router, mock_data, spawn_server};

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl Harness {
    fn start(url: String) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
        let (render_tx, render_rx) = mpsc::unbounded_channel::<RenderState>();

        tokio::spawn(NetworkActor::new(net_resp_tx, 5).run(net_cmd_rx));
        let app = AppActor::new(AppState::new(url, I18n::new(Some("en-US"))), net_cmd_tx, render_tx);
        tokio::spawn(app.run(ui_rx, net_resp_rx));

        Harness { ui_tx, render_rx }
    }

    async fn next_state(&mut self) -> Option<RenderState> {
        timeout(Duration::from_secs(5), self.render_rx.recv())
            .await
            .expect("timed out waiting for render state")
    }

    /// Wait until loading has finished
    async fn settled(&mut self) -> RenderState {
        loop {
            let state = self.next_state().await.expect("app actor stopped");
            if !state.load.is_loading() {
                return state;
            }
        }
    }

    async fn send(&mut self, event: UiEvent) -> RenderState {
        self.ui_tx.send(event).unwrap();
        self.next_state().await.expect("app actor stopped")
    }
}

#[tokio::test]
async fn loading_then_list_with_one_row_per_customer() {
    let base = spawn_server(customers_router()).await;
    let mut harness = Harness::start(format!("{}/settings.json", base));

    let first = harness.next_state().await.unwrap();
    assert!(first.load.is_loading());
    assert_eq!(first.labels.loading, "loading...");

    let loaded = harness.settled().await;
    let expected = mock_data()["customers"].as_array().unwrap().len();
    assert_eq!(loaded.load.customers().unwrap().len(), expected);
}

#[tokio::test]
async fn error_status_shows_error_instead_of_list() {
    let base = spawn_server(customers_router()).await;
    let mut harness = Harness::start(format!("{}/broken.json", base));

    let state = harness.settled().await;
    assert!(matches!(state.load, LoadState::Errored(ref m) if m.contains("500")));
    assert!(state.load.customers().is_none());
}

#[tokio::test]
async fn edit_each_row_then_submit() {
    let base = spawn_server(customers_router()).await;
    let mut harness = Harness::start(format!("{}/settings.json", base));
    harness.settled().await;

    let data = mock_data();
    let customers = data["customers"].as_array().unwrap();
    for (i, expected) in customers.iter().enumerate() {
        let state = harness.send(UiEvent::EditSelected).await;
        let modal = state.modal.expect("modal should be open");
        for field in FormField::ALL {
            assert_eq!(modal.inputs.value(field), expected[field.key()].as_str().unwrap());
        }

        let state = harness.send(UiEvent::Submit).await;
        assert!(state.modal.is_none(), "valid form should close the modal");
        assert!(state.last_saved.is_some());

        if i + 1 < customers.len() {
            harness.send(UiEvent::NextRow).await;
        }
    }
}

#[tokio::test]
async fn empty_required_field_keeps_modal_open() {
    let base = spawn_server(customers_router()).await;
    let mut harness = Harness::start(format!("{}/settings.json", base));
    harness.settled().await;

    harness.send(UiEvent::EditSelected).await;
    harness.send(UiEvent::NextField).await; // email
    let mut state = harness.send(UiEvent::Backspace).await;
    while !state.modal.as_ref().unwrap().inputs.email.is_empty() {
        state = harness.send(UiEvent::Backspace).await;
    }

    let state = harness.send(UiEvent::Submit).await;
    let modal = state.modal.expect("modal should stay open");
    assert!(modal.errors.contains(FormField::Email));
    assert!(state.last_saved.is_none());

    let state = harness.send(UiEvent::CloseModal).await;
    assert!(state.modal.is_none());
}

#[tokio::test]
async fn language_toggle_updates_labels() {
    let base = spawn_server(customers_router()).await;
    let mut harness = Harness::start(format!("{}/settings.json", base));
    let before = harness.settled().await;

    let after = harness.send(UiEvent::ToggleLanguage).await;
    assert_ne!(after.labels.locale, before.labels.locale);
    assert_ne!(after.labels.loading, before.labels.loading);
}

#[tokio::test]
async fn quitting_before_fetch_resolves_discards_result() {
    let base = spawn_server(customers_router()).await;
    let mut harness = Harness::start(format!("{}/slow.json", base));

    let first = harness.next_state().await.unwrap();
    assert!(first.load.is_loading());

    harness.ui_tx.send(UiEvent::Quit).unwrap();
    // The actor stops without publishing a loaded list
    while let Some(state) = harness.next_state().await {
        assert!(state.load.is_loading());
    }
}
