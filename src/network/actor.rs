//! Network actor - runs the customer fetch in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, fetch_customers};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(response_tx: mpsc::UnboundedSender<NetworkResponse>, timeout_secs: u64) -> Self {
        NetworkActor {
            client: create_client(timeout_secs),
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchCustomers { id, url }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();

                            // Not cancellable: the app layer discards late results
                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %url, "Executing customer fetch");
                                let result = fetch_customers(&client, &url, id).await;
                                tracing::info!(id, time_ms = result.time_ms(), "Customer fetch completed");
                                if response_tx.send(result).is_err() {
                                    tracing::debug!(id, "App layer gone, dropping fetch result");
                                }
                            });
                        }

                        Some(NetworkCommand::Shutdown) | None => {
                            // In-flight fetches may still resolve; their results are ignored
                            self.active_requests.detach_all();
                            break;
                        }
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}
