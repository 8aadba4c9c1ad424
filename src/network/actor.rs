//! Network actor - runs project fetches in the Tokio async runtime

use tokio::sync::mpsc;
use tokio::task::JoinSet;

use crate::config::Config;
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::network::client::{create_client, execute_fetch};

/// Network actor that processes fetch commands
pub struct NetworkActor {
    client: reqwest::Client,
    config: Config,
    response_tx: mpsc::UnboundedSender<NetworkResponse>,
    active_requests: JoinSet<()>,
}

impl NetworkActor {
    pub fn new(config: Config, response_tx: mpsc::UnboundedSender<NetworkResponse>) -> Self {
        NetworkActor {
            client: create_client(&config),
            config,
            response_tx,
            active_requests: JoinSet::new(),
        }
    }

    /// Run the network actor message loop
    pub async fn run(mut self, mut cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>) {
        loop {
            tokio::select! {
                biased;

                // Handle incoming commands
                cmd = cmd_rx.recv() => {
                    match cmd {
                        Some(NetworkCommand::FetchProjects { id, category }) => {
                            let response_tx = self.response_tx.clone();
                            let client = self.client.clone();
                            let config = self.config.clone();

                            // Not cancelled on category change; the App layer drops stale ids
                            self.active_requests.spawn(async move {
                                tracing::info!(id, url = %config.api_url, category = category.id(), "Executing fetch");
                                let result = execute_fetch(&client, &config, id, category).await;
                                tracing::info!(id, time_ms = result.time_ms(), "Fetch completed");
                                let _ = response_tx.send(result);
                            });
                        }

                        Some(NetworkCommand::Shutdown) => {
                            self.active_requests.abort_all();
                            break;
                        }

                        None => break,
                    }
                }

                // Clean up completed tasks
                Some(_result) = self.active_requests.join_next() => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use mockito::Matcher;

    #[tokio::test]
    async fn test_fetch_command_produces_response() {
        let mut server = mockito::Server::new_async().await;
        let _m = server
            .mock("GET", "/ps/projects")
            .match_query(Matcher::UrlEncoded("category".into(), "RESPONSIVE".into()))
            .with_status(200)
            .with_body(r#"{"projects":[{"id":"1","name":"Abc","image_url":"http://x/1.png"}]}"#)
            .create_async()
            .await;

        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, mut resp_rx) = mpsc::unbounded_channel();
        let config = Config::with_api_url(format!("{}/ps/projects", server.url()));
        let handle = tokio::spawn(NetworkActor::new(config, resp_tx).run(cmd_rx));

        cmd_tx
            .send(NetworkCommand::FetchProjects { id: 3, category: Category::Responsive })
            .unwrap();

        match resp_rx.recv().await {
            Some(NetworkResponse::Projects { id, category, projects, .. }) => {
                assert_eq!(id, 3);
                assert_eq!(category, Category::Responsive);
                assert_eq!(projects.len(), 1);
                assert_eq!(projects[0].name, "Abc");
            }
            other => panic!("unexpected {:?}", other),
        }

        cmd_tx.send(NetworkCommand::Shutdown).unwrap();
        handle.await.unwrap();
    }
}
