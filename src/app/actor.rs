//! App actor - message loop processing UI events and network responses

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};

/// App actor that processes UI events and network responses
pub struct AppActor {
    state: AppState,
    network_tx: mpsc::UnboundedSender<NetworkCommand>,
    render_tx: mpsc::UnboundedSender<RenderState>,
}

impl AppActor {
    pub fn new(
        network_tx: mpsc::UnboundedSender<NetworkCommand>,
        render_tx: mpsc::UnboundedSender<RenderState>,
    ) -> Self {
        AppActor {
            state: AppState::new(),
            network_tx,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(
        mut self,
        mut ui_rx: mpsc::UnboundedReceiver<UiEvent>,
        mut net_rx: mpsc::UnboundedReceiver<NetworkResponse>,
    ) {
        // Send initial render state, then mount
        self.publish();
        let cmd = self.state.on_mount();
        self.dispatch(Some(cmd));
        self.publish();

        loop {
            tokio::select! {
                Some(event) = ui_rx.recv() => {
                    if self.handle_ui_event(event) {
                        // Quit signal received
                        let _ = self.network_tx.send(NetworkCommand::Shutdown);
                        break;
                    }
                    self.publish();
                }
                Some(response) = net_rx.recv() => {
                    self.state.handle_response(response);
                    self.publish();
                }
                else => break,
            }
        }
    }

    /// Handle a UI event, returns true if quit was requested
    fn handle_ui_event(&mut self, event: UiEvent) -> bool {
        match event {
            // Category selector
            UiEvent::SelectCategory(category) => {
                let cmd = self.state.change_category(category);
                self.dispatch(cmd);
            }
            UiEvent::NextCategory => {
                let cmd = self.state.next_category();
                self.dispatch(cmd);
            }
            UiEvent::PrevCategory => {
                let cmd = self.state.prev_category();
                self.dispatch(cmd);
            }

            // Success view
            UiEvent::NextProject => self.state.next_project(),
            UiEvent::PrevProject => self.state.prev_project(),

            // Failure view
            UiEvent::Retry => {
                let cmd = self.state.retry();
                self.dispatch(cmd);
            }

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            // System
            UiEvent::Quit => return true,
        }

        false
    }

    fn dispatch(&self, cmd: Option<NetworkCommand>) {
        if let Some(cmd) = cmd {
            let _ = self.network_tx.send(cmd);
        }
    }

    fn publish(&self) {
        let _ = self.render_tx.send(self.state.to_render_state());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::RequestStatus;
    use crate::error::FetchError;
    use crate::models::{Category, Project};

    struct Harness {
        ui_tx: mpsc::UnboundedSender<UiEvent>,
        resp_tx: mpsc::UnboundedSender<NetworkResponse>,
        cmd_rx: mpsc::UnboundedReceiver<NetworkCommand>,
        render_rx: mpsc::UnboundedReceiver<RenderState>,
        handle: tokio::task::JoinHandle<()>,
    }

    fn spawn_actor() -> Harness {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(AppActor::new(cmd_tx, render_tx).run(ui_rx, resp_rx));
        Harness { ui_tx, resp_tx, cmd_rx, render_rx, handle }
    }

    async fn next_fetch(h: &mut Harness) -> (u64, Category) {
        match h.cmd_rx.recv().await {
            Some(NetworkCommand::FetchProjects { id, category }) => (id, category),
            other => panic!("expected fetch, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_mount_renders_initial_then_loading() {
        let mut h = spawn_actor();

        let (_, category) = next_fetch(&mut h).await;
        assert_eq!(category, Category::All);

        let first = h.render_rx.recv().await.unwrap();
        assert_eq!(first.status, RequestStatus::Initial);
        let second = h.render_rx.recv().await.unwrap();
        assert_eq!(second.status, RequestStatus::Loading);

        // No second fetch without user interaction
        assert!(h.cmd_rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_category_switch_shows_loading_before_result() {
        let mut h = spawn_actor();
        let (id, _) = next_fetch(&mut h).await;
        h.resp_tx
            .send(NetworkResponse::Projects {
                id,
                category: Category::All,
                projects: vec![],
                time_ms: 1,
            })
            .unwrap();
        while let Some(state) = h.render_rx.recv().await {
            if matches!(state.status, RequestStatus::Success(_)) {
                break;
            }
        }

        h.ui_tx.send(UiEvent::SelectCategory(Category::Static)).unwrap();
        let (id, category) = next_fetch(&mut h).await;
        assert_eq!(category, Category::Static);

        let project = Project {
            id: "1".into(),
            name: "Abc".into(),
            image_url: "http://x/1.png".into(),
        };
        h.resp_tx
            .send(NetworkResponse::Projects {
                id,
                category,
                projects: vec![project.clone()],
                time_ms: 1,
            })
            .unwrap();

        let mut statuses = Vec::new();
        while let Some(state) = h.render_rx.recv().await {
            let done = matches!(&state.status, RequestStatus::Success(p) if p.len() == 1);
            statuses.push((state.category, state.status));
            if done {
                break;
            }
        }

        let static_states: Vec<_> = statuses
            .iter()
            .filter(|(c, _)| *c == Category::Static)
            .map(|(_, s)| s.clone())
            .collect();
        assert_eq!(
            static_states,
            vec![RequestStatus::Loading, RequestStatus::Success(vec![project])]
        );
    }

    #[tokio::test]
    async fn test_retry_refetches_current_category() {
        let mut h = spawn_actor();
        let (id, category) = next_fetch(&mut h).await;
        h.resp_tx
            .send(NetworkResponse::Failed {
                id,
                category,
                error: FetchError::Status(404),
                time_ms: 1,
            })
            .unwrap();

        // Wait until the failure is observed before retrying
        while let Some(state) = h.render_rx.recv().await {
            if state.is_failure() {
                break;
            }
        }

        h.ui_tx.send(UiEvent::Retry).unwrap();
        let (retry_id, retry_category) = next_fetch(&mut h).await;
        assert_eq!(retry_category, Category::All);
        assert!(retry_id > id);
    }

    #[tokio::test]
    async fn test_quit_shuts_down_network() {
        let mut h = spawn_actor();
        next_fetch(&mut h).await;

        h.ui_tx.send(UiEvent::Quit).unwrap();
        assert_eq!(h.cmd_rx.recv().await, Some(NetworkCommand::Shutdown));
        h.handle.await.unwrap();
    }

    /// Mount against a mock API, run the whole chain and draw the settled view
    async fn settled_screen(status: usize, body: &str) -> String {
        use crate::config::Config;
        use crate::network::NetworkActor;
        use crate::ui::draw_ui;
        use mockito::Matcher;
        use ratatui::{backend::TestBackend, Terminal};

        let mut server = mockito::Server::new_async().await;
        let m = server
            .mock("GET", "/ps/projects")
            .match_query(Matcher::UrlEncoded("category".into(), "ALL".into()))
            .with_status(status)
            .with_body(body)
            .expect(1)
            .create_async()
            .await;

        let (_ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();
        let (render_tx, mut render_rx) = mpsc::unbounded_channel();

        let config = Config::with_api_url(format!("{}/ps/projects", server.url()));
        tokio::spawn(NetworkActor::new(config, resp_tx).run(cmd_rx));
        tokio::spawn(AppActor::new(cmd_tx, render_tx).run(ui_rx, resp_rx));

        let mut settled = None;
        while let Some(state) = render_rx.recv().await {
            if matches!(state.status, RequestStatus::Success(_) | RequestStatus::Failure(_)) {
                settled = Some(state);
                break;
            }
        }
        let state = settled.expect("fetch settles");
        m.assert_async().await;

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| draw_ui(f, &state, 0)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_mount_with_projects_shows_card() {
        let screen = settled_screen(
            200,
            r#"{"projects":[{"id":"1","name":"Abc","image_url":"http://x/1.png"}]}"#,
        )
        .await;

        assert!(screen.contains("Projects (1)"), "{}", screen);
        assert!(screen.contains("Abc"));
        assert!(screen.contains("img: http://x/1.png"));
    }

    #[tokio::test]
    async fn test_mount_with_not_found_shows_failure() {
        let screen = settled_screen(404, "").await;

        assert!(screen.contains(crate::constants::FAILURE_TITLE), "{}", screen);
        assert!(screen.contains(crate::constants::RETRY_LABEL));
    }
}
