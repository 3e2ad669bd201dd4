//! Background fetch of the post list

use super::App;
use crate::client::PostsClient;
use eframe::egui;
use tokio::sync::oneshot::{self, error::TryRecvError};
use tracing::{info, warn};

impl App {
    /// Spawn the one fetch for this session. Later calls are no-ops.
    pub fn start_fetch(&mut self, ctx: &egui::Context) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;
        self.view.begin_loading();

        let (tx, rx) = oneshot::channel();
        self.pending_fetch = Some(rx);

        let url = self.posts_url.clone();
        let ctx = ctx.clone();
        info!(url = %url, "Starting posts fetch");

        self.runtime.spawn(async move {
            let result = match PostsClient::new(url) {
                Ok(client) => client.fetch_posts().await,
                Err(e) => Err(e),
            };
            if tx.send(result).is_err() {
                warn!("Posts fetch finished after the view was closed");
            }
            ctx.request_repaint();
        });
    }

    /// Move a finished fetch result into the view. Called every frame.
    pub fn poll_fetch(&mut self) {
        let Some(rx) = self.pending_fetch.as_mut() else {
            return;
        };

        match rx.try_recv() {
            Ok(result) => {
                self.pending_fetch = None;
                self.view.finish(result);
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Closed) => {
                self.pending_fetch = None;
                warn!("Posts fetch task ended without a result");
                self.view.fail("the request was interrupted");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PostsView;
    use crate::error::FetchError;
    use crate::settings::ThemeChoice;
    use crate::types::{Body, LoadState};
    use std::io::{Read, Write};
    use std::time::Duration;

    fn test_app(url: &str) -> App {
        App {
            view: PostsView::default(),
            posts_url: url.to_string(),
            runtime: tokio::runtime::Builder::new_multi_thread()
                .worker_threads(1)
                .enable_all()
                .build()
                .unwrap(),
            pending_fetch: None,
            fetch_started: false,
            focus_search: false,
            theme: ThemeChoice::System,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir: std::env::temp_dir(),
        }
    }

    /// Poll like the frame loop until the fetch lands (or give up after ~10s).
    fn poll_until_done(app: &mut App) {
        for _ in 0..400 {
            app.poll_fetch();
            if app.pending_fetch.is_none() {
                return;
            }
            std::thread::sleep(Duration::from_millis(25));
        }
        panic!("fetch did not finish");
    }

    fn refused_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}/posts", addr)
    }

    #[test]
    fn dropped_sender_reports_interruption() {
        let mut app = test_app("http://127.0.0.1:1/posts");
        let (tx, rx) = oneshot::channel::<Result<Vec<crate::types::Post>, FetchError>>();
        app.pending_fetch = Some(rx);
        drop(tx);

        app.poll_fetch();

        assert!(app.pending_fetch.is_none());
        assert_eq!(app.view.body(), Body::Error("the request was interrupted"));
    }

    #[test]
    fn poll_without_fetch_is_a_no_op() {
        let mut app = test_app("http://127.0.0.1:1/posts");
        app.poll_fetch();
        assert_eq!(app.view.body(), Body::Loading);
    }

    #[test]
    fn refused_connection_reaches_error_state() {
        let mut app = test_app(&refused_url());
        let ctx = egui::Context::default();

        app.start_fetch(&ctx);
        assert_eq!(app.view.body(), Body::Loading);
        poll_until_done(&mut app);

        match app.view.body() {
            Body::Error(message) => assert!(message.starts_with("request failed"), "{}", message),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn second_start_does_not_fetch_again() {
        let mut app = test_app(&refused_url());
        let ctx = egui::Context::default();

        app.start_fetch(&ctx);
        poll_until_done(&mut app);
        assert!(matches!(app.view.load_state(), LoadState::Failed(_)));

        app.start_fetch(&ctx);
        assert!(app.pending_fetch.is_none());
        assert!(matches!(app.view.load_state(), LoadState::Failed(_)));
    }

    #[test]
    fn successful_fetch_fills_the_list() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let server = std::thread::spawn(move || {
            let (mut socket, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf);
            let body = r#"[{"userId":1,"id":1,"title":"first","body":"a"},{"userId":1,"id":2,"title":"second","body":"b"}]"#;
            let response = format!(
                "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).unwrap();
        });

        let mut app = test_app(&format!("http://{}/posts", addr));
        app.start_fetch(&egui::Context::default());
        poll_until_done(&mut app);
        server.join().unwrap();

        match app.view.body() {
            Body::Posts(posts) => {
                let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
                assert_eq!(titles, vec!["first", "second"]);
            }
            other => panic!("expected posts, got {:?}", other),
        }
    }
}
