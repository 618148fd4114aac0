//! Common test utilities for integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use luxxor::app::App;
use luxxor::config::AppConfig;
use luxxor::contact::{ContactSubmission, FormRelay};
use luxxor::error::ContactError;
use ratatui::{backend::TestBackend, Terminal};

/// Config that never touches the real relay or the log directory.
pub fn test_config() -> AppConfig {
    AppConfig::new()
        .with_form_endpoint("http://127.0.0.1:9/submit")
        .with_log_file(None)
}

pub fn test_app() -> App {
    App::new(test_config())
}

/// Relay that records submissions and answers with a fixed result.
#[derive(Default)]
pub struct RecordingRelay {
    pub submissions: Mutex<Vec<ContactSubmission>>,
    pub fail_with: Option<ContactError>,
}

#[async_trait]
impl FormRelay for RecordingRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        self.submissions.lock().unwrap().push(submission.clone());
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

/// Relay that answers each call with the next scripted delay and result.
#[derive(Default)]
pub struct ScriptedRelay {
    pub replies: Mutex<VecDeque<(Duration, Result<(), ContactError>)>>,
    pub submissions: Mutex<Vec<ContactSubmission>>,
}

impl ScriptedRelay {
    pub fn new(replies: Vec<(Duration, Result<(), ContactError>)>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            submissions: Mutex::default(),
        }
    }
}

#[async_trait]
impl FormRelay for ScriptedRelay {
    async fn submit(&self, submission: &ContactSubmission) -> Result<(), ContactError> {
        self.submissions.lock().unwrap().push(submission.clone());
        let reply = self.replies.lock().unwrap().pop_front();
        let (delay, result) = reply.unwrap_or((Duration::ZERO, Ok(())));
        tokio::time::sleep(delay).await;
        result
    }
}

pub fn test_app_with_relay<R: FormRelay + 'static>(relay: Arc<R>) -> App {
    App::with_relay(test_config(), relay)
}

/// Render one frame and return the buffer as text, one line per row.
pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|f| app.render(f)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
