//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`Screen`] - Which screen is currently displayed
//! - [`NavState`] / [`NavEvent`] - The navigation state machine
//! - [`AppMessage`] - Messages for async communication

mod focus;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use navigation::{transition, NavEvent, NavState};
pub use types::{FormField, LoginForm, PublicPage, Screen, Selection, Shell};

use std::sync::Arc;

use ratatui::Frame;
use tokio::sync::mpsc;

use crate::catalog::Catalog;
use crate::config::AppConfig;
use crate::contact::{ContactForm, ContactStatus, FormRelay, Web3FormsRelay};
use crate::input::KeybindingConfig;
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::LayoutContext;
use crate::view_state::AppViewState;

/// Owns navigation state plus the ephemeral UI state around it.
pub struct App {
    /// Current screen and selection
    pub nav: NavState,
    /// Control with keyboard focus; `None` means the page default
    pub focused: Option<ClickAction>,
    /// Narrow-terminal navbar menu
    pub menu_open: bool,
    pub contact: ContactForm,
    pub login: LoginForm,
    /// Flag indicating if the app should quit
    pub should_quit: bool,
    /// Set whenever state changes; cleared after each draw
    pub needs_redraw: bool,
    pub terminal_width: u16,
    pub terminal_height: u16,
    /// Clickable regions from the last frame
    pub hit_areas: HitAreaRegistry,
    pub keybindings: KeybindingConfig,
    /// Receiver for async messages (taken by the event loop)
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender handed to background tasks
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
    catalog: &'static Catalog,
    config: AppConfig,
    relay: Arc<dyn FormRelay>,
}

impl App {
    /// Create an app that posts contact messages to the configured relay.
    pub fn new(config: AppConfig) -> Self {
        let relay = Arc::new(Web3FormsRelay::new(config.form_endpoint.clone()));
        Self::with_relay(config, relay)
    }

    /// Create an app with a caller-supplied relay.
    pub fn with_relay(config: AppConfig, relay: Arc<dyn FormRelay>) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            nav: NavState::default(),
            focused: None,
            menu_open: false,
            contact: ContactForm::new(),
            login: LoginForm::default(),
            should_quit: false,
            needs_redraw: true,
            terminal_width: 80,
            terminal_height: 24,
            hit_areas: HitAreaRegistry::new(),
            keybindings: KeybindingConfig::default(),
            message_rx: Some(message_rx),
            message_tx,
            catalog: Catalog::global(),
            config,
            relay,
        }
    }

    pub fn screen(&self) -> Screen {
        self.nav.screen
    }

    pub fn selection(&self) -> Selection {
        self.nav.selection
    }

    pub fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
        if !self.layout().is_narrow() {
            self.menu_open = false;
        }
        self.mark_dirty();
    }

    pub fn layout(&self) -> LayoutContext {
        LayoutContext::new(self.terminal_width, self.terminal_height)
    }

    /// Open or close the collapsed navbar menu. Only meaningful when narrow.
    pub fn toggle_menu(&mut self) {
        if self.screen().is_private() || !self.layout().is_narrow() {
            return;
        }
        self.menu_open = !self.menu_open;
        self.mark_dirty();
    }

    /// Validate the contact form and hand it to the relay in the background.
    ///
    /// Returns true if a submission was started. Must be called from within
    /// a Tokio runtime.
    pub fn submit_contact(&mut self) -> bool {
        if self.contact.is_sending() {
            return false;
        }
        self.mark_dirty();

        let submission = match self.contact.validate(&self.config.form_access_key) {
            Ok(submission) => submission,
            Err(err) => {
                tracing::debug!(%err, "contact form rejected locally");
                self.contact.status = ContactStatus::Failed(err.user_message());
                return false;
            }
        };

        let generation = self.contact.begin_submission();
        let relay = Arc::clone(&self.relay);
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let message = match relay.submit(&submission).await {
                Ok(()) => AppMessage::ContactDelivered { generation },
                Err(error) => AppMessage::ContactFailed { generation, error },
            };
            let _ = tx.send(message);
        });
        true
    }

    /// Draw the current screen and rebuild the hit-area registry.
    pub fn render(&mut self, frame: &mut Frame) {
        self.terminal_width = frame.area().width;
        self.terminal_height = frame.area().height;
        self.hit_areas.clear();

        let focused = self.focused_target();
        let view = AppViewState {
            screen: self.nav.screen,
            selection: self.nav.selection,
            catalog: self.catalog,
            focused: focused.as_ref(),
            menu_open: self.menu_open,
            contact: &self.contact,
            login: &self.login,
            layout: LayoutContext::new(self.terminal_width, self.terminal_height),
        };
        crate::ui::render(frame, &view, &mut self.hit_areas);
    }
}
