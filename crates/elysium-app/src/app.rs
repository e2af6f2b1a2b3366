//! Main egui application. Composes all panels and routes UI intents to
//! the controllers.

use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use elysium_core::ports::{IdentityPort, TimerPort};
use elysium_core::{ConversationStore, EventBus, NotificationCenter, SessionController};
use elysium_platform::storage::auto_detect_storage;
use elysium_platform::{FirebaseIdentity, GlooTimers, InMemoryIdentity};
use elysium_types::config::{AppConfig, IdentityConfig, IdentityProviderKind};
use elysium_ui::panels::{auth_modal, chat, header, sidebar, toast};
use elysium_ui::state::{UiIntent, UiState};
use elysium_ui::theme;

const SIDEBAR_WIDTH: f32 = 240.0;

/// The main application state
pub struct ElysiumApp {
    config: AppConfig,
    ui_state: UiState,
    event_bus: EventBus,
    session: Rc<SessionController>,
    notifications: NotificationCenter,
    conversation: ConversationStore,
    first_frame: bool,
}

impl ElysiumApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = load_config();
        let event_bus = EventBus::new();

        // Timer and provider callbacks land between frames
        let ctx = cc.egui_ctx.clone();
        event_bus.set_notifier(move || ctx.request_repaint());

        let timers: Rc<dyn TimerPort> = Rc::new(GlooTimers::new());
        let identity = build_identity(&config.identity);

        let notifications = NotificationCenter::new(
            timers.clone(),
            config.timing.notification_dismiss_ms,
            event_bus.clone(),
        );
        let conversation = ConversationStore::new(
            timers,
            config.canned_reply.clone(),
            config.timing.reply_delay_ms,
            event_bus.clone(),
        );
        let session = Rc::new(SessionController::new(
            identity,
            notifications.clone(),
            event_bus.clone(),
        ));

        Self {
            config,
            ui_state: UiState::new(),
            event_bus,
            session,
            notifications,
            conversation,
            first_frame: true,
        }
    }

    fn handle(&mut self, intent: UiIntent) {
        match intent {
            UiIntent::ToggleSidebar => {
                self.ui_state.sidebar_open = !self.ui_state.sidebar_open;
            }
            UiIntent::OpenAuth(mode) => {
                self.ui_state.auth_form.clear();
                self.ui_state.auth_in_flight = false;
                self.session.open_modal(mode);
            }
            UiIntent::CloseAuth => self.session.close_modal(),
            UiIntent::SwitchAuthMode => self.session.switch_mode(),
            UiIntent::SubmitAuth(request) => self.dispatch_auth(request),
            UiIntent::Logout => self.dispatch_logout(),
            UiIntent::SendMessage(text) => {
                self.conversation.send(&text);
            }
            UiIntent::DismissNotification => self.notifications.dismiss(),
        }
    }

    /// Submit credentials (async). Failures are already shown inline by
    /// the controller.
    fn dispatch_auth(&self, request: elysium_types::session::AuthRequest) {
        let session = self.session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = session.submit(request).await {
                log::debug!("Auth submit rejected: {}", e);
            }
        });
    }

    /// Fire-and-forget logout
    fn dispatch_logout(&self) {
        let session = self.session.clone();
        wasm_bindgen_futures::spawn_local(async move {
            session.logout().await;
        });
    }
}

impl eframe::App for ElysiumApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        // Drain controller events
        let events = self.event_bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
        }

        let mut intents = Vec::new();
        let current_session = self.session.session();

        // ── Header ───────────────────────────────────────────
        TopBottomPanel::top("header").show(ctx, |ui| {
            ui.add_space(6.0);
            if let Some(intent) = header::header_panel(ui, &self.config.title, current_session.as_ref()) {
                intents.push(intent);
            }
            ui.add_space(6.0);
        });

        // ── Status line ──────────────────────────────────────
        TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.label(
                RichText::new(&self.ui_state.status_text)
                    .color(theme::TEXT_SECONDARY)
                    .small(),
            );
        });

        // ── Sidebar ──────────────────────────────────────────
        if self.ui_state.sidebar_open {
            SidePanel::left("sidebar")
                .resizable(false)
                .exact_width(SIDEBAR_WIDTH)
                .show(ctx, sidebar::sidebar_panel);
        }

        // ── Chat ─────────────────────────────────────────────
        CentralPanel::default().show(ctx, |ui| {
            let messages = self.conversation.messages();
            if let Some(intent) = chat::chat_panel(
                ui,
                &mut self.ui_state,
                &messages,
                &self.config.assistant_name,
            ) {
                intents.push(intent);
            }
        });

        // ── Overlays ─────────────────────────────────────────
        let modal = self.session.modal();
        if let Some(intent) = auth_modal::auth_modal(ctx, &mut self.ui_state, &modal) {
            intents.push(intent);
        }
        if let Some(intent) = toast::success_toast(ctx, &self.notifications.current()) {
            intents.push(intent);
        }

        for intent in intents {
            self.handle(intent);
        }
    }
}

/// Defaults plus compile-time overrides for the identity provider
fn load_config() -> AppConfig {
    let mut config = AppConfig::default();
    if let Some(key) = option_env!("ELYSIUM_FIREBASE_API_KEY").filter(|k| !k.is_empty()) {
        config.identity = IdentityConfig::firebase(key);
    }
    if let Some(base) = option_env!("ELYSIUM_IDENTITY_API_BASE").filter(|b| !b.is_empty()) {
        config.identity.api_base = Some(base.to_string());
    }
    log::info!("Identity provider: {}", config.identity.provider.label());
    config
}

fn build_identity(config: &IdentityConfig) -> Rc<dyn IdentityPort> {
    match config.provider {
        IdentityProviderKind::Firebase => {
            match FirebaseIdentity::new(config.clone(), auto_detect_storage()) {
                Ok(firebase) => {
                    let firebase = Rc::new(firebase);
                    let restoring = firebase.clone();
                    wasm_bindgen_futures::spawn_local(async move {
                        if let Err(e) = restoring.restore().await {
                            log::warn!("Could not restore session: {}", e);
                        }
                    });
                    firebase as Rc<dyn IdentityPort>
                }
                Err(e) => {
                    log::warn!("{}. Using in-memory identity.", e);
                    Rc::new(InMemoryIdentity::new()) as Rc<dyn IdentityPort>
                }
            }
        }
        IdentityProviderKind::InMemory => Rc::new(InMemoryIdentity::new()),
    }
}
