use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;
use time::OffsetDateTime;
use tracing::{info, warn};
use uuid::Uuid;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen_futures::spawn_local;

use crate::fixtures::{documents as document_fixtures, mail};
use crate::models::{
    ChatAuthor, ChatMessage, DocumentRecord, DocumentType, EmailRecord, ScenarioId, ScriptStep,
    Speaker, StepEffect, SurfaceKey, UserProfile,
};
use crate::services::auth;
use crate::services::classifier;
use crate::services::notify::NotificationFlags;
use crate::services::sequencer::{Playback, ScriptEngine};
use crate::services::storage;
#[cfg(target_arch = "wasm32")]
use crate::APP_CONFIG;

pub type AppSignal = Signal<AppState>;

/// Typing delay for canned assistant answers outside the scripted tutorial.
#[cfg(target_arch = "wasm32")]
const BOT_REPLY_DELAY_MS: u32 = 1_200;

/// Conversation side of the app: the sequencer plus the transcripts it
/// feeds. Mutated exclusively through `AppActions`.
#[derive(Clone, Debug, Default)]
pub struct ConversationState {
    pub engine: ScriptEngine,
    pub assistant_log: Vec<ChatMessage>,
    pub onboarding_log: Vec<ChatMessage>,
    pub assistant_typing: bool,
    pub onboarding_typing: bool,
    pub onboarding_channel_triggered: bool,
    /// Bumped on reset; in-flight scheduled steps compare against it and
    /// drop themselves when stale.
    pub playback_generation: u64,
}

#[derive(Clone, Debug, Default)]
pub struct DocumentsState {
    /// User-authored and script-delivered records; the only persisted data.
    pub records: Vec<DocumentRecord>,
    pub selected: Option<String>,
    pub is_loading: bool,
    pub loaded: bool,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct OperationState {
    pub last_message: Option<String>,
    pub error: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub current_user: Option<UserProfile>,
    pub conversation: ConversationState,
    pub notifications: NotificationFlags,
    pub inbox: Vec<EmailRecord>,
    pub selected_email: Option<String>,
    pub documents: DocumentsState,
    pub operation: OperationState,
}

#[derive(Clone)]
pub struct AppActions {
    state: AppSignal,
}

impl AppActions {
    pub fn login(&self, email: &str, password: &str) {
        match auth::authenticate(email, password) {
            Ok(profile) => {
                info!(email = %profile.email, "mock login accepted");
                let mut signal = self.state;
                let mut state = signal.write();
                state.inbox = mail::seed_inbox();
                state.operation = OperationState::default();
                state.current_user = Some(profile);
            }
            Err(err) => self.set_operation_error(err.to_string()),
        }
    }

    pub fn logout(&self) {
        let mut signal = self.state;
        let mut state = signal.write();
        let generation = state.conversation.playback_generation + 1;
        *state = AppState::default();
        state.conversation.playback_generation = generation;
    }

    /// Kick off the tutorial once per session; remounts are no-ops.
    pub fn begin_tutorial(&self) {
        let playback = {
            let mut signal = self.state;
            let mut state = signal.write();
            if state.conversation.engine.has_started() {
                return;
            }
            state.conversation.engine.advance(ScenarioId::Tutorial)
        };
        self.play(playback);
    }

    /// Free text typed into the assistant panel: while a tutorial reply is
    /// pending the text goes to the sequencer, otherwise it gets a canned
    /// topic answer.
    pub fn submit_assistant_message(&self, text: &str) {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return;
        }

        let awaiting = {
            let mut signal = self.state;
            let mut state = signal.write();
            let message = ChatMessage {
                author: ChatAuthor::User,
                text: trimmed.to_string(),
                sent_at: clock_label(),
            };
            state.conversation.assistant_log.push(message);
            state.conversation.engine.is_awaiting_reply()
        };

        if awaiting {
            self.handle_tutorial_reply(trimmed);
        } else {
            self.answer_with_bot_response(trimmed.to_string());
        }
    }

    /// Route a user reply into the sequencer. Replies without a scripted
    /// branch are ignored and the tutorial stays where it is.
    pub fn handle_tutorial_reply(&self, text: &str) {
        let playback = {
            let mut signal = self.state;
            let mut state = signal.write();
            state.conversation.engine.handle_reply(text)
        };
        self.play(playback);
    }

    /// Reinitialize phases, cursors, flags, and transcripts, invalidate any
    /// scheduled steps still in flight, then restart the tutorial so the
    /// assistant greets again without a remount.
    pub fn reset_tutorial_progress(&self) {
        {
            let mut signal = self.state;
            let mut state = signal.write();
            let generation = state.conversation.playback_generation + 1;
            state.conversation = ConversationState {
                playback_generation: generation,
                ..ConversationState::default()
            };
            state.notifications.clear();
            state.operation.last_message = Some("Progres tutorial direset".to_string());
            info!(generation, "tutorial progress reset");
        }
        self.begin_tutorial();
    }

    pub fn mark_surface_read(&self, surface: SurfaceKey) {
        let mut signal = self.state;
        signal.write().notifications.mark_read(surface);
    }

    pub fn open_email(&self, email_id: &str) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.selected_email = Some(email_id.to_string());
        if let Some(email) = state.inbox.iter_mut().find(|email| email.id == email_id) {
            email.read = true;
        }
    }

    pub fn set_operation_error(&self, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.operation.error = Some(message);
        state.operation.last_message = None;
    }

    pub fn set_operation_success(&self, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.operation.last_message = Some(message);
        state.operation.error = None;
    }

    pub fn clear_operation_status(&self) {
        let mut signal = self.state;
        signal.write().operation = OperationState::default();
    }

    pub fn set_documents_loading(&self, loading: bool) {
        let mut signal = self.state;
        signal.write().documents.is_loading = loading;
    }

    pub fn set_documents(&self, records: Vec<DocumentRecord>) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.documents.records = records;
        state.documents.is_loading = false;
        state.documents.loaded = true;
        state.documents.error = None;
    }

    pub fn set_documents_error(&self, message: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        state.documents.error = Some(message);
        state.documents.is_loading = false;
        state.documents.loaded = true;
    }

    pub fn select_document(&self, doc_id: Option<String>) {
        let mut signal = self.state;
        signal.write().documents.selected = doc_id;
    }

    /// Create or update a user-authored note and persist the slot.
    pub fn save_document(&self, id: Option<String>, title: &str, content: &str) {
        let title = title.trim();
        if title.is_empty() {
            self.set_operation_error("Judul dokumen wajib diisi".to_string());
            return;
        }

        let record = {
            let mut signal = self.state;
            let mut state = signal.write();
            let owner = state
                .current_user
                .as_ref()
                .map(|user| user.email.clone())
                .unwrap_or_else(|| "anon@amboja.id".to_string());

            let record = DocumentRecord {
                id: id.unwrap_or_else(|| Uuid::new_v4().to_string()),
                title: title.to_string(),
                doc_type: DocumentType::Note,
                last_modified: timestamp_label(),
                owner,
                content: content.to_string(),
            };
            storage::upsert(&mut state.documents.records, record.clone());
            record
        };

        self.persist_documents();
        self.select_document(Some(record.id));
        self.set_operation_success(format!("Dokumen \"{}\" tersimpan", record.title));
    }

    pub fn delete_document(&self, doc_id: &str) {
        let removed = {
            let mut signal = self.state;
            let mut state = signal.write();
            if state.documents.selected.as_deref() == Some(doc_id) {
                state.documents.selected = None;
            }
            storage::remove(&mut state.documents.records, doc_id)
        };

        if removed {
            self.persist_documents();
            self.set_operation_success("Dokumen dihapus".to_string());
        }
    }

    fn persist_documents(&self) {
        let records = self.state.read().documents.records.clone();
        if let Err(err) = storage::save_documents(&records) {
            warn!(?err, "persisting documents failed");
            self.set_operation_error("Dokumen gagal disimpan ke penyimpanan lokal".to_string());
        }
    }

    fn answer_with_bot_response(&self, question: String) {
        let reply = classifier::bot_response(&question);

        #[cfg(target_arch = "wasm32")]
        {
            let actions = self.clone();
            let generation = self.playback_generation();
            spawn_local(async move {
                actions.set_typing(SurfaceKey::AssistantButton, true);
                TimeoutFuture::new(scaled_delay(BOT_REPLY_DELAY_MS)).await;
                if actions.playback_generation() != generation {
                    return;
                }
                actions.push_scripted_message(SurfaceKey::AssistantButton, Speaker::Assistant, reply);
                actions.set_typing(SurfaceKey::AssistantButton, false);
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        self.push_scripted_message(SurfaceKey::AssistantButton, Speaker::Assistant, reply);
    }

    /// Schedule a burst: wait each step's typing delay, then emit it. A
    /// stale generation means the scenario was reset underneath us and the
    /// remaining steps are dropped.
    fn play(&self, playback: Playback) {
        if playback.is_empty() {
            return;
        }

        #[cfg(target_arch = "wasm32")]
        {
            let actions = self.clone();
            let generation = self.playback_generation();
            spawn_local(async move {
                for step in playback.steps {
                    actions.set_typing(step.surface, true);
                    TimeoutFuture::new(scaled_delay(step.delay_ms)).await;
                    if actions.playback_generation() != generation {
                        return;
                    }
                    actions.apply_step(&step);
                }
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        for step in playback.steps {
            self.apply_step(&step);
        }
    }

    /// Emit one step: transcript, unread flag, then its side effects.
    fn apply_step(&self, step: &ScriptStep) {
        self.push_scripted_message(step.surface, step.speaker, step.text.to_string());
        self.set_typing(step.surface, false);

        for effect in step.effects {
            match effect {
                StepEffect::UnlockOnboardingChannel => {
                    let mut signal = self.state;
                    signal.write().conversation.onboarding_channel_triggered = true;
                }
                StepEffect::QueueScenario(id) => {
                    let playback = {
                        let mut signal = self.state;
                        let mut state = signal.write();
                        state.conversation.engine.advance(*id)
                    };
                    self.play(playback);
                }
                StepEffect::DeliverMissionEmail => {
                    let mut signal = self.state;
                    let mut state = signal.write();
                    if !state.inbox.iter().any(|email| email.id == mail::MISSION_EMAIL_ID) {
                        state.inbox.insert(0, mail::mission_email());
                    }
                    state.notifications.mark_emitted(SurfaceKey::EmailInbox);
                }
                StepEffect::DeliverMissionDocument => self.deliver_mission_document(),
            }
        }
    }

    fn deliver_mission_document(&self) {
        let record = {
            let mut signal = self.state;
            let mut state = signal.write();

            // The slot may hold notes from an earlier session that the
            // documents loader has not pulled in yet; persisting without
            // merging them first would wipe them.
            if !state.documents.loaded {
                match storage::load_documents() {
                    Ok(stored) => {
                        let merged = storage::merge(stored, &state.documents.records);
                        state.documents.records = merged;
                        state.documents.loaded = true;
                    }
                    Err(err) => warn!(?err, "document slot unreadable before delivery"),
                }
            }

            let owner = state
                .current_user
                .as_ref()
                .map(|user| user.email.clone())
                .unwrap_or_else(|| "anon@amboja.id".to_string());
            let record = document_fixtures::mission_document(&owner, &timestamp_label());
            storage::upsert(&mut state.documents.records, record.clone());
            state.notifications.mark_emitted(SurfaceKey::Documents);
            record
        };

        self.persist_documents();
        storage::trigger_download(&record);
    }

    fn push_scripted_message(&self, surface: SurfaceKey, speaker: Speaker, text: String) {
        let mut signal = self.state;
        let mut state = signal.write();
        let message = ChatMessage {
            author: ChatAuthor::Scripted(speaker),
            text,
            sent_at: clock_label(),
        };
        match surface {
            SurfaceKey::AssistantButton => state.conversation.assistant_log.push(message),
            SurfaceKey::MessengerOnboarding => state.conversation.onboarding_log.push(message),
            // Email and document deliveries ride on step effects instead.
            SurfaceKey::EmailInbox | SurfaceKey::Documents => {}
        }
        state.notifications.mark_emitted(surface);
    }

    fn set_typing(&self, surface: SurfaceKey, typing: bool) {
        let mut signal = self.state;
        let mut state = signal.write();
        match surface {
            SurfaceKey::AssistantButton => state.conversation.assistant_typing = typing,
            SurfaceKey::MessengerOnboarding => state.conversation.onboarding_typing = typing,
            SurfaceKey::EmailInbox | SurfaceKey::Documents => {}
        }
    }

    fn playback_generation(&self) -> u64 {
        self.state.read().conversation.playback_generation
    }
}

#[cfg(target_arch = "wasm32")]
fn scaled_delay(base_ms: u32) -> u32 {
    APP_CONFIG
        .get()
        .map(|config| config.scaled_delay_ms(base_ms))
        .unwrap_or(base_ms)
}

fn clock_label() -> String {
    let now = OffsetDateTime::now_utc();
    format!("{:02}:{:02}", now.hour(), now.minute())
}

fn timestamp_label() -> String {
    let now = OffsetDateTime::now_utc();
    format!(
        "{:04}-{:02}-{:02} {:02}:{:02}",
        now.year(),
        u8::from(now.month()),
        now.day(),
        now.hour(),
        now.minute()
    )
}

pub fn use_app_state() -> AppSignal {
    use_context::<AppSignal>()
}

pub fn use_app_actions() -> AppActions {
    AppActions {
        state: use_app_state(),
    }
}
