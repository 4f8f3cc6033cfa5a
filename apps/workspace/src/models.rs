use serde::{Deserialize, Serialize};

/// Who a scripted message is attributed to.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Speaker {
    Assistant,
    HrContact,
    ExecutiveContact,
}

impl Speaker {
    pub fn display_name(self) -> &'static str {
        match self {
            Speaker::Assistant => "Asisten Amboja",
            Speaker::HrContact => "Rina Kusuma (HR)",
            Speaker::ExecutiveContact => "Pak Darmawan (COO)",
        }
    }
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScenarioId {
    Tutorial,
    Onboarding,
    MissionCompletion,
}

/// Coarse conversational stage of the tutorial. Transitions are
/// one-directional; no phase is ever revisited.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConversationPhase {
    #[default]
    Initial,
    ReadinessCheck,
    CollaborationIntro,
    ClarityCheck,
    Completion,
}

impl ConversationPhase {
    /// Ordinal used to assert forward-only movement.
    pub fn rank(self) -> u8 {
        match self {
            ConversationPhase::Initial => 0,
            ConversationPhase::ReadinessCheck => 1,
            ConversationPhase::CollaborationIntro => 2,
            ConversationPhase::ClarityCheck => 3,
            ConversationPhase::Completion => 4,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplyClass {
    Positive,
    Other,
}

/// Canned-answer topics for the generic assistant router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BotTopic {
    Navigation,
    Email,
    Documents,
    Chat,
    Call,
    Help,
    CompanyProfile,
    Greeting,
    Default,
}

/// UI surfaces that carry an unread indicator.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum SurfaceKey {
    AssistantButton,
    MessengerOnboarding,
    EmailInbox,
    Documents,
}

impl SurfaceKey {
    pub fn as_key(self) -> &'static str {
        match self {
            SurfaceKey::AssistantButton => "assistant-button",
            SurfaceKey::MessengerOnboarding => "messenger-onboarding",
            SurfaceKey::EmailInbox => "email-inbox",
            SurfaceKey::Documents => "documents",
        }
    }
}

/// Side effect attached to a script step; applied when the step is emitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepEffect {
    UnlockOnboardingChannel,
    QueueScenario(ScenarioId),
    DeliverMissionEmail,
    DeliverMissionDocument,
}

/// One atomic scripted message. `text` may embed `**bold**` markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptStep {
    pub id: &'static str,
    pub text: &'static str,
    pub speaker: Speaker,
    pub delay_ms: u32,
    pub requires_user_reply: bool,
    pub surface: SurfaceKey,
    pub effects: &'static [StepEffect],
}

/// A named, ordered script of dialogue steps with a forward-only cursor.
#[derive(Clone, Debug)]
pub struct Scenario {
    pub id: ScenarioId,
    pub steps: Vec<ScriptStep>,
    pub current_index: usize,
}

impl Scenario {
    pub fn new(id: ScenarioId, steps: Vec<ScriptStep>) -> Self {
        Self {
            id,
            steps,
            current_index: 0,
        }
    }

    pub fn is_finished(&self) -> bool {
        self.current_index >= self.steps.len()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatAuthor {
    User,
    Scripted(Speaker),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ChatMessage {
    pub author: ChatAuthor,
    pub text: String,
    pub sent_at: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatChannel {
    pub id: &'static str,
    pub name: &'static str,
    pub topic: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: &'static str,
    pub name: &'static str,
    pub role: &'static str,
    pub department: &'static str,
    pub extension: &'static str,
    pub online: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EmailRecord {
    pub id: String,
    pub from_name: String,
    pub from_addr: String,
    pub subject: String,
    pub body: String,
    pub received_label: String,
    pub read: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CallDirection {
    Incoming,
    Outgoing,
    Missed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CallLogEntry {
    pub contact_id: &'static str,
    pub direction: CallDirection,
    pub when_label: &'static str,
    pub duration_label: &'static str,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Note,
    Pdf,
}

/// Record layout of the single `"documents"` local-storage slot.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub doc_type: DocumentType,
    pub last_modified: String,
    pub owner: String,
    pub content: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_record_uses_source_field_names() {
        let record = DocumentRecord {
            id: "doc-1".into(),
            title: "Catatan".into(),
            doc_type: DocumentType::Note,
            last_modified: "2026-08-28 09:00".into(),
            owner: "budi@amboja.id".into(),
            content: "isi".into(),
        };

        let value = serde_json::to_value(&record).expect("serialize");
        assert_eq!(value["type"], "note");
        assert!(value.get("lastModified").is_some());
        assert!(value.get("last_modified").is_none());
    }

    #[test]
    fn phase_ranks_are_strictly_increasing() {
        let order = [
            ConversationPhase::Initial,
            ConversationPhase::ReadinessCheck,
            ConversationPhase::CollaborationIntro,
            ConversationPhase::ClarityCheck,
            ConversationPhase::Completion,
        ];
        for pair in order.windows(2) {
            assert!(pair[0].rank() < pair[1].rank());
        }
    }
}
