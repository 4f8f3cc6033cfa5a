use tracing::debug;

use crate::models::{
    ConversationPhase, ReplyClass, Scenario, ScenarioId, ScriptStep,
};
use crate::services::{classifier, script};

/// An ordered burst of steps for the playback layer to schedule. Each step
/// carries its own typing delay; the player waits that delay, emits the
/// step, then moves to the next one.
#[derive(Clone, Debug, Default)]
pub struct Playback {
    pub steps: Vec<ScriptStep>,
}

impl Playback {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Plays scenario scripts in order, honoring reply gates. Pure state: the
/// timing side lives in the playback layer so this stays testable.
#[derive(Clone, Debug)]
pub struct ScriptEngine {
    tutorial: Scenario,
    onboarding: Scenario,
    mission: Scenario,
    phase: ConversationPhase,
    awaiting_reply: bool,
}

impl Default for ScriptEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptEngine {
    pub fn new() -> Self {
        Self {
            tutorial: script::scenario(ScenarioId::Tutorial),
            onboarding: script::scenario(ScenarioId::Onboarding),
            mission: script::scenario(ScenarioId::MissionCompletion),
            phase: ConversationPhase::Initial,
            awaiting_reply: false,
        }
    }

    pub fn phase(&self) -> ConversationPhase {
        self.phase
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.awaiting_reply
    }

    /// True once the tutorial has emitted at least one step.
    pub fn has_started(&self) -> bool {
        self.tutorial.current_index > 0
    }

    pub fn cursor(&self, id: ScenarioId) -> usize {
        self.scenario(id).current_index
    }

    /// Advance a scenario: emit steps from the cursor until a reply gate or
    /// the end of the script. Past the end, or while a reply is pending,
    /// this is a no-op.
    pub fn advance(&mut self, id: ScenarioId) -> Playback {
        if self.awaiting_reply {
            return Playback::default();
        }
        self.play_burst(id)
    }

    /// Classify a user reply and resume the tutorial when the current phase
    /// has a branch for the classification. Anything else is silently
    /// ignored; the sequencer stays blocked.
    pub fn handle_reply(&mut self, user_text: &str) -> Playback {
        if !self.awaiting_reply {
            return Playback::default();
        }

        let class = classifier::classify_reply(user_text);
        match branch_on_reply(self.phase, class) {
            Some(next_phase) => {
                debug!(?class, from = ?self.phase, to = ?next_phase, "tutorial phase transition");
                debug_assert!(next_phase.rank() > self.phase.rank());
                self.phase = next_phase;
                self.awaiting_reply = false;
                self.play_burst(ScenarioId::Tutorial)
            }
            None => {
                debug!(?class, phase = ?self.phase, "reply without a branch; staying blocked");
                Playback::default()
            }
        }
    }

    /// Reinitialize every phase, cursor, and gate to its starting value.
    /// Cancelling in-flight timers is the playback layer's job.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn play_burst(&mut self, id: ScenarioId) -> Playback {
        let mut steps = Vec::new();
        let mut gated = false;

        let scenario = self.scenario_mut(id);
        if scenario.is_finished() {
            return Playback::default();
        }
        while let Some(step) = scenario.steps.get(scenario.current_index) {
            let step = step.clone();
            scenario.current_index += 1;
            let requires_reply = step.requires_user_reply;
            steps.push(step);
            if requires_reply {
                gated = true;
                break;
            }
        }

        if gated {
            self.awaiting_reply = true;
            if id == ScenarioId::Tutorial {
                self.phase = gate_phase_after(self.phase);
            }
        }

        let scenario = self.scenario(id);
        debug!(scenario = ?scenario.id, emitted = steps.len(), gated, "script burst");
        Playback { steps }
    }

    fn scenario(&self, id: ScenarioId) -> &Scenario {
        match id {
            ScenarioId::Tutorial => &self.tutorial,
            ScenarioId::Onboarding => &self.onboarding,
            ScenarioId::MissionCompletion => &self.mission,
        }
    }

    fn scenario_mut(&mut self, id: ScenarioId) -> &mut Scenario {
        match id {
            ScenarioId::Tutorial => &mut self.tutorial,
            ScenarioId::Onboarding => &mut self.onboarding,
            ScenarioId::MissionCompletion => &mut self.mission,
        }
    }
}

/// Branch table for reply-gated phases. Only the positive branch is
/// scripted; "other" replies leave the phase untouched.
fn branch_on_reply(phase: ConversationPhase, class: ReplyClass) -> Option<ConversationPhase> {
    match (phase, class) {
        (ConversationPhase::ReadinessCheck, ReplyClass::Positive) => {
            Some(ConversationPhase::CollaborationIntro)
        }
        (ConversationPhase::ClarityCheck, ReplyClass::Positive) => {
            Some(ConversationPhase::Completion)
        }
        _ => None,
    }
}

/// Phase the tutorial waits in after a reply-gated burst.
fn gate_phase_after(phase: ConversationPhase) -> ConversationPhase {
    match phase {
        ConversationPhase::Initial => ConversationPhase::ReadinessCheck,
        ConversationPhase::CollaborationIntro => ConversationPhase::ClarityCheck,
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Speaker, StepEffect};

    #[test]
    fn initial_burst_emits_two_steps_then_blocks() {
        let mut engine = ScriptEngine::new();
        let playback = engine.advance(ScenarioId::Tutorial);

        assert_eq!(playback.steps.len(), 2);
        assert!(engine.is_awaiting_reply());
        assert_eq!(engine.phase(), ConversationPhase::ReadinessCheck);
        assert_eq!(engine.cursor(ScenarioId::Tutorial), 2);
    }

    #[test]
    fn advance_is_noop_while_blocked() {
        let mut engine = ScriptEngine::new();
        engine.advance(ScenarioId::Tutorial);
        let cursor = engine.cursor(ScenarioId::Tutorial);

        let playback = engine.advance(ScenarioId::Tutorial);
        assert!(playback.is_empty());
        assert_eq!(engine.cursor(ScenarioId::Tutorial), cursor);
    }

    #[test]
    fn siap_reply_moves_readiness_check_forward_only() {
        let mut engine = ScriptEngine::new();
        engine.advance(ScenarioId::Tutorial);
        assert_eq!(engine.phase(), ConversationPhase::ReadinessCheck);

        let before = engine.phase().rank();
        let playback = engine.handle_reply("Saya sudah siap");

        assert_eq!(engine.phase(), ConversationPhase::ClarityCheck);
        assert!(engine.phase().rank() > before);
        assert_eq!(playback.steps.len(), 3);
    }

    #[test]
    fn tidak_at_clarity_check_keeps_the_sequencer_blocked() {
        let mut engine = ScriptEngine::new();
        engine.advance(ScenarioId::Tutorial);
        engine.handle_reply("Siap!");
        assert_eq!(engine.phase(), ConversationPhase::ClarityCheck);
        let cursor = engine.cursor(ScenarioId::Tutorial);

        let playback = engine.handle_reply("Tidak");

        assert!(playback.is_empty());
        assert!(engine.is_awaiting_reply());
        assert_eq!(engine.phase(), ConversationPhase::ClarityCheck);
        assert_eq!(engine.cursor(ScenarioId::Tutorial), cursor);
    }

    #[test]
    fn reply_without_a_pending_gate_is_ignored() {
        let mut engine = ScriptEngine::new();
        let playback = engine.handle_reply("Iya");
        assert!(playback.is_empty());
        assert_eq!(engine.phase(), ConversationPhase::Initial);
        assert_eq!(engine.cursor(ScenarioId::Tutorial), 0);
    }

    #[test]
    fn positive_run_ends_in_completion_with_six_assistant_messages() {
        let mut engine = ScriptEngine::new();

        let mut emitted = Vec::new();
        emitted.extend(engine.advance(ScenarioId::Tutorial).steps);
        emitted.extend(engine.handle_reply("Saya sudah siap").steps);
        emitted.extend(engine.handle_reply("Ya, sangat jelas").steps);

        assert_eq!(engine.phase(), ConversationPhase::Completion);
        assert_eq!(emitted.len(), 6);
        assert!(emitted
            .iter()
            .all(|step| step.speaker == Speaker::Assistant));

        // The unlock fires with the final step, never earlier.
        for (idx, step) in emitted.iter().enumerate() {
            let has_unlock = step
                .effects
                .contains(&StepEffect::UnlockOnboardingChannel);
            assert_eq!(has_unlock, idx == emitted.len() - 1);
        }
    }

    #[test]
    fn cursors_are_monotone_and_bounded() {
        let mut engine = ScriptEngine::new();
        let len = script::scenario(ScenarioId::Tutorial).steps.len();

        let mut last = 0;
        engine.advance(ScenarioId::Tutorial);
        for reply in ["siap", "tidak", "iya jelas", "lagi?"] {
            engine.handle_reply(reply);
            let cursor = engine.cursor(ScenarioId::Tutorial);
            assert!(cursor >= last);
            assert!(cursor <= len);
            last = cursor;
        }
        assert_eq!(last, len);
    }

    #[test]
    fn finished_scenario_advance_is_a_noop() {
        let mut engine = ScriptEngine::new();
        let first = engine.advance(ScenarioId::Onboarding);
        assert_eq!(first.steps.len(), 3);

        let again = engine.advance(ScenarioId::Onboarding);
        assert!(again.is_empty());
        assert_eq!(engine.cursor(ScenarioId::Onboarding), 3);
    }

    #[test]
    fn onboarding_chains_into_the_mission_script() {
        let mut engine = ScriptEngine::new();
        let onboarding = engine.advance(ScenarioId::Onboarding);
        let queued: Vec<StepEffect> = onboarding
            .steps
            .iter()
            .flat_map(|step| step.effects.iter().copied())
            .collect();
        assert!(queued.contains(&StepEffect::QueueScenario(ScenarioId::MissionCompletion)));

        let mission = engine.advance(ScenarioId::MissionCompletion);
        let effects: Vec<StepEffect> = mission
            .steps
            .iter()
            .flat_map(|step| step.effects.iter().copied())
            .collect();
        assert!(effects.contains(&StepEffect::DeliverMissionEmail));
        assert!(effects.contains(&StepEffect::DeliverMissionDocument));
    }

    #[test]
    fn reset_reinitializes_phases_gates_and_cursors() {
        let mut engine = ScriptEngine::new();
        engine.advance(ScenarioId::Tutorial);
        engine.handle_reply("siap");
        engine.advance(ScenarioId::Onboarding);

        engine.reset();

        assert_eq!(engine.phase(), ConversationPhase::Initial);
        assert!(!engine.is_awaiting_reply());
        assert_eq!(engine.cursor(ScenarioId::Tutorial), 0);
        assert_eq!(engine.cursor(ScenarioId::Onboarding), 0);
        assert_eq!(engine.cursor(ScenarioId::MissionCompletion), 0);
    }

    #[test]
    fn restarting_after_reset_replays_the_opening_burst() {
        let mut engine = ScriptEngine::new();
        engine.advance(ScenarioId::Tutorial);
        engine.handle_reply("siap");
        engine.reset();

        // The burst played after a reset must be the greeting again, not a
        // continuation from where the previous run stopped.
        assert!(!engine.has_started());
        let playback = engine.advance(ScenarioId::Tutorial);
        let ids: Vec<&str> = playback.steps.iter().map(|step| step.id).collect();
        assert_eq!(ids, vec!["tutorial-welcome", "tutorial-readiness"]);
        assert!(engine.has_started());
    }
}
