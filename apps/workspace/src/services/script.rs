use crate::models::{Scenario, ScenarioId, ScriptStep, Speaker, StepEffect, SurfaceKey};

/// Script store: the fixed step tables for each scenario. Insertion order is
/// playback order; delays simulate the speaker typing.
pub fn scenario(id: ScenarioId) -> Scenario {
    match id {
        ScenarioId::Tutorial => Scenario::new(id, tutorial_steps()),
        ScenarioId::Onboarding => Scenario::new(id, onboarding_steps()),
        ScenarioId::MissionCompletion => Scenario::new(id, mission_steps()),
    }
}

/// Tutorial played by the assistant. Two reply gates split it into the
/// phases initial -> readiness_check -> collaboration_intro -> clarity_check
/// -> completion; the closing step unlocks the HR onboarding channel.
fn tutorial_steps() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            id: "tutorial-welcome",
            text: "Halo! Selamat datang di **Amboja Workspace**. Aku asisten virtual \
                   yang akan menemanimu berkeliling aplikasi ini.",
            speaker: Speaker::Assistant,
            delay_ms: 1_500,
            requires_user_reply: false,
            surface: SurfaceKey::AssistantButton,
            effects: &[],
        },
        ScriptStep {
            id: "tutorial-readiness",
            text: "Sebelum kita mulai, apakah kamu sudah **siap** mengikuti tur singkat ini?",
            speaker: Speaker::Assistant,
            delay_ms: 2_200,
            requires_user_reply: true,
            surface: SurfaceKey::AssistantButton,
            effects: &[],
        },
        ScriptStep {
            id: "tutorial-collab-1",
            text: "Bagus! Di bilah sisi ada lima area utama: **Beranda**, **Chat**, \
                   **Email**, **Panggilan**, dan **Dokumen**.",
            speaker: Speaker::Assistant,
            delay_ms: 1_800,
            requires_user_reply: false,
            surface: SurfaceKey::AssistantButton,
            effects: &[],
        },
        ScriptStep {
            id: "tutorial-collab-2",
            text: "Titik merah pada ikon menandakan ada hal baru yang belum kamu buka. \
                   Titik itu hilang begitu halamannya dibuka.",
            speaker: Speaker::Assistant,
            delay_ms: 2_400,
            requires_user_reply: false,
            surface: SurfaceKey::AssistantButton,
            effects: &[],
        },
        ScriptStep {
            id: "tutorial-clarity",
            text: "Tim HR akan menyapamu lewat kanal onboarding setelah tur ini. \
                   Sampai di sini, apakah penjelasannya cukup **jelas**?",
            speaker: Speaker::Assistant,
            delay_ms: 2_600,
            requires_user_reply: true,
            surface: SurfaceKey::AssistantButton,
            effects: &[],
        },
        ScriptStep {
            id: "tutorial-complete",
            text: "Mantap! Tur selesai. Kanal **Onboarding HR** sudah dibuka untukmu, \
                   cek halaman Chat ya.",
            speaker: Speaker::Assistant,
            delay_ms: 3_000,
            requires_user_reply: false,
            surface: SurfaceKey::AssistantButton,
            effects: &[
                StepEffect::UnlockOnboardingChannel,
                StepEffect::QueueScenario(ScenarioId::Onboarding),
            ],
        },
    ]
}

/// HR welcome burst in the onboarding channel; chains into the mission script.
fn onboarding_steps() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            id: "onboarding-hello",
            text: "Halo, selamat bergabung di Amboja! Aku Rina dari tim HR.",
            speaker: Speaker::HrContact,
            delay_ms: 1_600,
            requires_user_reply: false,
            surface: SurfaceKey::MessengerOnboarding,
            effects: &[],
        },
        ScriptStep {
            id: "onboarding-guide",
            text: "Minggu pertamamu akan diisi perkenalan tim dan beberapa tugas kecil. \
                   Semua jadwalnya sudah kususun di dokumen orientasi.",
            speaker: Speaker::HrContact,
            delay_ms: 2_300,
            requires_user_reply: false,
            surface: SurfaceKey::MessengerOnboarding,
            effects: &[],
        },
        ScriptStep {
            id: "onboarding-handoff",
            text: "Oh iya, Pak Darmawan ingin menitipkan satu penugasan perdana. \
                   Beliau akan menghubungimu sebentar lagi.",
            speaker: Speaker::HrContact,
            delay_ms: 2_800,
            requires_user_reply: false,
            surface: SurfaceKey::MessengerOnboarding,
            effects: &[StepEffect::QueueScenario(ScenarioId::MissionCompletion)],
        },
    ]
}

/// Mission hand-off from the executive: drops the mission email into the
/// inbox and delivers the mission brief document.
fn mission_steps() -> Vec<ScriptStep> {
    vec![
        ScriptStep {
            id: "mission-email",
            text: "Selamat datang di tim. Detail penugasan perdanamu baru saja \
                   kukirim lewat **email**, mohon dibaca ya.",
            speaker: Speaker::ExecutiveContact,
            delay_ms: 2_000,
            requires_user_reply: false,
            surface: SurfaceKey::MessengerOnboarding,
            effects: &[StepEffect::DeliverMissionEmail],
        },
        ScriptStep {
            id: "mission-brief",
            text: "Dokumen brief misinya juga sudah kuteruskan ke halaman **Dokumen** \
                   supaya bisa langsung kamu pelajari.",
            speaker: Speaker::ExecutiveContact,
            delay_ms: 2_600,
            requires_user_reply: false,
            surface: SurfaceKey::MessengerOnboarding,
            effects: &[StepEffect::DeliverMissionDocument],
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn step_ids_are_unique_across_scenarios() {
        let mut seen = HashSet::new();
        for id in [
            ScenarioId::Tutorial,
            ScenarioId::Onboarding,
            ScenarioId::MissionCompletion,
        ] {
            for step in scenario(id).steps {
                assert!(seen.insert(step.id), "duplicate step id {}", step.id);
            }
        }
    }

    #[test]
    fn tutorial_has_two_reply_gates_and_six_steps() {
        let steps = scenario(ScenarioId::Tutorial).steps;
        assert_eq!(steps.len(), 6);
        let gates: Vec<&str> = steps
            .iter()
            .filter(|step| step.requires_user_reply)
            .map(|step| step.id)
            .collect();
        assert_eq!(gates, vec!["tutorial-readiness", "tutorial-clarity"]);
    }

    #[test]
    fn delays_stay_in_the_observed_band() {
        for id in [
            ScenarioId::Tutorial,
            ScenarioId::Onboarding,
            ScenarioId::MissionCompletion,
        ] {
            for step in scenario(id).steps {
                assert!(
                    (1_500..=3_000).contains(&step.delay_ms),
                    "step {} delay {}ms out of band",
                    step.id,
                    step.delay_ms
                );
            }
        }
    }

    #[test]
    fn unlock_effect_sits_only_on_the_final_tutorial_step() {
        let steps = scenario(ScenarioId::Tutorial).steps;
        for (idx, step) in steps.iter().enumerate() {
            let has_unlock = step
                .effects
                .contains(&StepEffect::UnlockOnboardingChannel);
            assert_eq!(has_unlock, idx == steps.len() - 1, "step {}", step.id);
        }
    }

    #[test]
    fn final_tutorial_step_chains_into_onboarding() {
        let steps = scenario(ScenarioId::Tutorial).steps;
        let last = steps.last().expect("tutorial has steps");
        assert!(last
            .effects
            .contains(&StepEffect::QueueScenario(ScenarioId::Onboarding)));
        // Chaining happens nowhere else in the tutorial.
        for step in &steps[..steps.len() - 1] {
            assert!(step
                .effects
                .iter()
                .all(|effect| !matches!(effect, StepEffect::QueueScenario(_))));
        }
    }
}
