use dioxus::prelude::*;

use crate::fixtures::directory::{self, ONBOARDING_CHANNEL_ID};
use crate::models::{ChatAuthor, ChatMessage, SurfaceKey};
use crate::state::{use_app_actions, use_app_state};
use crate::ui::shell::{use_require_login, AppShell, UnreadDot};
use crate::ui::RichText;

#[component]
pub fn Chat() -> Element {
    use_require_login();

    let actions = use_app_actions();
    let state = use_app_state();
    let mut selected = use_signal(|| "umum".to_string());

    let snapshot = state.read();
    let onboarding_unlocked = snapshot.conversation.onboarding_channel_triggered;
    let onboarding_unread = snapshot
        .notifications
        .is_unread(SurfaceKey::MessengerOnboarding);
    let onboarding_log = snapshot.conversation.onboarding_log.clone();
    let onboarding_typing = snapshot.conversation.onboarding_typing;
    drop(snapshot);

    let selected_id = selected.read().clone();
    let channels: Vec<_> = directory::chat_channels()
        .into_iter()
        .filter(|channel| channel.id != ONBOARDING_CHANNEL_ID || onboarding_unlocked)
        .collect();

    let transcript: Vec<ChatMessage> = if selected_id == ONBOARDING_CHANNEL_ID {
        onboarding_log
    } else {
        directory::channel_transcript(&selected_id)
    };
    let show_typing = selected_id == ONBOARDING_CHANNEL_ID && onboarding_typing;
    let (channel_name, channel_topic) = channels
        .iter()
        .find(|channel| channel.id == selected_id)
        .map(|channel| (channel.name, channel.topic))
        .unwrap_or(("# umum", ""));

    rsx! {
        AppShell { title: "Chat".to_string(),
            div { class: "flex gap-4",
                aside { class: "w-60 space-y-1 rounded-lg border border-slate-200 bg-white p-3 shadow-sm",
                    h3 { class: "px-2 pb-2 text-xs font-semibold uppercase text-slate-400", "Kanal" }
                    for channel in channels.clone() {
                        {
                            let is_active = channel.id == selected_id;
                            let is_onboarding = channel.id == ONBOARDING_CHANNEL_ID;
                            let actions = actions.clone();
                            let row_class = if is_active {
                                "flex w-full items-center rounded bg-emerald-50 px-2 py-1.5 text-left text-sm font-medium text-emerald-800"
                            } else {
                                "flex w-full items-center rounded px-2 py-1.5 text-left text-sm text-slate-700 hover:bg-slate-100"
                            };
                            rsx! {
                                button {
                                    key: "{channel.id}",
                                    class: row_class,
                                    onclick: move |_| {
                                        selected.set(channel.id.to_string());
                                        if is_onboarding {
                                            actions.mark_surface_read(SurfaceKey::MessengerOnboarding);
                                        }
                                    },
                                    span { "{channel.name}" }
                                    UnreadDot { visible: is_onboarding && onboarding_unread }
                                }
                            }
                        }
                    }
                    if !onboarding_unlocked {
                        p { class: "px-2 pt-2 text-[11px] italic text-slate-400",
                            "Kanal onboarding terbuka setelah tur asisten selesai."
                        }
                    }
                }
                section { class: "flex-1 rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                    header { class: "border-b border-slate-100 pb-2",
                        h2 { class: "text-sm font-semibold text-slate-800", "{channel_name}" }
                        p { class: "text-[11px] text-slate-400", "{channel_topic}" }
                    }
                    div { class: "space-y-3 py-3",
                        if transcript.is_empty() {
                            p { class: "text-xs italic text-slate-400", "Belum ada pesan di kanal ini." }
                        }
                        for (idx, message) in transcript.iter().enumerate() {
                            MessageRow { key: "{selected_id}-{idx}", message: message.clone() }
                        }
                        if show_typing {
                            p { class: "text-xs italic text-slate-400", "sedang mengetik..." }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MessageRow(message: ChatMessage) -> Element {
    let (author_label, bubble_class) = match message.author {
        ChatAuthor::User => (
            "Kamu".to_string(),
            "ml-auto max-w-md rounded-lg bg-emerald-600 p-3 text-sm text-white",
        ),
        ChatAuthor::Scripted(speaker) => (
            speaker.display_name().to_string(),
            "max-w-md rounded-lg bg-slate-100 p-3 text-sm text-slate-800",
        ),
    };

    rsx! {
        div { class: "{bubble_class}",
            p { class: "mb-1 text-[11px] font-semibold opacity-70", "{author_label} · {message.sent_at}" }
            RichText { text: message.text.clone() }
        }
    }
}
