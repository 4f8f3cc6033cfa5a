use dioxus::prelude::*;

use crate::models::{ChatAuthor, SurfaceKey};
use crate::state::{use_app_actions, use_app_state};
use crate::ui::RichText;

/// Floating AI-assistant button and panel, mounted on every logged-in page.
/// The button carries the assistant's unread dot; opening the panel clears it.
#[component]
pub fn AssistantDock() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let mut open = use_signal(|| false);
    let mut draft = use_signal(String::new);

    let snapshot = state.read();
    if snapshot.current_user.is_none() {
        return rsx! { Fragment {} };
    }
    let log = snapshot.conversation.assistant_log.clone();
    let typing = snapshot.conversation.assistant_typing;
    let unread = snapshot.notifications.is_unread(SurfaceKey::AssistantButton);
    drop(snapshot);

    let is_open = *open.read();

    let on_toggle = {
        let actions = actions.clone();
        move |_| {
            let next = !*open.read();
            open.set(next);
            if next {
                actions.mark_surface_read(SurfaceKey::AssistantButton);
            }
        }
    };

    let on_submit = {
        let actions = actions.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let text = draft.read().clone();
            if text.trim().is_empty() {
                return;
            }
            actions.submit_assistant_message(&text);
            actions.mark_surface_read(SurfaceKey::AssistantButton);
            draft.set(String::new());
        }
    };

    rsx! {
        div { class: "fixed bottom-4 right-4 z-40 flex flex-col items-end gap-2",
            if is_open {
                div { class: "flex h-96 w-80 flex-col rounded-lg border border-slate-200 bg-white shadow-xl",
                    header { class: "border-b border-slate-100 p-3",
                        h3 { class: "text-sm font-semibold text-slate-800", "Asisten Amboja" }
                        p { class: "text-[11px] text-slate-500", "Tanya apa saja soal aplikasi ini" }
                    }
                    div { class: "flex-1 space-y-2 overflow-y-auto p-3",
                        if log.is_empty() && !typing {
                            p { class: "text-xs italic text-slate-400", "Asisten akan menyapamu sebentar lagi..." }
                        }
                        for (idx, message) in log.iter().enumerate() {
                            {
                                let bubble = match message.author {
                                    ChatAuthor::User => "ml-auto max-w-[85%] rounded-lg bg-emerald-600 p-2 text-xs text-white",
                                    ChatAuthor::Scripted(_) => "max-w-[85%] rounded-lg bg-slate-100 p-2 text-xs text-slate-800",
                                };
                                rsx! {
                                    div { key: "{idx}", class: "{bubble}",
                                        RichText { text: message.text.clone() }
                                    }
                                }
                            }
                        }
                        if typing {
                            p { class: "text-xs italic text-slate-400", "sedang mengetik..." }
                        }
                    }
                    form { class: "flex gap-2 border-t border-slate-100 p-3",
                        onsubmit: on_submit,
                        input {
                            class: "flex-1 rounded border border-slate-300 p-2 text-xs",
                            placeholder: "Tulis balasan...",
                            value: "{draft}",
                            oninput: move |evt| draft.set(evt.value()),
                        }
                        button {
                            class: "rounded bg-emerald-600 px-3 py-2 text-xs font-semibold text-white hover:bg-emerald-700",
                            r#type: "submit",
                            "Kirim"
                        }
                    }
                }
            }
            button {
                class: "relative rounded-full bg-emerald-600 p-4 text-white shadow-lg hover:bg-emerald-700",
                onclick: on_toggle,
                if is_open { "×" } else { "AI" }
                if unread && !is_open {
                    span { class: "absolute right-1 top-1 h-2.5 w-2.5 rounded-full bg-red-500" }
                }
            }
        }
    }
}
