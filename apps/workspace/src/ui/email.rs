use dioxus::prelude::*;

use crate::models::SurfaceKey;
use crate::state::{use_app_actions, use_app_state};
use crate::ui::shell::{use_require_login, AppShell};

#[component]
pub fn Email() -> Element {
    use_require_login();

    let actions = use_app_actions();
    let state = use_app_state();

    // Opening the inbox is the explicit "surface read" action.
    {
        let actions = actions.clone();
        use_hook(move || actions.mark_surface_read(SurfaceKey::EmailInbox));
    }

    let snapshot = state.read();
    let inbox = snapshot.inbox.clone();
    let selected_id = snapshot.selected_email.clone();
    drop(snapshot);
    let inbox_count = inbox.len();

    let selected = selected_id
        .as_ref()
        .and_then(|id| inbox.iter().find(|email| &email.id == id))
        .cloned();

    rsx! {
        AppShell { title: "Email".to_string(),
            div { class: "flex gap-4",
                aside { class: "w-80 space-y-1 rounded-lg border border-slate-200 bg-white p-3 shadow-sm",
                    h3 { class: "px-2 pb-2 text-xs font-semibold uppercase text-slate-400",
                        "Kotak Masuk ({inbox_count})"
                    }
                    if inbox.is_empty() {
                        p { class: "px-2 text-xs italic text-slate-400", "Kotak masuk kosong." }
                    }
                    for email in inbox.clone() {
                        {
                            let is_active = selected_id.as_deref() == Some(email.id.as_str());
                            let actions = actions.clone();
                            let email_id = email.id.clone();
                            let row_class = if is_active {
                                "w-full rounded bg-emerald-50 px-2 py-2 text-left"
                            } else {
                                "w-full rounded px-2 py-2 text-left hover:bg-slate-100"
                            };
                            let subject_class = if email.read {
                                "text-sm text-slate-700"
                            } else {
                                "text-sm font-semibold text-slate-900"
                            };
                            rsx! {
                                button {
                                    key: "{email.id}",
                                    class: row_class,
                                    onclick: move |_| actions.open_email(&email_id),
                                    p { class: subject_class, "{email.subject}" }
                                    p { class: "text-[11px] text-slate-500",
                                        "{email.from_name} · {email.received_label}"
                                    }
                                }
                            }
                        }
                    }
                }
                section { class: "flex-1 rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                    {match selected {
                        Some(email) => {
                            // rsx! rejects `<` adjacent to `{...}` in text, so format outside.
                            let from_line = format!(
                                "{} <{}> · {}",
                                email.from_name, email.from_addr, email.received_label
                            );
                            rsx! {
                            header { class: "border-b border-slate-100 pb-3",
                                h2 { class: "text-lg font-semibold text-slate-900", "{email.subject}" }
                                p { class: "text-xs text-slate-500", "{from_line}" }
                            }
                            pre { class: "whitespace-pre-wrap pt-4 font-sans text-sm text-slate-700",
                                "{email.body}"
                            }
                        }},
                        None => rsx! {
                            p { class: "text-sm italic text-slate-400", "Pilih email untuk membacanya." }
                        },
                    }}
                }
            }
        }
    }
}
