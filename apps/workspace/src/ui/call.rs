use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::fixtures::{calls, directory};
use crate::models::CallDirection;
use crate::ui::shell::{use_require_login, AppShell};
use crate::Route;

#[component]
pub fn Calls() -> Element {
    use_require_login();

    let contacts = directory::contacts();

    rsx! {
        AppShell { title: "Panggilan".to_string(),
            div { class: "grid gap-4 md:grid-cols-2",
                section { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                    h3 { class: "pb-2 text-sm font-semibold text-slate-800", "Kontak" }
                    div { class: "space-y-2",
                        for contact in contacts {
                            div { key: "{contact.id}",
                                class: "flex items-center justify-between rounded border border-slate-100 p-3",
                                div {
                                    p { class: "text-sm font-medium text-slate-800", "{contact.name}" }
                                    p { class: "text-[11px] text-slate-500",
                                        "{contact.role} · {contact.department} · ext {contact.extension}"
                                    }
                                }
                                if contact.online {
                                    Link {
                                        to: Route::CallScreen { contact_id: contact.id.to_string() },
                                        class: "rounded bg-emerald-600 px-3 py-1.5 text-xs font-semibold text-white hover:bg-emerald-700",
                                        "Telepon"
                                    }
                                } else {
                                    span { class: "text-[11px] italic text-slate-400", "luring" }
                                }
                            }
                        }
                    }
                }
                section { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                    h3 { class: "pb-2 text-sm font-semibold text-slate-800", "Riwayat" }
                    div { class: "space-y-2",
                        for (idx, entry) in calls::call_log().iter().enumerate() {
                            {
                                let name = directory::find_contact(entry.contact_id)
                                    .map(|contact| contact.name.to_string())
                                    .unwrap_or_else(|| entry.contact_id.to_string());
                                let (label, label_class) = match entry.direction {
                                    CallDirection::Incoming => ("Masuk", "text-emerald-600"),
                                    CallDirection::Outgoing => ("Keluar", "text-slate-600"),
                                    CallDirection::Missed => ("Tak terjawab", "text-red-600"),
                                };
                                rsx! {
                                    div { key: "{idx}", class: "rounded border border-slate-100 p-3",
                                        p { class: "text-sm text-slate-800", "{name}" }
                                        p { class: "text-[11px] text-slate-500",
                                            span { class: "{label_class}", "{label}" }
                                            " · {entry.when_label} · {entry.duration_label}"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Fake in-call view. Unknown contact ids fall back to a "not found" page
/// with a back action instead of failing.
#[component]
pub fn CallScreen(contact_id: String) -> Element {
    use_require_login();
    let navigator = use_navigator();
    let mut muted = use_signal(|| false);
    let elapsed = use_signal(|| 0u32);

    // The call timer only ticks in the browser; native builds render 00:00.
    #[cfg(target_arch = "wasm32")]
    {
        let mut elapsed = elapsed;
        use_future(move || async move {
            loop {
                gloo_timers::future::TimeoutFuture::new(1_000).await;
                elapsed.with_mut(|seconds| *seconds += 1);
            }
        });
    }

    let Some(contact) = directory::find_contact(&contact_id) else {
        return rsx! {
            AppShell { title: "Panggilan".to_string(),
                section { class: "rounded-lg border border-slate-200 bg-white p-8 text-center shadow-sm",
                    h2 { class: "text-lg font-semibold text-slate-900", "Kontak tidak ditemukan" }
                    p { class: "mt-1 text-sm text-slate-500",
                        "Kontak \"{contact_id}\" tidak ada di direktori."
                    }
                    button {
                        class: "mt-4 rounded border border-slate-300 px-4 py-2 text-sm text-slate-700 hover:bg-slate-100",
                        onclick: move |_| { navigator.push(Route::Calls {}); },
                        "Kembali ke daftar panggilan"
                    }
                }
            }
        };
    };

    let is_muted = *muted.read();
    let mute_label = if is_muted { "Bunyikan" } else { "Bisukan" };
    let seconds = *elapsed.read();
    let timer_label = format!("{:02}:{:02}", seconds / 60, seconds % 60);

    rsx! {
        AppShell { title: "Panggilan".to_string(),
            section { class: "mx-auto w-96 rounded-lg border border-slate-200 bg-slate-900 p-8 text-center shadow-lg",
                p { class: "text-xs uppercase tracking-wide text-slate-400", "Tersambung · {timer_label}" }
                h2 { class: "mt-2 text-xl font-semibold text-white", "{contact.name}" }
                p { class: "text-sm text-slate-400", "{contact.role} · ext {contact.extension}" }
                if is_muted {
                    p { class: "mt-3 text-xs italic text-amber-400", "Mikrofon dibisukan" }
                }
                div { class: "mt-6 flex justify-center gap-3",
                    button {
                        class: "rounded-full border border-slate-600 px-4 py-2 text-xs text-slate-200 hover:bg-slate-800",
                        onclick: move |_| muted.set(!is_muted),
                        "{mute_label}"
                    }
                    button {
                        class: "rounded-full bg-red-600 px-4 py-2 text-xs font-semibold text-white hover:bg-red-700",
                        onclick: move |_| { navigator.push(Route::Calls {}); },
                        "Akhiri"
                    }
                }
            }
        }
    }
}
