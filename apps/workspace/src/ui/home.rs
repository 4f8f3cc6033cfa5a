use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::hooks::tutorial::use_tutorial_autostart;
use crate::models::SurfaceKey;
use crate::state::{use_app_actions, use_app_state};
use crate::ui::shell::{use_require_login, AppShell, UnreadDot};
use crate::Route;

#[component]
pub fn Home() -> Element {
    use_require_login();
    use_tutorial_autostart();

    let actions = use_app_actions();
    let state = use_app_state();
    let snapshot = state.read();

    let greeting = snapshot
        .current_user
        .as_ref()
        .map(|user| format!("Halo, {}!", user.name))
        .unwrap_or_else(|| "Halo!".to_string());
    let role = snapshot
        .current_user
        .as_ref()
        .map(|user| user.role.clone())
        .unwrap_or_default();
    let unread_emails = snapshot.inbox.iter().filter(|email| !email.read).count();
    let anything_unread = snapshot.notifications.any_unread();
    let chat_unread = snapshot
        .notifications
        .is_unread(SurfaceKey::MessengerOnboarding);
    let email_unread = snapshot.notifications.is_unread(SurfaceKey::EmailInbox);
    let documents_unread = snapshot.notifications.is_unread(SurfaceKey::Documents);
    drop(snapshot);

    let on_reset = move |_| actions.clone().reset_tutorial_progress();

    rsx! {
        AppShell { title: "Beranda".to_string(),
            section { class: "rounded-lg border border-slate-200 bg-white p-6 shadow-sm",
                h2 { class: "text-lg font-semibold text-slate-900", "{greeting}" }
                p { class: "text-sm text-slate-600", "{role} · Hari pertamamu di Amboja" }
                p { class: "mt-2 text-xs text-slate-500",
                    "Asisten virtual di pojok kanan bawah siap memandumu."
                }
                if anything_unread {
                    p { class: "mt-1 text-xs font-medium text-red-600",
                        "Ada hal baru: ikon dengan titik merah belum kamu buka."
                    }
                }
            }
            div { class: "grid gap-4 md:grid-cols-3",
                QuickCard {
                    to: Route::Chat {},
                    title: "Chat".to_string(),
                    detail: "Kanal tim dan pesan onboarding".to_string(),
                    dot: chat_unread,
                }
                QuickCard {
                    to: Route::Email {},
                    title: "Email".to_string(),
                    detail: format!("{unread_emails} email belum dibaca"),
                    dot: email_unread,
                }
                QuickCard {
                    to: Route::Documents {},
                    title: "Dokumen".to_string(),
                    detail: "Catatan, brief, dan buku saku".to_string(),
                    dot: documents_unread,
                }
            }
            section { class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm",
                h3 { class: "text-sm font-semibold text-slate-800", "Simulasi" }
                p { class: "text-xs text-slate-500",
                    "Mengulang sesi pelatihan? Reset mengembalikan tutorial, kanal onboarding, \
                     dan semua penanda belum-dibaca ke kondisi awal."
                }
                button {
                    class: "mt-2 rounded border border-slate-300 px-3 py-1.5 text-xs text-slate-700 hover:bg-slate-100",
                    onclick: on_reset,
                    "Reset progres tutorial"
                }
            }
        }
    }
}

#[component]
fn QuickCard(to: Route, title: String, detail: String, dot: bool) -> Element {
    rsx! {
        Link {
            to,
            class: "rounded-lg border border-slate-200 bg-white p-4 shadow-sm hover:border-emerald-500",
            div { class: "flex items-center",
                h3 { class: "text-sm font-semibold text-slate-800", "{title}" }
                UnreadDot { visible: dot }
            }
            p { class: "mt-1 text-xs text-slate-500", "{detail}" }
        }
    }
}
