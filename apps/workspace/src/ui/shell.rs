use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::models::SurfaceKey;
use crate::state::{use_app_actions, use_app_state};
use crate::Route;

/// Redirect to the login screen when no mock session is active.
pub fn use_require_login() {
    let state = use_app_state();
    let navigator = use_navigator();

    use_effect(move || {
        if state.read().current_user.is_none() {
            navigator.push(Route::Login {});
        }
    });
}

/// Red dot shown on sidebar entries and channel rows with unseen content.
#[component]
pub fn UnreadDot(visible: bool) -> Element {
    if !visible {
        return rsx! { Fragment {} };
    }
    rsx! {
        span { class: "ml-2 inline-block h-2 w-2 rounded-full bg-red-500" }
    }
}

/// Page frame: sidebar navigation plus the routed content.
#[component]
pub fn AppShell(title: String, children: Element) -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let snapshot = state.read();
    let user_name = snapshot
        .current_user
        .as_ref()
        .map(|user| user.name.clone())
        .unwrap_or_default();
    let chat_unread = snapshot
        .notifications
        .is_unread(SurfaceKey::MessengerOnboarding);
    let email_unread = snapshot.notifications.is_unread(SurfaceKey::EmailInbox);
    let documents_unread = snapshot.notifications.is_unread(SurfaceKey::Documents);
    drop(snapshot);

    let navigator = use_navigator();
    let on_logout = move |_| {
        actions.clone().logout();
        navigator.push(Route::Login {});
    };

    rsx! {
        div { class: "flex min-h-screen bg-slate-100",
            aside { class: "flex w-56 flex-col gap-1 border-r border-slate-200 bg-white p-4",
                p { class: "mb-4 text-lg font-bold text-emerald-700", "Amboja Workspace" }
                SidebarLink { to: Route::Home {}, label: "Beranda", dot: false }
                SidebarLink { to: Route::Chat {}, label: "Chat", dot: chat_unread }
                SidebarLink { to: Route::Email {}, label: "Email", dot: email_unread }
                SidebarLink { to: Route::Calls {}, label: "Panggilan", dot: false }
                SidebarLink { to: Route::Documents {}, label: "Dokumen", dot: documents_unread }
                div { class: "mt-auto space-y-2 border-t border-slate-100 pt-3",
                    p { class: "text-xs text-slate-500", "{user_name}" }
                    button {
                        class: "text-xs text-slate-400 underline hover:text-slate-600",
                        onclick: on_logout,
                        "Keluar"
                    }
                }
            }
            main { class: "flex-1 space-y-4 p-6",
                h1 { class: "text-xl font-semibold text-slate-900", "{title}" }
                {children}
            }
        }
    }
}

#[component]
fn SidebarLink(to: Route, label: String, dot: bool) -> Element {
    rsx! {
        Link {
            to,
            class: "flex items-center rounded px-3 py-2 text-sm text-slate-700 hover:bg-slate-100",
            span { "{label}" }
            UnreadDot { visible: dot }
        }
    }
}
