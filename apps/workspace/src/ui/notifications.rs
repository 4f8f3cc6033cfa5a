use dioxus::prelude::*;

use crate::state::{use_app_actions, use_app_state};

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl ToastKind {
    fn accent_classes(self) -> (&'static str, &'static str) {
        match self {
            Self::Success => ("border-emerald-500 bg-emerald-50", "text-emerald-700"),
            Self::Error => ("border-red-500 bg-red-50", "text-red-700"),
        }
    }
}

#[component]
pub fn Toast(kind: ToastKind, title: String, message: String, on_close: EventHandler<MouseEvent>) -> Element {
    let (container_class, accent_text) = kind.accent_classes();

    rsx! {
        div { class: "pointer-events-auto rounded-lg border-l-4 p-4 shadow-lg {container_class}",
            div { class: "flex items-start justify-between gap-4",
                div { class: "space-y-1",
                    h3 { class: "text-sm font-semibold {accent_text}", "{title}" }
                    p { class: "text-xs text-slate-700", "{message}" }
                }
                button {
                    class: "rounded bg-slate-200 px-2 py-1 text-[11px] text-slate-600 transition hover:bg-slate-300",
                    onclick: move |evt| on_close.call(evt),
                    "Tutup"
                }
            }
        }
    }
}

/// Operation toasts in the top-right corner; the dialogue scripts never
/// surface errors here, only storage and form failures do.
#[component]
pub fn NotificationCenter() -> Element {
    let actions = use_app_actions();
    let snapshot = use_app_state().read().clone();

    let mut toasts: Vec<Element> = Vec::new();

    if let Some(error) = snapshot.operation.error.clone() {
        let app_actions = actions.clone();
        toasts.push(rsx! {
            Toast {
                key: "operation-error",
                kind: ToastKind::Error,
                title: "Gagal".to_string(),
                message: error,
                on_close: move |_| app_actions.clone().clear_operation_status(),
            }
        });
    } else if let Some(message) = snapshot.operation.last_message.clone() {
        let app_actions = actions.clone();
        toasts.push(rsx! {
            Toast {
                key: "operation-success",
                kind: ToastKind::Success,
                title: "Berhasil".to_string(),
                message,
                on_close: move |_| app_actions.clone().clear_operation_status(),
            }
        });
    }

    if toasts.is_empty() {
        return rsx! { Fragment {} };
    }

    rsx! {
        div { class: "pointer-events-none fixed right-4 top-4 z-50 flex w-80 flex-col gap-3",
            for toast in toasts {
                {toast}
            }
        }
    }
}
