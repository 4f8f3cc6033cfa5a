use dioxus::prelude::*;
use dioxus_router::prelude::*;

use crate::state::{use_app_actions, use_app_state};
use crate::{Route, APP_CONFIG};

#[component]
pub fn Login() -> Element {
    let actions = use_app_actions();
    let state = use_app_state();
    let navigator = use_navigator();

    let prefill = APP_CONFIG
        .get()
        .and_then(|config| config.default_email.clone())
        .unwrap_or_default();

    let mut email = use_signal(move || prefill);
    let mut password = use_signal(String::new);

    use_effect(move || {
        if state.read().current_user.is_some() {
            navigator.push(Route::Home {});
        }
    });

    let error = state.read().operation.error.clone();

    let on_submit = {
        let actions = actions.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            actions.login(&email.read(), &password.read());
        }
    };

    rsx! {
        div { class: "flex min-h-screen items-center justify-center bg-slate-100",
            form {
                class: "w-96 space-y-4 rounded-lg border border-slate-200 bg-white p-8 shadow-sm",
                onsubmit: on_submit,
                header { class: "space-y-1 text-center",
                    h1 { class: "text-xl font-bold text-emerald-700", "Amboja Workspace" }
                    p { class: "text-xs text-slate-500", "Masuk untuk memulai simulasi kerja" }
                }
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { class: "font-medium", "Email" }
                    input {
                        class: "w-full rounded border border-slate-300 p-2 text-sm",
                        r#type: "email",
                        placeholder: "nama@amboja.id",
                        value: "{email}",
                        oninput: move |evt| email.set(evt.value()),
                    }
                }
                label { class: "block space-y-1 text-xs text-slate-600",
                    span { class: "font-medium", "Kata sandi" }
                    input {
                        class: "w-full rounded border border-slate-300 p-2 text-sm",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |evt| password.set(evt.value()),
                    }
                }
                if let Some(message) = error {
                    p { class: "text-xs text-red-600", "{message}" }
                }
                button {
                    class: "w-full rounded bg-emerald-600 py-2 text-sm font-semibold text-white hover:bg-emerald-700",
                    r#type: "submit",
                    "Masuk"
                }
                p { class: "text-center text-[11px] text-slate-400",
                    "Akun demo: budi@amboja.id / amboja123"
                }
            }
        }
    }
}
