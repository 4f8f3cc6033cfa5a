#![allow(non_snake_case)]

mod config;
mod fixtures;
mod hooks;
mod models;
mod services;
mod state;
mod ui;

use config::AppConfig;
use dioxus::prelude::*;
use dioxus_router::prelude::*;
use once_cell::sync::OnceCell;
use state::AppState;
use tracing::info;
use ui::assistant::AssistantDock;
use ui::call::{CallScreen, Calls};
use ui::chat::Chat;
use ui::documents::Documents;
use ui::email::Email;
use ui::home::Home;
use ui::login::Login;
use ui::notifications::NotificationCenter;

pub(crate) static APP_CONFIG: OnceCell<AppConfig> = OnceCell::new();

fn main() {
    console_error_panic_hook::set_once();
    init_logging();

    let config = AppConfig::from_env();
    info!(profile = ?config.profile, "amboja workspace starting");
    let _ = APP_CONFIG.set(config);

    launch(App);
}

fn init_logging() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let _ = dioxus_logger::init(tracing::Level::INFO);
    });
}

#[component]
fn App() -> Element {
    let app_state = use_signal(AppState::default);

    use_context_provider(|| app_state);

    rsx! {
        div { class: "relative",
            Router::<Route> {}
            AssistantDock {}
            NotificationCenter {}
        }
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
pub(crate) enum Route {
    #[route("/")]
    Login {},
    #[route("/home")]
    Home {},
    #[route("/chat")]
    Chat {},
    #[route("/email")]
    Email {},
    #[route("/calls")]
    Calls {},
    #[route("/calls/:contact_id")]
    CallScreen { contact_id: String },
    #[route("/documents")]
    Documents {},
}
