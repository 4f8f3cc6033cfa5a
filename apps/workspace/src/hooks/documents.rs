use dioxus::prelude::*;
#[cfg(target_arch = "wasm32")]
use gloo_timers::future::TimeoutFuture;

use crate::services::storage;
use crate::state::{use_app_actions, use_app_state};

/// Load the persisted document slot once per session, with a short delay so
/// the loading state is visible.
pub fn use_documents_loader() {
    let actions = use_app_actions();
    let state = use_app_state();

    let loaded = state.read().documents.loaded;

    use_future(move || {
        let actions = actions.clone();
        async move {
            if loaded {
                return;
            }

            actions.set_documents_loading(true);

            #[cfg(target_arch = "wasm32")]
            TimeoutFuture::new(150).await;

            match storage::load_documents() {
                Ok(records) => {
                    tracing::info!(count = records.len(), "documents loaded from storage");
                    actions.set_documents(records);
                }
                Err(err) => {
                    tracing::warn!(?err, "document slot could not be read");
                    actions.set_documents_error(
                        "Penyimpanan lokal tidak bisa dibaca; daftar dimulai kosong".to_string(),
                    );
                }
            }
        }
    });
}
