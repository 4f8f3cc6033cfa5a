use dioxus::prelude::*;

use crate::state::use_app_actions;

/// Start the tutorial script the first time a logged-in page mounts.
/// `begin_tutorial` is idempotent, so remounts and route changes are safe.
pub fn use_tutorial_autostart() {
    let actions = use_app_actions();

    use_hook(move || {
        actions.begin_tutorial();
    });
}
