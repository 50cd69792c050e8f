//! Dark mode toggle button.

use leptos::prelude::*;

use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Toggles the `data-theme` attribute and persists the preference.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle = move |_| {
        ui.update(|state| state.dark_mode = dark_mode::toggle(state.dark_mode));
    };

    view! {
        <button class="theme-toggle" aria-label="Toggle dark mode" on:click=on_toggle>
            {move || if ui.get().dark_mode { "🌙" } else { "☀️" }}
        </button>
    }
}
