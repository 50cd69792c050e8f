//! Locale switch between the supported display languages.

use leptos::prelude::*;

use crate::state::locale::{Locale, LocaleState};

/// Two-button locale switch. The chosen locale persists across reloads.
#[component]
pub fn LanguageSwitcher() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();

    let select = move |next: Locale| locale.update(|state| state.set_locale(next));
    let active = move |which: Locale| locale.get().locale == which;

    view! {
        <div class="language-switcher" role="group" aria-label="Language">
            <button
                class="language-switcher__option"
                class:language-switcher__option--active=move || active(Locale::En)
                on:click=move |_| select(Locale::En)
            >
                "EN"
            </button>
            <button
                class="language-switcher__option"
                class:language-switcher__option--active=move || active(Locale::Fr)
                on:click=move |_| select(Locale::Fr)
            >
                "FR"
            </button>
        </div>
    }
}
