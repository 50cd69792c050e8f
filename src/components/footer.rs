//! Page footer.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

#[component]
pub fn Footer() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("footer", key);

    view! {
        <footer class="footer">
            <p class="footer__bio">{move || t("bio")}</p>
            <p class="footer__available">{move || t("available")}</p>
            <p class="footer__built">{move || t("builtWith")}</p>
        </footer>
    }
}
