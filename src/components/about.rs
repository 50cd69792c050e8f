//! About section.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

#[component]
pub fn AboutSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("about", key);

    view! {
        <section id="about" class="section about">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>
            <p class="about__seeking">{move || t("seeking")}</p>
        </section>
    }
}
