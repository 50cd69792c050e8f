//! Landing hero section.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

#[component]
pub fn HeroSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("hero", key);

    view! {
        <section id="hero" class="hero">
            <p class="hero__greeting">{move || t("greeting")}</p>
            <h1 class="hero__name">{move || t("name")}</h1>
            <h2 class="hero__title">{move || t("title")}</h2>
            <p class="hero__student">{move || t("studentInfo")}</p>
            <p class="hero__subtitle">{move || t("subtitle")}</p>
            <div class="hero__actions">
                <a class="btn btn--primary" href="#projects">{move || t("ctaButton")}</a>
                <a class="btn" href="#contact">{move || t("contactMe")}</a>
            </div>
        </section>
    }
}
