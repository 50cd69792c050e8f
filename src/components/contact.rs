//! Contact section with direct links.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

const EMAIL: &str = "bousninasarra1@gmail.com";
const GITHUB_URL: &str = "https://github.com/sarrabousnina1";
const LINKEDIN_URL: &str = "https://www.linkedin.com/in/sarra-bousnina";

#[component]
pub fn ContactSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("contact", key);

    view! {
        <section id="contact" class="section contact">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <h3 class="contact__connect">{move || t("letsConnect")}</h3>
            <div class="contact__links">
                <a class="contact__link" href=format!("mailto:{EMAIL}")>{EMAIL}</a>
                <a
                    class="contact__link"
                    href=GITHUB_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "GitHub"
                </a>
                <a
                    class="contact__link"
                    href=LINKEDIN_URL
                    target="_blank"
                    rel="noopener noreferrer"
                >
                    "LinkedIn"
                </a>
            </div>
            <p class="contact__available">{move || t("available")}</p>
        </section>
    }
}
