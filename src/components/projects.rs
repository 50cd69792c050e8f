//! Featured projects section.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Project entry keys under the `projects` section, in display order.
const PROJECT_KEYS: &[&str] = &["inspireAI", "correctMeAI", "timeForge"];

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("projects", key);

    view! {
        <section id="projects" class="section projects">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="projects__grid">
                {PROJECT_KEYS
                    .iter()
                    .map(|&key| {
                        view! {
                            <article class="project-card">
                                <h3 class="project-card__title">
                                    {move || locale.get().t("projects", &format!("{key}.title"))}
                                </h3>
                                <p class="project-card__subtitle">
                                    {move || locale.get().t("projects", &format!("{key}.subtitle"))}
                                </p>
                                <p class="project-card__description">
                                    {move || {
                                        locale.get().t("projects", &format!("{key}.description"))
                                    }}
                                </p>
                                <h4 class="project-card__features-title">
                                    {move || t("keyFeatures")}
                                </h4>
                                <ul class="project-card__features">
                                    {move || {
                                        locale
                                            .get()
                                            .t_list("projects", &format!("{key}.features"))
                                            .into_iter()
                                            .map(|feature| view! { <li>{feature}</li> })
                                            .collect::<Vec<_>>()
                                    }}
                                </ul>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
