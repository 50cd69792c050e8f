//! Professional experience timeline.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Experience entry keys under the `experience` section, newest first.
const ENTRY_KEYS: &[&str] = &["mahdGroup", "ctama"];

#[component]
pub fn ExperienceSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("experience", key);

    view! {
        <section id="experience" class="section experience">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="experience__timeline">
                {ENTRY_KEYS
                    .iter()
                    .map(|&key| {
                        view! {
                            <article class="experience-card">
                                <h3 class="experience-card__title">
                                    {move || locale.get().t("experience", &format!("{key}.title"))}
                                </h3>
                                <p class="experience-card__organization">
                                    {move || {
                                        locale.get().t("experience", &format!("{key}.organization"))
                                    }}
                                </p>
                                <p class="experience-card__period">
                                    {move || locale.get().t("experience", &format!("{key}.period"))}
                                </p>
                                <p class="experience-card__description">
                                    {move || {
                                        locale.get().t("experience", &format!("{key}.description"))
                                    }}
                                </p>
                                <h4 class="experience-card__achievements-title">
                                    {move || t("keyAchievements")}
                                </h4>
                                <ul class="experience-card__achievements">
                                    {move || {
                                        locale
                                            .get()
                                            .t_list("experience", &format!("{key}.achievements"))
                                            .into_iter()
                                            .map(|achievement| view! { <li>{achievement}</li> })
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
