//! Education history.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Education entry keys under the `education` section, newest first.
const ENTRY_KEYS: &[&str] = &["esprit", "ipein", "baccalaureate"];

#[component]
pub fn EducationSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("education", key);

    view! {
        <section id="education" class="section education">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="education__list">
                {ENTRY_KEYS
                    .iter()
                    .map(|&key| {
                        view! {
                            <article class="education-card">
                                <h3 class="education-card__title">
                                    {move || locale.get().t("education", &format!("{key}.title"))}
                                </h3>
                                <p class="education-card__organization">
                                    {move || {
                                        locale.get().t("education", &format!("{key}.organization"))
                                    }}
                                </p>
                                <p class="education-card__period">
                                    {move || locale.get().t("education", &format!("{key}.period"))}
                                </p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
