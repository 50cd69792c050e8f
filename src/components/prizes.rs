//! Awards and achievements section.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Prize entry keys under the `prizes` section.
const ENTRY_KEYS: &[&str] = &["insatHackathon", "balDesProjets"];

#[component]
pub fn PrizesSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("prizes", key);

    view! {
        <section id="prizes" class="section prizes">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="prizes__list">
                {ENTRY_KEYS
                    .iter()
                    .map(|&key| {
                        view! {
                            <article class="prize-card">
                                <h3 class="prize-card__title">
                                    {move || locale.get().t("prizes", &format!("{key}.title"))}
                                </h3>
                                <p class="prize-card__subtitle">
                                    {move || locale.get().t("prizes", &format!("{key}.subtitle"))}
                                </p>
                                <p class="prize-card__description">
                                    {move || {
                                        locale.get().t("prizes", &format!("{key}.description"))
                                    }}
                                </p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
