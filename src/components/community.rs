//! Community involvement section.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Community entry keys under the `community` section.
const ENTRY_KEYS: &[&str] = &["deepflowMentor", "ieeeMember", "hackflowVolunteer"];

#[component]
pub fn CommunitySection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("community", key);

    view! {
        <section id="community" class="section community">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="community__grid">
                {ENTRY_KEYS
                    .iter()
                    .map(|&key| {
                        view! {
                            <article class="community-card">
                                <h3 class="community-card__role">
                                    {move || locale.get().t("community", &format!("{key}.role"))}
                                </h3>
                                <p class="community-card__organization">
                                    {move || {
                                        locale.get().t("community", &format!("{key}.organization"))
                                    }}
                                </p>
                                <ul class="community-card__impact">
                                    {move || {
                                        locale
                                            .get()
                                            .t_list("community", &format!("{key}.impact"))
                                            .into_iter()
                                            .map(|line| view! { <li>{line}</li> })
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
