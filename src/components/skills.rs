//! Technical skills section, grouped by category.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// Category keys under `skills.categories` / `skills.items`.
const CATEGORIES: &[&str] = &["languages", "frameworks", "databases", "generativeAI", "tools"];

#[component]
pub fn SkillsSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("skills", key);

    view! {
        <section id="skills" class="section skills">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="skills__grid">
                {CATEGORIES
                    .iter()
                    .map(|&category| {
                        view! {
                            <div class="skills__category">
                                <h3 class="skills__category-title">
                                    {move || {
                                        locale.get().t("skills", &format!("categories.{category}"))
                                    }}
                                </h3>
                                <ul class="skills__items">
                                    {move || {
                                        locale
                                            .get()
                                            .t_list("skills", &format!("items.{category}"))
                                            .into_iter()
                                            .map(|item| view! { <li class="skills__item">{item}</li> })
                                            .collect::<Vec<_>>()
                                    }}
                                </ul>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
