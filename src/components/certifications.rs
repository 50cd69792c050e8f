//! Professional certifications grid.
//!
//! Certification names and issuers are proper nouns, so they live here
//! rather than in the translation table.

use leptos::prelude::*;

use crate::state::locale::LocaleState;

/// (certification name, issuer) in display order.
const CERTIFICATIONS: &[(&str, &str)] = &[
    ("Building RAG Agents with LLMs", "NVIDIA"),
    ("Building LLM Applications With Prompt Engineering", "NVIDIA"),
    ("Getting Started with Deep Learning", "NVIDIA"),
    ("Supervised Machine Learning: Regression and Classification", "DeepLearning.AI"),
    ("Hedera Developer Certification", "The Hashgraph Association"),
];

#[component]
pub fn CertificationsSection() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();
    let t = move |key: &'static str| locale.get().t("certifications", key);

    view! {
        <section id="certifications" class="section certifications">
            <h2 class="section__title">{move || t("title")}</h2>
            <p class="section__subtitle">{move || t("subtitle")}</p>

            <div class="certifications__grid">
                {CERTIFICATIONS
                    .iter()
                    .map(|&(name, issuer)| {
                        view! {
                            <article class="certification-card">
                                <h3 class="certification-card__name">{name}</h3>
                                <p class="certification-card__issuer">
                                    {move || t("issuedBy")} " " {issuer}
                                </p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}
