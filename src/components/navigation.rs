//! Fixed top navigation bar with section anchors.

use leptos::prelude::*;

use crate::components::language_switcher::LanguageSwitcher;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::locale::LocaleState;

/// Translation key and anchor id for each nav entry.
const NAV_ITEMS: &[(&str, &str)] = &[
    ("home", "hero"),
    ("projects", "projects"),
    ("skills", "skills"),
    ("experience", "experience"),
    ("education", "education"),
    ("certifications", "certifications"),
    ("prizes", "prizes"),
    ("community", "community"),
    ("contact", "contact"),
];

/// Top navigation with anchor links, language switch, and theme toggle.
#[component]
pub fn Navigation() -> impl IntoView {
    let locale = expect_context::<RwSignal<LocaleState>>();

    view! {
        <nav class="nav">
            <div class="nav__inner">
                <span class="nav__brand">"Sarra Bousnina"</span>

                <div class="nav__links">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(key, anchor)| {
                            view! {
                                <a class="nav__link" href=format!("#{anchor}")>
                                    {move || locale.get().t("nav", key)}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>

                <div class="nav__controls">
                    <LanguageSwitcher/>
                    <ThemeToggle/>
                </div>
            </div>
        </nav>
    }
}
