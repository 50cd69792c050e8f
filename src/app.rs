//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::chat::ChatState;
use crate::state::locale::LocaleState;
use crate::state::ui::UiState;
use crate::state::widget::WidgetState;
use crate::util::dark_mode;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
/// The persisted locale and theme preference are restored here so every
/// child component sees the same initial state.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let locale = RwSignal::new(LocaleState::restore());
    let chat = RwSignal::new(ChatState::default());
    let widget = RwSignal::new(WidgetState::default());
    let ui = RwSignal::new(UiState {
        dark_mode: dark_mode::read_preference(),
    });
    dark_mode::apply(ui.get_untracked().dark_mode);

    provide_context(locale);
    provide_context(chat);
    provide_context(widget);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text="Sarra Bousnina | AI Software Engineer"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
