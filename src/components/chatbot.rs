//! Floating assistant widget: launcher bubble, draggable chat panel,
//! and the message exchange loop against the hosted assistant service.
//!
//! ARCHITECTURE
//! ============
//! All conversation and geometry rules live in `state::chat` and
//! `state::widget`; this component only measures the real panel and
//! viewport, feeds pointer coordinates in, and renders the resulting
//! state. The panel keeps its CSS bottom-right anchor until the first
//! measurement lands, then switches to explicit `left/top` coordinates
//! so dragging and clamping stay consistent.

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

use crate::net::assistant::{self, AskError};
use crate::state::chat::{ChatState, Sender};
use crate::state::locale::LocaleState;
use crate::state::widget::{Position, WidgetState};
#[cfg(feature = "hydrate")]
use crate::state::widget::Size;
use crate::util::markdown::render_markdown_html;
use crate::util::scroll;

#[cfg(feature = "hydrate")]
fn measured_panel(panel_ref: NodeRef<leptos::html::Div>) -> Option<Size> {
    let rect = panel_ref.get_untracked()?.get_bounding_client_rect();
    Some(Size {
        width: rect.width(),
        height: rect.height(),
    })
}

#[cfg(feature = "hydrate")]
fn viewport_size() -> Size {
    let window = window();
    Size {
        width: window
            .inner_width()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
        height: window
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0),
    }
}

/// Floating assistant widget mounted once at the page root.
#[component]
pub fn FloatingChatbot() -> impl IntoView {
    let chat = expect_context::<RwSignal<ChatState>>();
    let widget = expect_context::<RwSignal<WidgetState>>();
    let locale = expect_context::<RwSignal<LocaleState>>();

    let input = RwSignal::new(String::new());
    // False until the panel has been measured and given explicit
    // coordinates; before that the CSS corner anchor positions it.
    // Cleared again on close so every open re-anchors to the corner.
    let placed = RwSignal::new(false);
    let root_ref = NodeRef::<leptos::html::Div>::new();
    let panel_ref = NodeRef::<leptos::html::Div>::new();
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Snap to the bottom-right corner each time the panel opens, once
    // it has a layout to measure.
    Effect::new(move || {
        if !widget.get().open || placed.get_untracked() {
            return;
        }
        #[cfg(feature = "hydrate")]
        request_animation_frame(move || {
            if let Some(panel) = measured_panel(panel_ref) {
                widget.update(|w| w.reset_position(panel, viewport_size()));
                placed.set(true);
            }
        });
    });

    // Keep the messages list pinned to the newest entry.
    Effect::new(move || {
        let _ = chat.get().messages.len();

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    #[cfg(feature = "hydrate")]
    {
        // Snap back to the corner whenever the viewport changes.
        window_event_listener(leptos::ev::resize, move |_| {
            if !placed.get_untracked() {
                return;
            }
            if let Some(panel) = measured_panel(panel_ref) {
                widget.update(|w| w.reset_position(panel, viewport_size()));
            }
        });

        // Pointer-down anywhere outside the widget closes the panel.
        window_event_listener(leptos::ev::pointerdown, move |ev| {
            if !widget.get_untracked().open {
                return;
            }
            let Some(root) = root_ref.get_untracked() else {
                return;
            };
            let target = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Node>().ok());
            if !root.contains(target.as_ref()) {
                widget.update(|w| w.open = false);
                placed.set(false);
            }
        });
    }

    let send_text = move |text: String| {
        let mut history = None;
        chat.update(|c| history = c.begin_exchange(&text));
        let Some(history) = history else {
            return;
        };
        input.set(String::new());

        leptos::task::spawn_local(async move {
            match assistant::ask(text.trim(), &history).await {
                Ok(reply) => {
                    let mut action = None;
                    chat.update(|c| action = c.settle_success(reply));
                    if let Some(target) = action {
                        scroll::dispatch(target);
                    }
                }
                Err(err) => {
                    log::warn!("assistant call failed: {err}");
                    let key = if matches!(err, AskError::TimedOut) {
                        "timeout"
                    } else {
                        "error"
                    };
                    let apology = locale.get_untracked().t("chatbot", key);
                    chat.update(|c| c.settle_failure(apology));
                }
            }
        });
    };

    let do_send = move || send_text(input.get());

    let on_send_click = move |_| do_send();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            do_send();
        }
    };

    let on_drag_start = move |ev: leptos::ev::PointerEvent| {
        let pointer = Position {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        };
        #[cfg(feature = "hydrate")]
        {
            // A drag before the first anchor measurement still needs the
            // state position to match the rendered corner.
            if !placed.get_untracked() {
                if let Some(el) = panel_ref.get_untracked() {
                    let rect = el.get_bounding_client_rect();
                    widget.update(|w| {
                        w.position = Position {
                            x: rect.left(),
                            y: rect.top(),
                        };
                    });
                }
                placed.set(true);
            }
            if let Some(target) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
            {
                let _ = target.set_pointer_capture(ev.pointer_id());
            }
        }
        widget.update(|w| w.begin_drag(pointer));
    };

    let on_drag_move = move |ev: leptos::ev::PointerEvent| {
        if !widget.get_untracked().dragging {
            return;
        }
        let pointer = Position {
            x: f64::from(ev.client_x()),
            y: f64::from(ev.client_y()),
        };
        #[cfg(feature = "hydrate")]
        if let Some(panel) = measured_panel(panel_ref) {
            widget.update(|w| w.drag_to(pointer, panel, viewport_size()));
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = pointer;
    };

    let on_drag_end = move |_ev: leptos::ev::PointerEvent| {
        widget.update(|w| w.end_drag());
    };

    let on_reset = move |_| {
        #[cfg(feature = "hydrate")]
        if let Some(panel) = measured_panel(panel_ref) {
            widget.update(|w| w.reset_position(panel, viewport_size()));
            placed.set(true);
        }
    };

    let panel_style = move || {
        if placed.get() {
            let position = widget.get().position;
            format!(
                "left: {:.0}px; top: {:.0}px; right: auto; bottom: auto;",
                position.x, position.y
            )
        } else {
            String::new()
        }
    };

    let can_send = move || !input.get().trim().is_empty() && !chat.get().pending();

    view! {
        <div class="chatbot" node_ref=root_ref>
            <Show when=move || !widget.get().open>
                <button
                    class="chatbot__launcher"
                    aria-label="Open chat"
                    on:click=move |_| widget.update(|w| w.open = true)
                >
                    "💬"
                </button>
            </Show>

            <Show when=move || widget.get().open>
                <div class="chatbot__panel" node_ref=panel_ref style=panel_style>
                    <div class="chatbot__header">
                        <div
                            class="chatbot__drag-handle"
                            on:pointerdown=on_drag_start
                            on:pointermove=on_drag_move
                            on:pointerup=on_drag_end
                            on:pointercancel=on_drag_end
                        >
                            <span class="chatbot__title">"Sarra's Assistant"</span>
                            <span class="chatbot__drag-hint">
                                {move || locale.get().t("chatbot", "drag")}
                            </span>
                        </div>
                        <button
                            class="chatbot__reset"
                            title=move || locale.get().t("chatbot", "reset")
                            on:click=on_reset
                        >
                            "⌂"
                        </button>
                        <button
                            class="chatbot__close"
                            aria-label="Close chat"
                            on:click=move |_| {
                                widget.update(|w| w.open = false);
                                placed.set(false);
                            }
                        >
                            "✕"
                        </button>
                    </div>

                    <div class="chatbot__messages" node_ref=messages_ref>
                        {move || {
                            let messages = chat.get().messages;
                            if messages.is_empty() {
                                return view! {
                                    <div class="chatbot__empty">
                                        {locale.get().t("chatbot", "empty")}
                                    </div>
                                }
                                    .into_any();
                            }

                            messages
                                .iter()
                                .map(|msg| {
                                    if msg.is_thinking {
                                        let label = msg.text.clone();
                                        return view! {
                                            <div class="chatbot__message chatbot__message--bot chatbot__message--thinking">
                                                <span class="chatbot__thinking-label">{label}</span>
                                                <span class="chatbot__dots">
                                                    <span></span>
                                                    <span></span>
                                                    <span></span>
                                                </span>
                                            </div>
                                        }
                                            .into_any();
                                    }

                                    match msg.sender {
                                        Sender::User => {
                                            view! {
                                                <div class="chatbot__message chatbot__message--user">
                                                    {msg.text.clone()}
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        Sender::Bot => {
                                            let html = render_markdown_html(&msg.text);
                                            let source_link = msg.source.clone().and_then(|source| {
                                                let url = source.url?;
                                                let label =
                                                    source.label.unwrap_or_else(|| url.clone());
                                                Some(view! {
                                                    <a
                                                        class="chatbot__source"
                                                        href=url
                                                        target="_blank"
                                                        rel="noopener noreferrer"
                                                    >
                                                        {label}
                                                    </a>
                                                })
                                            });
                                            let suggestions = msg.suggestions.clone();
                                            view! {
                                                <div class="chatbot__message chatbot__message--bot">
                                                    <div class="chatbot__markdown" inner_html=html></div>
                                                    {source_link}
                                                    <div class="chatbot__suggestions">
                                                        {suggestions
                                                            .into_iter()
                                                            .map(|suggestion| {
                                                                let text = suggestion.clone();
                                                                view! {
                                                                    <button
                                                                        class="chatbot__suggestion"
                                                                        on:click=move |_| send_text(text.clone())
                                                                    >
                                                                        {suggestion}
                                                                    </button>
                                                                }
                                                            })
                                                            .collect::<Vec<_>>()}
                                                    </div>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </div>

                    <div class="chatbot__input-row">
                        <input
                            class="chatbot__input"
                            type="text"
                            placeholder=move || locale.get().t("chatbot", "placeholder")
                            prop:value=move || input.get()
                            disabled=move || chat.get().pending()
                            on:input=move |ev| input.set(event_target_value(&ev))
                            on:keydown=on_keydown
                        />
                        <button
                            class="btn btn--primary chatbot__send"
                            on:click=on_send_click
                            disabled=move || !can_send()
                        >
                            {move || locale.get().t("chatbot", "send")}
                        </button>
                    </div>
                </div>
            </Show>
        </div>
    }
}
