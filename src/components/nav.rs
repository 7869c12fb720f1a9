use leptos::prelude::*;

/// Pixels of scroll before the nav picks up its shadow
#[cfg(feature = "hydrate")]
const SCROLL_SHADOW_AT: f64 = 8.0;

#[component]
pub fn Nav() -> impl IntoView {
    let (scrolled, _set_scrolled) = signal(false);

    #[cfg(feature = "hydrate")]
    Effect::new(move |_| {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let Some(window) = web_sys::window() else {
            return;
        };
        let on_scroll = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let past_threshold = web_sys::window()
                .and_then(|w| w.scroll_y().ok())
                .map(|y| y > SCROLL_SHADOW_AT)
                .unwrap_or(false);
            _set_scrolled.set(past_threshold);
        }) as Box<dyn FnMut(web_sys::Event)>);

        let _ = window
            .add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
        on_scroll.forget();
    });

    view! {
        <nav class="main-nav" class:scrolled=move || scrolled.get()>
            <div class="nav-brand">
                <a href="#top">"Launchlist"</a>
            </div>

            <div class="nav-links">
                <a href="#features">"Features"</a>
                <a href="#how-it-works">"How It Works"</a>
                <a href="#waitlist" class="btn btn-small">"Join the Waitlist"</a>
            </div>
        </nav>
    }
}
