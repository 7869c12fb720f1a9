use leptos::prelude::*;

/// Wraps a block that starts hidden and fades in the first time it enters
/// the viewport. One-shot per element: once revealed, the observer lets go.
#[component]
pub fn RevealOnScroll(children: Children) -> impl IntoView {
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        Effect::new(move |_| {
            let Some(el) = node.get() else {
                return;
            };

            let callback = Closure::wrap(Box::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let Ok(entry) = entry.dyn_into::<web_sys::IntersectionObserverEntry>()
                        else {
                            continue;
                        };
                        if entry.is_intersecting() {
                            let target = entry.target();
                            let _ = target.class_list().add_1("is-visible");
                            observer.unobserve(&target);
                        }
                    }
                },
            )
                as Box<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>);

            let Ok(observer) =
                web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref())
            else {
                return;
            };
            observer.observe(el.as_ref());
            callback.forget();

            on_cleanup(move || observer.disconnect());
        });
    }

    view! { <div class="reveal" node_ref=node>{children()}</div> }
}
