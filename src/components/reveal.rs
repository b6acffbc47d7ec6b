use yew::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Initial offset the wrapped content slides in from.
#[derive(Clone, Copy, PartialEq)]
pub enum RevealDirection {
    Up,
    Left,
    Right,
}

impl RevealDirection {
    fn class(self) -> &'static str {
        match self {
            RevealDirection::Up => "reveal-up",
            RevealDirection::Left => "reveal-left",
            RevealDirection::Right => "reveal-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or(RevealDirection::Up)]
    pub direction: RevealDirection,
    /// Extra transition delay, used to stagger items of a list.
    #[prop_or_default]
    pub delay_ms: u32,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Wrapper that plays a one-time entrance transition the first time it
/// scrolls into the viewport. Once revealed it stays revealed; scrolling away
/// and back does not replay the transition. The content is in the DOM from
/// the start, so the effect is purely visual.
#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node_ref = use_node_ref();
    let revealed = use_state(|| false);

    {
        let node_ref = node_ref.clone();
        let revealed = revealed.clone();
        use_effect_with_deps(
            move |_| {
                let mut live: Option<(
                    IntersectionObserver,
                    Closure<dyn FnMut(Array, IntersectionObserver)>,
                )> = None;

                if let Some(element) = node_ref.cast::<Element>() {
                    let on_intersect = revealed.clone();
                    let callback = Closure::wrap(Box::new(
                        move |entries: Array, observer: IntersectionObserver| {
                            let intersecting = entries.iter().any(|entry| {
                                entry
                                    .dyn_into::<IntersectionObserverEntry>()
                                    .map(|e| e.is_intersecting())
                                    .unwrap_or(false)
                            });
                            if intersecting {
                                on_intersect.set(true);
                                // One-shot: stop watching as soon as we fired.
                                observer.disconnect();
                            }
                        },
                    )
                        as Box<dyn FnMut(Array, IntersectionObserver)>);

                    let options = IntersectionObserverInit::new();
                    options.set_root_margin("0px 0px -50px 0px");
                    options.set_threshold(&JsValue::from(0.1));

                    match IntersectionObserver::new_with_options(
                        callback.as_ref().unchecked_ref(),
                        &options,
                    ) {
                        Ok(observer) => {
                            observer.observe(&element);
                            live = Some((observer, callback));
                        }
                        // No observer support: show the content right away.
                        Err(_) => revealed.set(true),
                    }
                } else {
                    revealed.set(true);
                }

                move || {
                    if let Some((observer, _callback)) = live {
                        observer.disconnect();
                    }
                }
            },
            (),
        );
    }

    let style = (props.delay_ms > 0).then(|| format!("transition-delay: {}ms;", props.delay_ms));

    html! {
        <div
            ref={node_ref}
            class={classes!(
                "reveal",
                props.direction.class(),
                (*revealed).then(|| "visible"),
                props.class.clone()
            )}
            {style}
        >
            { for props.children.iter() }
        </div>
    }
}
