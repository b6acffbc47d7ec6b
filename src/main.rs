use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};
use web_sys::MouseEvent;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

mod config;
mod content;
mod scroll;
mod components {
    pub mod icons;
    pub mod newsletter;
    pub mod reveal;
}
mod pages {
    pub mod landing;
}

use components::icons::Icon;
use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering landing page");
            html! { <Landing /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    let scroll_top = document.document_element().unwrap().scroll_top();
                    is_scrolled.set(scroll::is_elevated(scroll_top as f64));
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    window
                        .remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        )
                        .unwrap();
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let keep_open = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    <Icon name="gem" class="logo-icon" />
                    <span>{ content::BRAND_NAME }</span>
                </Link<Route>>

                <div class="nav-links">
                    { for content::NAV_ITEMS.iter().map(|item| html! {
                        <a key={item.label} href={item.anchor} class="nav-link">{ item.label }</a>
                    }) }
                    <a href="#contact" class="nav-cta">{"Contact Us"}</a>
                </div>

                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <Icon name="menu" />
                </button>
            </div>

            // Backdrop click dismisses; the panel itself swallows clicks.
            <div
                class={classes!("mobile-menu", (*menu_open).then(|| "open"))}
                onclick={close_menu.clone()}
            >
                <div class="mobile-menu-panel" onclick={keep_open}>
                    <button class="menu-close" onclick={close_menu.clone()} aria-label="Close menu">
                        <Icon name="x" />
                    </button>
                    { for content::NAV_ITEMS.iter().map(|item| {
                        let close_menu = close_menu.clone();
                        html! {
                            <a
                                key={item.label}
                                href={item.anchor}
                                class="nav-link"
                                onclick={close_menu}
                            >
                                { item.label }
                            </a>
                        }
                    }) }
                    <a href="#contact" class="nav-cta" onclick={close_menu}>{"Contact Us"}</a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
