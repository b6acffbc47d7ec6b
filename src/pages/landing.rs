use yew::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlImageElement, MouseEvent};
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};
use chrono::{Datelike, Local};

use crate::components::icons::Icon;
use crate::components::newsletter::NewsletterForm;
use crate::components::reveal::{Reveal, RevealDirection};
use crate::content;
use crate::scroll;

#[function_component(Landing)]
pub fn landing() -> Html {
    let hero_ref = use_node_ref();

    // Scroll to top only on initial mount
    {
        use_effect_with_deps(
            move |_| {
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            (),
        );
    }

    // Fade and shrink the hero as the page scrolls away from it.
    {
        let hero_ref = hero_ref.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();
                let document = window.document().unwrap();
                let window_clone = window.clone();

                let scroll_callback = Closure::wrap(Box::new(move || {
                    if let Some(hero) = hero_ref.cast::<HtmlElement>() {
                        let scroll_y = window_clone.scroll_y().unwrap_or(0.0);
                        let viewport = window_clone
                            .inner_height()
                            .ok()
                            .and_then(|h| h.as_f64())
                            .unwrap_or(0.0);
                        let full_height = document
                            .document_element()
                            .map(|el| el.scroll_height() as f64)
                            .unwrap_or(0.0);

                        let t = scroll::hero_transform(scroll_y, full_height - viewport);
                        let _ = hero.set_attribute(
                            "style",
                            &format!("opacity: {}; transform: scale({});", t.opacity, t.scale),
                        );
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                // Initial check so a mid-page reload starts from the right state
                scroll_callback
                    .as_ref()
                    .unchecked_ref::<web_sys::js_sys::Function>()
                    .call0(&JsValue::NULL)
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

    // No-op when the target section is missing.
    let scroll_to_about = Callback::from(|_: MouseEvent| {
        if let Some(section) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id("about"))
        {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            section.scroll_into_view_with_scroll_into_view_options(&options);
        }
    });

    html! {
        <div class="landing-page">
            <section ref={hero_ref} class="hero">
                <div class="hero-background">
                    <img src="/images/hero-crystal.jpg" alt="Mineral crystal formation" />
                    <div class="hero-overlay"></div>
                </div>
                <div class="hero-content">
                    <h1>{"Discover the Earth's Hidden Treasures"}</h1>
                    <p class="hero-subtitle">{ content::BRAND_TAGLINE }</p>
                    <div class="hero-cta-group">
                        <a href="#showcase" class="hero-cta">{"Explore Our Collection"}</a>
                        <a href="#about" class="hero-cta secondary">{"Learn About Our Mission"}</a>
                    </div>
                </div>
                <button class="scroll-down" onclick={scroll_to_about} aria-label="Scroll down">
                    <Icon name="chevron-down" />
                </button>
            </section>

            <AboutSection />
            <EducationSection />
            <InnovationSection />
            <SustainabilitySection />
            <ShowcaseSection />
            <CommunitySection />
            <PageFooter />

            <style>
                { PAGE_STYLE }
            </style>
        </div>
    }
}

#[function_component(AboutSection)]
fn about_section() -> Html {
    html! {
        <section id="about" class="about-section">
            <div class="container">
                <div class="two-column">
                    <Reveal direction={RevealDirection::Left}>
                        <h2>{"A Deep Love for Earth's Minerals"}</h2>
                        <p>
                            {"At TerraNova, we believe that minerals are not just resources to be \
                              extracted, but treasures to be cherished. Our passion for geology \
                              drives us to explore, educate, and innovate in ways that honor the \
                              Earth's natural beauty."}
                        </p>
                        <p>
                            {"Founded by a team of geologists and designers, we bridge the gap \
                              between scientific understanding and aesthetic appreciation of \
                              mineral materials."}
                        </p>
                        <button class="story-button">
                            {"Our Story"}
                            <Icon name="arrow-right" class="button-arrow" />
                        </button>
                    </Reveal>
                    <Reveal direction={RevealDirection::Right} delay_ms={200} class="section-image">
                        <img src="/images/geologist.jpg" alt="Geologist examining minerals" loading="lazy" />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(EducationSection)]
fn education_section() -> Html {
    html! {
        <section id="education" class="education-section">
            <div class="container">
                <Reveal class="section-heading">
                    <h2>{"Discover the World of Minerals"}</h2>
                    <p>
                        {"Expand your knowledge about the fascinating world of geology, \
                          mineralogy, and the Earth's hidden treasures."}
                    </p>
                </Reveal>
                <div class="topic-grid">
                    { for content::EDUCATION_TOPICS.iter().enumerate().map(|(index, topic)| html! {
                        <Reveal
                            key={topic.title}
                            delay_ms={scroll::stagger_delay_ms(index, 200)}
                            class="topic-card"
                        >
                            <div class="topic-icon"><Icon name={topic.icon} /></div>
                            <h3>{ topic.title }</h3>
                            <p>{ topic.description }</p>
                            <a href="#" class="learn-more">
                                {"Learn more"}
                                <Icon name="arrow-right" class="link-arrow" />
                            </a>
                        </Reveal>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(InnovationSection)]
fn innovation_section() -> Html {
    html! {
        <section id="innovation" class="innovation-section">
            <div class="container">
                <Reveal class="section-heading">
                    <h2>{"Mining Innovations for the Future"}</h2>
                    <p>
                        {"Exploring cutting-edge technologies and approaches that are \
                          transforming the mineral industry."}
                    </p>
                </Reveal>
                <div class="two-column">
                    <Reveal direction={RevealDirection::Left} class="section-image tall">
                        <img src="/images/mining-innovation.jpg" alt="Mining innovation technology" loading="lazy" />
                    </Reveal>
                    <div class="info-stack">
                        { for content::INNOVATION_ITEMS.iter().enumerate().map(|(index, item)| html! {
                            <Reveal
                                key={item.title}
                                direction={RevealDirection::Right}
                                delay_ms={scroll::stagger_delay_ms(index, 200)}
                                class="info-card"
                            >
                                <h3>{ item.title }</h3>
                                <p>{ item.description }</p>
                            </Reveal>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}

#[function_component(SustainabilitySection)]
fn sustainability_section() -> Html {
    html! {
        <section id="sustainability" class="sustainability-section">
            <div class="container">
                <div class="two-column">
                    <Reveal direction={RevealDirection::Left}>
                        <h2>{"Committed to Sustainable Practices"}</h2>
                        <p class="section-lead">
                            {"We believe that responsible mining and material sourcing are \
                              essential for the future of our planet. Our commitment to \
                              sustainability guides everything we do."}
                        </p>
                        <div class="pillar-list">
                            { for content::SUSTAINABILITY_PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                                <Reveal
                                    key={pillar.title}
                                    delay_ms={scroll::stagger_delay_ms(index, 200)}
                                    class="pillar"
                                >
                                    <div class="pillar-icon"><Icon name={pillar.icon} /></div>
                                    <div>
                                        <h3>{ pillar.title }</h3>
                                        <p>{ pillar.description }</p>
                                    </div>
                                </Reveal>
                            }) }
                        </div>
                    </Reveal>
                    <Reveal direction={RevealDirection::Right} class="section-image">
                        <img src="/images/sustainable-mining.jpg" alt="Sustainable mining practices" loading="lazy" />
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
struct ShowcaseCardProps {
    item: content::ShowcaseItem,
    index: usize,
}

#[function_component(ShowcaseCard)]
fn showcase_card(props: &ShowcaseCardProps) -> Html {
    let item = props.item;

    // Swap in the placeholder when the asset fails to load, once.
    let onerror = Callback::from(|e: Event| {
        let img: HtmlImageElement = e.target_unchecked_into();
        if !img.src().ends_with(content::PLACEHOLDER_IMAGE) {
            img.set_src(content::PLACEHOLDER_IMAGE);
        }
    });

    html! {
        <Reveal delay_ms={scroll::stagger_delay_ms(props.index, 100)} class="showcase-card">
            <div class="showcase-image">
                <img
                    src={item.image_or_placeholder()}
                    alt={item.title}
                    loading="lazy"
                    onerror={onerror}
                />
            </div>
            <div class="showcase-body">
                <h3>{ item.title }</h3>
                <p>{ item.description }</p>
                <div class="showcase-row">
                    <span class="showcase-price">{ item.price }</span>
                    <button class="detail-button">{"View Details"}</button>
                </div>
            </div>
        </Reveal>
    }
}

#[function_component(ShowcaseSection)]
fn showcase_section() -> Html {
    html! {
        <section id="showcase" class="showcase-section">
            <div class="container">
                <Reveal class="section-heading">
                    <h2>{"Rare Materials Showcase"}</h2>
                    <p>
                        {"Explore our collection of exceptional mineral specimens and \
                          innovative material applications."}
                    </p>
                </Reveal>
                <div class="showcase-grid">
                    { for content::SHOWCASE_ITEMS.iter().enumerate().map(|(index, item)| html! {
                        <ShowcaseCard key={item.title} item={*item} index={index} />
                    }) }
                </div>
                <div class="showcase-cta">
                    <button class="hero-cta">{"View Full Collection"}</button>
                </div>
            </div>
        </section>
    }
}

#[function_component(CommunitySection)]
fn community_section() -> Html {
    html! {
        <section id="contact" class="community-section">
            <div class="container">
                <div class="two-column top">
                    <Reveal>
                        <h2>{"Join Our Mineral Enthusiast Community"}</h2>
                        <p class="section-lead">
                            {"Subscribe to our newsletter to receive updates on new specimens, \
                              educational content, and exclusive events."}
                        </p>
                        <NewsletterForm />
                    </Reveal>
                    <Reveal delay_ms={200} class="contact-card">
                        <h3>{"Contact Us"}</h3>
                        <div class="contact-lines">
                            <p><span class="contact-mark">{"📍"}</span><span>{ content::CONTACT_ADDRESS }</span></p>
                            <p><span class="contact-mark">{"📞"}</span><span>{ content::CONTACT_PHONE }</span></p>
                            <p><span class="contact-mark">{"✉️"}</span><span>{ content::CONTACT_EMAIL }</span></p>
                        </div>
                        <h4>{"Follow Us"}</h4>
                        <div class="social-links">
                            { for content::SOCIAL_PLATFORMS.iter().map(|platform| html! {
                                <a key={*platform} href="#" class="social-link">{ *platform }</a>
                            }) }
                        </div>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[function_component(PageFooter)]
fn page_footer() -> Html {
    let year = Local::now().year();

    html! {
        <footer class="page-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href="/" class="footer-logo">
                            <Icon name="gem" class="logo-icon" />
                            <span>{ content::BRAND_NAME }</span>
                        </a>
                        <p>{ content::BRAND_TAGLINE }</p>
                    </div>
                    { for content::FOOTER_COLUMNS.iter().map(|column| html! {
                        <div key={column.title} class="footer-column">
                            <h4>{ column.title }</h4>
                            <ul>
                                { for column.links.iter().map(|link| html! {
                                    <li key={*link}><a href="#">{ *link }</a></li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>
                <div class="footer-bottom">
                    <p>{ format!("© {} TerraNova Minerals. All rights reserved.", year) }</p>
                </div>
            </div>
        </footer>
    }
}

const PAGE_STYLE: &str = r#"
    * {
        margin: 0;
        padding: 0;
        box-sizing: border-box;
    }

    html {
        scroll-behavior: smooth;
        scroll-padding-top: 80px;
    }

    body {
        font-family: 'Inter', -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif;
        background: #fafaf9;
        color: #292524;
        line-height: 1.6;
    }

    h1, h2, h3, h4, .nav-logo, .footer-logo {
        font-family: 'Playfair Display', Georgia, serif;
    }

    .icon {
        width: 1.5rem;
        height: 1.5rem;
    }

    .sr-only {
        position: absolute;
        width: 1px;
        height: 1px;
        padding: 0;
        margin: -1px;
        overflow: hidden;
        clip: rect(0, 0, 0, 0);
        border: 0;
    }

    .container {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
    }

    /* ---------- navigation ---------- */

    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        padding: 1rem 0;
        background: transparent;
        transition: background 0.3s ease, padding 0.3s ease;
    }

    .top-nav.scrolled {
        background: rgba(28, 25, 23, 0.9);
        backdrop-filter: blur(12px);
        padding: 0.5rem 0;
    }

    .nav-content {
        max-width: 1200px;
        margin: 0 auto;
        padding: 0 1.5rem;
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .nav-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-size: 1.25rem;
        font-weight: 500;
        letter-spacing: -0.01em;
        color: #1c1917;
        text-decoration: none;
        transition: color 0.3s ease;
    }

    .top-nav.scrolled .nav-logo {
        color: #fff;
    }

    .logo-icon {
        width: 2rem;
        height: 2rem;
        color: #f59e0b;
    }

    .nav-links {
        display: flex;
        align-items: center;
        gap: 2rem;
    }

    .nav-link {
        font-size: 0.875rem;
        font-weight: 500;
        color: #44403c;
        text-decoration: none;
        transition: color 0.2s ease;
    }

    .top-nav.scrolled .nav-link {
        color: #e7e5e4;
    }

    .nav-link:hover {
        color: #f59e0b;
    }

    .nav-cta {
        padding: 0.5rem 1.25rem;
        background: #f59e0b;
        color: #1c1917;
        font-size: 0.875rem;
        font-weight: 600;
        border: none;
        border-radius: 0.375rem;
        text-decoration: none;
        cursor: pointer;
        transition: background 0.2s ease;
    }

    .nav-cta:hover {
        background: #d97706;
    }

    .burger-menu {
        display: none;
        background: none;
        border: none;
        color: #1c1917;
        cursor: pointer;
    }

    .top-nav.scrolled .burger-menu {
        color: #fff;
    }

    .mobile-menu {
        display: none;
        position: fixed;
        inset: 0;
        background: rgba(12, 10, 9, 0.6);
    }

    .mobile-menu.open {
        display: block;
    }

    .mobile-menu-panel {
        position: absolute;
        top: 0;
        right: 0;
        bottom: 0;
        width: min(20rem, 85vw);
        display: flex;
        flex-direction: column;
        gap: 2rem;
        padding: 5rem 2rem 2rem;
        background: #1c1917;
    }

    .mobile-menu-panel .nav-link {
        color: #e7e5e4;
        font-size: 1.125rem;
    }

    .menu-close {
        position: absolute;
        top: 1.25rem;
        right: 1.25rem;
        background: none;
        border: none;
        color: #a8a29e;
        cursor: pointer;
    }

    .menu-close:hover {
        color: #fff;
    }

    /* ---------- hero ---------- */

    .hero {
        position: relative;
        height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        overflow: hidden;
    }

    .hero-background {
        position: absolute;
        inset: 0;
        z-index: 0;
    }

    .hero-background img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .hero-overlay {
        position: absolute;
        inset: 0;
        background: linear-gradient(
            to bottom,
            rgba(28, 25, 23, 0.4),
            rgba(28, 25, 23, 0.2),
            rgba(28, 25, 23, 0.7)
        );
    }

    .hero-content {
        position: relative;
        z-index: 10;
        max-width: 48rem;
        padding: 0 1.5rem;
        text-align: center;
        animation: fade-up 0.8s ease-out both;
    }

    .hero-content h1 {
        font-size: clamp(2.5rem, 6vw, 3.75rem);
        font-weight: 700;
        color: #fff;
        line-height: 1.15;
        margin-bottom: 1.5rem;
    }

    .hero-subtitle {
        font-size: 1.25rem;
        color: #e7e5e4;
        max-width: 42rem;
        margin: 0 auto 2rem;
    }

    .hero-cta-group {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
        justify-content: center;
    }

    .hero-cta {
        display: inline-block;
        padding: 0.875rem 1.75rem;
        background: #f59e0b;
        color: #1c1917;
        font-size: 1rem;
        font-weight: 600;
        border: none;
        border-radius: 0.375rem;
        text-decoration: none;
        cursor: pointer;
        transition: background 0.2s ease;
    }

    .hero-cta:hover {
        background: #d97706;
    }

    .hero-cta.secondary {
        background: transparent;
        color: #fff;
        border: 1px solid #fff;
    }

    .hero-cta.secondary:hover {
        background: rgba(255, 255, 255, 0.1);
    }

    .scroll-down {
        position: absolute;
        bottom: 2rem;
        left: 50%;
        transform: translateX(-50%);
        z-index: 10;
        background: none;
        border: none;
        color: #fff;
        cursor: pointer;
        animation: bounce 2s infinite;
    }

    .scroll-down .icon {
        width: 2rem;
        height: 2rem;
    }

    @keyframes fade-up {
        from {
            opacity: 0;
            transform: translateY(20px);
        }
        to {
            opacity: 1;
            transform: translateY(0);
        }
    }

    @keyframes bounce {
        0%, 20%, 50%, 80%, 100% { transform: translate(-50%, 0); }
        40% { transform: translate(-50%, -10px); }
        60% { transform: translate(-50%, -5px); }
    }

    /* ---------- reveal transitions ---------- */

    .reveal {
        opacity: 0;
        transition: opacity 0.8s ease-out, transform 0.8s ease-out;
    }

    .reveal-up { transform: translateY(20px); }
    .reveal-left { transform: translateX(-20px); }
    .reveal-right { transform: translateX(20px); }

    .reveal.visible {
        opacity: 1;
        transform: translate(0, 0);
    }

    /* ---------- shared section layout ---------- */

    section {
        padding: 6rem 0;
    }

    .section-heading {
        max-width: 48rem;
        margin: 0 auto 4rem;
        text-align: center;
    }

    .section-heading h2 {
        font-size: clamp(1.875rem, 4vw, 2.5rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .two-column {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 3rem;
        align-items: center;
    }

    .two-column.top {
        align-items: start;
    }

    .section-image {
        height: 400px;
        border-radius: 0.5rem;
        overflow: hidden;
    }

    .section-image.tall {
        height: 500px;
    }

    .section-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
    }

    .section-lead {
        margin-bottom: 1.5rem;
    }

    /* ---------- about ---------- */

    .about-section {
        background: #f5f5f4;
    }

    .about-section h2 {
        font-size: clamp(1.875rem, 4vw, 2.5rem);
        font-weight: 700;
        color: #1c1917;
        margin-bottom: 1.5rem;
    }

    .about-section p {
        color: #44403c;
        margin-bottom: 1.5rem;
    }

    .story-button {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        padding: 0.75rem 1.5rem;
        background: #292524;
        color: #fff;
        font-size: 0.9375rem;
        font-weight: 500;
        border: none;
        border-radius: 0.375rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }

    .story-button:hover {
        background: #1c1917;
    }

    .button-arrow, .link-arrow {
        width: 1rem;
        height: 1rem;
    }

    /* ---------- education ---------- */

    .education-section {
        background: #1c1917;
        color: #fff;
    }

    .education-section .section-heading p {
        color: #d6d3d1;
    }

    .topic-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }

    .topic-card {
        background: #292524;
        padding: 2rem;
        border-radius: 0.5rem;
        transition: background 0.3s ease, opacity 0.8s ease-out, transform 0.8s ease-out;
    }

    .topic-card:hover {
        background: #44403c;
    }

    .topic-icon .icon {
        width: 2.5rem;
        height: 2.5rem;
        color: #f59e0b;
        margin-bottom: 1rem;
    }

    .topic-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        margin-bottom: 0.75rem;
    }

    .topic-card p {
        color: #d6d3d1;
    }

    .learn-more {
        display: inline-flex;
        align-items: center;
        gap: 0.5rem;
        margin-top: 1rem;
        color: #fbbf24;
        font-size: 0.9375rem;
        text-decoration: none;
    }

    .learn-more:hover {
        color: #fcd34d;
    }

    /* ---------- innovation ---------- */

    .innovation-section {
        background: linear-gradient(to bottom, #f5f5f4, #e7e5e4);
    }

    .innovation-section .section-heading h2 {
        color: #1c1917;
    }

    .innovation-section .section-heading p {
        color: #44403c;
    }

    .info-stack {
        display: flex;
        flex-direction: column;
        gap: 2rem;
    }

    .info-card {
        background: #fff;
        padding: 1.5rem;
        border-radius: 0.5rem;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
    }

    .info-card h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #1c1917;
        margin-bottom: 0.75rem;
    }

    .info-card p {
        color: #44403c;
    }

    /* ---------- sustainability ---------- */

    .sustainability-section {
        background: #292524;
        color: #fff;
    }

    .sustainability-section h2 {
        font-size: clamp(1.875rem, 4vw, 2.5rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .sustainability-section .section-lead {
        color: #d6d3d1;
    }

    .pillar-list {
        display: flex;
        flex-direction: column;
        gap: 1.5rem;
    }

    .pillar {
        display: flex;
        gap: 1rem;
    }

    .pillar-icon .icon {
        color: #f59e0b;
        margin-top: 0.25rem;
    }

    .pillar h3 {
        font-size: 1.125rem;
        font-weight: 700;
        margin-bottom: 0.25rem;
    }

    .pillar p {
        color: #a8a29e;
    }

    /* ---------- showcase ---------- */

    .showcase-section {
        background: #f5f5f4;
    }

    .showcase-section .section-heading h2 {
        color: #1c1917;
    }

    .showcase-section .section-heading p {
        color: #44403c;
    }

    .showcase-grid {
        display: grid;
        grid-template-columns: repeat(3, 1fr);
        gap: 2rem;
    }

    .showcase-card {
        background: #fff;
        border-radius: 0.5rem;
        overflow: hidden;
        box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
        transition: box-shadow 0.3s ease, opacity 0.8s ease-out, transform 0.8s ease-out;
    }

    .showcase-card:hover {
        box-shadow: 0 20px 25px -5px rgba(0, 0, 0, 0.15);
    }

    .showcase-image {
        height: 16rem;
        overflow: hidden;
    }

    .showcase-image img {
        width: 100%;
        height: 100%;
        object-fit: cover;
        transition: transform 0.5s ease;
    }

    .showcase-card:hover .showcase-image img {
        transform: scale(1.1);
    }

    .showcase-body {
        padding: 1.5rem;
    }

    .showcase-body h3 {
        font-size: 1.25rem;
        font-weight: 700;
        color: #1c1917;
        margin-bottom: 0.5rem;
    }

    .showcase-body p {
        color: #57534e;
        margin-bottom: 1rem;
    }

    .showcase-row {
        display: flex;
        align-items: center;
        justify-content: space-between;
    }

    .showcase-price {
        color: #d97706;
        font-weight: 700;
    }

    .detail-button {
        padding: 0.5rem 1rem;
        background: #292524;
        color: #fff;
        font-size: 0.8125rem;
        font-weight: 500;
        border: none;
        border-radius: 0.375rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }

    .detail-button:hover {
        background: #1c1917;
    }

    .showcase-cta {
        margin-top: 3rem;
        text-align: center;
    }

    /* ---------- community / contact ---------- */

    .community-section {
        background: #1c1917;
        color: #fff;
    }

    .community-section h2 {
        font-size: clamp(1.875rem, 4vw, 2.5rem);
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .community-section .section-lead {
        color: #d6d3d1;
        margin-bottom: 2rem;
    }

    .newsletter-form {
        display: flex;
        flex-direction: column;
        gap: 1rem;
    }

    .newsletter-form .name-row {
        display: grid;
        grid-template-columns: 1fr 1fr;
        gap: 1rem;
    }

    .newsletter-form input {
        width: 100%;
        padding: 0.75rem 1rem;
        background: #292524;
        border: 1px solid #44403c;
        border-radius: 0.375rem;
        color: #fff;
        font-size: 1rem;
    }

    .newsletter-form input:focus {
        outline: none;
        border-color: #f59e0b;
        box-shadow: 0 0 0 2px rgba(245, 158, 11, 0.4);
    }

    .subscribe-button {
        width: 100%;
        padding: 0.875rem;
        background: #f59e0b;
        color: #1c1917;
        font-size: 1rem;
        font-weight: 600;
        border: none;
        border-radius: 0.375rem;
        cursor: pointer;
        transition: background 0.2s ease;
    }

    .subscribe-button:hover {
        background: #d97706;
    }

    .form-notice {
        padding: 0.75rem 1rem;
        border-radius: 0.375rem;
        font-size: 0.9375rem;
    }

    .form-notice.error {
        background: rgba(220, 38, 38, 0.15);
        color: #fca5a5;
    }

    .form-notice.success {
        background: rgba(22, 163, 74, 0.15);
        color: #86efac;
    }

    .contact-card {
        background: #292524;
        padding: 2rem;
        border-radius: 0.5rem;
    }

    .contact-card h3 {
        font-size: 1.5rem;
        font-weight: 700;
        margin-bottom: 1.5rem;
    }

    .contact-lines {
        display: flex;
        flex-direction: column;
        gap: 1rem;
        margin-bottom: 2rem;
    }

    .contact-lines p {
        display: flex;
        align-items: flex-start;
        gap: 0.75rem;
    }

    .contact-mark {
        color: #f59e0b;
    }

    .contact-card h4 {
        font-size: 1.125rem;
        font-weight: 700;
        margin-bottom: 1rem;
    }

    .social-links {
        display: flex;
        flex-wrap: wrap;
        gap: 1rem;
    }

    .social-link {
        padding: 0.5rem 0.75rem;
        background: #44403c;
        border-radius: 0.375rem;
        color: #e7e5e4;
        font-size: 0.875rem;
        text-decoration: none;
        transition: background 0.2s ease;
    }

    .social-link:hover {
        background: #57534e;
    }

    /* ---------- footer ---------- */

    .page-footer {
        padding: 3rem 0;
        background: #0c0a09;
        color: #a8a29e;
    }

    .footer-grid {
        display: grid;
        grid-template-columns: repeat(4, 1fr);
        gap: 2rem;
        margin-bottom: 3rem;
    }

    .footer-logo {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        margin-bottom: 1rem;
        font-size: 1.25rem;
        font-weight: 500;
        color: #fff;
        text-decoration: none;
    }

    .footer-brand p {
        font-size: 0.875rem;
    }

    .footer-column h4 {
        font-size: 1.125rem;
        font-weight: 700;
        color: #fff;
        margin-bottom: 1rem;
    }

    .footer-column ul {
        list-style: none;
        display: flex;
        flex-direction: column;
        gap: 0.5rem;
    }

    .footer-column a {
        font-size: 0.875rem;
        color: #a8a29e;
        text-decoration: none;
        transition: color 0.2s ease;
    }

    .footer-column a:hover {
        color: #fbbf24;
    }

    .footer-bottom {
        padding-top: 2rem;
        border-top: 1px solid #292524;
        font-size: 0.875rem;
        text-align: center;
    }

    /* ---------- responsive ---------- */

    @media (max-width: 900px) {
        .two-column {
            grid-template-columns: 1fr;
        }

        .topic-grid {
            grid-template-columns: 1fr;
        }

        .showcase-grid {
            grid-template-columns: repeat(2, 1fr);
        }

        .footer-grid {
            grid-template-columns: repeat(2, 1fr);
        }
    }

    @media (max-width: 768px) {
        .nav-links {
            display: none;
        }

        .burger-menu {
            display: block;
        }

        .showcase-grid {
            grid-template-columns: 1fr;
        }

        .newsletter-form .name-row {
            grid-template-columns: 1fr;
        }

        .footer-grid {
            grid-template-columns: 1fr;
        }
    }
"#;
