use std::rc::Rc;

use chrono::Datelike;
use yew::prelude::*;

use rootprowler::hooks::{use_scroll_spy, use_typing};
use rootprowler::{SiteConfig, TypingConfig};

use crate::components::contact_form::ContactForm;
use crate::components::navigation::Navigation;
use crate::pages::sections::{AboutSection, ProjectsSection, SkillsSection};

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub site: Rc<SiteConfig>,
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let site = &props.site;
    let spy = use_scroll_spy(site.scroll.clone());

    let jump_to = |id: &'static str| {
        let select = spy.select.clone();
        Callback::from(move |_: MouseEvent| select.emit(id.to_string()))
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="landing-page">
            <style>{LANDING_CSS}</style>
            <Navigation
                active={spy.active.clone()}
                scrolled_threshold={site.scroll.scrolled_threshold}
                on_select={spy.select.clone()}
            />

            <main>
                <section id="home" class="hero">
                    <div class="hero-content">
                        <h1 class="hero-title">{"RAHUL"}</h1>
                        <Subtitle typing={site.typing.clone()} />
                        <p class="hero-tagline">
                            {"Protecting digital assets with advanced security solutions and cutting-edge threat detection"}
                        </p>
                        <div class="hero-cta-group">
                            <button class="hero-cta" onclick={jump_to("projects")}>{"View My Work"}</button>
                            <button class="hero-cta-outline" onclick={jump_to("contact")}>{"Get In Touch"}</button>
                        </div>
                    </div>
                </section>

                <AboutSection />
                <SkillsSection />
                <ProjectsSection />

                <section id="contact" class="page-section">
                    <h2 class="section-title">{"Get In Touch"}</h2>
                    <p class="section-subtitle">
                        {"Ready to secure your digital infrastructure? Let's discuss your cybersecurity needs."}
                    </p>
                    <div class="contact-grid">
                        <ul class="contact-info">
                            <li>{"Email: rahul.onsec@gmail.com"}</li>
                            <li><a href="https://github.com/rootprowler" target="_blank" rel="noopener noreferrer">{"Github"}</a></li>
                            <li><a href="https://www.linkedin.com/in/packetrahul/" target="_blank" rel="noopener noreferrer">{"Linkedin"}</a></li>
                        </ul>
                        <ContactForm timing={site.contact} />
                    </div>
                </section>
            </main>

            <footer class="site-footer">
                <span class="nav-logo">{"rootprowler"}</span>
                <p>{"Securing the digital world, one system at a time."}</p>
                <p class="footer-legal">
                    {format!("© {} rootprowler Portfolio. All rights reserved. | Encrypted & Secured", year)}
                </p>
            </footer>

            <button
                class={classes!("scroll-top", (!spy.is_home).then(|| "visible"))}
                onclick={jump_to("home")}
            >
                {"↑"}
            </button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct SubtitleProps {
    typing: TypingConfig,
}

// Own component so each typing tick only re-renders the subtitle.
#[function_component(Subtitle)]
fn subtitle(props: &SubtitleProps) -> Html {
    let text = use_typing(props.typing.clone());

    html! {
        <div class="hero-subtitle">
            <span>{text}</span>
            <span class="cursor">{"|"}</span>
        </div>
    }
}

const LANDING_CSS: &str = r#"
    body {
        margin: 0;
        background: #0f172a;
        color: #fff;
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    .top-nav {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 50;
        transition: background 0.3s;
    }
    .top-nav.scrolled {
        background: rgba(15, 23, 42, 0.9);
        backdrop-filter: blur(12px);
        border-bottom: 1px solid rgba(34, 211, 238, 0.2);
    }
    .nav-content {
        display: flex;
        align-items: center;
        justify-content: space-between;
        padding: 1rem 1.5rem;
    }
    .nav-logo {
        font-size: 1.25rem;
        color: #fff;
    }
    .nav-link, .mobile-nav-link {
        background: none;
        border: none;
        color: #fff;
        cursor: pointer;
        margin-left: 2rem;
    }
    .nav-link.active, .mobile-nav-link.active {
        color: #22d3ee;
        border-bottom: 2px solid #22d3ee;
    }
    .burger-menu {
        display: none;
    }
    .mobile-menu {
        position: fixed;
        top: 0;
        right: 0;
        bottom: 0;
        width: 16rem;
        padding-top: 5rem;
        background: rgba(15, 23, 42, 0.95);
        transform: translateX(100%);
        transition: transform 0.3s;
        z-index: 40;
    }
    .mobile-menu-open {
        transform: translateX(0);
    }
    .mobile-nav-link {
        display: block;
        width: 100%;
        text-align: left;
        padding: 0.75rem 1.5rem;
        margin: 0;
    }
    .mobile-menu-overlay {
        position: fixed;
        inset: 0;
        background: rgba(0, 0, 0, 0.5);
        z-index: 30;
    }
    @media (max-width: 768px) {
        .nav-right { display: none; }
        .burger-menu { display: block; }
    }
    .hero {
        min-height: 100vh;
        display: flex;
        align-items: center;
        justify-content: center;
        text-align: center;
    }
    .hero-title {
        font-size: 6rem;
        background: linear-gradient(90deg, #22d3ee, #3b82f6, #9333ea);
        -webkit-background-clip: text;
        color: transparent;
    }
    .hero-subtitle {
        font-size: 2rem;
        min-height: 2.5rem;
    }
    .cursor {
        animation: blink 1s step-end infinite;
    }
    @keyframes blink {
        50% { opacity: 0; }
    }
    .page-section {
        padding: 5rem 1.5rem;
        max-width: 80rem;
        margin: 0 auto;
    }
    .section-title {
        text-align: center;
        font-size: 3rem;
    }
    .scroll-top {
        position: fixed;
        bottom: 2rem;
        right: 2rem;
        width: 3rem;
        height: 3rem;
        border-radius: 50%;
        border: none;
        opacity: 0;
        pointer-events: none;
        transition: opacity 0.3s;
    }
    .scroll-top.visible {
        opacity: 1;
        pointer-events: auto;
    }
"#;
