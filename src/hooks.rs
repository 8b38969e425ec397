//! Yew adapters: measure the page, sample scroll, drive the typing timer.

use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, ScrollBehavior, ScrollIntoViewOptions};
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::config::SiteConfig;
use crate::driver::TypingDriver;
use crate::lifecycle::{GlooScheduler, WindowListener};
use crate::scroll_spy::{past_threshold, ScrollSpy, ScrollSpyConfig, SectionRegistry};
use crate::typing::TypingConfig;

#[hook]
pub fn use_site_config() -> Rc<SiteConfig> {
    use_memo(|_| SiteConfig::load(), ())
}

#[derive(Clone, PartialEq)]
pub struct ScrollSpyHandle {
    pub active: String,
    pub is_home: bool,
    /// Scrolls a section into view and highlights it right away.
    pub select: Callback<String>,
}

fn measure_sections(ids: &[String]) -> SectionRegistry {
    let document = web_sys::window().and_then(|w| w.document());
    SectionRegistry::measure(ids, |id| {
        let element = document.as_ref()?.get_element_by_id(id)?;
        let element = element.dyn_into::<HtmlElement>().ok()?;
        Some((
            f64::from(element.offset_top()),
            f64::from(element.offset_height()),
        ))
    })
}

fn scroll_into_view(id: &str) {
    let Some(element) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(id))
    else {
        debug!("scroll spy: cannot scroll to missing section '{}'", id);
        return;
    };
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

#[hook]
pub fn use_scroll_spy(config: ScrollSpyConfig) -> ScrollSpyHandle {
    let active = use_state_eq(|| config.default_id.clone());
    let spy = use_mut_ref(|| ScrollSpy::new(&config));
    let registry = use_mut_ref(SectionRegistry::default);
    let window_size = use_window_size();

    // Nav clicks can land before the first scroll, so keep a snapshot
    // from mount and every resize.
    {
        let registry = registry.clone();
        use_effect_with_deps(
            move |(_, ids)| {
                *registry.borrow_mut() = measure_sections(ids);
                debug!("scroll spy: measured {} sections", registry.borrow().sections().len());
                || ()
            },
            (window_size, config.section_ids.clone()),
        );
    }

    {
        let spy = spy.clone();
        let registry = registry.clone();
        let active = active.clone();
        use_effect_with_deps(
            move |ids| {
                let ids = ids.clone();
                let listener = web_sys::window().and_then(|window| {
                    let sampler = window.clone();
                    let spy_for_sample = spy.clone();
                    let sample = move || {
                        let Ok(scroll_y) = sampler.scroll_y() else {
                            return;
                        };
                        // Content reflows without resizing the window.
                        *registry.borrow_mut() = measure_sections(&ids);
                        let mut spy = spy_for_sample.borrow_mut();
                        if let Some(id) = spy.observe(scroll_y, &registry.borrow()) {
                            debug!("scroll spy: active section is now '{}'", id);
                            active.set(id.to_string());
                        }
                    };
                    // Initial check
                    sample.clone()();
                    WindowListener::scroll(window, sample)
                });

                move || {
                    spy.borrow_mut().stop();
                    drop(listener);
                }
            },
            config.section_ids.clone(),
        );
    }

    let select = {
        let active = active.clone();
        use_callback(
            move |id: String, _| {
                scroll_into_view(&id);
                if spy.borrow_mut().select(&id, &registry.borrow()) {
                    active.set(id);
                }
            },
            (),
        )
    };

    ScrollSpyHandle {
        is_home: *active == config.default_id,
        active: (*active).clone(),
        select,
    }
}

#[hook]
pub fn use_scrolled(threshold: f64) -> bool {
    let scrolled = use_state_eq(|| false);

    {
        let scrolled = scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let threshold = *threshold;
                let listener = web_sys::window().and_then(|window| {
                    let sampler = window.clone();
                    WindowListener::scroll(window, move || {
                        if let Ok(scroll_y) = sampler.scroll_y() {
                            scrolled.set(past_threshold(scroll_y, threshold));
                        }
                    })
                });
                move || drop(listener)
            },
            threshold,
        );
    }

    *scrolled
}

/// Current text of the rotating subtitle. The timer lives exactly as long
/// as the calling component.
#[hook]
pub fn use_typing(config: TypingConfig) -> String {
    let display = use_state_eq(String::new);

    {
        let setter = display.setter();
        use_effect_with_deps(
            move |config| {
                let on_display = move |text: &str| setter.set(text.to_string());
                let driver = TypingDriver::new(config.clone(), GlooScheduler::new(), on_display);
                driver.start();
                move || driver.stop()
            },
            config,
        );
    }

    (*display).clone()
}
