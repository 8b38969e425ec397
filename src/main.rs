use yew::prelude::*;
use log::info;
use gloo_timers::callback::Timeout;

use rootprowler::config;
use rootprowler::hooks::use_site_config;

mod pages {
    pub mod landing;
    pub mod sections;
}
mod components {
    pub mod contact_form;
    pub mod loading;
    pub mod navigation;
}

use components::loading::LoadingScreen;
use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    let site = use_site_config();
    let is_loading = use_state(|| site.loading_ms > 0);

    {
        let is_loading = is_loading.clone();
        use_effect_with_deps(move |loading_ms| {
            let timeout = (*loading_ms > 0).then(|| {
                Timeout::new(*loading_ms, move || {
                    is_loading.set(false);
                })
            });
            // Dropping the handle cancels the splash timer on unmount
            move || drop(timeout)
        }, site.loading_ms);
    }

    if *is_loading {
        return html! { <LoadingScreen /> };
    }

    html! {
        <Landing site={site.clone()} />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
