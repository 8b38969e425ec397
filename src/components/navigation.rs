use yew::prelude::*;
use web_sys::MouseEvent;

use rootprowler::hooks::use_scrolled;

pub const NAV_ITEMS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct NavigationProps {
    pub active: String,
    pub scrolled_threshold: f64,
    pub on_select: Callback<String>,
}

#[function_component(Navigation)]
pub fn navigation(props: &NavigationProps) -> Html {
    let NavigationProps { active, scrolled_threshold, on_select } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled(*scrolled_threshold);

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

    let nav_button = |id: &'static str, label: &'static str, class: &'static str| {
        let on_select = on_select.clone();
        let close = close_menu.clone();
        let onclick = Callback::from(move |e: MouseEvent| {
            on_select.emit(id.to_string());
            close.emit(e);
        });
        html! {
            <button key={id} class={classes!(class, (active == id).then(|| "active"))} {onclick}>
                {label}
            </button>
        }
    };

    let menu_class = if *menu_open {
        "mobile-menu mobile-menu-open"
    } else {
        "mobile-menu"
    };

    html! {
        <>
            <nav class={classes!("top-nav", is_scrolled.then(|| "scrolled"))}>
                <div class="nav-content">
                    <span class="nav-logo">{"rootprowler"}</span>
                    <div class="nav-right">
                        {
                            for NAV_ITEMS
                                .iter()
                                .map(|&(id, label)| nav_button(id, label, "nav-link"))
                        }
                    </div>
                    <button class="burger-menu" onclick={toggle_menu}>
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </nav>
            <div class={menu_class}>
                {
                    for NAV_ITEMS
                        .iter()
                        .map(|&(id, label)| nav_button(id, label, "mobile-nav-link"))
                }
            </div>
            {
                if *menu_open {
                    html! { <div class="mobile-menu-overlay" onclick={close_menu.clone()}></div> }
                } else {
                    html! {}
                }
            }
        </>
    }
}
