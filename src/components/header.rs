use yew::prelude::*;

use crate::components::logo::Logo;
use crate::components::nav_link::NavLink;
use crate::navigation::Section;

const ICON_MENU: &str = "M4 6h16M4 12h16m-7 6h7";
const ICON_CLOSE: &str = "M6 18L18 6M6 6l12 12";

#[function_component(Header)]
pub fn header() -> Html {
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: ()| {
            menu_open.set(false);
        })
    };

    html! {
        <header class="site-header">
            <nav class="nav-content">
                <NavLink section={Section::Home} class="nav-logo" on_navigate={close_menu.clone()}>
                    <Logo class="nav-logo-img" />
                </NavLink>

                <div class="nav-links">
                    { for Section::NAV.into_iter().map(|section| html! {
                        <NavLink section={section} class="nav-link">
                            { section.label() }
                        </NavLink>
                    }) }
                    <NavLink section={Section::Contact} class="nav-contact-pill">
                        { Section::Contact.label() }
                    </NavLink>
                </div>

                <button
                    id="mobile-menu-button"
                    class="burger-menu"
                    aria-label="Abrir menú de navegación"
                    aria-expanded={(*menu_open).to_string()}
                    onclick={toggle_menu}
                >
                    <svg class="burger-icon" fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                        <path
                            stroke-linecap="round"
                            stroke-linejoin="round"
                            stroke-width="2"
                            d={if *menu_open { ICON_CLOSE } else { ICON_MENU }}
                        />
                    </svg>
                </button>
            </nav>

            <div id="mobile-menu" class={classes!("mobile-menu", (*menu_open).then_some("mobile-menu-open"))}>
                { for Section::NAV.into_iter().map(|section| html! {
                    <NavLink section={section} class="mobile-link" on_navigate={close_menu.clone()}>
                        { section.label() }
                    </NavLink>
                }) }
                <NavLink section={Section::Contact} class="mobile-contact" on_navigate={close_menu.clone()}>
                    <span class="nav-contact-pill">{ Section::Contact.label() }</span>
                </NavLink>
            </div>
        </header>
    }
}
