use log::debug;
use yew::prelude::*;

use crate::navigation::{scroll_to_section, Section};

#[derive(Properties, PartialEq)]
pub struct NavLinkProps {
    pub section: Section,
    #[prop_or_default]
    pub class: Classes,
    /// Fired after a successful scroll, e.g. to close the mobile menu.
    #[prop_or_default]
    pub on_navigate: Option<Callback<()>>,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(NavLink)]
pub fn nav_link(props: &NavLinkProps) -> Html {
    let onclick = {
        let section = props.section;
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            match scroll_to_section(section.id()) {
                Ok(()) => {
                    if let Some(on_navigate) = &on_navigate {
                        on_navigate.emit(());
                    }
                }
                Err(e) => debug!("navigation: {}", e),
            }
        })
    };

    html! {
        <a href={props.section.href()} class={props.class.clone()} {onclick}>
            { for props.children.iter() }
        </a>
    }
}
