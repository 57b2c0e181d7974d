use yew::prelude::*;

use crate::config::{LOGO_FALLBACK_URL, LOGO_URL};

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(LOGO_FALLBACK_URL)]
    pub fallback: &'static str,
}

/// Company logo. Swaps to a placeholder once if the image fails to load.
#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    let failed = use_state(|| false);
    let onerror = {
        let failed = failed.clone();
        Callback::from(move |_: Event| {
            if !*failed {
                failed.set(true);
            }
        })
    };
    let src = if *failed { props.fallback } else { LOGO_URL };

    html! {
        <img {src} alt="Dynnamo Logo" class={props.class.clone()} {onerror} />
    }
}
