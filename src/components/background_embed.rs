use std::rc::Rc;

use log::{debug, warn};
use yew::prelude::*;

use crate::config::{UNICORN_STUDIO_PROJECT, UNICORN_STUDIO_URL};
use crate::script_loader::{ScriptLoaderGuard, UnicornStudioHost};

/// Animated hero background. The external runtime finds this element by its
/// `data-us-project` attribute and draws into it.
#[function_component(BackgroundEmbed)]
pub fn background_embed() -> Html {
    use_effect_with_deps(
        move |_| {
            let host = Rc::new(UnicornStudioHost::default());
            let runtime = Rc::clone(&host);
            match ScriptLoaderGuard::global().ensure_loaded(host, UNICORN_STUDIO_URL, move || runtime.init_runtime()) {
                Ok(state) => debug!("background: runtime {:?}", state),
                Err(e) => warn!("background: {}", e),
            }
            // Loading is never cancelled: the runtime is shared with any other embed.
            || ()
        },
        (),
    );

    html! {
        <div class="hero-embed" data-us-project={UNICORN_STUDIO_PROJECT}></div>
    }
}
