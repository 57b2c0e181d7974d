use yew::prelude::*;

use crate::components::background_embed::BackgroundEmbed;
use crate::components::logo::Logo;
use crate::components::nav_link::NavLink;
use crate::config::LOGO_BADGE_FALLBACK_URL;
use crate::navigation::Section;
use crate::reveal::Reveal;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section id={Section::Home.id()} class="hero">
            <BackgroundEmbed />

            // Above the fold: shown from the first paint, never animated.
            <div class="hero-content">
                <Reveal tag="p" class="hero-kicker" pre_revealed={true}>
                    {"Soluciones Empresariales Innovadoras"}
                </Reveal>
                <Reveal tag="h1" class="hero-title" pre_revealed={true}>
                    {"Software a Medida para impulsar tu"}
                    <span class="accent-gradient hero-title-accent">{"Eficiencia Digital"}</span>
                </Reveal>
                <Reveal tag="p" class="hero-subtitle" pre_revealed={true}>
                    {"En Dynnamo, convertimos tu visión de negocio en aplicaciones robustas, escalables y fáciles de usar, siguiendo los más altos estándares de calidad."}
                </Reveal>
                <Reveal class="hero-cta-group" pre_revealed={true}>
                    <NavLink section={Section::Services} class="hero-cta">
                        {"Explora Nuestros Servicios"}
                    </NavLink>
                    <NavLink section={Section::Contact} class="hero-cta hero-cta-outline">
                        {"Solicita un Diagnóstico Gratuito"}
                    </NavLink>
                </Reveal>
            </div>

            // Covers the runtime's watermark.
            <div class="hero-badge">
                <Logo class="hero-badge-img" fallback={LOGO_BADGE_FALLBACK_URL} />
            </div>
        </section>
    }
}
