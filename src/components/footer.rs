use yew::prelude::*;

use crate::components::logo::Logo;
use crate::components::nav_link::NavLink;
use crate::config::{contact_mailto, CONTACT_EMAIL};
use crate::navigation::Section;
use crate::reveal::hook::Stagger;
use crate::reveal::Reveal;

static FOCUS_AREAS: [&str; 4] = [
    "Desarrollo Ágil",
    "UX/UI Profesional",
    "Consultoría de Sistemas",
    "Soporte Técnico Especializado",
];

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="section-inner">
                <Reveal class="footer-grid" stagger={Stagger::One}>
                    <div>
                        <NavLink section={Section::Home} class="nav-logo">
                            <Logo class="nav-logo-img" />
                        </NavLink>
                        <p class="footer-blurb">
                            {"Impulsando la productividad empresarial con software a medida desde Bahía Blanca, Argentina."}
                        </p>
                    </div>

                    <div>
                        <h4>{"Mapa del Sitio"}</h4>
                        <ul class="footer-list">
                            { for Section::NAV.into_iter().map(|section| html! {
                                <li>
                                    <NavLink section={section} class="footer-link">{ section.label() }</NavLink>
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Enfoque"}</h4>
                        <ul class="footer-list">
                            { for FOCUS_AREAS.iter().map(|area| html! { <li>{ *area }</li> }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Oficina Principal"}</h4>
                        <address class="footer-address">
                            <p>{"Bahía Blanca, Argentina"}</p>
                            <p>{"12 de Octubre 53 Piso 2"}</p>
                            <p>{"Tel: +54 291 4439898"}</p>
                            <a href={contact_mailto()} class="footer-link">{ CONTACT_EMAIL }</a>
                        </address>
                    </div>
                </Reveal>

                <div class="footer-bottom">
                    <p>{"© 2025 Dynnamo. Todos los derechos reservados."}</p>
                    <p>{"Desarrollado con Rust y Yew."}</p>
                </div>
            </div>
        </footer>
    }
}
