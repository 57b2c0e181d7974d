use yew::prelude::*;

use crate::config::contact_mailto;
use crate::navigation::Section;
use crate::reveal::hook::Stagger;
use crate::reveal::Reveal;

#[function_component(Contact)]
pub fn contact() -> Html {
    html! {
        <section id={Section::Contact.id()} class="section">
            <div class="section-inner">
                <Reveal class="contact-card" stagger={Stagger::One}>
                    <h2>{"¿Listo para Digitalizar el Éxito de tu Empresa?"}</h2>
                    <p>
                        {"Agenda una reunión con nuestro equipo de consultoría. Te ayudaremos a trazar la ruta tecnológica para tu próximo gran proyecto."}
                    </p>
                    <a href={contact_mailto()} class="contact-cta">{"Conversemos Hoy"}</a>
                </Reveal>
            </div>
        </section>
    }
}
