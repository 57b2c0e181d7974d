use yew::prelude::*;

use crate::navigation::Section;
use crate::reveal::hook::Stagger;
use crate::reveal::Reveal;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Cyan,
    Blue,
    Green,
}

impl Accent {
    pub fn class(self) -> &'static str {
        match self {
            Accent::Cyan => "accent-cyan",
            Accent::Blue => "accent-blue",
            Accent::Green => "accent-green",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon_path: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub accent: Accent,
    pub stagger: Stagger,
    pub items: [&'static str; 3],
}

pub static SERVICES: [Service; 3] = [
    Service {
        icon_path: "M10 20l4-16m4 4l4 4-4 4M6 16l-4-4 4-4",
        title: "Desarrollo de Software a Medida",
        description: "Creamos sistemas robustos, escalables y optimizados que se adaptan con precisión a tus procesos de negocio, utilizando tecnologías modernas y de vanguardia.",
        accent: Accent::Cyan,
        stagger: Stagger::Two,
        items: ["Modelos Ágiles (Scrum)", "Integración de Sistemas Existentes", "Arquitecturas Microservicios"],
    },
    Service {
        icon_path: "M12 4.354a4 4 0 010 5.292c.791.956 1.344 1.838 1.488 2.822C13.633 13.91 13 14.887 13 16h-2c0-1.113-.633-2.09-1.512-2.532-.144-.984-.697-1.866-1.488-2.822a4 4 0 010-5.292V4.354zM18 16c0 3.314-4 6-6 6s-6-2.686-6-6h12z",
        title: "Diseño Centrado en el Usuario (UX/UI)",
        description: "Diseñamos soluciones pensando primero en las personas. Garantizamos una experiencia intuitiva, amigable y eficiente para tus usuarios finales.",
        accent: Accent::Blue,
        stagger: Stagger::Three,
        items: ["Análisis de Usabilidad y Flujos", "Prototipado de Alta Fidelidad", "Interfaces Modernas y Atractivas"],
    },
    Service {
        icon_path: "M15 7a2 2 0 012 2v4a2 2 0 01-2 2h-4a2 2 0 01-2-2v-4a2 2 0 012-2h4zM17 17v4m-2-4h4",
        title: "Diagnóstico y Análisis de Sistemas",
        description: "Evaluamos tus procesos y sistemas actuales para identificar áreas de mejora, riesgos tecnológicos y oportunidades claras de innovación.",
        accent: Accent::Green,
        stagger: Stagger::Four,
        items: ["Auditoría de Procesos Digitales", "Estudio de Viabilidad de Proyectos", "Ruta de Modernización Tecnológica"],
    },
];

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: Service,
}

#[function_component(ServiceCard)]
pub fn service_card(props: &ServiceCardProps) -> Html {
    let service = &props.service;
    html! {
        <Reveal tag="article" class={classes!("service-card", service.accent.class())} stagger={service.stagger}>
            <div class="service-icon">
                <svg fill="none" stroke="currentColor" viewBox="0 0 24 24" xmlns="http://www.w3.org/2000/svg">
                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d={service.icon_path} />
                </svg>
            </div>
            <h3>{ service.title }</h3>
            <p>{ service.description }</p>
            <ul class="service-list">
                { for service.items.iter().map(|item| html! { <li>{ *item }</li> }) }
            </ul>
        </Reveal>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <section id={Section::Services.id()} class="section">
            <div class="section-inner">
                <div class="section-heading">
                    <Reveal tag="h2">{"Nuestros Servicios Estratégicos"}</Reveal>
                    <Reveal tag="p" stagger={Stagger::One}>
                        {"Te acompañamos en cada fase del ciclo de vida del software, desde la concepción hasta la implementación y soporte continuo."}
                    </Reveal>
                </div>
                <div class="services-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <ServiceCard service={service.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
