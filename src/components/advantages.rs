use yew::prelude::*;

use crate::navigation::Section;
use crate::reveal::hook::Stagger;
use crate::reveal::Reveal;

#[derive(Clone, Debug, PartialEq)]
pub struct Advantage {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub stagger: Stagger,
}

pub static ADVANTAGES: [Advantage; 4] = [
    Advantage {
        number: "01",
        title: "Tecnología de Vanguardia",
        description: "Nos mantenemos a la vanguardia, garantizando que tu solución se construya con las tecnologías más modernas y sólidas del mercado.",
        stagger: Stagger::Two,
    },
    Advantage {
        number: "02",
        title: "Resultados Tangibles",
        description: "Nuestro enfoque es generar un impacto real en tu negocio: más eficiencia, mayor productividad y un claro retorno de inversión.",
        stagger: Stagger::Three,
    },
    Advantage {
        number: "03",
        title: "Estándares de Calidad",
        description: "Seguimos modelos ágiles y rigurosos (como Scrum) para asegurar sistemas escalables, robustos y con bajos índices de error.",
        stagger: Stagger::Four,
    },
    Advantage {
        number: "04",
        title: "Soporte Continuo",
        description: "No solo desarrollamos; te acompañamos con mantenimiento y soporte técnico experto para el crecimiento continuo de tu sistema.",
        stagger: Stagger::Two,
    },
];

#[derive(Properties, PartialEq)]
pub struct AdvantageItemProps {
    pub advantage: Advantage,
}

#[function_component(AdvantageItem)]
pub fn advantage_item(props: &AdvantageItemProps) -> Html {
    let advantage = &props.advantage;
    html! {
        <Reveal class="advantage-item" stagger={advantage.stagger}>
            <div class="advantage-number">{ format!("{}.", advantage.number) }</div>
            <h3>{ advantage.title }</h3>
            <p>{ advantage.description }</p>
        </Reveal>
    }
}

#[function_component(Advantages)]
pub fn advantages() -> Html {
    html! {
        <section id={Section::Advantages.id()} class="section section-alt">
            <div class="section-inner">
                <div class="section-heading">
                    <Reveal tag="h2">{"¿Por Qué Elegir Dynnamo?"}</Reveal>
                    <Reveal tag="p" stagger={Stagger::One}>
                        {"Nuestra promesa se basa en la calidad, la transparencia y el compromiso con tu éxito a largo plazo."}
                    </Reveal>
                </div>
                <div class="advantages-grid">
                    { for ADVANTAGES.iter().map(|advantage| html! {
                        <AdvantageItem advantage={advantage.clone()} />
                    }) }
                </div>
            </div>
        </section>
    }
}
