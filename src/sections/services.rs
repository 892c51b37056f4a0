use yew::prelude::*;

use crate::content::SERVICES;
use crate::hooks::reveal::use_reveal;
use crate::motion::{Entrance, Pose};

#[function_component(Services)]
pub fn services() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "services");

    let heading = Entrance::new(Pose::shifted(-100.0, 0.0), 0.8);
    let card = Entrance::new(Pose::shifted(0.0, 50.0), 0.8);

    html! {
        <section id="services" ref={node} class="kodara-section">
            <div class="kodara-container">
                <h2 class="kodara-heading underlined" style={heading.style(revealed)}>
                    {"SERVICES"}
                </h2>
                <div class="kodara-grid two">
                    { for SERVICES.iter().enumerate().map(|(index, service)| html! {
                        <div key={index} style={card.staggered(index).style(revealed)}>
                            <div class="service-card">
                                <h3>{service.title}</h3>
                                <p>{service.description}</p>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .kodara-heading.underlined {
                    display: inline-block;
                    border-bottom: 8px solid #dc2626;
                }
                .service-card {
                    border: 4px solid #fff;
                    padding: 2rem;
                    transition: border-color 0.15s, transform 0.2s ease-out;
                }
                .service-card:hover {
                    border-color: #dc2626;
                    transform: translateX(10px);
                }
                .service-card h3 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin: 0 0 1rem;
                }
                .service-card p {
                    color: #9ca3af;
                    line-height: 1.625;
                }
                "#}
            </style>
        </section>
    }
}
