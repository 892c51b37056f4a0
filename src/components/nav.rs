use log::debug;
use yew::prelude::*;

use crate::config::NAV_LABELS;

/// Anchor id of the section a nav label points at.
pub fn section_id(label: &str) -> String {
    label.to_lowercase()
}

/// Click handler reporting the section a label points at.
fn select_handler<E: 'static>(on_select: &Callback<String>, label: &str) -> Callback<E> {
    let on_select = on_select.clone();
    let id = section_id(label);
    Callback::from(move |_: E| {
        debug!("Nav click: {}", id);
        on_select.emit(id.clone());
    })
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub on_select: Callback<String>,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    html! {
        <nav class="kodara-nav">
            <div class="kodara-nav-content">
                <h1 class="kodara-logo">
                    {"KODARA"}<span class="accent">{"."}</span>
                </h1>
                <div class="kodara-nav-links">
                    { for NAV_LABELS.iter().map(|label| {
                        let id = section_id(label);
                        let onclick = select_handler::<MouseEvent>(&props.on_select, label);
                        html! {
                            <a key={*label} href={format!("#{}", id)} class="kodara-nav-link" {onclick}>
                                {*label}
                            </a>
                        }
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .kodara-nav {
                    position: fixed;
                    top: 0;
                    width: 100%;
                    background: #000;
                    z-index: 40;
                    border-bottom: 4px solid #fff;
                }
                .kodara-nav-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1.5rem 1rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }
                .kodara-logo {
                    font-size: 2.25rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    margin: 0;
                    transition: transform 0.2s ease-out;
                }
                .kodara-logo:hover {
                    transform: scale(1.05);
                }
                .kodara-nav-links {
                    display: flex;
                    gap: 2rem;
                }
                .kodara-nav-link {
                    color: #fff;
                    text-decoration: none;
                    font-size: 0.875rem;
                    font-weight: 700;
                    transition: color 0.15s, transform 0.2s ease-out;
                    display: inline-block;
                }
                .kodara-nav-link:hover {
                    color: #dc2626;
                    transform: translateY(-2px);
                }
                @media (max-width: 700px) {
                    .kodara-nav-links {
                        gap: 0.75rem;
                    }
                    .kodara-logo {
                        font-size: 1.5rem;
                    }
                }
                "#}
            </style>
        </nav>
    }
}
