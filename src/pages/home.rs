use yew::prelude::*;

use crate::components::loader::LoaderOverlay;
use crate::components::nav::Nav;
use crate::config::INITIAL_SECTION;
use crate::hooks::loader::use_loader;
use crate::sections::{blog::Blog, contact::Contact, hero::Hero, services::Services, team::Team};

#[function_component(Home)]
pub fn home() -> Html {
    let phase = use_loader();
    let active_section = use_state(|| INITIAL_SECTION.to_string());

    let on_select = {
        let active_section = active_section.clone();
        Callback::from(move |section: String| active_section.set(section))
    };

    html! {
        <div class="kodara-page">
            <LoaderOverlay {phase} />
            <Nav {on_select} />
            <Hero />
            <Services />
            <Team />
            <Blog />
            <Contact />
            <style>
                {r#"
                html {
                    scroll-behavior: smooth;
                }
                body {
                    margin: 0;
                    background: #000;
                }
                .kodara-page {
                    background: #000;
                    color: #fff;
                    min-height: 100vh;
                    font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
                    overflow-x: hidden;
                }
                .kodara-page .accent {
                    color: #dc2626;
                }
                .kodara-section {
                    min-height: 100vh;
                    padding: 5rem 0;
                    box-sizing: border-box;
                }
                .kodara-section.inverted {
                    background: #fff;
                    color: #000;
                }
                .kodara-section.alert {
                    background: #dc2626;
                    color: #fff;
                }
                .kodara-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1rem;
                }
                .kodara-heading {
                    font-size: 4.5rem;
                    font-weight: 900;
                    line-height: 1;
                    margin: 0 0 5rem;
                }
                .kodara-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                }
                .kodara-grid.three {
                    gap: 2rem;
                }
                @media (min-width: 768px) {
                    .kodara-grid.two {
                        grid-template-columns: repeat(2, 1fr);
                    }
                    .kodara-grid.three {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }
                @media (max-width: 700px) {
                    .kodara-heading {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn page_starts_behind_the_loader() {
        let html = yew::ServerRenderer::<Home>::new().render().await;
        assert!(html.contains("kodara-spinner"));
        assert!(!html.contains("kodara-loader exiting"));
    }

    #[tokio::test]
    async fn sections_follow_nav_order() {
        let html = yew::ServerRenderer::<Home>::new().render().await;
        let positions: Vec<_> = ["home", "services", "team", "blog", "contact"]
            .iter()
            .map(|id| html.find(&format!("id=\"{}\"", id)).expect("section rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
