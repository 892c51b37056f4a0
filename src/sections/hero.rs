use yew::prelude::*;

use crate::hooks::scroll::use_scroll_y;
use crate::motion::Parallax;

#[function_component(Hero)]
pub fn hero() -> Html {
    let parallax = Parallax::at(use_scroll_y());

    html! {
        <section id="home" class="kodara-hero">
            <div class="kodara-hero-backdrop" style={parallax.layer_style()}>
                <div class="kodara-block red" style={Parallax::offset_style(parallax.y1)}></div>
                <div class="kodara-block white" style={Parallax::offset_style(parallax.y2)}></div>
            </div>

            <div class="kodara-hero-copy">
                <h2 class="kodara-headline">
                    {"BUILD"}<br />{"BREAK"}<br />
                    <span class="accent">{"REPEAT"}</span>
                </h2>
                <p class="kodara-tagline">{"SOFTWARE ENGINEERING REDEFINED"}</p>
            </div>
            <style>
                {r#"
                .kodara-hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    position: relative;
                }
                .kodara-hero-backdrop {
                    position: absolute;
                    inset: 0;
                    pointer-events: none;
                }
                .kodara-block {
                    position: absolute;
                }
                .kodara-block.red {
                    top: 5rem;
                    left: 2.5rem;
                    width: 10rem;
                    height: 10rem;
                    background: #dc2626;
                    opacity: 0.2;
                }
                .kodara-block.white {
                    bottom: 5rem;
                    right: 2.5rem;
                    width: 15rem;
                    height: 15rem;
                    background: #fff;
                    opacity: 0.1;
                }
                .kodara-hero-copy {
                    text-align: center;
                    z-index: 10;
                }
                .kodara-headline {
                    font-size: 6rem;
                    font-weight: 900;
                    letter-spacing: -0.05em;
                    line-height: 1;
                    margin: 0 0 1rem;
                    animation: kodara-rise 0.8s ease-out 0.5s both;
                }
                .kodara-tagline {
                    font-size: 1.25rem;
                    letter-spacing: 0.1em;
                    animation: kodara-fade 0.8s ease-out 1s both;
                }
                @keyframes kodara-rise {
                    from { opacity: 0; transform: translateY(50px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes kodara-fade {
                    from { opacity: 0; }
                    to { opacity: 1; }
                }
                @media (min-width: 768px) {
                    .kodara-headline {
                        font-size: 8rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_scroll_moves_blocks_apart_and_dims_layer() {
        let end = Parallax::at(300.0);
        assert_eq!(end.layer_style(), "opacity: 0.3;");
        assert_eq!(Parallax::offset_style(end.y1), "transform: translateY(50px);");
        assert_eq!(Parallax::offset_style(end.y2), "transform: translateY(-50px);");
    }

    #[tokio::test]
    async fn backdrop_starts_at_rest() {
        let html = yew::ServerRenderer::<Hero>::new().render().await;
        assert!(html.contains("style=\"opacity: 1;\""));
        assert_eq!(html.matches("style=\"transform: translateY(0px);\"").count(), 2);
    }

    #[tokio::test]
    async fn renders_headline_and_tagline() {
        let html = yew::ServerRenderer::<Hero>::new().render().await;
        for word in ["BUILD", "BREAK", "REPEAT"] {
            assert!(html.contains(word));
        }
        assert!(html.contains("SOFTWARE ENGINEERING REDEFINED"));
        assert!(html.contains("id=\"home\""));
    }
}
