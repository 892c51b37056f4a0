use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="kodara-not-found">
            <h1>{"404"}<span class="accent">{"."}</span></h1>
            <p>{"NOTHING TO BREAK HERE"}</p>
            <Link<Route> to={Route::Home} classes="kodara-home-link">
                {"BACK HOME"}
            </Link<Route>>
            <style>
                {r#"
                body {
                    margin: 0;
                    background: #000;
                }
                .kodara-not-found {
                    min-height: 100vh;
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    background: #000;
                    color: #fff;
                    font-family: ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, monospace;
                }
                .kodara-not-found h1 {
                    font-size: 8rem;
                    font-weight: 900;
                    margin: 0;
                    border-bottom: 8px solid #dc2626;
                }
                .kodara-not-found .accent {
                    color: #dc2626;
                }
                .kodara-home-link {
                    color: #fff;
                    font-weight: 900;
                    border: 4px solid #fff;
                    padding: 1rem 2rem;
                    text-decoration: none;
                }
                .kodara-home-link:hover {
                    border-color: #dc2626;
                    color: #dc2626;
                }
                "#}
            </style>
        </div>
    }
}
