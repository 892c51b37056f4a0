use log::debug;
use yew::prelude::*;

use crate::content::CONTACT;
use crate::hooks::reveal::use_reveal;
use crate::motion::{Entrance, Pose};

#[function_component(Contact)]
pub fn contact() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "contact");

    let heading = Entrance::new(Pose::scaled(0.5), 0.8);
    let details = Entrance::new(Pose::shifted(-50.0, 0.0), 0.8);
    let form = Entrance::new(Pose::shifted(50.0, 0.0), 0.8);

    // Sending is not wired up; only stop the browser from reloading the page.
    let onsubmit = Callback::from(|e: SubmitEvent| {
        e.prevent_default();
        debug!("Contact form submitted; no handler attached");
    });

    html! {
        <section id="contact" ref={node} class="kodara-section alert">
            <div class="kodara-container">
                <h2 class="kodara-heading" style={heading.style(revealed)}>{"CONNECT"}</h2>
                <div class="kodara-grid two">
                    <div style={details.style(revealed)}>
                        <h3 class="contact-pitch">{"LET'S BUILD SOMETHING BRUTAL"}</h3>
                        <p class="contact-lead">{"Ready to break conventions? We're here to help."}</p>
                        <div class="contact-details">
                            <p>{CONTACT.email}</p>
                            <p>{CONTACT.phone}</p>
                            <p>{CONTACT.location}</p>
                        </div>
                    </div>
                    <form class="contact-form" style={form.style(revealed)} {onsubmit}>
                        <input type="text" placeholder="NAME" />
                        <input type="email" placeholder="EMAIL" />
                        <textarea placeholder="MESSAGE" rows="4" />
                        <button type="submit" class="contact-send">{"SEND MESSAGE"}</button>
                    </form>
                </div>
            </div>
            <style>
                {r#"
                .contact-pitch {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin: 0 0 2rem;
                }
                .contact-lead {
                    font-size: 1.25rem;
                    margin: 0 0 2rem;
                }
                .contact-details p {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .contact-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .contact-form input,
                .contact-form textarea {
                    width: 100%;
                    box-sizing: border-box;
                    background: transparent;
                    border: none;
                    border-bottom: 4px solid #fff;
                    padding: 1rem;
                    color: #fff;
                    font-family: inherit;
                    font-weight: 700;
                    outline: none;
                }
                .contact-form input::placeholder,
                .contact-form textarea::placeholder {
                    color: #fff;
                }
                .contact-send {
                    align-self: flex-start;
                    background: #000;
                    color: #fff;
                    border: none;
                    padding: 1rem 2rem;
                    font-family: inherit;
                    font-weight: 900;
                    font-size: 1.25rem;
                    cursor: pointer;
                    transition: background 0.15s, color 0.15s, transform 0.15s ease-out;
                }
                .contact-send:hover {
                    background: #fff;
                    color: #dc2626;
                    transform: scale(1.05);
                }
                .contact-send:active {
                    transform: scale(0.95);
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn lists_contact_details() {
        let html = yew::ServerRenderer::<Contact>::new().render().await;
        assert!(html.contains("hello@kodara.tech"));
        assert!(html.contains("+1 (555) 123-4567"));
        assert!(html.contains("San Francisco, CA"));
    }

    #[tokio::test]
    async fn form_has_three_fields_and_no_endpoint() {
        let html = yew::ServerRenderer::<Contact>::new().render().await;
        assert!(html.contains("placeholder=\"NAME\""));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("placeholder=\"MESSAGE\""));
        assert_eq!(html.matches("<textarea").count(), 1);
        assert!(!html.contains("action="));
        assert!(html.contains("SEND MESSAGE"));
    }
}
