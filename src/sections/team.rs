use yew::prelude::*;

use crate::content::TEAM_MEMBERS;
use crate::hooks::reveal::use_reveal;
use crate::motion::{Entrance, Pose};

#[function_component(Team)]
pub fn team() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "team");

    let heading = Entrance::new(Pose::shifted(100.0, 0.0), 0.8);
    let card = Entrance::new(Pose::scaled(0.8), 0.6);

    html! {
        <section id="team" ref={node} class="kodara-section inverted">
            <div class="kodara-container">
                <h2 class="kodara-heading right" style={heading.style(revealed)}>
                    {"THE"}<br />{"ARCHITECTS"}
                </h2>
                <div class="kodara-grid three">
                    { for TEAM_MEMBERS.iter().enumerate().map(|(index, member)| html! {
                        <div key={index} style={card.staggered(index).style(revealed)}>
                            <div class="team-card">
                                <div class="team-card-body">
                                    <div class="team-portrait"></div>
                                    <h3>{member.name}</h3>
                                    <p class="team-role">{member.role}</p>
                                    <p class="team-bio">{member.bio}</p>
                                </div>
                                <div class="team-frame"></div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .kodara-heading.right {
                    text-align: right;
                    display: block;
                }
                .team-card {
                    position: relative;
                    height: 100%;
                    transition: transform 0.2s ease-out;
                }
                .team-card:hover {
                    transform: translateY(-10px);
                }
                .team-card-body {
                    position: relative;
                    z-index: 1;
                    background: #000;
                    color: #fff;
                    padding: 2rem;
                    height: 100%;
                    box-sizing: border-box;
                }
                .team-portrait {
                    width: 100%;
                    height: 12rem;
                    background: #1f2937;
                    margin-bottom: 1.5rem;
                }
                .team-card h3 {
                    font-size: 1.875rem;
                    font-weight: 900;
                    margin: 0 0 0.5rem;
                }
                .team-role {
                    color: #dc2626;
                    font-weight: 700;
                    margin: 0 0 1rem;
                }
                .team-bio {
                    color: #9ca3af;
                }
                .team-frame {
                    position: absolute;
                    bottom: -0.5rem;
                    right: -0.5rem;
                    width: 100%;
                    height: 100%;
                    border: 4px solid #dc2626;
                    box-sizing: border-box;
                    z-index: 0;
                    transition: transform 0.2s ease-out;
                }
                .team-card:hover .team-frame {
                    transform: translate(2px, 2px);
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
    async fn renders_member_names_roles_and_bios() {
        let html = yew::ServerRenderer::<Team>::new().render().await;
        for member in TEAM_MEMBERS {
            assert!(html.contains(member.name));
            assert!(html.contains(member.role));
        }
        assert!(html.contains("Technical mastermind architecting cutting-edge solutions."));
        assert!(html.contains("Financial strategist ensuring sustainable growth and profitability."));
    }

    #[tokio::test]
    async fn every_card_has_a_placeholder_portrait() {
        let html = yew::ServerRenderer::<Team>::new().render().await;
        assert_eq!(html.matches("class=\"team-portrait\"").count(), TEAM_MEMBERS.len());
    }
}
