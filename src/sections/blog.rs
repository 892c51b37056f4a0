use yew::prelude::*;

use crate::content::BLOG_POSTS;
use crate::hooks::reveal::use_reveal;
use crate::motion::{Entrance, Pose};

/// Entries alternate sides as they slide in.
fn entry_entrance(index: usize) -> Entrance {
    let x = if index % 2 == 0 { -50.0 } else { 50.0 };
    Entrance::new(Pose::shifted(x, 0.0), 0.8).staggered(index)
}

#[function_component(Blog)]
pub fn blog() -> Html {
    let node = use_node_ref();
    let revealed = use_reveal(node.clone(), "blog");

    let heading = Entrance::new(Pose::hidden(), 0.8);

    html! {
        <section id="blog" ref={node} class="kodara-section">
            <div class="kodara-container">
                <h2 class="kodara-heading centered" style={heading.style(revealed)}>
                    {"METEORIC"}<br />
                    <span class="accent">{"RISE"}</span>
                </h2>
                <div class="blog-entries">
                    { for BLOG_POSTS.iter().enumerate().map(|(index, post)| html! {
                        <div key={index} class="blog-entry" style={entry_entrance(index).style(revealed)}>
                            <p class="blog-date">{post.date}</p>
                            <h3>{post.title}</h3>
                            <p class="blog-content">{post.content}</p>
                        </div>
                    }) }
                </div>
            </div>
            <style>
                {r#"
                .kodara-heading.centered {
                    text-align: center;
                    display: block;
                }
                .blog-entries {
                    display: flex;
                    flex-direction: column;
                    gap: 3rem;
                }
                .blog-entry {
                    border-left: 8px solid #dc2626;
                    padding: 1rem 0 1rem 2rem;
                }
                .blog-date {
                    color: #6b7280;
                    font-weight: 700;
                    margin: 0 0 0.5rem;
                }
                .blog-entry h3 {
                    font-size: 2.25rem;
                    font-weight: 900;
                    margin: 0 0 1rem;
                }
                .blog-content {
                    font-size: 1.25rem;
                    color: #9ca3af;
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
    fn entries_alternate_sides() {
        let xs: Vec<_> = (0..3).map(|i| entry_entrance(i).from.x).collect();
        assert_eq!(xs, vec![-50.0, 50.0, -50.0]);
    }

    #[tokio::test]
    async fn renders_posts_in_order() {
        let html = yew::ServerRenderer::<Blog>::new().render().await;
        let positions: Vec<_> = BLOG_POSTS
            .iter()
            .map(|post| html.find(post.title).expect("post title rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains("From garage to global. The meteoric rise continues."));
        assert!(html.contains("2024.06"));
    }
}
