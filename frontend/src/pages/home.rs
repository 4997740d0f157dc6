use yew::prelude::*;
use yew_router::components::Link;

use crate::components::pricing::Pricing;
use crate::components::stats::StatsBand;
use crate::components::testimonials::TestimonialCarousel;
use crate::content::ContentState;
use crate::hooks::{use_parallax, use_scroll_fade};
use crate::motion::scroll::{parallax_style, DEFAULT_PARALLAX_SPEED};
use crate::pages::blog::PostCard;
use crate::Route;

const BLOG_PREVIEW_COUNT: usize = 3;

#[function_component(Hero)]
fn hero() -> Html {
    let fade = use_scroll_fade();
    let offset = use_parallax(DEFAULT_PARALLAX_SPEED);

    html! {
        <section id="home" class="hero">
            <div class="hero-backdrop" style={parallax_style(offset)}></div>
            <div class="hero-content" style={fade.to_style()}>
                <h1>{"Get unstuck. Get hired."}</h1>
                <p class="hero-subtitle">
                    {"One-on-one career coaching for people who are done sending applications into the void."}
                </p>
                <a class="hero-cta" href="#pricing">{"See packages"}</a>
            </div>
        </section>
    }
}

#[function_component(Landing)]
pub fn landing() -> Html {
    let content = use_context::<ContentState>().unwrap_or(ContentState::Loading);
    let snapshot = content.snapshot().cloned().unwrap_or_default();

    html! {
        <div class="landing-page">
            <Hero />
            <StatsBand />

            <section id="testimonials" class="testimonials">
                <h2>{"What clients say"}</h2>
                <TestimonialCarousel testimonials={snapshot.testimonials.clone()} />
            </section>

            <Pricing packages={snapshot.packages.clone()} />

            <section id="blog" class="blog-preview">
                <h2>{"From the blog"}</h2>
                <div class="post-grid">
                    { for snapshot.posts.iter().take(BLOG_PREVIEW_COUNT).map(|post| html! {
                        <PostCard key={post.id.clone()} post={post.clone()} />
                    }) }
                </div>
                <Link<Route> to={Route::Blog} classes="blog-preview-more">{"All posts \u{2192}"}</Link<Route>>
            </section>

            <section id="contact" class="footer-cta">
                <h2>{"Not sure which package fits?"}</h2>
                <p class="subtitle">{"Send a note with where you are and where you want to be."}</p>
                <a class="hero-cta" href="mailto:hello@example.com">{"Email me"}</a>
            </section>

            <style>
                {r#"
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                    text-align: center;
                }
                .hero-backdrop {
                    position: absolute;
                    inset: -20% 0 0 0;
                    background: radial-gradient(circle at 30% 20%, #ede9fe, transparent 60%),
                                radial-gradient(circle at 70% 60%, #fce7f3, transparent 55%);
                    z-index: -1;
                    will-change: transform;
                }
                .hero-content {
                    max-width: 720px;
                    padding: 0 2rem;
                    will-change: opacity, transform;
                }
                .hero h1 {
                    font-size: clamp(2.5rem, 6vw, 4.5rem);
                    margin-bottom: 1rem;
                }
                .hero-cta {
                    display: inline-block;
                    padding: 0.9rem 2rem;
                    border-radius: 999px;
                    background: #7c3aed;
                    color: white;
                    text-decoration: none;
                }
                .testimonials, .blog-preview, .footer-cta {
                    padding: 5rem 2rem;
                    text-align: center;
                }
                .post-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 2rem auto;
                    text-align: left;
                }
                "#}
            </style>
        </div>
    }
}
