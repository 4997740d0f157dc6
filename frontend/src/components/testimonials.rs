use yew::prelude::*;

use crate::content::Testimonial;
use crate::hooks::{use_auto_scroll, UseAutoScrollHandle};
use crate::motion::carousel::DEFAULT_INTERVAL_MS;

#[derive(Properties, PartialEq)]
pub struct TestimonialCarouselProps {
    pub testimonials: Vec<Testimonial>,
    #[prop_or(DEFAULT_INTERVAL_MS)]
    pub interval_ms: u32,
}

fn avatar(testimonial: &Testimonial) -> Html {
    match &testimonial.image_url {
        Some(url) => html! {
            <img class="testimonial-avatar" src={url.clone()} alt={testimonial.name.clone()} loading="lazy" />
        },
        None => {
            let initial = testimonial
                .initial
                .clone()
                .or_else(|| testimonial.name.chars().next().map(String::from))
                .unwrap_or_default();
            let gradient = testimonial
                .gradient
                .clone()
                .unwrap_or_else(|| "linear-gradient(135deg, #7c3aed, #ec4899)".to_string());
            html! {
                <div class="testimonial-avatar initial" style={format!("background: {};", gradient)}>
                    { initial }
                </div>
            }
        }
    }
}

#[function_component(TestimonialCarousel)]
pub fn testimonial_carousel(props: &TestimonialCarouselProps) -> Html {
    let count = props.testimonials.len();
    let carousel: UseAutoScrollHandle = use_auto_scroll(count, props.interval_ms);

    if count == 0 {
        return html! {};
    }

    let on_enter = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.pause())
    };
    let on_leave = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.resume())
    };
    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.go_to_previous())
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.go_to_next())
    };
    let on_toggle = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| carousel.toggle())
    };

    let current = carousel.current_index();

    html! {
        <div class="testimonial-carousel" onmouseenter={on_enter} onmouseleave={on_leave}>
            <div class="testimonial-track" style={format!("transform: translateX(-{}%);", current * 100)}>
                { for props.testimonials.iter().map(|t| html! {
                    <figure class="testimonial" key={t.id.clone()}>
                        <blockquote>{ format!("\u{201c}{}\u{201d}", t.quote) }</blockquote>
                        <figcaption>
                            { avatar(t) }
                            <div>
                                <strong>{ t.name.clone() }</strong>
                                {
                                    match &t.role {
                                        Some(role) => html! { <span class="testimonial-role">{ role.clone() }</span> },
                                        None => html! {},
                                    }
                                }
                            </div>
                        </figcaption>
                    </figure>
                }) }
            </div>
            <div class="testimonial-controls">
                <button aria-label="Previous testimonial" onclick={on_previous}>{"\u{2039}"}</button>
                { for (0..count).map(|index| {
                    let carousel = carousel.clone();
                    let onclick = Callback::from(move |_: MouseEvent| carousel.go_to_slide(index));
                    html! {
                        <button
                            class={classes!("testimonial-dot", (index == current).then_some("active"))}
                            aria-label={format!("Show testimonial {}", index + 1)}
                            {onclick}
                        />
                    }
                }) }
                <button aria-label="Next testimonial" onclick={on_next}>{"\u{203a}"}</button>
                <button class="testimonial-toggle" onclick={on_toggle}>
                    { if carousel.is_playing() { "Pause" } else { "Play" } }
                </button>
            </div>
            <style>
                {r#"
                .testimonial-carousel {
                    overflow: hidden;
                    max-width: 760px;
                    margin: 0 auto;
                }
                .testimonial-track {
                    display: flex;
                    transition: transform 500ms ease;
                }
                .testimonial {
                    flex: 0 0 100%;
                    margin: 0;
                    padding: 2rem;
                    box-sizing: border-box;
                }
                .testimonial blockquote {
                    font-size: 1.25rem;
                    line-height: 1.6;
                    margin: 0 0 1.5rem 0;
                }
                .testimonial figcaption {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }
                .testimonial-avatar {
                    width: 48px;
                    height: 48px;
                    border-radius: 50%;
                    object-fit: cover;
                }
                .testimonial-avatar.initial {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: white;
                    font-weight: 700;
                }
                .testimonial-role {
                    display: block;
                    color: #6b7280;
                    font-size: 0.9rem;
                }
                .testimonial-controls {
                    display: flex;
                    justify-content: center;
                    align-items: center;
                    gap: 0.5rem;
                }
                .testimonial-dot {
                    width: 10px;
                    height: 10px;
                    border-radius: 50%;
                    border: none;
                    background: #d1d5db;
                }
                .testimonial-dot.active {
                    background: #7c3aed;
                }
                "#}
            </style>
        </div>
    }
}
