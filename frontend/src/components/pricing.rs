use std::rc::Rc;

use yew::prelude::*;

use super::payment_button::PaymentButton;
use crate::config::SiteConfig;
use crate::content::{format_price, Package};

#[derive(Properties, PartialEq)]
pub struct PricingCardProps {
    pub package: Package,
}

#[function_component(PricingCard)]
pub fn pricing_card(props: &PricingCardProps) -> Html {
    let config = use_context::<Rc<SiteConfig>>().unwrap_or_default();
    let package = &props.package;

    // The CMS id wins; otherwise fall back to the plan table. No id, no buy button.
    let payment_button_id = package
        .payment_button_id
        .clone()
        .filter(|id| !id.is_empty())
        .or_else(|| config.payment_buttons.resolve(&package.title).map(str::to_owned));

    html! {
        <article class="pricing-card">
            {
                for package.category.iter().map(|category| html! {
                    <span class="pricing-category">{ category.clone() }</span>
                })
            }
            <h3>{ package.title.clone() }</h3>
            {
                for package.price.map(|price| html! {
                    <p class="pricing-price">{ format_price(price) }</p>
                })
            }
            {
                for package.description.iter().map(|description| html! {
                    <p class="pricing-description">{ description.clone() }</p>
                })
            }
            <ul class="pricing-features">
                { for package.features.iter().map(|feature| html! { <li>{ feature.clone() }</li> }) }
            </ul>
            {
                match payment_button_id {
                    Some(id) => html! { <PaymentButton payment_button_id={id} /> },
                    None => html! { <a class="pricing-contact" href="#contact">{"Get in touch"}</a> },
                }
            }
        </article>
    }
}

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub packages: Vec<Package>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    html! {
        <section id="pricing" class="pricing">
            <h2>{"Coaching packages"}</h2>
            <p class="section-subtitle">{"Pick the level of support that fits where you are."}</p>
            <div class="pricing-grid">
                { for props.packages.iter().map(|package| html! {
                    <PricingCard key={package.id.clone()} package={package.clone()} />
                }) }
            </div>
            <style>
                {r#"
                .pricing {
                    padding: 5rem 2rem;
                    text-align: center;
                }
                .pricing-grid {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
                    gap: 1.5rem;
                    max-width: 1100px;
                    margin: 2rem auto 0 auto;
                }
                .pricing-card {
                    border: 1px solid #e5e7eb;
                    border-radius: 16px;
                    padding: 2rem;
                    text-align: left;
                }
                .pricing-category {
                    text-transform: uppercase;
                    letter-spacing: 0.08em;
                    font-size: 0.75rem;
                    color: #7c3aed;
                }
                .pricing-price {
                    font-size: 2rem;
                    font-weight: 700;
                }
                .pricing-features {
                    padding-left: 1.2rem;
                    line-height: 1.8;
                }
                "#}
            </style>
        </section>
    }
}
