use yew::prelude::*;

use crate::hooks::use_count_up_on_view;
use crate::motion::count_up::CountUpOptions;
use crate::motion::visibility::DEFAULT_VISIBILITY_THRESHOLD;

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub end: f64,
    pub label: AttrValue,
    #[prop_or_default]
    pub suffix: AttrValue,
    #[prop_or(2000.0)]
    pub duration_ms: f64,
    #[prop_or_default]
    pub delay_ms: f64,
}

#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let options = CountUpOptions {
        start: 0.0,
        end: props.end,
        duration_ms: props.duration_ms,
        delay_ms: props.delay_ms,
        ..Default::default()
    };
    let (node, counter) = use_count_up_on_view(options, DEFAULT_VISIBILITY_THRESHOLD);

    html! {
        <div ref={node} class="stat">
            <span class="stat-value">{ format!("{}{}", counter.count(), props.suffix) }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}

#[function_component(StatsBand)]
pub fn stats_band() -> Html {
    html! {
        <section id="results" class="stats-band">
            <StatCounter end={500.0} suffix="+" label="Professionals coached" />
            <StatCounter end={92.0} suffix="%" label="Land a role within 90 days" delay_ms={150.0} />
            <StatCounter end={12.0} suffix=" yrs" label="Hiring-side experience" delay_ms={300.0} />
            <style>
                {r#"
                .stats-band {
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
                    gap: 2rem;
                    padding: 4rem 2rem;
                    max-width: 1000px;
                    margin: 0 auto;
                    text-align: center;
                }
                .stat-value {
                    display: block;
                    font-size: 3rem;
                    font-weight: 700;
                    font-variant-numeric: tabular-nums;
                }
                .stat-label {
                    color: #6b7280;
                }
                "#}
            </style>
        </section>
    }
}
