use yew::prelude::*;

use crate::components::icons::CheckIcon;
use crate::content::{Plan, PLANS};
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

fn plan_card(index: usize, plan: &Plan) -> Html {
    html! {
        <div
            key={plan.name}
            class={classes!("reveal-item", "lift", "plan-card", plan.featured.then_some("featured"))}
            style={stagger_delay(index)}
        >
            {
                if plan.featured {
                    html! { <span class="plan-badge">{"Most Popular"}</span> }
                } else {
                    html! {}
                }
            }
            <h3>{plan.name}</h3>
            <p class="plan-description">{plan.description}</p>
            <div class="plan-price">
                <span class="price">{plan.price}</span>
                <span class="period">{plan.period}</span>
            </div>
            <ul class="plan-features">
                {
                    plan.features.iter().map(|feature| html! {
                        <li key={*feature}>
                            <CheckIcon class="check" />
                            <span>{*feature}</span>
                        </li>
                    }).collect::<Html>()
                }
            </ul>
            <button class={classes!("btn", "plan-cta", if plan.featured { "btn-accent" } else { "btn-ink" })}>
                {"Get Started"}
            </button>
        </div>
    }
}

#[function_component(Pricing)]
pub fn pricing() -> Html {
    html! {
        <section id="pricing" class="section">
            <div class="container">
                <Reveal class="section-heading">
                    <span class="pill">{"Pricing"}</span>
                    <h2 class="section-title pricing-title">{"Simple, Transparent Pricing"}</h2>
                    <p class="pricing-subtitle muted">
                        {"No surprises. No hidden fees. Pick a plan that works for you."}
                    </p>
                </Reveal>

                <Reveal variant={RevealVariant::Stagger} class="plan-grid">
                    { for PLANS.iter().enumerate().map(|(i, plan)| plan_card(i, plan)) }
                </Reveal>
            </div>

            <style>
                {r#"
                .pricing-title {
                    margin-bottom: 1rem;
                }

                .pricing-subtitle {
                    font-size: 1.125rem;
                    max-width: 42rem;
                    margin: 0 auto;
                }

                .plan-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .plan-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .plan-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: #FFFFFF;
                }

                .plan-card.featured {
                    background: var(--ink);
                    color: #FFFFFF;
                    box-shadow: 0 0 0 2px var(--accent);
                }

                .plan-badge {
                    display: inline-block;
                    padding: 0.25rem 0.75rem;
                    margin-bottom: 1rem;
                    border-radius: 9999px;
                    background: var(--accent);
                    color: #FFFFFF;
                    font-size: 0.75rem;
                    font-weight: 600;
                }

                .plan-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.5rem;
                }

                .plan-description,
                .period {
                    color: var(--text-muted);
                }

                .plan-card.featured .plan-description,
                .plan-card.featured .period {
                    color: rgba(255, 255, 255, 0.6);
                }

                .plan-description {
                    margin: 0 0 1.5rem;
                }

                .plan-price {
                    margin-bottom: 1.5rem;
                }

                .price {
                    font-size: 3rem;
                    font-weight: 700;
                }

                .plan-features {
                    list-style: none;
                    padding: 0;
                    margin: 0 0 2rem;
                }

                .plan-features li {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 0.75rem;
                }

                .plan-features .check {
                    color: #22C55E;
                }

                .plan-card.featured .plan-features .check {
                    color: var(--accent);
                }

                .plan-card.featured .plan-features span {
                    color: rgba(255, 255, 255, 0.8);
                }

                .plan-cta {
                    width: 100%;
                }

                .btn-ink {
                    background: var(--ink);
                    color: #FFFFFF;
                }

                .btn-ink:hover {
                    background: #000000;
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
    async fn only_the_featured_plan_gets_a_badge() {
        let rendered = yew::ServerRenderer::<Pricing>::new().render().await;
        assert_eq!(rendered.matches("Most Popular").count(), 1);
        assert_eq!(rendered.matches("plan-card featured").count(), 1);
        for plan in PLANS {
            assert!(rendered.contains(plan.price));
        }
    }
}
