use yew::prelude::*;

use crate::content::STEPS;
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

#[function_component(Process)]
pub fn process() -> Html {
    html! {
        <section id="process" class="section process">
            <div class="container">
                <Reveal class="section-heading">
                    <span class="pill on-light">{"How It Works"}</span>
                    <h2 class="section-title">{"Simple Process, Great Results"}</h2>
                </Reveal>

                <Reveal variant={RevealVariant::Stagger} class="step-grid">
                    {
                        STEPS.iter().enumerate().map(|(i, step)| html! {
                            <div key={step.number} class="reveal-item lift step-card" style={stagger_delay(i)}>
                                <span class="step-number">{step.number}</span>
                                <h3>{step.title}</h3>
                                <p class="muted">{step.description}</p>
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>

            <style>
                {r#"
                .process {
                    background: #FFFFFF;
                }

                .step-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .step-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .step-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: var(--surface-dark);
                }

                .step-number {
                    display: block;
                    margin-bottom: 1rem;
                    font-size: 3rem;
                    font-weight: 700;
                    color: rgba(255, 55, 0, 0.3);
                }

                .step-card h3 {
                    font-size: 1.5rem;
                    margin: 0 0 0.75rem;
                }

                .step-card p {
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
