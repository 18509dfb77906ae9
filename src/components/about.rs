use yew::prelude::*;

use crate::content::{STATS, TEAM_IMAGE};
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

#[function_component(About)]
pub fn about() -> Html {
    html! {
        <section id="about" class="section">
            <div class="container">
                <Reveal variant={RevealVariant::Stagger} class="about-grid">
                    <div class="reveal-item" style={stagger_delay(0)}>
                        <span class="pill">{"About Us"}</span>
                        <h2 class="section-title about-title">
                            {"We're a creative studio building brands that stand out"}
                        </h2>
                        <p class="about-copy muted">
                            {"Founded in 2020, Hanzo has helped over 100+ startups transform their visual identity. We believe great design should be accessible to everyone, which is why we created a subscription model that works."}
                        </p>
                        <div class="about-stats">
                            {
                                STATS.iter().map(|stat| html! {
                                    <div key={stat.label}>
                                        <p class="stat-value">{stat.value}</p>
                                        <p class="muted">{stat.label}</p>
                                    </div>
                                }).collect::<Html>()
                            }
                        </div>
                    </div>

                    <div class="reveal-item about-visual" style={stagger_delay(1)}>
                        <div class="about-photo">
                            <img src={TEAM_IMAGE} alt="Team" loading="lazy" />
                        </div>
                        <div class="about-accent"></div>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .about-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 3rem;
                    align-items: center;
                }

                @media (min-width: 1024px) {
                    .about-grid {
                        grid-template-columns: 1fr 1fr;
                        gap: 5rem;
                    }
                }

                .about-title {
                    margin-bottom: 1.5rem;
                }

                .about-copy {
                    font-size: 1.125rem;
                    margin: 0 0 2rem;
                }

                .about-stats {
                    display: flex;
                    gap: 2rem;
                }

                .about-stats p {
                    margin: 0;
                }

                .stat-value {
                    font-size: 3rem;
                    font-weight: 700;
                    color: var(--accent);
                }

                .about-visual {
                    position: relative;
                }

                .about-photo {
                    aspect-ratio: 1 / 1;
                    border-radius: 1.5rem;
                    overflow: hidden;
                }

                .about-photo img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .about-accent {
                    position: absolute;
                    right: -1rem;
                    bottom: -1rem;
                    width: 6rem;
                    height: 6rem;
                    border-radius: 1rem;
                    background: var(--accent);
                    animation: rock 6s ease-in-out infinite;
                }
                "#}
            </style>
        </section>
    }
}
