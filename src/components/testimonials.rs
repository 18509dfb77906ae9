use yew::prelude::*;

use crate::components::icons::StarIcon;
use crate::content::{TESTIMONIALS, TESTIMONIAL_STARS};
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="section testimonials">
            <div class="container">
                <Reveal class="section-heading">
                    <span class="pill on-dark">{"Testimonials"}</span>
                    <h2 class="section-title">{"What Our Clients Say"}</h2>
                </Reveal>

                <Reveal variant={RevealVariant::Stagger} class="testimonial-grid">
                    {
                        TESTIMONIALS.iter().enumerate().map(|(i, t)| html! {
                            <div key={t.author} class="reveal-item testimonial-card" style={stagger_delay(i)}>
                                <div class="stars">
                                    { for (0..TESTIMONIAL_STARS).map(|_| html! { <StarIcon /> }) }
                                </div>
                                <p class="quote">{t.quote}</p>
                                <div class="author">
                                    <img src={t.avatar} alt={t.author} loading="lazy" />
                                    <div>
                                        <p class="author-name">{t.author}</p>
                                        <p class="author-role">{t.role}</p>
                                    </div>
                                </div>
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>

            <style>
                {r#"
                .testimonials {
                    background: var(--ink);
                    color: #FFFFFF;
                }

                .testimonial-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .testimonial-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .testimonial-card {
                    padding: 2rem;
                    border-radius: 1.5rem;
                    background: rgba(255, 255, 255, 0.05);
                    backdrop-filter: blur(4px);
                }

                .stars {
                    display: flex;
                    gap: 0.25rem;
                    margin-bottom: 1rem;
                    color: var(--accent);
                }

                .quote {
                    color: rgba(255, 255, 255, 0.8);
                    margin: 0 0 1.5rem;
                }

                .author {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                }

                .author img {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 9999px;
                    object-fit: cover;
                }

                .author p {
                    margin: 0;
                }

                .author-name {
                    font-weight: 600;
                }

                .author-role {
                    color: rgba(255, 255, 255, 0.6);
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}
