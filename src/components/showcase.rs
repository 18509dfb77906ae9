use yew::prelude::*;

use crate::content::SHOWCASE_IMAGES;
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

#[function_component(Showcase)]
pub fn showcase() -> Html {
    html! {
        <section class="showcase">
            <div class="container">
                <Reveal variant={RevealVariant::Stagger} class="showcase-grid">
                    {
                        SHOWCASE_IMAGES.iter().enumerate().map(|(i, src)| html! {
                            <div key={i} class="reveal-item showcase-frame" style={stagger_delay(i)}>
                                <img
                                    class="zoom-on-hover"
                                    src={*src}
                                    alt={format!("Showcase {}", i + 1)}
                                    loading="lazy"
                                />
                            </div>
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>

            <style>
                {r#"
                .showcase {
                    padding: 4rem 1.5rem;
                }

                .showcase-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .showcase-grid {
                        grid-template-columns: repeat(3, 1fr);
                    }
                }

                .showcase-frame {
                    aspect-ratio: 4 / 3;
                    border-radius: 1rem;
                    overflow: hidden;
                }

                .showcase-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }
                "#}
            </style>
        </section>
    }
}
