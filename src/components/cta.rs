use yew::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::config;
use crate::reveal::{Reveal, RevealVariant};

#[function_component(Cta)]
pub fn cta() -> Html {
    html! {
        <section id="contact" class="section">
            <div class="cta-container">
                <Reveal variant={RevealVariant::ScaleIn} class="cta-card">
                    <div class="cta-blob cta-blob-top"></div>
                    <div class="cta-blob cta-blob-bottom"></div>

                    <div class="cta-content">
                        <h2 class="section-title cta-title">
                            {"Ready to Transform"}
                            <br />
                            {"Your Brand?"}
                        </h2>
                        <p class="cta-copy">
                            {format!("Join 100+ startups already growing with {}. Start your design journey today.", config::BRAND)}
                        </p>
                        <a href="#pricing" class="btn btn-accent cta-button">
                            {"Get Started"}
                            <ArrowRightIcon />
                        </a>
                    </div>
                </Reveal>
            </div>

            <style>
                {r#"
                .cta-container {
                    max-width: 56rem;
                    margin: 0 auto;
                }

                .cta-card {
                    position: relative;
                    padding: 4rem 3rem;
                    border-radius: 1.5rem;
                    background: var(--ink);
                    color: #FFFFFF;
                    text-align: center;
                    overflow: hidden;
                }

                .cta-blob {
                    position: absolute;
                    border-radius: 9999px;
                    background: var(--accent);
                }

                .cta-blob-top {
                    top: 0;
                    right: 0;
                    width: 16rem;
                    height: 16rem;
                    filter: blur(100px);
                    opacity: 0.3;
                }

                .cta-blob-bottom {
                    bottom: 0;
                    left: 0;
                    width: 12rem;
                    height: 12rem;
                    filter: blur(80px);
                    opacity: 0.2;
                }

                .cta-content {
                    position: relative;
                }

                .cta-title {
                    margin-bottom: 1.5rem;
                }

                .cta-copy {
                    color: rgba(255, 255, 255, 0.7);
                    font-size: 1.125rem;
                    max-width: 36rem;
                    margin: 0 auto 2rem;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                }

                .cta-button:active {
                    transform: scale(0.95);
                }
                "#}
            </style>
        </section>
    }
}
