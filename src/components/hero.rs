use yew::prelude::*;

use crate::components::icons::ArrowRightIcon;

#[function_component(Hero)]
pub fn hero() -> Html {
    html! {
        <section class="hero">
            <div class="hero-content">
                <h1>
                    {"Unlimited Design"}
                    <br />
                    <span class="accent">{"for Solid Startups"}</span>
                </h1>

                <p class="hero-subtitle muted">
                    {"Design subscription that scales with your needs. Pause or cancel anytime. Get unlimited requests and revisions."}
                </p>

                <div class="hero-actions">
                    <a href="#pricing" class="btn btn-accent">
                        {"See Plans"}
                        <ArrowRightIcon />
                    </a>
                    <a href="#work" class="btn btn-light">
                        {"View Work"}
                    </a>
                </div>
            </div>

            <style>
                {r#"
                .hero {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 6rem 1.5rem 3rem;
                    box-sizing: border-box;
                }

                .hero-content {
                    max-width: 64rem;
                    margin: 0 auto;
                    text-align: center;
                    animation: enter-up 0.8s ease-out both;
                }

                .hero h1 {
                    font-size: clamp(2.25rem, 8vw, 6rem);
                    font-weight: 700;
                    line-height: 1.1;
                    letter-spacing: -0.025em;
                    margin: 0 0 2rem;
                }

                .hero .accent {
                    color: var(--accent);
                }

                .hero-subtitle {
                    font-size: 1.25rem;
                    max-width: 42rem;
                    margin: 0 auto 2.5rem;
                }

                .hero-actions {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                    justify-content: center;
                }
                "#}
            </style>
        </section>
    }
}
