use yew::prelude::*;

use crate::components::icons::ArrowRightIcon;
use crate::content::PROJECTS;
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

#[function_component(Work)]
pub fn work() -> Html {
    html! {
        <section id="work" class="section">
            <div class="container">
                <Reveal class="work-heading">
                    <div>
                        <span class="pill">{"Our Work"}</span>
                        <h2 class="section-title">{"Recent Projects"}</h2>
                    </div>
                    <a href="#" class="view-all">
                        {"View All"}
                        <ArrowRightIcon />
                    </a>
                </Reveal>

                <Reveal variant={RevealVariant::Stagger} class="project-grid">
                    {
                        PROJECTS.iter().enumerate().map(|(i, project)| html! {
                            <article key={project.title} class="reveal-item lift zoom-group project" style={stagger_delay(i)}>
                                <div class="project-frame">
                                    <img class="zoom-on-hover" src={project.image} alt={project.title} loading="lazy" />
                                </div>
                                <span class="project-category muted">{project.category}</span>
                                <h3>{project.title}</h3>
                            </article>
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>

            <style>
                {r#"
                .work-heading {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: flex-end;
                    justify-content: space-between;
                    gap: 1rem;
                    margin-bottom: 3rem;
                }

                .view-all {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    color: var(--accent);
                    font-weight: 600;
                    transition: gap 0.2s ease;
                }

                .view-all:hover {
                    gap: 0.75rem;
                }

                .project-grid {
                    display: grid;
                    grid-template-columns: 1fr;
                    gap: 1.5rem;
                }

                @media (min-width: 768px) {
                    .project-grid {
                        grid-template-columns: repeat(2, 1fr);
                    }
                }

                .project {
                    cursor: pointer;
                }

                .project-frame {
                    aspect-ratio: 4 / 3;
                    border-radius: 1rem;
                    overflow: hidden;
                    margin-bottom: 1rem;
                }

                .project-frame img {
                    width: 100%;
                    height: 100%;
                    object-fit: cover;
                }

                .project-category {
                    font-size: 0.875rem;
                }

                .project h3 {
                    font-size: 1.5rem;
                    margin: 0.25rem 0 0;
                    transition: color 0.2s ease;
                }

                .project:hover h3 {
                    color: var(--accent);
                }
                "#}
            </style>
        </section>
    }
}
