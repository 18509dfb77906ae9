use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{MinusIcon, PlusIcon};
use crate::content::{Faq, FAQS};
use crate::disclosure::FaqState;
use crate::reveal::{stagger_delay, Reveal, RevealVariant};

/// State after the visitor activates the question at `index`.
fn question_clicked(state: FaqState, index: usize) -> FaqState {
    state.toggle(index)
}

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    index: usize,
    question: AttrValue,
    answer: AttrValue,
    is_open: bool,
    on_toggle: Callback<usize>,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let toggle = {
        let on_toggle = props.on_toggle.clone();
        let index = props.index;
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_toggle.emit(index);
        })
    };

    let question_id = format!("faq-question-{}", props.index);
    let answer_id = format!("faq-answer-{}", props.index);

    html! {
        <div
            class={classes!("reveal-item", "faq-item", props.is_open.then_some("open"))}
            style={stagger_delay(props.index)}
        >
            <button
                id={question_id.clone()}
                class="faq-question"
                aria-expanded={props.is_open.to_string()}
                aria-controls={answer_id.clone()}
                onclick={toggle}
            >
                <span class="question-text">{&props.question}</span>
                {
                    if props.is_open {
                        html! { <MinusIcon /> }
                    } else {
                        html! { <PlusIcon /> }
                    }
                }
            </button>
            <div
                id={answer_id}
                class="faq-answer"
                role="region"
                aria-labelledby={question_id}
                aria-hidden={(!props.is_open).to_string()}
            >
                <div class="faq-answer-inner">
                    <p class="muted">{&props.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[function_component(FaqSection)]
pub fn faq_section() -> Html {
    let open = use_state(FaqState::default);

    let on_toggle = {
        let open = open.clone();
        Callback::from(move |index: usize| {
            let next = question_clicked(*open, index);
            debug!("FAQ {} toggled, open entry now {:?}", index, next.open_id());
            open.set(next);
        })
    };

    html! {
        <section id="faq" class="section faq">
            <div class="faq-container">
                <Reveal class="section-heading">
                    <span class="pill on-light">{"FAQ"}</span>
                    <h2 class="section-title">{"Got Questions?"}</h2>
                </Reveal>

                <Reveal variant={RevealVariant::Stagger} class="faq-list">
                    {
                        FAQS.iter().enumerate().map(|(i, Faq { question, answer })| html! {
                            <FaqItem
                                key={i}
                                index={i}
                                question={*question}
                                answer={*answer}
                                is_open={open.is_open(i)}
                                on_toggle={on_toggle.clone()}
                            />
                        }).collect::<Html>()
                    }
                </Reveal>
            </div>

            <style>
                {r#"
                .faq {
                    background: #FFFFFF;
                }

                .faq-container {
                    max-width: 48rem;
                    margin: 0 auto;
                }

                .faq-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }

                .faq-item {
                    border-radius: 1rem;
                    background: var(--surface-dark);
                    overflow: hidden;
                }

                .faq-question {
                    width: 100%;
                    padding: 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    border: none;
                    background: transparent;
                    color: inherit;
                    font: inherit;
                    text-align: left;
                    cursor: pointer;
                }

                .question-text {
                    font-size: 1.125rem;
                    font-weight: 600;
                }

                .faq-answer {
                    display: grid;
                    grid-template-rows: 0fr;
                    opacity: 0;
                    visibility: hidden;
                    transition: grid-template-rows 0.3s ease, opacity 0.3s ease, visibility 0s linear 0.3s;
                }

                .faq-item.open .faq-answer {
                    grid-template-rows: 1fr;
                    opacity: 1;
                    visibility: visible;
                    transition: grid-template-rows 0.3s ease, opacity 0.3s ease, visibility 0s;
                }

                .faq-answer-inner {
                    overflow: hidden;
                }

                .faq-answer p {
                    margin: 0;
                    padding: 0 1.5rem 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_clicks_keep_a_single_answer_open() {
        let state = FaqState::default();
        let state = question_clicked(state, 2);
        assert_eq!(state.open_id(), Some(2));
        let state = question_clicked(state, 4);
        assert_eq!(state.open_id(), Some(4));
        assert!(!state.is_open(2));
        let state = question_clicked(state, 4);
        assert!(state.is_closed());
    }

    #[tokio::test]
    async fn no_answer_starts_open() {
        let rendered = yew::ServerRenderer::<FaqSection>::new().render().await;
        assert!(!rendered.contains("faq-item open"));
        assert!(!rendered.contains(r#"aria-expanded="true""#));
        assert_eq!(
            rendered.matches(r#"aria-expanded="false""#).count(),
            FAQS.len()
        );
    }

    #[tokio::test]
    async fn closed_answers_are_hidden_from_assistive_tech() {
        let rendered = yew::ServerRenderer::<FaqSection>::new().render().await;
        // Every icon svg is aria-hidden, so the rest must be the answers.
        let icons = rendered.matches("<svg").count();
        assert_eq!(
            rendered.matches(r#"aria-hidden="true""#).count(),
            icons + FAQS.len()
        );
        assert!(!rendered.contains(r#"aria-hidden="false""#));
    }

    #[function_component]
    fn OpenAnswer() -> Html {
        html! {
            <FaqItem
                index={1}
                question="Who are the designers?"
                answer="Senior designers."
                is_open={true}
                on_toggle={Callback::noop()}
            />
        }
    }

    #[tokio::test]
    async fn open_answer_is_exposed() {
        let rendered = yew::ServerRenderer::<OpenAnswer>::new().render().await;
        assert!(rendered.contains("faq-item open"));
        assert!(rendered.contains(r#"aria-hidden="false""#));
        assert!(rendered.contains(r#"aria-expanded="true""#));
    }

    #[tokio::test]
    async fn answers_are_labelled_by_their_question() {
        let rendered = yew::ServerRenderer::<FaqSection>::new().render().await;
        for i in 0..FAQS.len() {
            assert!(rendered.contains(&format!(r#"id="faq-question-{}""#, i)));
            assert!(rendered.contains(&format!(r#"aria-labelledby="faq-question-{}""#, i)));
        }
    }

    #[tokio::test]
    async fn every_question_is_rendered() {
        let rendered = yew::ServerRenderer::<FaqSection>::new().render().await;
        for i in 0..FAQS.len() {
            assert!(rendered.contains(&format!(r#"id="faq-answer-{}""#, i)));
        }
    }
}
