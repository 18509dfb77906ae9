//! Play-once entrance animations triggered by scrolling a region into view.

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Element, Window};
use yew::prelude::*;

use crate::config;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Entrance {
    #[default]
    Hidden,
    Shown,
}

impl Entrance {
    /// Latches to `Shown` the first time the region is seen and never goes back.
    pub fn observe(self, in_view: bool) -> Self {
        match self {
            Entrance::Shown => Entrance::Shown,
            Entrance::Hidden if in_view => Entrance::Shown,
            Entrance::Hidden => Entrance::Hidden,
        }
    }

    pub fn is_shown(self) -> bool {
        self == Entrance::Shown
    }
}

/// Whether a rect overlaps the viewport, ignoring the bottom `margin` pixels.
pub fn in_viewport(top: f64, bottom: f64, viewport_height: f64, margin: f64) -> bool {
    top < viewport_height - margin && bottom > 0.0
}

/// Inline style that delays the entrance of the `index`th child of a staggered group.
pub fn stagger_delay(index: usize) -> String {
    let delay = index as u32 * config::STAGGER_STEP_MS;
    format!("--reveal-delay: {}ms;", delay)
}

fn measure(node: &NodeRef, window: &Window) -> Option<bool> {
    let element = node.cast::<Element>()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let rect = element.get_bounding_client_rect();
    Some(in_viewport(
        rect.top(),
        rect.bottom(),
        viewport_height,
        config::ENTRANCE_MARGIN_PX,
    ))
}

const VIEWPORT_EVENTS: [&str; 2] = ["scroll", "resize"];

struct ViewportListener {
    window: Window,
    callback: Closure<dyn Fn()>,
}

/// Logs a failed listener (de)registration. Returns whether the call succeeded.
fn listener_call<E>(result: Result<(), E>, action: &str, event: &str) -> bool {
    let ok = result.is_ok();
    if !ok {
        warn!("Failed to {} {} events", action, event);
    }
    ok
}

impl ViewportListener {
    fn attach(window: Window, callback: Closure<dyn Fn()>) -> Self {
        for event in VIEWPORT_EVENTS {
            listener_call(
                window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()),
                "listen for",
                event,
            );
        }
        Self { window, callback }
    }

    fn detach(self) {
        for event in VIEWPORT_EVENTS {
            listener_call(
                self.window
                    .remove_event_listener_with_callback(event, self.callback.as_ref().unchecked_ref()),
                "stop listening for",
                event,
            );
        }
    }
}

fn watch(node: NodeRef, entrance: UseStateHandle<Entrance>) -> Option<ViewportListener> {
    let Some(window) = web_sys::window() else {
        warn!("No window available, showing region immediately");
        entrance.set(Entrance::Shown);
        return None;
    };

    let check = {
        let window = window.clone();
        move || match measure(&node, &window) {
            Some(in_view) => {
                let next = (*entrance).observe(in_view);
                if next != *entrance {
                    debug!("Region entered the viewport");
                    entrance.set(next);
                }
            }
            None => {
                warn!("Could not measure region, showing it");
                entrance.set(Entrance::Shown);
            }
        }
    };

    // Regions already on screen at mount must not wait for a scroll.
    check();
    Some(ViewportListener::attach(window, Closure::<dyn Fn()>::new(check)))
}

/// Tracks whether the element behind `node` has been scrolled into view yet.
#[hook]
pub fn use_entrance(node: NodeRef) -> Entrance {
    let entrance = use_state(Entrance::default);

    {
        let shown = entrance.is_shown();
        let entrance = entrance.clone();
        use_effect_with_deps(
            move |shown: &bool| {
                let listener = if *shown { None } else { watch(node, entrance) };
                move || {
                    if let Some(listener) = listener {
                        listener.detach();
                    }
                }
            },
            shown,
        );
    }

    *entrance
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealVariant {
    /// Fades in while rising 30px.
    #[default]
    FadeUp,
    /// Fades in, then each `.reveal-item` child rises in turn.
    Stagger,
    /// Fades in while growing from 95%.
    ScaleIn,
}

impl RevealVariant {
    fn class(self) -> &'static str {
        match self {
            RevealVariant::FadeUp => "reveal-fade-up",
            RevealVariant::Stagger => "reveal-stagger",
            RevealVariant::ScaleIn => "reveal-scale-in",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct RevealProps {
    #[prop_or_default]
    pub variant: RevealVariant,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(Reveal)]
pub fn reveal(props: &RevealProps) -> Html {
    let node = use_node_ref();
    let entrance = use_entrance(node.clone());

    html! {
        <div
            ref={node}
            class={classes!(
                "reveal",
                props.variant.class(),
                entrance.is_shown().then_some("visible"),
                props.class.clone()
            )}
        >
            { for props.children.iter() }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_region_latches_when_seen() {
        assert_eq!(Entrance::Hidden.observe(false), Entrance::Hidden);
        assert_eq!(Entrance::Hidden.observe(true), Entrance::Shown);
    }

    #[test]
    fn shown_region_never_hides_again() {
        let mut state = Entrance::Hidden.observe(true);
        for in_view in [false, true, false, false] {
            state = state.observe(in_view);
            assert!(state.is_shown());
        }
    }

    #[test]
    fn viewport_overlap() {
        // Below the fold.
        assert!(!in_viewport(900.0, 1200.0, 800.0, 50.0));
        // Peeking into the ignored bottom margin only.
        assert!(!in_viewport(760.0, 1000.0, 800.0, 50.0));
        // Past the margin.
        assert!(in_viewport(700.0, 1000.0, 800.0, 50.0));
        // Taller than the viewport.
        assert!(in_viewport(-400.0, 2000.0, 800.0, 50.0));
        // Scrolled entirely above.
        assert!(!in_viewport(-500.0, -10.0, 800.0, 50.0));
    }

    #[test]
    fn stagger_delay_steps_per_child() {
        assert_eq!(stagger_delay(0), "--reveal-delay: 0ms;");
        assert_eq!(
            stagger_delay(3),
            format!("--reveal-delay: {}ms;", 3 * config::STAGGER_STEP_MS)
        );
    }

    #[test]
    fn listener_failures_are_reported_not_swallowed() {
        assert!(listener_call(Ok::<(), ()>(()), "stop listening for", "scroll"));
        assert!(!listener_call(Err(()), "stop listening for", "scroll"));
        assert!(!listener_call(Err(()), "listen for", "resize"));
    }

    #[function_component]
    fn StaggeredTeaser() -> Html {
        html! {
            <Reveal variant={RevealVariant::Stagger} class="teaser">
                <p class="reveal-item">{"one"}</p>
            </Reveal>
        }
    }

    #[tokio::test]
    async fn reveal_renders_hidden_before_mount() {
        let rendered = yew::ServerRenderer::<StaggeredTeaser>::new().render().await;
        assert!(rendered.contains("reveal-stagger"));
        assert!(rendered.contains("teaser"));
        assert!(!rendered.contains("visible"));
    }
}
