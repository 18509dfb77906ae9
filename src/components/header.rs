use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::{CloseIcon, MenuIcon};
use crate::config;
use crate::content::{MENU_ITEMS, SOCIAL_LINKS};
use crate::disclosure::MenuState;
use crate::reveal::stagger_delay;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MenuControl {
    MenuButton,
    CloseButton,
    NavLink,
}

/// State after the visitor activates one of the menu's controls.
fn menu_after(state: MenuState, control: MenuControl) -> MenuState {
    match control {
        MenuControl::MenuButton => state.open(()),
        MenuControl::CloseButton | MenuControl::NavLink => state.close(),
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let menu = use_state(MenuState::default);

    let open_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Opening menu");
            menu.set(menu_after(*menu, MenuControl::MenuButton));
        })
    };

    let close_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Closing menu");
            menu.set(menu_after(*menu, MenuControl::CloseButton));
        })
    };

    // Nav links still have to follow their fragment, so no prevent_default here.
    let follow_link = {
        let menu = menu.clone();
        Callback::from(move |_: MouseEvent| {
            menu.set(menu_after(*menu, MenuControl::NavLink));
        })
    };

    let is_open = menu.is_open(());

    html! {
        <>
            <header class="site-header">
                <div class="container header-bar">
                    <a href="#" class="brand enter-left">{config::BRAND}</a>
                    <button
                        class="round-button menu-button enter-right"
                        aria-label="Open menu"
                        aria-expanded={is_open.to_string()}
                        onclick={open_menu}
                    >
                        <MenuIcon />
                    </button>
                </div>
            </header>

            <div
                class={classes!("menu-overlay", is_open.then_some("open"))}
                aria-hidden={menu.is_closed().to_string()}
            >
                <div class="menu-inner">
                    <div class="menu-top">
                        <span class="brand">{config::BRAND}</span>
                        <button class="round-button close-button" aria-label="Close menu" onclick={close_menu}>
                            <CloseIcon />
                        </button>
                    </div>

                    <nav class="menu-nav">
                        <ul>
                            {
                                MENU_ITEMS.iter().enumerate().map(|(i, item)| html! {
                                    <li key={item.anchor} style={stagger_delay(i)}>
                                        <a href={item.href()} onclick={follow_link.clone()}>
                                            {item.label}
                                        </a>
                                    </li>
                                }).collect::<Html>()
                            }
                        </ul>
                    </nav>

                    <div class="menu-social">
                        {
                            SOCIAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href}>{link.label}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    padding: 1rem 1.5rem;
                }

                .header-bar {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }

                .brand {
                    font-size: 1.875rem;
                    font-weight: 700;
                    letter-spacing: -0.025em;
                }

                .enter-left {
                    animation: enter-from-left 0.5s ease-out both;
                }

                .enter-right {
                    animation: enter-from-right 0.5s ease-out both;
                }

                .round-button {
                    width: 3rem;
                    height: 3rem;
                    border: none;
                    border-radius: 9999px;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    cursor: pointer;
                    transition: background-color 0.2s ease;
                }

                .menu-button {
                    background: #FFFFFF;
                    color: var(--ink);
                }

                .menu-button:hover {
                    background: #F3F4F6;
                }

                .menu-overlay {
                    position: fixed;
                    inset: 0;
                    z-index: 100;
                    background: var(--ink);
                    color: #FFFFFF;
                    opacity: 0;
                    visibility: hidden;
                    pointer-events: none;
                    transition: opacity 0.3s ease, visibility 0s linear 0.3s;
                }

                .menu-overlay.open {
                    opacity: 1;
                    visibility: visible;
                    pointer-events: auto;
                    transition: opacity 0.3s ease, visibility 0s;
                }

                .menu-inner {
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                    padding: 1.5rem;
                    box-sizing: border-box;
                }

                .menu-top {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    margin-bottom: 3rem;
                }

                .close-button {
                    background: rgba(255, 255, 255, 0.1);
                    color: #FFFFFF;
                }

                .close-button:hover {
                    background: rgba(255, 255, 255, 0.2);
                }

                .menu-nav {
                    flex: 1;
                    display: flex;
                    flex-direction: column;
                    justify-content: center;
                }

                .menu-nav ul {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                }

                .menu-nav li {
                    margin-bottom: 1rem;
                    opacity: 0;
                    transform: translateY(30px);
                    transition: opacity 0.6s ease, transform 0.6s ease;
                }

                .menu-overlay.open .menu-nav li {
                    opacity: 1;
                    transform: none;
                    transition-delay: var(--reveal-delay);
                }

                .menu-nav a {
                    font-size: clamp(2.25rem, 7vw, 3.75rem);
                    font-weight: 700;
                    transition: color 0.2s ease;
                }

                .menu-nav a:hover {
                    color: var(--accent);
                }

                .menu-social {
                    display: flex;
                    gap: 1.5rem;
                    color: rgba(255, 255, 255, 0.6);
                }

                .menu-social a:hover {
                    color: #FFFFFF;
                }
                "#}
            </style>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_button_opens_and_nav_link_closes() {
        let menu = MenuState::default();
        let menu = menu_after(menu, MenuControl::MenuButton);
        assert!(menu.is_open(()));
        let menu = menu_after(menu, MenuControl::NavLink);
        assert!(menu.is_closed());
    }

    #[test]
    fn close_button_closes_and_is_idempotent() {
        let menu = menu_after(MenuState::default(), MenuControl::MenuButton);
        let menu = menu_after(menu, MenuControl::CloseButton);
        assert!(menu.is_closed());
        assert_eq!(menu_after(menu, MenuControl::CloseButton), MenuState::Closed);
    }

    #[test]
    fn menu_button_never_toggles_closed() {
        let menu = menu_after(MenuState::default(), MenuControl::MenuButton);
        assert!(menu_after(menu, MenuControl::MenuButton).is_open(()));
    }

    #[tokio::test]
    async fn menu_starts_closed() {
        let rendered = yew::ServerRenderer::<Header>::new().render().await;
        assert!(rendered.contains(r#"class="menu-overlay""#));
        assert!(!rendered.contains("menu-overlay open"));
        assert!(rendered.contains(r#"aria-expanded="false""#));
    }

    #[tokio::test]
    async fn menu_links_every_anchor() {
        let rendered = yew::ServerRenderer::<Header>::new().render().await;
        for item in MENU_ITEMS {
            assert!(rendered.contains(&format!(r##"href="#{}""##, item.anchor)));
        }
    }
}
