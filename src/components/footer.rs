use yew::prelude::*;

use crate::components::icons::{LinkedInIcon, TwitterIcon};
use crate::config;
use crate::content::{FOOTER_LINKS, LEGAL_LINKS};

#[function_component(Footer)]
pub fn footer() -> Html {
    html! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-top">
                    <div>
                        <span class="footer-brand">{config::BRAND}</span>
                        <p class="muted footer-tagline">{config::TAGLINE}</p>
                    </div>

                    <div class="footer-links">
                        {
                            FOOTER_LINKS.iter().map(|link| html! {
                                <a key={link.anchor} href={link.href()} class="muted">{link.label}</a>
                            }).collect::<Html>()
                        }
                    </div>

                    <div class="footer-social">
                        <a href="#" aria-label="Twitter"><TwitterIcon /></a>
                        <a href="#" aria-label="LinkedIn"><LinkedInIcon /></a>
                    </div>
                </div>

                <div class="footer-bottom muted">
                    <p>{format!("© {} {}. All rights reserved.", config::COPYRIGHT_YEAR, config::BRAND)}</p>
                    <div class="footer-legal">
                        {
                            LEGAL_LINKS.iter().map(|link| html! {
                                <a key={link.label} href={link.href}>{link.label}</a>
                            }).collect::<Html>()
                        }
                    </div>
                </div>
            </div>

            <style>
                {r#"
                .site-footer {
                    padding: 3rem 1.5rem;
                    border-top: 1px solid var(--border);
                }

                .footer-top {
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1.5rem;
                }

                .footer-brand {
                    font-size: 1.5rem;
                    font-weight: 700;
                }

                .footer-tagline {
                    margin: 0.5rem 0 0;
                }

                .footer-links,
                .footer-legal {
                    display: flex;
                    gap: 1.5rem;
                }

                .footer-links a,
                .footer-legal a {
                    transition: color 0.2s ease;
                }

                .footer-links a:hover,
                .footer-legal a:hover {
                    color: var(--ink);
                }

                .footer-social {
                    display: flex;
                    gap: 1rem;
                }

                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 9999px;
                    background: #FFFFFF;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    transition: background-color 0.2s ease;
                }

                .footer-social a:hover {
                    background: #F3F4F6;
                }

                .footer-bottom {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid var(--border);
                    display: flex;
                    flex-wrap: wrap;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                    font-size: 0.875rem;
                }

                .footer-bottom p {
                    margin: 0;
                }
                "#}
            </style>
        </footer>
    }
}
