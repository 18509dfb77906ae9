use log::{error, info};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::{
    about::About, cta::Cta, faq::FaqSection, footer::Footer, header::Header, hero::Hero,
    logo_ticker::LogoTicker, pricing::Pricing, process::Process, showcase::Showcase,
    testimonials::Testimonials, work::Work,
};
use crate::theme;

#[function_component(Landing)]
pub fn landing() -> Html {
    // The page-wide stylesheet lives exactly as long as the page.
    use_effect_once(|| {
        let style = match theme::register() {
            Ok(style) => {
                info!("Registered global stylesheet");
                Some(style)
            }
            Err(e) => {
                error!("Failed to register global stylesheet: {}", e);
                None
            }
        };

        move || {
            if let Some(style) = style {
                style.unregister();
            }
        }
    });

    html! {
        <div class="landing-page">
            <Header />
            <Hero />
            <LogoTicker />
            <Showcase />
            <About />
            <Process />
            <Work />
            <Testimonials />
            <Pricing />
            <FaqSection />
            <Cta />
            <Footer />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{FOOTER_LINKS, MENU_ITEMS};

    #[tokio::test]
    async fn every_nav_anchor_has_a_section() {
        let rendered = yew::ServerRenderer::<Landing>::new().render().await;
        for item in MENU_ITEMS.iter().chain(FOOTER_LINKS) {
            assert!(
                rendered.contains(&format!(r#"id="{}""#, item.anchor)),
                "no section with id {}",
                item.anchor
            );
        }
    }

    #[tokio::test]
    async fn initial_render_has_menu_closed_and_no_faq_open() {
        let rendered = yew::ServerRenderer::<Landing>::new().render().await;
        assert!(!rendered.contains("menu-overlay open"));
        assert!(!rendered.contains("faq-item open"));
    }

    #[tokio::test]
    async fn sections_render_in_page_order() {
        let rendered = yew::ServerRenderer::<Landing>::new().render().await;
        let order = [
            "site-header",
            "class=\"hero\"",
            "logo-ticker",
            "class=\"showcase\"",
            "id=\"about\"",
            "id=\"process\"",
            "id=\"work\"",
            "testimonials",
            "id=\"pricing\"",
            "id=\"faq\"",
            "id=\"contact\"",
            "site-footer",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|marker| rendered.find(marker).unwrap_or(usize::MAX))
            .collect();
        assert!(positions.iter().all(|p| *p != usize::MAX));
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
