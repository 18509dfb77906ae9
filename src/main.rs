use log::info;
use yew::prelude::*;

mod config;
mod content;
mod disclosure;
mod reveal;
mod theme;

mod components {
    pub mod about;
    pub mod cta;
    pub mod faq;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod logo_ticker;
    pub mod pricing;
    pub mod process;
    pub mod showcase;
    pub mod testimonials;
    pub mod work;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    info!("Rendering Landing page");
    html! { <Landing /> }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
