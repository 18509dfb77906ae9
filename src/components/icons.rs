use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or_default]
    pub class: Classes,
}

fn stroked(class: &Classes, body: Html) -> Html {
    html! {
        <svg
            class={classes!("icon", class.clone())}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { body }
        </svg>
    }
}

#[function_component(MenuIcon)]
pub fn menu_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <line x1="4" y1="6" x2="20" y2="6" />
            <line x1="4" y1="12" x2="20" y2="12" />
            <line x1="4" y1="18" x2="20" y2="18" />
        </>
    })
}

#[function_component(CloseIcon)]
pub fn close_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <line x1="18" y1="6" x2="6" y2="18" />
            <line x1="6" y1="6" x2="18" y2="18" />
        </>
    })
}

#[function_component(ArrowRightIcon)]
pub fn arrow_right_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <line x1="5" y1="12" x2="19" y2="12" />
            <polyline points="12 5 19 12 12 19" />
        </>
    })
}

#[function_component(PlusIcon)]
pub fn plus_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! {
        <>
            <line x1="12" y1="5" x2="12" y2="19" />
            <line x1="5" y1="12" x2="19" y2="12" />
        </>
    })
}

#[function_component(MinusIcon)]
pub fn minus_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! { <line x1="5" y1="12" x2="19" y2="12" /> })
}

#[function_component(CheckIcon)]
pub fn check_icon(props: &IconProps) -> Html {
    stroked(&props.class, html! { <path d="M5 13l4 4L19 7" /> })
}

#[function_component(StarIcon)]
pub fn star_icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("icon", props.class.clone())}
            viewBox="0 0 24 24"
            fill="currentColor"
            aria-hidden="true"
        >
            <polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" />
        </svg>
    }
}

#[function_component(TwitterIcon)]
pub fn twitter_icon(props: &IconProps) -> Html {
    html! {
        <svg class={classes!("icon", props.class.clone())} viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M23 3a10.9 10.9 0 0 1-3.14 1.53 4.48 4.48 0 0 0-7.86 3v1A10.66 10.66 0 0 1 3 4s-4 9 5 13a11.64 11.64 0 0 1-7 2c9 5 20 0 20-11.5a4.5 4.5 0 0 0-.08-.83A7.72 7.72 0 0 0 23 3z" />
        </svg>
    }
}

#[function_component(LinkedInIcon)]
pub fn linkedin_icon(props: &IconProps) -> Html {
    html! {
        <svg class={classes!("icon", props.class.clone())} viewBox="0 0 24 24" fill="currentColor" aria-hidden="true">
            <path d="M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6zM2 9h4v12H2z" />
            <circle cx="4" cy="4" r="2" />
        </svg>
    }
}
