use yew::prelude::*;

use crate::content::LOGOS;

/// The logo row repeated back to back so the marquee can loop at -50%.
pub fn ticker_row() -> impl Iterator<Item = &'static str> {
    LOGOS.iter().chain(LOGOS.iter()).copied()
}

#[function_component(LogoTicker)]
pub fn logo_ticker() -> Html {
    html! {
        <section class="logo-ticker">
            <div class="ticker-track animate-marquee">
                {
                    ticker_row().enumerate().map(|(i, logo)| html! {
                        <div key={i} class="ticker-logo muted">{logo}</div>
                    }).collect::<Html>()
                }
            </div>

            <style>
                {r#"
                .logo-ticker {
                    padding: 3rem 0;
                    overflow: hidden;
                    border-top: 1px solid var(--border);
                    border-bottom: 1px solid var(--border);
                }

                .ticker-track {
                    display: flex;
                    width: max-content;
                }

                .ticker-logo {
                    flex-shrink: 0;
                    padding: 0 3rem;
                    font-size: 1.25rem;
                    font-weight: 500;
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
    fn row_repeats_every_logo_twice() {
        let row: Vec<_> = ticker_row().collect();
        assert_eq!(row.len(), LOGOS.len() * 2);
        for logo in LOGOS {
            assert_eq!(row.iter().filter(|l| *l == logo).count(), 2);
        }
        assert_eq!(&row[..LOGOS.len()], &row[LOGOS.len()..]);
    }
}
