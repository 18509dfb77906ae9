//! Page-wide stylesheet: colour variables, keyframes and the shared
//! entrance/hover utility classes. Section-specific rules live next to
//! their components.

use std::str::FromStr;

use stylist::ast::Sheet;
use stylist::GlobalStyle;

use crate::config;

pub fn global_css() -> String {
    format!(
        r#"
        :root {{
            --accent: {accent};
            --accent-hover: {accent_hover};
            --ink: {ink};
            --surface: #F5F5F0;
            --surface-dark: #EDEDE8;
            --text-muted: #6B6B6B;
            --border: rgba(26, 26, 26, 0.1);
        }}

        html {{
            scroll-behavior: smooth;
        }}

        body {{
            margin: 0;
            background: var(--surface);
            color: var(--ink);
            font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
            -webkit-font-smoothing: antialiased;
        }}

        a {{
            color: inherit;
            text-decoration: none;
        }}

        img {{
            display: block;
        }}

        .container {{
            max-width: 80rem;
            margin: 0 auto;
        }}

        .section {{
            padding: 5rem 1.5rem;
        }}

        .section-heading {{
            text-align: center;
            margin-bottom: 4rem;
        }}

        .section-title {{
            font-size: clamp(1.875rem, 4vw, 3rem);
            font-weight: 700;
            line-height: 1.15;
            margin: 0;
        }}

        .pill {{
            display: inline-block;
            padding: 0.5rem 1rem;
            margin-bottom: 1.5rem;
            border-radius: 9999px;
            background: #FFFFFF;
            font-size: 0.875rem;
            font-weight: 500;
        }}

        .pill.on-light {{
            background: var(--surface-dark);
        }}

        .pill.on-dark {{
            background: rgba(255, 255, 255, 0.1);
        }}

        .muted {{
            color: var(--text-muted);
        }}

        .btn {{
            display: inline-flex;
            align-items: center;
            justify-content: center;
            gap: 0.5rem;
            padding: 1rem 2rem;
            border: none;
            border-radius: 9999px;
            font: inherit;
            font-weight: 600;
            cursor: pointer;
            transition: background-color 0.2s ease, transform 0.2s ease;
        }}

        .btn:hover {{
            transform: scale(1.02);
        }}

        .btn:active {{
            transform: scale(0.98);
        }}

        .btn-accent {{
            background: var(--accent);
            color: #FFFFFF;
        }}

        .btn-accent:hover {{
            background: var(--accent-hover);
        }}

        .btn-light {{
            background: #FFFFFF;
            color: var(--ink);
        }}

        .btn-light:hover {{
            background: #F3F4F6;
        }}

        .icon {{
            width: 1.25rem;
            height: 1.25rem;
            flex-shrink: 0;
        }}

        .reveal {{
            --reveal-delay: 0ms;
        }}

        .reveal-fade-up,
        .reveal-stagger > .reveal-item {{
            opacity: 0;
            transform: translateY(30px);
            transition: opacity 0.6s ease var(--reveal-delay), transform 0.6s ease var(--reveal-delay);
        }}

        .reveal-stagger {{
            opacity: 0;
            transition: opacity 0.6s ease;
        }}

        .reveal-scale-in {{
            opacity: 0;
            transform: scale(0.95);
            transition: opacity 0.6s ease, transform 0.6s ease;
        }}

        .reveal-fade-up.visible,
        .reveal-stagger.visible,
        .reveal-stagger.visible > .reveal-item,
        .reveal-scale-in.visible {{
            opacity: 1;
            transform: none;
        }}

        .reveal-stagger.visible > .reveal-item.lift:hover {{
            transform: translateY(-5px);
            transition-delay: 0ms;
        }}

        .zoom-on-hover {{
            transition: transform 0.5s ease;
        }}

        .zoom-on-hover:hover,
        .zoom-group:hover .zoom-on-hover {{
            transform: scale(1.05);
        }}

        @keyframes marquee {{
            0% {{ transform: translateX(0); }}
            100% {{ transform: translateX(-50%); }}
        }}

        .animate-marquee {{
            animation: marquee {marquee}s linear infinite;
        }}

        @keyframes enter-from-left {{
            from {{ opacity: 0; transform: translateX(-20px); }}
            to {{ opacity: 1; transform: none; }}
        }}

        @keyframes enter-from-right {{
            from {{ opacity: 0; transform: translateX(20px); }}
            to {{ opacity: 1; transform: none; }}
        }}

        @keyframes enter-up {{
            from {{ opacity: 0; transform: translateY(40px); }}
            to {{ opacity: 1; transform: none; }}
        }}

        @keyframes rock {{
            0% {{ transform: rotate(0deg); }}
            50% {{ transform: rotate(5deg); }}
            100% {{ transform: rotate(0deg); }}
        }}

        @media (prefers-reduced-motion: reduce) {{
            .animate-marquee {{
                animation: none;
            }}
        }}
        "#,
        accent = config::ACCENT,
        accent_hover = config::ACCENT_HOVER,
        ink = config::INK,
        marquee = config::MARQUEE_SECONDS,
    )
}

/// Mounts the page-wide stylesheet into `<head>`. Call `unregister` on the
/// returned handle to remove it again.
pub fn register() -> stylist::Result<GlobalStyle> {
    let sheet = Sheet::from_str(&global_css())?;
    GlobalStyle::new(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stylesheet_carries_marquee_and_accent() {
        let css = global_css();
        assert!(css.contains("@keyframes marquee"));
        assert!(css.contains("translateX(-50%)"));
        assert!(css.contains(&format!("marquee {}s linear infinite", config::MARQUEE_SECONDS)));
        assert!(css.contains(config::ACCENT));
    }

    #[test]
    fn stylesheet_parses() {
        assert!(Sheet::from_str(&global_css()).is_ok());
    }
}
