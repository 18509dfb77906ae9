//! Copy and imagery shown on the page.

pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }
}

pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub struct Step {
    pub number: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Project {
    pub title: &'static str,
    pub category: &'static str,
    pub image: &'static str,
}

pub struct Testimonial {
    pub quote: &'static str,
    pub author: &'static str,
    pub role: &'static str,
    pub avatar: &'static str,
}

pub struct Plan {
    pub name: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub featured: bool,
}

pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const MENU_ITEMS: &[NavItem] = &[
    NavItem { label: "Work", anchor: "work" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Process", anchor: "process" },
    NavItem { label: "Pricing", anchor: "pricing" },
    NavItem { label: "FAQ", anchor: "faq" },
    NavItem { label: "Contact", anchor: "contact" },
];

pub const FOOTER_LINKS: &[NavItem] = &[
    NavItem { label: "Work", anchor: "work" },
    NavItem { label: "About", anchor: "about" },
    NavItem { label: "Pricing", anchor: "pricing" },
    NavItem { label: "FAQ", anchor: "faq" },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Twitter", href: "#" },
    SocialLink { label: "LinkedIn", href: "#" },
    SocialLink { label: "Dribbble", href: "#" },
];

pub const LEGAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "Privacy", href: "#" },
    SocialLink { label: "Terms", href: "#" },
];

pub const LOGOS: &[&str] = &[
    "Stripe", "Notion", "Slack", "Linear", "Figma", "Vercel", "Webflow", "Framer",
];

pub const SHOWCASE_IMAGES: &[&str] = &[
    "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=800",
    "https://images.unsplash.com/photo-1558591710-4b4a1ae0f04d?w=800",
    "https://images.unsplash.com/photo-1626785774625-ddcddc3445e9?w=800",
];

pub const TEAM_IMAGE: &str = "https://images.unsplash.com/photo-1522071820081-009f0129c71c?w=800";

pub const STATS: &[Stat] = &[
    Stat { value: "100+", label: "Happy Clients" },
    Stat { value: "500+", label: "Projects Done" },
];

pub const STEPS: &[Step] = &[
    Step {
        number: "01",
        title: "Subscribe",
        description: "Pick a plan that fits your needs. No contracts, cancel anytime.",
    },
    Step {
        number: "02",
        title: "Request",
        description: "Submit unlimited design requests through our simple dashboard.",
    },
    Step {
        number: "03",
        title: "Receive",
        description: "Get your designs delivered in 48 hours on average. Revise until perfect.",
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Fintech Dashboard",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
    },
    Project {
        title: "E-commerce Rebrand",
        category: "Branding",
        image: "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=800",
    },
    Project {
        title: "Health App UI",
        category: "Mobile App",
        image: "https://images.unsplash.com/photo-1576091160550-2173dba999ef?w=800",
    },
    Project {
        title: "SaaS Landing Page",
        category: "Web Design",
        image: "https://images.unsplash.com/photo-1467232004584-a241de8bcf5d?w=800",
    },
];

/// Every testimonial is shown with this many stars.
pub const TESTIMONIAL_STARS: usize = 5;

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        quote: "Hanzo transformed our brand completely. The subscription model is genius - we get unlimited revisions and the quality is always top-notch.",
        author: "Sarah Chen",
        role: "CEO, TechFlow",
        avatar: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100",
    },
    Testimonial {
        quote: "Best investment we've made. The turnaround time is incredible and the designs consistently exceed our expectations.",
        author: "Marcus Rodriguez",
        role: "Founder, Skyline",
        avatar: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100",
    },
    Testimonial {
        quote: "Finally, a design service that understands startups. Fast, flexible, and affordable. Highly recommended!",
        author: "Emily Watson",
        role: "CMO, GrowthLab",
        avatar: "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100",
    },
];

pub const PLANS: &[Plan] = &[
    Plan {
        name: "Starter",
        price: "$1,995",
        period: "/month",
        description: "Perfect for startups and small teams",
        features: &[
            "One request at a time",
            "Average 48h delivery",
            "Unlimited revisions",
            "Pause or cancel anytime",
        ],
        featured: false,
    },
    Plan {
        name: "Pro",
        price: "$3,995",
        period: "/month",
        description: "For growing companies with more needs",
        features: &[
            "Two requests at a time",
            "Average 24h delivery",
            "Unlimited revisions",
            "Priority support",
            "Pause or cancel anytime",
        ],
        featured: true,
    },
    Plan {
        name: "Enterprise",
        price: "Custom",
        period: "",
        description: "For large teams with custom needs",
        features: &[
            "Unlimited requests",
            "Same-day delivery",
            "Dedicated designer",
            "24/7 support",
            "Custom integrations",
        ],
        featured: false,
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        question: "How does the subscription work?",
        answer: "Simply choose a plan and submit as many design requests as you need. We work on them one at a time (or two for Pro) and deliver within 48 hours on average.",
    },
    Faq {
        question: "What if I don't like the design?",
        answer: "No worries! We offer unlimited revisions. We'll keep iterating until you're 100% satisfied with the result.",
    },
    Faq {
        question: "Can I really pause or cancel anytime?",
        answer: "Yes! There are no contracts or commitments. Pause when you don't need design work, and resume when you do.",
    },
    Faq {
        question: "What types of design do you cover?",
        answer: "We handle everything from web and mobile UI design, branding, social media graphics, presentations, and more.",
    },
    Faq {
        question: "Who are the designers?",
        answer: "Our team consists of senior designers with 5+ years of experience working with startups and Fortune 500 companies.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn exactly_one_plan_is_featured() {
        assert_eq!(PLANS.iter().filter(|plan| plan.featured).count(), 1);
    }

    #[test]
    fn every_faq_has_an_answer() {
        assert!(FAQS.iter().all(|faq| !faq.question.is_empty() && !faq.answer.is_empty()));
    }

    #[test]
    fn records_are_keyed_uniquely() {
        let titles: HashSet<_> = PROJECTS.iter().map(|p| p.title).collect();
        assert_eq!(titles.len(), PROJECTS.len());
        let authors: HashSet<_> = TESTIMONIALS.iter().map(|t| t.author).collect();
        assert_eq!(authors.len(), TESTIMONIALS.len());
        let plans: HashSet<_> = PLANS.iter().map(|p| p.name).collect();
        assert_eq!(plans.len(), PLANS.len());
    }

    #[test]
    fn steps_are_numbered_in_order() {
        for (i, step) in STEPS.iter().enumerate() {
            assert_eq!(step.number, format!("{:02}", i + 1));
        }
    }

    #[test]
    fn footer_links_are_a_subset_of_the_menu() {
        let menu: HashSet<_> = MENU_ITEMS.iter().map(|item| item.anchor).collect();
        assert!(FOOTER_LINKS.iter().all(|link| menu.contains(link.anchor)));
    }

    #[test]
    fn nav_href_is_a_fragment() {
        assert_eq!(MENU_ITEMS[0].href(), "#work");
    }
}
