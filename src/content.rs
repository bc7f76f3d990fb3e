//! Static portfolio content
//!
//! Every section is one fade-in element. Its height in rows is the heading
//! plus its body lines.

use crate::state::{NavLink, Page};

/// Blank rows between sections
pub const SECTION_GAP: u16 = 1;

/// Page the home call-to-action leads to
pub const CTA_TARGET: &str = "contact";

pub const CTA_LABEL: &str = "Let's work together";

pub struct Section {
    pub heading: &'static str,
    pub body: &'static [&'static str],
}

impl Section {
    pub fn height(&self) -> u16 {
        1 + self.body.len() as u16
    }
}

pub struct PageContent {
    pub key: &'static str,
    pub nav_label: &'static str,
    pub sections: &'static [Section],
}

pub const BRAND: &str = "Mohamed Ibrahim";

pub const PAGES: &[PageContent] = &[
    PageContent {
        key: "home",
        nav_label: "Home",
        sections: &[
            Section {
                heading: "Hi, I'm Mohamed Ibrahim",
                body: &[
                    "Digital designer & developer crafting clean, fast and",
                    "thoughtful experiences for the web and beyond.",
                ],
            },
            Section {
                heading: "What I do",
                body: &[
                    "Brand identities, product interfaces and the code",
                    "that brings them to life.",
                ],
            },
            Section {
                heading: "Currently",
                body: &["Available for freelance projects and collaborations."],
            },
        ],
    },
    PageContent {
        key: "about",
        nav_label: "About",
        sections: &[
            Section {
                heading: "About me",
                body: &[
                    "I started out sketching interfaces on paper and never",
                    "stopped. Today I design and build end to end, from the",
                    "first wireframe to the production deploy.",
                ],
            },
            Section {
                heading: "Experience",
                body: &[
                    "8+ years across agencies, startups and in-house teams.",
                    "120+ shipped projects for clients on four continents.",
                ],
            },
            Section {
                heading: "Toolbox",
                body: &[
                    "Figma · Illustrator · After Effects",
                    "HTML · CSS · JavaScript · Rust",
                ],
            },
            Section {
                heading: "Outside work",
                body: &["Photography, long walks and too much coffee."],
            },
        ],
    },
    PageContent {
        key: "services",
        nav_label: "Services",
        sections: &[
            Section {
                heading: "Brand Identity",
                body: &[
                    "Logos, type systems and guidelines that hold together",
                    "from business cards to billboards.",
                ],
            },
            Section {
                heading: "UI / UX Design",
                body: &[
                    "Research-led product design, prototypes and design",
                    "systems your developers will thank you for.",
                ],
            },
            Section {
                heading: "Web Development",
                body: &[
                    "Fast, accessible sites and web apps built with modern",
                    "tooling and a bias for simplicity.",
                ],
            },
            Section {
                heading: "Motion Design",
                body: &["Micro-interactions and animated stories that explain."],
            },
        ],
    },
    PageContent {
        key: "portfolio",
        nav_label: "Portfolio",
        sections: &[
            Section {
                heading: "Northwind Coffee",
                body: &["Rebrand and e-commerce storefront.", "Branding · Web"],
            },
            Section {
                heading: "Atlas Finance",
                body: &["Dashboard redesign for a budgeting app.", "UI/UX"],
            },
            Section {
                heading: "Lumen Studio",
                body: &["Portfolio site with animated case studies.", "Web · Motion"],
            },
            Section {
                heading: "Harbor Health",
                body: &["Patient onboarding flow and design system.", "UI/UX"],
            },
            Section {
                heading: "Fieldnotes",
                body: &["Editorial magazine layout and type system.", "Branding"],
            },
        ],
    },
    PageContent {
        key: "contact",
        nav_label: "Contact",
        sections: &[
            Section {
                heading: "Get in touch",
                body: &[
                    "Have a project in mind or just want to say hello?",
                    "Fill in the form and I'll get back to you shortly.",
                ],
            },
            Section {
                heading: "Email",
                body: &["hello@mohamedibrahim.design"],
            },
            Section {
                heading: "Based in",
                body: &["Cairo, Egypt · working worldwide"],
            },
        ],
    },
];

/// Content for a page key
pub fn page_content(key: &str) -> Option<&'static PageContent> {
    PAGES.iter().find(|p| p.key == key)
}

/// Build the page models for the static content
pub fn build_pages() -> Vec<Page> {
    PAGES
        .iter()
        .map(|content| {
            let heights: Vec<u16> = content.sections.iter().map(Section::height).collect();
            Page::new(content.key, &heights, SECTION_GAP)
        })
        .collect()
}

/// One nav link per page, in page order
pub fn build_nav_links() -> Vec<NavLink> {
    PAGES
        .iter()
        .map(|content| NavLink::new(content.key, content.nav_label))
        .collect()
}
