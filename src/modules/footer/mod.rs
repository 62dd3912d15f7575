//! Site footer: contact address, social link and in-page navigation.

use maud::{html, Markup};

pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const CONTACT_EMAIL: &str = "PixelsNPetals@Gmail.com";

pub const SOCIAL_LINK: NavLink = NavLink {
    label: "Instagram",
    href: "https://www.instagram.com/pixels.petals/",
};

pub const NAV_LINKS: [NavLink; 4] = [
    NavLink {
        label: "Home",
        href: "#home",
    },
    NavLink {
        label: "About",
        href: "#about",
    },
    NavLink {
        label: "Gallery",
        href: "#gallery",
    },
    NavLink {
        label: "Contact",
        href: "#footer",
    },
];

pub fn render() -> Markup {
    html! {
        div class="footer-container" id="footer" {
            h2 { (CONTACT_EMAIL) }
            a href=(SOCIAL_LINK.href)
                target="_blank"
                rel="noopener noreferrer"
                class="icon"
                aria-label=(SOCIAL_LINK.label) {
                (SOCIAL_LINK.label)
            }
            div class="nav-container" {
                @for link in NAV_LINKS.iter() {
                    a href=(link.href) class="nav-link" { (link.label) }
                }
            }
        }
    }
}
