use maud::{html, Markup};

use rodentia_catalog::{Category, FacetValue, FilterSelection};

use crate::content::{
    NavSection, BRAND, COPYRIGHT, FOOTER_COMPANY, FOOTER_COMPANY_TITLE, FOOTER_SOCIAL_TITLE,
    HOME, NAV_SECTIONS, SOCIAL_LINKS, TAGLINE,
};
use crate::views::selection_href;

/// Fixed top navigation; `active` is highlighted.
pub fn nav(active: NavSection) -> Markup {
    html! {
        nav.site-nav {
            div.container {
                a.brand href=(HOME.href()) { (BRAND) }
                ul.nav-links {
                    @for section in &NAV_SECTIONS {
                        li {
                            a.nav-link.active[*section == active]
                                href=(section.href())
                                aria-current=[(*section == active).then_some("true")] {
                                (section.label)
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer() -> Markup {
    html! {
        footer.site-footer {
            div.container {
                div.footer-columns {
                    div {
                        h3 { (BRAND) }
                        p { (TAGLINE) }
                    }
                    div {
                        h4 { (crate::content::CATALOG.label) }
                        ul {
                            @for category in Category::VALUES {
                                li {
                                    a href=(selection_href(&FilterSelection::all().with_category(*category))) {
                                        (category.label())
                                    }
                                }
                            }
                        }
                    }
                    div {
                        h4 { (FOOTER_COMPANY_TITLE) }
                        ul {
                            @for section in &FOOTER_COMPANY {
                                li { a href=(section.href()) { (section.label) } }
                            }
                        }
                    }
                    div {
                        h4 { (FOOTER_SOCIAL_TITLE) }
                        ul.social {
                            @for network in &SOCIAL_LINKS {
                                li.social-link { (network) }
                            }
                        }
                    }
                }
                p.copyright { (COPYRIGHT) }
            }
        }
    }
}
