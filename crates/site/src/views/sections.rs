//! Static sections: hero, about, gallery, blog, contacts.

use maud::{html, Markup};

use rodentia_catalog::Catalog;

use crate::content::{
    format_ru_date, ABOUT, ABOUT_IMAGE, ABOUT_PARAGRAPHS, ABOUT_STATS, BLOG, BLOG_CTA, BLOG_LEAD,
    BLOG_POSTS, CATALOG, CONTACTS, CONTACTS_LEAD, CONTACT_FORM, CONTACT_ITEMS, CONTACT_SUBMIT,
    GALLERY, GALLERY_LEAD, GALLERY_SIZE, HERO, HOME,
};

pub fn hero(catalog: &Catalog) -> Markup {
    let featured: Vec<_> = catalog.featured().collect();

    html! {
        section.hero id=(HOME.id) {
            div.container {
                span.badge { (HERO.badge) }
                h1 { (HERO.headline[0]) br; (HERO.headline[1]) }
                p.lead { (HERO.lead) }
                div.actions {
                    a.button href=(CATALOG.href()) { (HERO.primary_cta) }
                    a.button.outline href=(ABOUT.href()) { (HERO.secondary_cta) }
                }
                @if !featured.is_empty() {
                    ul.featured {
                        @for product in &featured {
                            li.featured-item data-featured-id=(product.id_typed().get()) {
                                img src=(product.image()) alt=(product.name());
                                span { (product.name()) }
                                span.badge.price { (product.price()) }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn about() -> Markup {
    html! {
        section.about id=(ABOUT.id) {
            div.container {
                div.about-text {
                    h2 { (ABOUT.label) }
                    @for paragraph in &ABOUT_PARAGRAPHS {
                        p { (paragraph) }
                    }
                    dl.stats {
                        @for stat in &ABOUT_STATS {
                            div.stat {
                                dt { (stat.value) }
                                dd { (stat.caption) }
                            }
                        }
                    }
                }
                div.about-image {
                    img src=(ABOUT_IMAGE) alt=(ABOUT.label);
                }
            }
        }
    }
}

/// Unfiltered: always the first products of the catalog.
pub fn gallery(catalog: &Catalog) -> Markup {
    html! {
        section.gallery id=(GALLERY.id) {
            div.container {
                header.section-header {
                    h2 { (GALLERY.label) }
                    p.lead { (GALLERY_LEAD) }
                }
                div.gallery-grid {
                    @for product in catalog.gallery(GALLERY_SIZE) {
                        figure.gallery-item {
                            img src=(product.image()) alt=(product.name()) loading="lazy";
                        }
                    }
                }
            }
        }
    }
}

pub fn blog() -> Markup {
    html! {
        section.blog id=(BLOG.id) {
            div.container {
                header.section-header {
                    h2 { (BLOG.label) }
                    p.lead { (BLOG_LEAD) }
                }
                div.blog-grid {
                    @for post in &BLOG_POSTS {
                        article.blog-card {
                            time datetime=(post.published.to_string()) { (format_ru_date(post.published)) }
                            h3 { (post.title) }
                            p { (post.excerpt) }
                            span.link { (BLOG_CTA) " →" }
                        }
                    }
                }
            }
        }
    }
}

/// Contact details and a form with no submit handler.
pub fn contacts() -> Markup {
    html! {
        section.contacts id=(CONTACTS.id) {
            div.container {
                header.section-header {
                    h2 { (CONTACTS.label) }
                    p.lead { (CONTACTS_LEAD) }
                }
                div.contacts-grid {
                    ul.contact-items {
                        @for item in &CONTACT_ITEMS {
                            li.contact-item data-icon=(item.icon) {
                                div.contact-title { (item.title) }
                                div.contact-value { (item.value) }
                            }
                        }
                    }
                    form.contact-form {
                        @for field in &CONTACT_FORM {
                            div.field {
                                label for=(field.name) { (field.label) }
                                @if let Some(input_type) = field.input_type {
                                    input id=(field.name) name=(field.name) type=(input_type) placeholder=(field.placeholder);
                                } @else {
                                    textarea id=(field.name) name=(field.name) rows="4" placeholder=(field.placeholder) {}
                                }
                            }
                        }
                        button.button type="button" { (CONTACT_SUBMIT) }
                    }
                }
            }
        }
    }
}
