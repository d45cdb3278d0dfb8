//! Server-rendered markup (maud).
//!
//! `page` assembles the whole storefront; each section lives in its own
//! function so tests can render pieces in isolation.

use maud::{html, Markup, DOCTYPE};

use rodentia_catalog::{Catalog, FilterSelection};

use crate::content::{self, BRAND, TAGLINE};

pub mod catalog;
pub mod layout;
pub mod sections;

pub use catalog::selection_href;

/// The full page for one filter selection.
pub fn page(catalog: &Catalog, selection: &FilterSelection) -> Markup {
    let visible = catalog.visible(selection);
    let active = if selection.is_unconstrained() {
        content::HOME
    } else {
        content::CATALOG
    };

    html! {
        (DOCTYPE)
        html lang="ru" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (BRAND) " — " (TAGLINE) }
            }
            body {
                (layout::nav(active))
                main {
                    (sections::hero(catalog))
                    (catalog::catalog_section(selection, &visible))
                    (sections::about())
                    (sections::gallery(catalog))
                    (sections::blog())
                    (sections::contacts())
                }
                (layout::footer())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodentia_catalog::{Category, Material, Size};

    fn render(selection: FilterSelection) -> String {
        let catalog = Catalog::seed().unwrap();
        page(&catalog, &selection).into_string()
    }

    #[test]
    fn page_contains_every_section_in_order() {
        let html = render(FilterSelection::all());
        let positions: Vec<usize> = ["id=\"home\"", "id=\"catalog\"", "id=\"about\"", "id=\"gallery\"", "id=\"blog\"", "id=\"contacts\""]
            .iter()
            .map(|needle| html.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.starts_with("<!DOCTYPE html>"));
    }

    fn active_nav_href(html: &str) -> &str {
        let marker = html.find("aria-current").unwrap();
        let tag_start = html[..marker].rfind("<a").unwrap();
        let tag = &html[tag_start..marker];
        let href_start = tag.find("href=\"").unwrap() + "href=\"".len();
        let href_len = tag[href_start..].find('"').unwrap();
        &tag[href_start..href_start + href_len]
    }

    #[test]
    fn nav_marks_catalog_active_once_a_facet_is_set() {
        let html = render(FilterSelection::all());
        assert_eq!(active_nav_href(&html), "#home");

        let html = render(FilterSelection::all().with_size(Size::Small));
        assert_eq!(html.matches("aria-current=\"true\"").count(), 1);
        assert_eq!(active_nav_href(&html), "#catalog");
    }

    #[test]
    fn unfiltered_page_lists_all_six_cards() {
        let html = render(FilterSelection::all());
        assert_eq!(html.matches("class=\"product-card\"").count(), 6);
    }

    #[test]
    fn filtered_page_lists_only_matching_cards() {
        let html = render(FilterSelection::all().with_category(Category::Houses));
        assert_eq!(html.matches("class=\"product-card\"").count(), 2);
        assert!(html.contains("data-product-id=\"1\""));
        assert!(html.contains("data-product-id=\"4\""));
        assert!(!html.contains("data-product-id=\"2\""));
    }

    #[test]
    fn empty_result_renders_empty_state() {
        let html = render(
            FilterSelection::all()
                .with_category(Category::Toys)
                .with_size(Size::Small)
                .with_material(Material::Ceramic),
        );
        assert_eq!(html.matches("class=\"product-card\"").count(), 0);
        assert!(html.contains(content::CATALOG_EMPTY));
        // The gallery is not filtered.
        assert_eq!(html.matches("class=\"gallery-item\"").count(), 6);
    }
}
