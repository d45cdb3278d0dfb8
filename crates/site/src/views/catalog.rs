//! Catalog section: facet filter bar and product cards.

use maud::{html, Markup};

use rodentia_catalog::{FacetFilter, FacetValue, FilterSelection, Product};

use crate::content::{CARD_CTA, CATALOG, CATALOG_EMPTY, CATALOG_LEAD};

/// Link that shows the catalog under `selection`. Wildcard facets are left
/// out of the query string.
pub fn selection_href(selection: &FilterSelection) -> String {
    let mut pairs = Vec::with_capacity(3);
    if !selection.category().is_all() {
        pairs.push(format!("category={}", selection.category()));
    }
    if !selection.size().is_all() {
        pairs.push(format!("size={}", selection.size()));
    }
    if !selection.material().is_all() {
        pairs.push(format!("material={}", selection.material()));
    }

    if pairs.is_empty() {
        format!("/{}", CATALOG.href())
    } else {
        format!("/?{}{}", pairs.join("&"), CATALOG.href())
    }
}

pub fn catalog_section(selection: &FilterSelection, visible: &[&Product]) -> Markup {
    html! {
        section.catalog id=(CATALOG.id) {
            div.container {
                header.section-header {
                    h2 { (CATALOG.label) }
                    p.lead { (CATALOG_LEAD) }
                }
                div.filters {
                    (facet_group(selection.category(), |c| selection.with_category(c)))
                    (facet_group(selection.size(), |s| selection.with_size(s)))
                    (facet_group(selection.material(), |m| selection.with_material(m)))
                }
                @if visible.is_empty() {
                    p.empty-state { (CATALOG_EMPTY) }
                } @else {
                    div.product-grid {
                        @for product in visible {
                            (product_card(product))
                        }
                    }
                }
            }
        }
    }
}

/// One row of filter buttons. Each option links to the current selection
/// with only this facet replaced.
fn facet_group<T: FacetValue>(
    current: FacetFilter<T>,
    replace: impl Fn(FacetFilter<T>) -> FilterSelection,
) -> Markup {
    html! {
        div.facet data-facet=(T::FACET) {
            p.facet-title { (T::TITLE) }
            div.facet-options {
                @for option in FacetFilter::<T>::options() {
                    @let active = option == current;
                    a.facet-option.active[active]
                        href=(selection_href(&replace(option)))
                        data-value=(option.as_str())
                        aria-pressed=(if active { "true" } else { "false" }) {
                        (option.label())
                    }
                }
            }
        }
    }
}

fn product_card(product: &Product) -> Markup {
    html! {
        article.product-card data-product-id=(product.id_typed().get()) {
            div.product-image {
                img src=(product.image()) alt=(product.name()) loading="lazy";
            }
            div.product-body {
                div.product-heading {
                    h3 { (product.name()) }
                    span.badge.price { (product.price()) }
                }
                p.product-description { (product.description()) }
                div.product-tags {
                    span.badge.outline { (product.category().badge_label()) }
                    span.badge.outline { (product.material().label()) }
                }
                button.button.outline type="button" { (CARD_CTA) }
            }
        }
    }
}
