//! Multi-facet catalog filter.

use crate::product::Product;
use crate::selection::FilterSelection;

/// Products that pass every facet of `selection`, in catalog order.
///
/// Pure: the input is only borrowed and nothing is cached. Duplicates in the
/// input are kept as-is.
pub fn visible_products<'a>(catalog: &'a [Product], selection: &FilterSelection) -> Vec<&'a Product> {
    let visible: Vec<&Product> = catalog.iter().filter(|p| selection.matches(p)).collect();

    tracing::debug!(
        %selection,
        total = catalog.len(),
        visible = visible.len(),
        "catalog filtered"
    );

    visible
}
