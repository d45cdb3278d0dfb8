//! Catalog domain module.
//!
//! Product records, the three catalog facets (category, size, material) and the
//! pure filter that computes the visible subset of a catalog for a given
//! selection. No IO, no HTTP, no storage.

pub mod catalog;
pub mod facet;
pub mod filter;
pub mod product;
pub mod seed;
pub mod selection;

pub use catalog::Catalog;
pub use facet::{Category, FacetFilter, FacetValue, Material, Size, WILDCARD};
pub use filter::visible_products;
pub use product::{NewProduct, Product, ProductId};
pub use selection::FilterSelection;
