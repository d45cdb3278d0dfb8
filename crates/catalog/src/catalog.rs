use std::collections::HashSet;

use rodentia_core::{DomainError, DomainResult, Entity};

use crate::filter::visible_products;
use crate::product::{NewProduct, Product, ProductId};
use crate::seed::seed_products;
use crate::selection::FilterSelection;

/// Immutable, ordered product collection with unique ids.
///
/// The collection is handed to the site at start-up and never changes
/// afterwards; every query borrows from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build a catalog, keeping the given order. Fails on duplicate ids.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if !seen.insert(*p.id()) {
                return Err(DomainError::invariant(format!("duplicate product id {}", p.id())));
            }
        }
        Ok(Self { products })
    }

    /// Validate and build from product descriptions.
    pub fn from_new(products: impl IntoIterator<Item = NewProduct>) -> DomainResult<Self> {
        let products = products
            .into_iter()
            .map(Product::new)
            .collect::<DomainResult<Vec<_>>>()?;
        Self::new(products)
    }

    /// The launch catalog.
    pub fn seed() -> DomainResult<Self> {
        Self::from_new(seed_products())
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: ProductId) -> DomainResult<&Product> {
        self.products
            .iter()
            .find(|p| *p.id() == id)
            .ok_or_else(DomainError::not_found)
    }

    pub fn visible(&self, selection: &FilterSelection) -> Vec<&Product> {
        visible_products(&self.products, selection)
    }

    /// Products promoted in the hero section, in catalog order.
    pub fn featured(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_featured())
    }

    /// The first `limit` products.
    pub fn gallery(&self, limit: usize) -> &[Product] {
        &self.products[..limit.min(self.products.len())]
    }
}
