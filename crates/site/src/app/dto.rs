use serde::{Deserialize, Serialize};

use rodentia_catalog::{
    Category, FacetFilter, FacetValue, FilterSelection, Material, Product, Size,
};
use rodentia_core::{DomainResult, Entity};

/// Raw facet query parameters (`?category=&size=&material=`).
///
/// Kept as text so that out-of-domain values surface as `invalid_facet`
/// instead of a generic extractor rejection.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    pub category: Option<String>,
    pub size: Option<String>,
    pub material: Option<String>,
}

impl SelectionQuery {
    pub fn to_selection(&self) -> DomainResult<FilterSelection> {
        FilterSelection::parse(
            self.category.as_deref(),
            self.size.as_deref(),
            self.material.as_deref(),
        )
    }
}

#[derive(Debug, Serialize)]
pub struct ProductDto {
    pub id: u32,
    pub name: String,
    pub price: String,
    pub category: Category,
    pub size: Size,
    pub material: Material,
    pub image: String,
    pub description: String,
    pub featured: bool,
}

impl From<&Product> for ProductDto {
    fn from(p: &Product) -> Self {
        Self {
            id: p.id().get(),
            name: p.name().to_string(),
            price: p.price().to_string(),
            category: p.category(),
            size: p.size(),
            material: p.material(),
            image: p.image().to_string(),
            description: p.description().to_string(),
            featured: p.is_featured(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ProductListResponse {
    pub selection: FilterSelection,
    pub count: usize,
    pub products: Vec<ProductDto>,
}

#[derive(Debug, Serialize)]
pub struct FacetOptionDto {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct FacetDto {
    pub title: &'static str,
    pub options: Vec<FacetOptionDto>,
}

impl FacetDto {
    pub fn of<T: FacetValue>() -> Self {
        Self {
            title: T::TITLE,
            options: FacetFilter::<T>::options()
                .map(|o| FacetOptionDto {
                    value: o.as_str(),
                    label: o.label(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct FacetsResponse {
    pub category: FacetDto,
    pub size: FacetDto,
    pub material: FacetDto,
}

impl FacetsResponse {
    pub fn build() -> Self {
        Self {
            category: FacetDto::of::<Category>(),
            size: FacetDto::of::<Size>(),
            material: FacetDto::of::<Material>(),
        }
    }
}
