use core::str::FromStr;

use serde::{Deserialize, Serialize};

use rodentia_core::{DomainError, DomainResult, Entity};

use crate::facet::{Category, Material, Size};

/// Product identifier, unique within a [`crate::Catalog`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u32>()
            .map(Self)
            .map_err(|e| DomainError::validation(format!("invalid product id {s:?}: {e}")))
    }
}

/// Description of a product to be placed in a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProduct {
    pub id: ProductId,
    pub name: String,
    /// Pre-formatted price text (e.g. `"12 500 ₽"`).
    pub price: String,
    pub category: Category,
    pub size: Size,
    pub material: Material,
    pub image: String,
    pub description: String,
    #[serde(default)]
    pub featured: bool,
}

/// Read-only catalog record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: String,
    category: Category,
    size: Size,
    material: Material,
    image: String,
    description: String,
    featured: bool,
}

impl Product {
    /// Validate a product description. Name, price and image must be non-blank;
    /// the description may be empty.
    pub fn new(new: NewProduct) -> DomainResult<Self> {
        if new.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if new.price.trim().is_empty() {
            return Err(DomainError::validation("price cannot be empty"));
        }
        if new.image.trim().is_empty() {
            return Err(DomainError::validation("image cannot be empty"));
        }

        Ok(Self {
            id: new.id,
            name: new.name,
            price: new.price,
            category: new.category,
            size: new.size,
            material: new.material,
            image: new.image,
            description: new.description,
            featured: new.featured,
        })
    }

    pub fn id_typed(&self) -> ProductId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> &str {
        &self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn image(&self) -> &str {
        &self.image
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Promoted in the hero section.
    pub fn is_featured(&self) -> bool {
        self.featured
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

impl TryFrom<NewProduct> for Product {
    type Error = DomainError;

    fn try_from(value: NewProduct) -> Result<Self, Self::Error> {
        Product::new(value)
    }
}
