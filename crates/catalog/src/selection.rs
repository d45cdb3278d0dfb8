use serde::{Deserialize, Serialize};

use rodentia_core::{DomainResult, ValueObject};

use crate::facet::{Category, FacetFilter, Material, Size};
use crate::product::Product;

/// The three facet selections, as one immutable value.
///
/// Changing a facet returns a new selection; the other two facets are carried
/// over unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct FilterSelection {
    #[serde(default)]
    category: FacetFilter<Category>,
    #[serde(default)]
    size: FacetFilter<Size>,
    #[serde(default)]
    material: FacetFilter<Material>,
}

impl ValueObject for FilterSelection {}

impl FilterSelection {
    pub fn new(
        category: FacetFilter<Category>,
        size: FacetFilter<Size>,
        material: FacetFilter<Material>,
    ) -> Self {
        Self {
            category,
            size,
            material,
        }
    }

    /// Wildcard on every facet.
    pub fn all() -> Self {
        Self::default()
    }

    /// Parse raw facet texts. A missing or blank facet means `all`.
    pub fn parse(
        category: Option<&str>,
        size: Option<&str>,
        material: Option<&str>,
    ) -> DomainResult<Self> {
        fn facet<T: crate::FacetValue>(raw: Option<&str>) -> DomainResult<FacetFilter<T>> {
            match raw.map(str::trim) {
                None | Some("") => Ok(FacetFilter::All),
                Some(s) => s.parse(),
            }
        }

        Ok(Self {
            category: facet(category)?,
            size: facet(size)?,
            material: facet(material)?,
        })
    }

    pub fn category(&self) -> FacetFilter<Category> {
        self.category
    }

    pub fn size(&self) -> FacetFilter<Size> {
        self.size
    }

    pub fn material(&self) -> FacetFilter<Material> {
        self.material
    }

    pub fn with_category(self, category: impl Into<FacetFilter<Category>>) -> Self {
        Self {
            category: category.into(),
            ..self
        }
    }

    pub fn with_size(self, size: impl Into<FacetFilter<Size>>) -> Self {
        Self {
            size: size.into(),
            ..self
        }
    }

    pub fn with_material(self, material: impl Into<FacetFilter<Material>>) -> Self {
        Self {
            material: material.into(),
            ..self
        }
    }

    /// True when no facet constrains the result.
    pub fn is_unconstrained(&self) -> bool {
        self.category.is_all() && self.size.is_all() && self.material.is_all()
    }

    /// Conjunction of the three per-facet checks.
    pub fn matches(&self, product: &Product) -> bool {
        self.category.admits(product.category())
            && self.size.admits(product.size())
            && self.material.admits(product.material())
    }
}

impl core::fmt::Display for FilterSelection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "category={} size={} material={}",
            self.category, self.size, self.material
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rodentia_core::DomainError;

    #[test]
    fn default_is_all_wildcards() {
        let s = FilterSelection::default();
        assert_eq!(s, FilterSelection::all());
        assert!(s.is_unconstrained());
        assert_eq!(s.to_string(), "category=all size=all material=all");
    }

    #[test]
    fn changing_one_facet_leaves_the_others() {
        let s = FilterSelection::all()
            .with_category(Category::Toys)
            .with_material(Material::Wood);

        let changed = s.with_size(Size::Small);
        assert_eq!(changed.category(), FacetFilter::Only(Category::Toys));
        assert_eq!(changed.material(), FacetFilter::Only(Material::Wood));
        assert_eq!(changed.size(), FacetFilter::Only(Size::Small));

        // `s` itself is unchanged.
        assert_eq!(s.size(), FacetFilter::All);

        let reset = changed.with_category(FacetFilter::All);
        assert_eq!(reset.size(), FacetFilter::Only(Size::Small));
        assert!(!reset.is_unconstrained());
    }

    #[test]
    fn parse_treats_missing_and_blank_as_all() {
        let s = FilterSelection::parse(None, Some(""), Some("  ")).unwrap();
        assert!(s.is_unconstrained());

        let s = FilterSelection::parse(Some("houses"), None, Some("Wood")).unwrap();
        assert_eq!(
            s,
            FilterSelection::all()
                .with_category(Category::Houses)
                .with_material(Material::Wood)
        );
    }

    #[test]
    fn parse_rejects_out_of_domain_values() {
        let err = FilterSelection::parse(Some("houses"), Some("huge"), None).unwrap_err();
        assert_eq!(err, DomainError::validation("unknown size value: huge"));
    }

    #[test]
    fn serde_shape_uses_facet_names() {
        let s = FilterSelection::all().with_size(Size::Medium);
        let v = serde_json::to_value(s).unwrap();
        assert_eq!(
            v,
            serde_json::json!({"category": "all", "size": "medium", "material": "all"})
        );

        let back: FilterSelection = serde_json::from_str(r#"{"material": "ceramic"}"#).unwrap();
        assert_eq!(back, FilterSelection::all().with_material(Material::Ceramic));
    }
}
