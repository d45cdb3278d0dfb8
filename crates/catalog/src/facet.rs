//! Catalog facets: the closed value sets a product is classified by, plus the
//! `all` wildcard used when a facet should not constrain the result.

use core::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use rodentia_core::{DomainError, DomainResult, ValueObject};

/// Text form of the wildcard facet selection.
pub const WILDCARD: &str = "all";

/// Display label of the wildcard facet selection.
pub const WILDCARD_LABEL: &str = "Все";

/// A closed set of values for one facet (category, size or material).
pub trait FacetValue: Copy + Eq + core::hash::Hash + core::fmt::Debug + 'static {
    /// Facet name as used in query strings (`category`, `size`, `material`).
    const FACET: &'static str;

    /// Facet group title shown above the filter buttons.
    const TITLE: &'static str;

    /// Every value of the facet, in display order.
    const VALUES: &'static [Self];

    /// Lowercase wire name.
    fn as_str(self) -> &'static str;

    /// Filter button label.
    fn label(self) -> &'static str;

    /// Case-insensitive parse of a wire name (surrounding whitespace ignored).
    fn parse(s: &str) -> DomainResult<Self> {
        let needle = s.trim();
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| DomainError::validation(format!("unknown {} value: {}", Self::FACET, s)))
    }
}

macro_rules! facet_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $facet:literal, $title:literal,
        { $($variant:ident => ($wire:literal, $label:literal)),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "lowercase")]
        pub enum $name {
            $($variant),+
        }

        impl FacetValue for $name {
            const FACET: &'static str = $facet;
            const TITLE: &'static str = $title;
            const VALUES: &'static [Self] = &[$(Self::$variant),+];

            fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }

            fn label(self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                <Self as FacetValue>::parse(s)
            }
        }
    };
}

facet_enum!(
    /// Product category.
    Category, "category", "Категория",
    {
        Houses => ("houses", "Домики"),
        Toys => ("toys", "Игрушки"),
        Accessories => ("accessories", "Аксессуары"),
    }
);

facet_enum!(
    /// Product size.
    Size, "size", "Размер",
    {
        Small => ("small", "S"),
        Medium => ("medium", "M"),
        Large => ("large", "L"),
    }
);

facet_enum!(
    /// Product material.
    Material, "material", "Материал",
    {
        Wood => ("wood", "Дерево"),
        Ceramic => ("ceramic", "Керамика"),
        Fabric => ("fabric", "Ткань"),
    }
);

impl Category {
    /// Singular label used on a product card badge.
    pub fn badge_label(self) -> &'static str {
        match self {
            Category::Houses => "Домик",
            Category::Toys => "Игрушка",
            Category::Accessories => "Аксессуар",
        }
    }
}

/// Selection for a single facet: either the wildcard or one concrete value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetFilter<T> {
    All,
    Only(T),
}

impl<T> Default for FacetFilter<T> {
    fn default() -> Self {
        FacetFilter::All
    }
}

impl<T: FacetValue> FacetFilter<T> {
    /// Whether a product carrying `value` passes this facet.
    pub fn admits(self, value: T) -> bool {
        match self {
            FacetFilter::All => true,
            FacetFilter::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(self) -> bool {
        matches!(self, FacetFilter::All)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            FacetFilter::All => WILDCARD,
            FacetFilter::Only(v) => v.as_str(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FacetFilter::All => WILDCARD_LABEL,
            FacetFilter::Only(v) => v.label(),
        }
    }

    /// Every selectable option: the wildcard first, then each value.
    pub fn options() -> impl Iterator<Item = Self> {
        core::iter::once(FacetFilter::All).chain(T::VALUES.iter().copied().map(FacetFilter::Only))
    }
}

impl<T: FacetValue> ValueObject for FacetFilter<T> {}

impl<T: FacetValue> From<T> for FacetFilter<T> {
    fn from(value: T) -> Self {
        FacetFilter::Only(value)
    }
}

impl<T: FacetValue> core::fmt::Display for FacetFilter<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl<T: FacetValue> FromStr for FacetFilter<T> {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(WILDCARD) {
            Ok(FacetFilter::All)
        } else {
            T::parse(s).map(FacetFilter::Only)
        }
    }
}

impl<T: FacetValue> Serialize for FacetFilter<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de, T: FacetValue> Deserialize<'de> for FacetFilter<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip_through_from_str() {
        for c in Category::VALUES {
            assert_eq!(c.as_str().parse::<Category>().unwrap(), *c);
        }
        for s in Size::VALUES {
            assert_eq!(s.to_string().parse::<Size>().unwrap(), *s);
        }
        assert_eq!(Material::VALUES, &[Material::Wood, Material::Ceramic, Material::Fabric]);
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(" Houses ".parse::<Category>().unwrap(), Category::Houses);
        assert_eq!("ALL".parse::<FacetFilter<Size>>().unwrap(), FacetFilter::All);
        assert_eq!(
            "Ceramic".parse::<FacetFilter<Material>>().unwrap(),
            FacetFilter::Only(Material::Ceramic)
        );
    }

    #[test]
    fn unknown_values_are_rejected_with_facet_name() {
        let err = "xl".parse::<FacetFilter<Size>>().unwrap_err();
        assert_eq!(err, DomainError::validation("unknown size value: xl"));

        let err = "plastic".parse::<Material>().unwrap_err();
        assert!(err.to_string().contains("material"));
    }

    #[test]
    fn wildcard_admits_everything() {
        for m in Material::VALUES {
            assert!(FacetFilter::<Material>::All.admits(*m));
        }
    }

    #[test]
    fn concrete_value_admits_only_itself() {
        let f = FacetFilter::Only(Size::Small);
        assert!(f.admits(Size::Small));
        assert!(!f.admits(Size::Medium));
        assert!(!f.admits(Size::Large));
    }

    #[test]
    fn options_list_wildcard_first() {
        let opts: Vec<&str> = FacetFilter::<Category>::options().map(|o| o.as_str()).collect();
        assert_eq!(opts, vec!["all", "houses", "toys", "accessories"]);

        let labels: Vec<&str> = FacetFilter::<Size>::options().map(|o| o.label()).collect();
        assert_eq!(labels, vec!["Все", "S", "M", "L"]);
    }

    #[test]
    fn badge_labels_are_singular() {
        assert_eq!(Category::Houses.label(), "Домики");
        assert_eq!(Category::Houses.badge_label(), "Домик");
        assert_eq!(Category::Accessories.badge_label(), "Аксессуар");
    }

    #[test]
    fn serde_uses_wire_names() {
        assert_eq!(serde_json::to_string(&Category::Accessories).unwrap(), "\"accessories\"");
        assert_eq!(serde_json::to_string(&FacetFilter::<Size>::All).unwrap(), "\"all\"");

        let f: FacetFilter<Material> = serde_json::from_str("\"fabric\"").unwrap();
        assert_eq!(f, FacetFilter::Only(Material::Fabric));
        assert!(serde_json::from_str::<FacetFilter<Material>>("\"glass\"").is_err());
    }
}
