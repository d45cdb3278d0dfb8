//! The RODENTIA launch catalog.

use crate::facet::{Category, Material, Size};
use crate::product::{NewProduct, ProductId};

pub const HOUSE_IMAGE: &str = "https://cdn.poehali.dev/projects/836c3b4c-5478-400f-b3af-20f4fd2ece0a/files/d58121e2-68dc-448e-81af-53840485b40a.jpg";
pub const TOY_IMAGE: &str = "https://cdn.poehali.dev/projects/836c3b4c-5478-400f-b3af-20f4fd2ece0a/files/8ec55107-5a5b-4132-8354-fe3479540100.jpg";
pub const CERAMIC_IMAGE: &str = "https://cdn.poehali.dev/projects/836c3b4c-5478-400f-b3af-20f4fd2ece0a/files/e3708b99-d488-46d4-9959-9e13647672a9.jpg";

#[allow(clippy::too_many_arguments)]
fn entry(
    id: u32,
    name: &str,
    price: &str,
    category: Category,
    size: Size,
    material: Material,
    image: &str,
    description: &str,
) -> NewProduct {
    NewProduct {
        id: ProductId(id),
        name: name.to_string(),
        price: price.to_string(),
        category,
        size,
        material,
        image: image.to_string(),
        description: description.to_string(),
        featured: false,
    }
}

/// The six launch products, in display order.
pub fn seed_products() -> Vec<NewProduct> {
    use Category::*;
    use Material::*;
    use Size::*;

    vec![
        entry(1, "Элегантный домик", "12 500 ₽", Houses, Medium, Wood, HOUSE_IMAGE,
            "Премиальный домик из натурального дерева"),
        entry(2, "Игрушка Nature", "3 200 ₽", Toys, Small, Wood, TOY_IMAGE,
            "Натуральная деревянная игрушка"),
        entry(3, "Керамическая миска Luxe", "4 800 ₽", Accessories, Small, Ceramic, CERAMIC_IMAGE,
            "Элегантная керамическая миска"),
        entry(4, "Премиум домик XL", "18 900 ₽", Houses, Large, Wood, HOUSE_IMAGE,
            "Просторный домик для крупных грызунов"),
        entry(5, "Набор игрушек", "5 600 ₽", Toys, Medium, Wood, TOY_IMAGE,
            "Набор натуральных деревянных игрушек"),
        entry(6, "Керамический набор", "7 200 ₽", Accessories, Medium, Ceramic, CERAMIC_IMAGE,
            "Набор керамических мисок премиум-класса"),
    ]
}
