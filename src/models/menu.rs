use serde_json::Value;

/// A single orderable item on the menu.
#[derive(Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub currency: String,
    pub description: String,
    pub calories: f64,
    pub image_url: String,
    pub available: bool,
    /// Add-on groups, kept opaque; only their presence is rendered.
    pub addons: Vec<Value>,
}

impl Dish {
    pub fn has_addons(&self) -> bool {
        !self.addons.is_empty()
    }

    /// Customisation is only offered for dishes that can be ordered.
    pub fn is_customizable(&self) -> bool {
        self.available && self.has_addons()
    }

    pub fn price_label(&self) -> String {
        format!("{} {}", self.currency, self.price)
    }

    pub fn calories_label(&self) -> String {
        format!("{} calories", self.calories)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MenuCategory {
    pub id: String,
    pub name: String,
    pub dishes: Vec<Dish>,
}

/// Read-only menu of one restaurant, as returned by the menu endpoint.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Menu {
    categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn new(categories: Vec<MenuCategory>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[MenuCategory] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Identifier of the category shown right after loading, empty when the menu has none.
    pub fn first_category_id(&self) -> String {
        self.categories
            .first()
            .map(|c| c.id.clone())
            .unwrap_or_default()
    }

    pub fn category(&self, id: &str) -> Option<&MenuCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn dishes_for(&self, category_id: &str) -> &[Dish] {
        self.category(category_id)
            .map(|c| c.dishes.as_slice())
            .unwrap_or_default()
    }
}
