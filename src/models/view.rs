use super::{cart::Cart, menu::Dish};

/// What a dish row offers for changing its cart quantity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuantityControls {
    /// "Not available" label, no buttons
    Unavailable,
    Stepper { quantity: u32 },
}

/// Render-ready description of one dish in the list.
#[derive(Clone, Debug, PartialEq)]
pub struct DishRow {
    pub dish: Dish,
    pub controls: QuantityControls,
    pub customizable: bool,
}

impl DishRow {
    pub fn new(dish: &Dish, cart: &Cart) -> Self {
        let controls = if dish.available {
            QuantityControls::Stepper {
                quantity: cart.quantity_of(&dish.id),
            }
        } else {
            QuantityControls::Unavailable
        };

        Self {
            dish: dish.clone(),
            controls,
            customizable: dish.is_customizable(),
        }
    }
}

pub fn dish_rows(dishes: &[Dish], cart: &Cart) -> Vec<DishRow> {
    dishes.iter().map(|dish| DishRow::new(dish, cart)).collect()
}
