use super::menu::Dish;

#[derive(Clone, Debug, PartialEq)]
pub struct CartLine {
    pub dish: Dish,
    pub quantity: u32,
}

/// Ordered cart lines keyed by dish id.
///
/// A line never holds a quantity of zero: decrementing the last unit removes it.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    fn position(&self, dish_id: &str) -> Option<usize> {
        self.lines.iter().position(|line| line.dish.id == dish_id)
    }

    pub fn quantity_of(&self, dish_id: &str) -> u32 {
        self.position(dish_id)
            .map_or(0, |idx| self.lines[idx].quantity)
    }

    /// Sum of all line quantities, shown next to the cart icon.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn increment(&mut self, dish: &Dish) {
        match self.position(&dish.id) {
            Some(idx) => self.lines[idx].quantity += 1,
            None => self.lines.push(CartLine {
                dish: dish.clone(),
                quantity: 1,
            }),
        }
    }

    /// Returns `false` when the dish was not in the cart and nothing changed.
    pub fn decrement(&mut self, dish: &Dish) -> bool {
        let Some(idx) = self.position(&dish.id) else {
            return false;
        };

        if self.lines[idx].quantity <= 1 {
            // `remove` keeps the remaining lines in order
            self.lines.remove(idx);
        } else {
            self.lines[idx].quantity -= 1;
        }
        true
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    Increment(Dish),
    Decrement(Dish),
}

impl Cart {
    /// Applies an action and returns the next cart, leaving `self` untouched.
    pub fn apply(&self, action: &CartAction) -> Self {
        let mut next = self.clone();
        match action {
            CartAction::Increment(dish) => next.increment(dish),
            CartAction::Decrement(dish) => {
                next.decrement(dish);
            }
        }
        next
    }
}
