use std::rc::Rc;
use yew::prelude::*;

use crate::models::cart::{Cart, CartAction};
use crate::models::menu::Dish;

impl Reducible for Cart {
    type Action = CartAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match &action {
            // Nothing to remove, keep the same cart so nothing re-renders
            CartAction::Decrement(dish) if self.quantity_of(&dish.id) == 0 => self,
            _ => Rc::new(self.apply(&action)),
        }
    }
}

/// Handle returned by `use_cart` hook
#[derive(Clone, PartialEq)]
pub struct CartHandle {
    pub cart: UseReducerHandle<Cart>,
    pub increment: Callback<Dish>,
    pub decrement: Callback<Dish>,
}

impl CartHandle {
    pub fn total_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }
}

/// Custom hook holding the in-memory cart for one view instance
#[hook]
pub fn use_cart() -> CartHandle {
    let cart = use_reducer(Cart::new);

    let increment = {
        let cart = cart.dispatcher();
        Callback::from(move |dish: Dish| cart.dispatch(CartAction::Increment(dish)))
    };

    let decrement = {
        let cart = cart.dispatcher();
        Callback::from(move |dish: Dish| cart.dispatch(CartAction::Decrement(dish)))
    };

    CartHandle {
        cart,
        increment,
        decrement,
    }
}
