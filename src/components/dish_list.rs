use crate::components::dish_item::DishItem;
use crate::models::{menu::Dish, view::DishRow};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DishListProps {
    pub rows: Vec<DishRow>,
    pub on_increment: Callback<Dish>,
    pub on_decrement: Callback<Dish>,
}

#[function_component(DishList)]
pub fn dish_list(props: &DishListProps) -> Html {
    html! {
        <ul class="dishList">
            {
                props.rows.iter().map(|row| html! {
                    <DishItem
                        key={row.dish.id.clone()}
                        row={row.clone()}
                        on_increment={props.on_increment.clone()}
                        on_decrement={props.on_decrement.clone()}
                    />
                }).collect::<Html>()
            }
        </ul>
    }
}
