use crate::models::{
    menu::Dish,
    view::{DishRow, QuantityControls},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DishItemProps {
    pub row: DishRow,
    pub on_increment: Callback<Dish>,
    pub on_decrement: Callback<Dish>,
}

#[function_component(DishItem)]
pub fn dish_item(props: &DishItemProps) -> Html {
    let dish = &props.row.dish;

    let controls = match props.row.controls {
        QuantityControls::Stepper { quantity } => {
            let on_minus = {
                let cb = props.on_decrement.clone();
                let dish = dish.clone();
                Callback::from(move |_: MouseEvent| cb.emit(dish.clone()))
            };
            let on_plus = {
                let cb = props.on_increment.clone();
                let dish = dish.clone();
                Callback::from(move |_: MouseEvent| cb.emit(dish.clone()))
            };
            html! {
                <div class="buttonDiv">
                    <button class="quntBtn" onclick={on_minus} aria-label="Remove one">{"-"}</button>
                    <p>{quantity.to_string()}</p>
                    <button class="quntBtn" onclick={on_plus} aria-label="Add one">{"+"}</button>
                </div>
            }
        }
        QuantityControls::Unavailable => html! {
            <p class="available">{"Not available"}</p>
        },
    };

    html! {
        <li class="dishItem">
            <div class="leftCont">
                <h1>{&dish.name}</h1>
                <p>{dish.price_label()}</p>
                <p class="desc">{&dish.description}</p>
                {controls}
                if props.row.customizable {
                    <p class="Customization">{"Customizations available"}</p>
                }
            </div>
            <div class="midCont">
                <p class="Calories">{dish.calories_label()}</p>
            </div>
            <div class="imgCont">
                <img class="img" src={dish.image_url.clone()} alt={dish.name.clone()} />
            </div>
        </li>
    }
}
