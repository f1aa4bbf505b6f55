use crate::components::{
    category_tabs::CategoryTabs, dish_list::DishList, nav_bar::NavBar, status::Status,
};
use crate::config::Config;
use crate::hooks::{use_cart::use_cart, use_menu::use_menu};
use yew::prelude::*;

/// Menu browser with cart: nav bar always, then the branch for the current status
#[function_component(Restaurant)]
pub fn restaurant() -> Html {
    let menu = use_menu();
    let cart = use_cart();

    let state = &*menu.state;
    let title = Config::RESTAURANT_NAME.to_string();

    html! {
        <>
            <NavBar {title} cart_count={cart.total_quantity()} />

            <Status status={state.status()} on_retry={menu.retry.clone()} />

            if state.status().shows_menu() {
                if let Some(loaded) = state.menu() {
                    <CategoryTabs
                        menu={loaded.clone()}
                        active_id={state.active_category_id().to_string()}
                        on_select={menu.select_category.clone()}
                    />
                }
                <DishList
                    rows={state.visible_dish_rows(&cart.cart)}
                    on_increment={cart.increment.clone()}
                    on_decrement={cart.decrement.clone()}
                />
            }
        </>
    }
}
