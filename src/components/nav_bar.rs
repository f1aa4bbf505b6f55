use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NavBarProps {
    pub title: String,
    pub cart_count: u32,
}

#[function_component(NavBar)]
pub fn nav_bar(props: &NavBarProps) -> Html {
    html! {
        <nav class="navBar">
            <h1>{&props.title}</h1>
            <div class="innerNav">
                <p class="myOrder">{"My Orders"}</p>
                <div class="cart" aria-label="Items in cart">
                    <p class="cartCount">{props.cart_count.to_string()}</p>
                </div>
            </div>
        </nav>
    }
}
