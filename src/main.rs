use resto_menu::components::Restaurant;
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <div class="app-container">
            <Restaurant />
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
