use crate::models::menu_state::ViewStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusProps {
    pub status: ViewStatus,
    pub on_retry: Callback<()>,
}

/// Loader and failure branches; renders nothing for the other statuses.
#[function_component(Status)]
pub fn status(props: &StatusProps) -> Html {
    if props.status.shows_loader() {
        html! {
            <div class="products-loader-container" data-testid="loader">
                <progress class="loader" aria-label="Loading menu"></progress>
            </div>
        }
    } else if props.status.shows_retry() {
        let onclick = props.on_retry.reform(|_: MouseEvent| ());
        html! {
            <div class="error">
                <h2>{"Something went wrong"}</h2>
                <button class="retry-button" {onclick}>{"Retry"}</button>
            </div>
        }
    } else {
        html! {}
    }
}
