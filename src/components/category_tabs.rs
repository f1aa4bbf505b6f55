use crate::models::menu::Menu;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CategoryTabsProps {
    pub menu: Rc<Menu>,
    pub active_id: String,
    pub on_select: Callback<String>,
}

/// Horizontal list of category buttons; the active one is highlighted
#[function_component(CategoryTabs)]
pub fn category_tabs(props: &CategoryTabsProps) -> Html {
    html! {
        <ul class="menuList">
            {
                props.menu.categories().iter().map(|category| {
                    let active = category.id == props.active_id;
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let id = category.id.clone();
                        Callback::from(move |_: MouseEvent| on_select.emit(id.clone()))
                    };
                    html! {
                        <li
                            key={category.id.clone()}
                            class={if active { "activeMenuItem" } else { "menuItem" }}
                        >
                            <button
                                class={if active { "activeBtn" } else { "buttonMenu" }}
                                {onclick}
                            >
                                {&category.name}
                            </button>
                        </li>
                    }
                }).collect::<Html>()
            }
        </ul>
    }
}
