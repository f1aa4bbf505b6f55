use std::rc::Rc;
use yew::prelude::*;

use crate::models::menu_state::{MenuAction, MenuState};
use crate::services::api::fetch_menu;
use crate::utils::fetch_tracker::FetchTracker;
use wasm_bindgen_futures::spawn_local;

impl Reducible for MenuState {
    type Action = MenuAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = self.apply(action);
        if next == *self { self } else { Rc::new(next) }
    }
}

/// Handle returned by `use_menu` hook
#[derive(Clone, PartialEq)]
pub struct MenuHandle {
    pub state: UseReducerHandle<MenuState>,
    /// Re-runs the request; ignored while one is in flight
    pub retry: Callback<()>,
    pub select_category: Callback<String>,
}

/// Custom hook that loads the menu on mount and exposes the view state
#[hook]
pub fn use_menu() -> MenuHandle {
    let state = use_reducer(MenuState::new);
    let tracker = use_mut_ref(FetchTracker::new);

    let fetch = {
        let state = state.dispatcher();
        let tracker = tracker.clone();
        Callback::from(move |()| {
            let Some(generation) = tracker.borrow_mut().begin() else {
                gloo::console::debug!("Menu request already in flight, ignoring retry");
                return;
            };
            state.dispatch(MenuAction::FetchStarted);

            let state = state.clone();
            let tracker = tracker.clone();
            spawn_local(async move {
                let result = fetch_menu().await;

                if !tracker.borrow_mut().settle(generation) {
                    gloo::console::debug!(&format!(
                        "Dropping superseded menu response (request {generation})"
                    ));
                    return;
                }

                match result {
                    Ok(menu) => {
                        if menu.is_empty() {
                            gloo::console::warn!("Menu response contained no categories");
                        }
                        gloo::console::log!(&format!(
                            "Loaded menu with {} categories",
                            menu.categories().len()
                        ));
                        state.dispatch(MenuAction::FetchSucceeded(Rc::new(menu)));
                    }
                    Err(e) => {
                        gloo::console::error!(&format!("Failed to load menu: {e}"));
                        state.dispatch(MenuAction::FetchFailed);
                    }
                }
            });
        })
    };

    // Effect: fetch once on mount, drop late responses after unmount
    {
        let fetch = fetch.clone();
        let tracker = tracker.clone();
        use_effect_with((), move |_| {
            fetch.emit(());
            move || tracker.borrow_mut().close()
        });
    }

    let select_category = {
        let state = state.dispatcher();
        Callback::from(move |id: String| state.dispatch(MenuAction::SelectCategory(id)))
    };

    MenuHandle {
        state,
        retry: fetch,
        select_category,
    }
}
