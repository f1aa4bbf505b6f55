use super::{
    cart::Cart,
    menu::{Dish, Menu},
    view::{DishRow, dish_rows},
};
use std::rc::Rc;

/// Lifecycle of the menu request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewStatus {
    #[default]
    Initial,
    Loading,
    Success,
    Failure,
}

impl ViewStatus {
    pub fn shows_loader(self) -> bool {
        matches!(self, ViewStatus::Loading)
    }

    pub fn shows_menu(self) -> bool {
        matches!(self, ViewStatus::Success)
    }

    pub fn shows_retry(self) -> bool {
        matches!(self, ViewStatus::Failure)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum MenuAction {
    FetchStarted,
    FetchSucceeded(Rc<Menu>),
    FetchFailed,
    SelectCategory(String),
}

/// Everything the restaurant view derives from the menu request and category tabs.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct MenuState {
    status: ViewStatus,
    menu: Option<Rc<Menu>>,
    active_category_id: String,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    /// Returns the menu if the last request succeeded
    pub fn menu(&self) -> Option<&Rc<Menu>> {
        match self.status {
            ViewStatus::Success => self.menu.as_ref(),
            _ => None,
        }
    }

    pub fn active_category_id(&self) -> &str {
        &self.active_category_id
    }

    /// A new request may start from any status except `Loading`.
    pub fn can_fetch(&self) -> bool {
        self.status != ViewStatus::Loading
    }

    /// Rows for the dish list; empty unless the menu branch is shown.
    pub fn visible_dish_rows(&self, cart: &Cart) -> Vec<DishRow> {
        if self.status.shows_menu() {
            dish_rows(self.active_dishes(), cart)
        } else {
            Vec::new()
        }
    }

    /// Dishes of the selected category; empty unless a category with that id exists.
    pub fn active_dishes(&self) -> &[Dish] {
        self.menu()
            .map(|menu| menu.dishes_for(&self.active_category_id))
            .unwrap_or_default()
    }

    /// Computes the next state. Settle actions are only honoured while loading.
    pub fn apply(&self, action: MenuAction) -> Self {
        match action {
            MenuAction::FetchStarted if self.can_fetch() => Self {
                status: ViewStatus::Loading,
                ..self.clone()
            },
            MenuAction::FetchSucceeded(menu) if self.status == ViewStatus::Loading => Self {
                status: ViewStatus::Success,
                active_category_id: menu.first_category_id(),
                menu: Some(menu),
            },
            MenuAction::FetchFailed if self.status == ViewStatus::Loading => Self {
                status: ViewStatus::Failure,
                menu: None,
                active_category_id: String::new(),
            },
            MenuAction::SelectCategory(id) => Self {
                active_category_id: id,
                ..self.clone()
            },
            _ => self.clone(),
        }
    }
}
