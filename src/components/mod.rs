pub mod category_tabs;
pub mod dish_item;
pub mod dish_list;
pub mod nav_bar;
pub mod restaurant;
pub mod status;

pub use restaurant::Restaurant;
