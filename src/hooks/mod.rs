pub mod use_cart;
pub mod use_menu;
