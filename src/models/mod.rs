pub mod cart;
pub mod error;
pub mod menu;
pub mod menu_state;
pub mod view;
