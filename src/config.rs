/// Configuration constants for the application
pub struct Config;

impl Config {
    /// Endpoint serving the restaurant menu
    pub const MENU_URL: &'static str =
        "https://apis2.ccbp.in/restaurant-app/restaurant-menu-list-details";

    /// Title shown in the nav bar
    pub const RESTAURANT_NAME: &'static str = "UNI Resto Cafe";
}
