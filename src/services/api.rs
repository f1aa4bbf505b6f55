use crate::config::Config;
use crate::models::{
    error::AppError,
    menu::{Dish, Menu, MenuCategory},
};
use serde::{Deserialize, Deserializer};
use serde_json::Value;

// API CONFIGURATION
/// Configuration for the menu API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    menu_url: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Returns the URL the menu is fetched from.
    pub fn menu_url(&self) -> &str {
        &self.menu_url
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    menu_url: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom menu URL (primarily for testing).
    pub fn menu_url(mut self, url: impl Into<String>) -> Self {
        self.menu_url = Some(url.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            menu_url: self
                .menu_url
                .unwrap_or_else(|| Config::MENU_URL.to_string()),
        }
    }
}

// API RESPONSE TYPES
// Missing and null fields both fall back to their defaults.
#[derive(Deserialize, Debug)]
struct ApiRestaurant {
    #[serde(default, deserialize_with = "null_as_default")]
    table_menu_list: Vec<ApiCategory>,
}

#[derive(Deserialize, Debug)]
struct ApiCategory {
    #[serde(default, deserialize_with = "lenient_id")]
    menu_category_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    menu_category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    category_dishes: Vec<ApiDish>,
}

#[derive(Deserialize, Debug)]
struct ApiDish {
    #[serde(default, deserialize_with = "lenient_id")]
    dish_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_price: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_currency: String,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_calories: f64,
    #[serde(default, deserialize_with = "null_as_default")]
    dish_image: String,
    #[serde(
        rename = "dish_Availability",
        default,
        deserialize_with = "null_as_default"
    )]
    dish_availability: bool,
    #[serde(rename = "addonCat", default, deserialize_with = "list_or_empty")]
    addon_cat: Vec<Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Any value that is not an array counts as an empty list.
fn list_or_empty<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => Vec::new(),
    })
}

/// Identifiers are strings in the payload, but numeric ids are accepted too.
fn lenient_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<RawId>::deserialize(deserializer)? {
        Some(RawId::Text(id)) => id,
        Some(RawId::Number(id)) => id.to_string(),
        None => String::new(),
    })
}

impl From<ApiDish> for Dish {
    fn from(d: ApiDish) -> Self {
        Self {
            id: d.dish_id,
            name: d.dish_name,
            price: d.dish_price,
            currency: d.dish_currency,
            description: d.dish_description,
            calories: d.dish_calories,
            image_url: d.dish_image,
            available: d.dish_availability,
            addons: d.addon_cat,
        }
    }
}

impl From<ApiCategory> for MenuCategory {
    fn from(c: ApiCategory) -> Self {
        Self {
            id: c.menu_category_id,
            name: c.menu_category,
            dishes: c.category_dishes.into_iter().map(Into::into).collect(),
        }
    }
}

/// Parses a menu body: a JSON array whose first element describes the restaurant.
///
/// A body that is valid JSON but has no restaurant object at index 0 (an empty
/// array, `[null]`, `{}`) yields an empty menu. Only `null` and non-JSON bodies fail.
pub fn parse_menu(body: &str) -> Result<Menu, AppError> {
    let payload: Value = serde_json::from_str(body)
        .map_err(|e| AppError::ParseError(format!("Failed to parse menu: {e}")))?;

    let restaurant = match payload {
        Value::Null => {
            return Err(AppError::ParseError("Menu body is null".to_string()));
        }
        Value::Array(mut items) if items.first().is_some_and(Value::is_object) => {
            items.swap_remove(0)
        }
        _ => return Ok(Menu::default()),
    };

    let restaurant: ApiRestaurant = serde_json::from_value(restaurant)
        .map_err(|e| AppError::ParseError(format!("Failed to parse restaurant: {e}")))?;

    Ok(Menu::new(
        restaurant
            .table_menu_list
            .into_iter()
            .map(Into::into)
            .collect(),
    ))
}

/// Classifies a completed HTTP exchange.
pub fn parse_menu_response(status: u16, body: &str) -> Result<Menu, AppError> {
    if !(200..=299).contains(&status) {
        return Err(error_for_status(status, body));
    }
    parse_menu(body)
}

/// Creates an error based on HTTP status code.
fn error_for_status(status: u16, body: &str) -> AppError {
    let message = match status {
        400..=499 => format!("Client error: {body}"),
        500..=599 => format!("Server error: {body}"),
        _ => format!("Unexpected status: {body}"),
    };
    AppError::HttpError { status, message }
}

// MENU CLIENT
/// HTTP client for the restaurant menu API.
pub struct MenuClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl MenuClient {
    /// Creates a new client with default configuration.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::default())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issues exactly one GET for the menu.
    pub async fn fetch_menu(&self) -> Result<Menu, AppError> {
        let response = self
            .http
            .get(self.config.menu_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| self.classify_error(e))?;

        parse_menu_response(status, &body)
    }

    /// Converts a reqwest error into an appropriate `AppError`.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::NetworkError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::NetworkError(format!("Request error: {error}"))
        } else if error.is_body() || error.is_decode() {
            AppError::NetworkError(format!("Failed to read response body: {error}"))
        } else {
            AppError::NetworkError(format!("Network error: {error}"))
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches the menu using default configuration.
pub async fn fetch_menu() -> Result<Menu, AppError> {
    MenuClient::new()?.fetch_menu().await
}
