#[cfg(test)]
mod tests {
    use resto_menu::models::{
        cart::{Cart, CartAction},
        error::AppError,
        menu::{Dish, Menu, MenuCategory},
        menu_state::{MenuAction, MenuState, ViewStatus},
        view::{DishRow, QuantityControls},
    };
    use resto_menu::services::api::parse_menu_response;
    use serde_json::json;
    use std::rc::Rc;
    use yew::Reducible;

    // Helper function to create a dish
    fn dish(id: &str, available: bool, addons: usize) -> Dish {
        Dish {
            id: id.to_string(),
            name: format!("Dish {id}"),
            price: 12.5,
            currency: "SAR".to_string(),
            description: "Tasty".to_string(),
            calories: 150.0,
            image_url: format!("https://example.com/{id}.jpg"),
            available,
            addons: (0..addons).map(|i| json!({ "addon_id": i })).collect(),
        }
    }

    // Menu with categories A and B
    fn create_test_menu() -> Rc<Menu> {
        Rc::new(Menu::new(vec![
            MenuCategory {
                id: "A".to_string(),
                name: "Salads".to_string(),
                dishes: vec![dish("a1", true, 0), dish("a2", false, 1)],
            },
            MenuCategory {
                id: "B".to_string(),
                name: "Soups".to_string(),
                dishes: vec![dish("b1", true, 2)],
            },
        ]))
    }

    fn loaded_state(menu: Rc<Menu>) -> MenuState {
        MenuState::new()
            .apply(MenuAction::FetchStarted)
            .apply(MenuAction::FetchSucceeded(menu))
    }

    // ===== Error Type Tests =====

    #[test]
    fn test_app_error_display() {
        let error = AppError::HttpError {
            status: 500,
            message: "Server error: boom".to_string(),
        };
        assert_eq!(error.to_string(), "HTTP error 500: Server error: boom");

        let error = AppError::NetworkError("offline".to_string());
        assert_eq!(error.to_string(), "Network error: offline");

        let error = AppError::ParseError("bad json".to_string());
        assert_eq!(error.to_string(), "Parse error: bad json");
    }

    // ===== Cart Tests =====

    #[test]
    fn test_first_increment_creates_single_line() {
        let mut cart = Cart::new();
        cart.increment(&dish("a1", true, 0));

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1);
        assert_eq!(cart.quantity_of("a1"), 1);
    }

    #[test]
    fn test_increment_existing_line() {
        let mut cart = Cart::new();
        let a1 = dish("a1", true, 0);
        cart.increment(&a1);
        cart.increment(&a1);
        cart.increment(&a1);

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("a1"), 3);
    }

    #[test]
    fn test_decrement_absent_dish_is_noop() {
        let mut cart = Cart::new();
        cart.increment(&dish("a1", true, 0));
        let before = cart.clone();

        assert!(!cart.decrement(&dish("zz", true, 0)));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_decrement_last_unit_removes_line() {
        let mut cart = Cart::new();
        let a1 = dish("a1", true, 0);
        cart.increment(&a1);
        cart.increment(&a1);

        assert!(cart.decrement(&a1));
        assert_eq!(cart.quantity_of("a1"), 1);
        assert!(cart.decrement(&a1));

        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("a1"), 0);
        assert!(!cart.lines().iter().any(|line| line.quantity == 0));
    }

    #[test]
    fn test_operations_keep_order_of_other_lines() {
        let mut cart = Cart::new();
        let (a, b, c) = (dish("a", true, 0), dish("b", true, 0), dish("c", true, 0));
        cart.increment(&a);
        cart.increment(&b);
        cart.increment(&c);
        cart.increment(&b);

        cart.decrement(&b);
        cart.decrement(&b);

        let ids: Vec<&str> = cart.lines().iter().map(|l| l.dish.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "c"]);
    }

    #[test]
    fn test_random_sequence_never_goes_negative() {
        let dishes = [dish("x", true, 0), dish("y", true, 0)];
        let mut cart = Cart::new();
        let mut expected = [0i64; 2];

        // Deterministic pseudo-random walk over both dishes
        let mut seed: u32 = 7;
        for _ in 0..500 {
            seed = seed.wrapping_mul(1_103_515_245).wrapping_add(12_345);
            let idx = (seed >> 16) as usize % 2;
            if (seed >> 8) % 3 == 0 {
                cart.increment(&dishes[idx]);
                expected[idx] += 1;
            } else {
                cart.decrement(&dishes[idx]);
                expected[idx] = (expected[idx] - 1).max(0);
            }

            for (i, d) in dishes.iter().enumerate() {
                assert_eq!(i64::from(cart.quantity_of(&d.id)), expected[i]);
            }
            assert!(cart.lines().iter().all(|line| line.quantity >= 1));
            let sum: u32 = cart.lines().iter().map(|l| l.quantity).sum();
            assert_eq!(cart.total_quantity(), sum);
        }
    }

    #[test]
    fn test_cart_reducer() {
        let cart = Rc::new(Cart::new());
        let a1 = dish("a1", true, 0);

        let cart = cart.reduce(CartAction::Increment(a1.clone()));
        let cart = cart.reduce(CartAction::Increment(dish("b1", true, 0)));
        assert_eq!(cart.total_quantity(), 2);

        // no-op keeps the same allocation
        let unchanged = cart.clone().reduce(CartAction::Decrement(dish("zz", true, 0)));
        assert!(Rc::ptr_eq(&cart, &unchanged));

        let cart = cart.reduce(CartAction::Decrement(a1));
        assert_eq!(cart.total_quantity(), 1);
        assert_eq!(cart.quantity_of("a1"), 0);
    }

    // ===== MenuState Tests =====

    #[test]
    fn test_initial_state() {
        let state = MenuState::new();
        assert_eq!(state.status(), ViewStatus::Initial);
        assert!(state.menu().is_none());
        assert!(state.active_dishes().is_empty());
        assert!(!state.status().shows_loader());
        assert!(!state.status().shows_menu());
        assert!(!state.status().shows_retry());
    }

    #[test]
    fn test_fetch_start_shows_loader() {
        let state = MenuState::new().apply(MenuAction::FetchStarted);
        assert_eq!(state.status(), ViewStatus::Loading);
        assert!(state.status().shows_loader());
        assert!(!state.status().shows_retry());
        assert!(state.visible_dish_rows(&Cart::new()).is_empty());
        assert!(!state.can_fetch());
    }

    #[test]
    fn test_success_selects_first_category() {
        let state = loaded_state(create_test_menu());

        assert_eq!(state.status(), ViewStatus::Success);
        assert_eq!(state.active_category_id(), "A");
        assert_eq!(state.active_dishes().len(), 2);
        assert_eq!(state.visible_dish_rows(&Cart::new()).len(), 2);
    }

    #[test]
    fn test_select_category_leaves_cart_untouched() {
        let mut cart = Cart::new();
        cart.increment(&dish("a1", true, 0));
        let before = cart.clone();

        let state = loaded_state(create_test_menu()).apply(MenuAction::SelectCategory("B".into()));

        assert_eq!(state.active_category_id(), "B");
        let ids: Vec<&str> = state.active_dishes().iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["b1"]);
        assert_eq!(cart, before);
    }

    #[test]
    fn test_unknown_category_shows_no_dishes() {
        let state =
            loaded_state(create_test_menu()).apply(MenuAction::SelectCategory("nope".into()));
        assert!(state.active_dishes().is_empty());
    }

    #[test]
    fn test_http_500_scenario() {
        let mut cart = Cart::new();
        cart.increment(&dish("a1", true, 0));
        cart.increment(&dish("a1", true, 0));

        let outcome = parse_menu_response(500, "Internal Server Error");
        assert!(matches!(outcome, Err(AppError::HttpError { status: 500, .. })));

        let state = MenuState::new()
            .apply(MenuAction::FetchStarted)
            .apply(MenuAction::FetchFailed);

        assert_eq!(state.status(), ViewStatus::Failure);
        assert!(state.status().shows_retry());
        assert!(state.menu().is_none());
        assert!(!state.status().shows_menu());
        assert!(state.visible_dish_rows(&cart).is_empty());
        assert_eq!(cart.total_quantity(), 2);
    }

    #[test]
    fn test_failure_discards_previous_menu() {
        let state = loaded_state(create_test_menu())
            .apply(MenuAction::FetchStarted)
            .apply(MenuAction::FetchFailed);

        assert!(state.menu().is_none());
        assert_eq!(state.active_category_id(), "");
    }

    #[test]
    fn test_retry_from_failure() {
        let failed = MenuState::new()
            .apply(MenuAction::FetchStarted)
            .apply(MenuAction::FetchFailed);
        assert!(failed.can_fetch());

        let state = failed
            .apply(MenuAction::FetchStarted)
            .apply(MenuAction::FetchSucceeded(create_test_menu()));
        assert_eq!(state.status(), ViewStatus::Success);
    }

    #[test]
    fn test_settle_outside_loading_is_ignored() {
        let state = MenuState::new().apply(MenuAction::FetchSucceeded(create_test_menu()));
        assert_eq!(state.status(), ViewStatus::Initial);

        let loaded = loaded_state(create_test_menu());
        assert_eq!(loaded.apply(MenuAction::FetchFailed), loaded);
    }

    #[test]
    fn test_empty_menu_scenario() {
        let menu = parse_menu_response(200, r#"[{"table_menu_list": []}]"#).unwrap();
        let state = loaded_state(Rc::new(menu));

        assert_eq!(state.status(), ViewStatus::Success);
        assert_eq!(state.active_category_id(), "");
        assert!(state.active_dishes().is_empty());
    }

    #[test]
    fn test_menu_state_reducer_dedupes_noop() {
        let state = Rc::new(loaded_state(create_test_menu()));
        let same = state.clone().reduce(MenuAction::FetchFailed);
        assert!(Rc::ptr_eq(&state, &same));
    }

    // ===== Dish Row Tests =====

    #[test]
    fn test_unavailable_dish_never_has_controls() {
        let unavailable = dish("a2", false, 1);
        let mut cart = Cart::new();
        cart.increment(&unavailable);

        let row = DishRow::new(&unavailable, &cart);
        assert_eq!(row.controls, QuantityControls::Unavailable);
        assert!(!row.customizable);
    }

    #[test]
    fn test_available_dish_shows_quantity() {
        let a1 = dish("a1", true, 0);
        let mut cart = Cart::new();

        let row = DishRow::new(&a1, &cart);
        assert_eq!(row.controls, QuantityControls::Stepper { quantity: 0 });

        cart.increment(&a1);
        cart.increment(&a1);
        let row = DishRow::new(&a1, &cart);
        assert_eq!(row.controls, QuantityControls::Stepper { quantity: 2 });
        assert!(!row.customizable);
    }

    #[test]
    fn test_loaded_rows_hide_controls_for_unavailable_dish() {
        let mut cart = Cart::new();
        cart.increment(&dish("a1", true, 0));
        cart.increment(&dish("a2", false, 1));

        let rows = loaded_state(create_test_menu()).visible_dish_rows(&cart);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].controls, QuantityControls::Stepper { quantity: 1 });
        assert_eq!(rows[1].controls, QuantityControls::Unavailable);
        assert!(!rows[1].customizable);
    }

    #[test]
    fn test_customization_indicator() {
        let cart = Cart::new();
        assert!(DishRow::new(&dish("b1", true, 2), &cart).customizable);
        assert!(!DishRow::new(&dish("b2", false, 2), &cart).customizable);
        assert!(!DishRow::new(&dish("b3", true, 0), &cart).customizable);
    }

    #[test]
    fn test_dish_labels() {
        let d = dish("a1", true, 0);
        assert_eq!(d.price_label(), "SAR 12.5");
        assert_eq!(d.calories_label(), "150 calories");
    }
}
