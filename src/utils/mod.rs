pub mod fetch_tracker;
