pub mod featured_meals;
pub mod food_card;
pub mod footer;
pub mod header;
pub mod hero;
pub mod modal;
pub mod modals;
pub mod snackbar;
