pub mod delete_food;
pub mod food_modal;
