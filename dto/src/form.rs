use crate::food::{CreateFoodDto, RestaurantDto, RestaurantStatus};

/// Fields a form error can attach to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FoodField {
    Name,
    Rating,
    RestaurantName,
    Price,
}

/// Per-field error messages for the food form. Each field's error lives and
/// dies on its own: validation fills them, editing a field clears only that
/// field's entry.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormErrors {
    pub name: Option<String>,
    pub rating: Option<String>,
    pub restaurant_name: Option<String>,
    pub price: Option<String>,
}

impl FormErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.rating.is_none()
            && self.restaurant_name.is_none()
            && self.price.is_none()
    }

    pub fn get(&self, field: FoodField) -> Option<&str> {
        match field {
            FoodField::Name => self.name.as_deref(),
            FoodField::Rating => self.rating.as_deref(),
            FoodField::RestaurantName => self.restaurant_name.as_deref(),
            FoodField::Price => self.price.as_deref(),
        }
    }

    pub fn clear(&mut self, field: FoodField) {
        match field {
            FoodField::Name => self.name = None,
            FoodField::Rating => self.rating = None,
            FoodField::RestaurantName => self.restaurant_name = None,
            FoodField::Price => self.price = None,
        }
    }
}

/// Controlled-form state for the create/edit modal. Every value is kept as
/// the raw input string and only coerced on submit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FoodForm {
    pub name: String,
    pub rating: String,
    pub image: String,
    pub restaurant_name: String,
    pub restaurant_logo: String,
    pub status: RestaurantStatus,
    pub price: String,
}

impl FoodForm {
    /// Seeds the form from an existing record for editing.
    pub fn from_food(food: &crate::food::FoodDto) -> Self {
        FoodForm {
            name: food.name.clone(),
            rating: food.rating.to_string(),
            image: food.image.clone(),
            restaurant_name: food.restaurant.name.clone(),
            restaurant_logo: food.restaurant.logo.clone(),
            status: food.restaurant.status,
            price: food.price.to_string(),
        }
    }

    /// Validates the current values. On success returns the cleaned payload
    /// (strings trimmed, numbers coerced); on failure returns a message for
    /// each offending field and nothing else happens.
    pub fn validate(&self) -> Result<CreateFoodDto, FormErrors> {
        let mut errors = FormErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("Food name is required".to_string());
        }

        let rating = self.rating.trim().parse::<f64>().ok();
        match rating {
            Some(r) if (0.0..=5.0).contains(&r) => {}
            _ => {
                errors.rating = Some("Rating must be a number between 0 and 5".to_string());
            }
        }

        if self.restaurant_name.trim().is_empty() {
            errors.restaurant_name = Some("Restaurant name is required".to_string());
        }

        let price = self.price.trim().parse::<f64>().ok();
        match price {
            Some(p) if p > 0.0 => {}
            _ => {
                errors.price = Some("Price must be a positive number".to_string());
            }
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CreateFoodDto {
            name: self.name.trim().to_string(),
            rating: rating.unwrap_or_default(),
            image: self.image.trim().to_string(),
            price: price.unwrap_or_default(),
            restaurant: RestaurantDto {
                name: self.restaurant_name.trim().to_string(),
                logo: self.restaurant_logo.trim().to_string(),
                status: self.status,
            },
        })
    }
}

#[cfg(test)]
mod test {
    use crate::food::{FoodDto, RestaurantDto, RestaurantStatus};
    use crate::form::*;

    fn filled_form() -> FoodForm {
        FoodForm {
            name: "Shoyu Ramen".to_string(),
            rating: "4.5".to_string(),
            image: " https://cdn.example/ramen.png ".to_string(),
            restaurant_name: "Menya".to_string(),
            restaurant_logo: String::new(),
            status: RestaurantStatus::Open,
            price: "13.50".to_string(),
        }
    }

    #[test]
    fn valid_form_yields_trimmed_coerced_payload() {
        let payload = filled_form().validate().unwrap();
        assert_eq!(payload.name, "Shoyu Ramen");
        assert_eq!(payload.rating, 4.5);
        assert_eq!(payload.image, "https://cdn.example/ramen.png");
        assert_eq!(payload.price, 13.50);
        assert_eq!(payload.restaurant.name, "Menya");
        assert_eq!(payload.restaurant.status, RestaurantStatus::Open);
    }

    #[test]
    fn blank_name_errors_only_on_name() {
        let mut form = filled_form();
        form.name = "   ".to_string();
        let errors = form.validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.rating.is_none());
        assert!(errors.restaurant_name.is_none());
        assert!(errors.price.is_none());
    }

    #[test]
    fn blank_restaurant_name_errors_only_on_restaurant_name() {
        let mut form = filled_form();
        form.restaurant_name = String::new();
        let errors = form.validate().unwrap_err();
        assert!(errors.restaurant_name.is_some());
        assert!(errors.name.is_none());
        assert!(errors.price.is_none());
    }

    #[test]
    fn rating_bounds_are_inclusive() {
        for ok in ["0", "5", "2.5"] {
            let mut form = filled_form();
            form.rating = ok.to_string();
            assert!(form.validate().is_ok(), "rating {} should pass", ok);
        }
        for bad in ["-1", "5.1", "abc", ""] {
            let mut form = filled_form();
            form.rating = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert!(errors.rating.is_some(), "rating {} should fail", bad);
        }
    }

    #[test]
    fn price_must_be_strictly_positive() {
        for bad in ["0", "-3", "free", ""] {
            let mut form = filled_form();
            form.price = bad.to_string();
            let errors = form.validate().unwrap_err();
            assert!(errors.price.is_some(), "price {} should fail", bad);
        }
    }

    #[test]
    fn clear_removes_only_the_named_field() {
        let mut errors = FoodForm::default().validate().unwrap_err();
        assert!(errors.name.is_some());
        assert!(errors.rating.is_some());

        errors.clear(FoodField::Rating);
        assert!(errors.rating.is_none());
        assert!(errors.name.is_some());
        assert!(errors.restaurant_name.is_some());
        assert!(errors.price.is_some());
    }

    #[test]
    fn from_food_seeds_every_field() {
        let food = FoodDto {
            id: "f-9".to_string(),
            name: "Bibimbap".to_string(),
            rating: 4.0,
            image: String::new(),
            price: 11.0,
            restaurant: RestaurantDto {
                name: "Seoul Kitchen".to_string(),
                logo: "logo.png".to_string(),
                status: RestaurantStatus::Closed,
            },
        };
        let form = FoodForm::from_food(&food);
        assert_eq!(form.name, "Bibimbap");
        assert_eq!(form.rating, "4");
        assert_eq!(form.status, RestaurantStatus::Closed);
        assert_eq!(form.price, "11");
    }
}
