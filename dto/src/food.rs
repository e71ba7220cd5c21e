use serde::{Deserialize, Serialize};

/// Open/closed pill on the card. The API historically spelled these two
/// ways; `"OPEN_NOW"`/`"CLOSED"` is canonical, the prose spellings are
/// accepted on input only.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RestaurantStatus {
    #[default]
    #[serde(rename = "OPEN_NOW", alias = "Open Now")]
    Open,
    #[serde(rename = "CLOSED", alias = "Closed")]
    Closed,
}

impl RestaurantStatus {
    pub fn label(self) -> &'static str {
        match self {
            RestaurantStatus::Open => "Open",
            RestaurantStatus::Closed => "Closed",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Default)]
pub struct RestaurantDto {
    pub name: String,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub status: RestaurantStatus,
}

/// One listed meal. `id` is assigned by the API and never written by the
/// client; it is the list key and the path segment for update/delete.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "WireFood")]
pub struct FoodDto {
    pub id: String,
    pub name: String,
    pub rating: f64,
    pub image: String,
    pub price: f64,
    pub restaurant: RestaurantDto,
}

/// POST body, the canonical record minus `id`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CreateFoodDto {
    pub name: String,
    pub rating: f64,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    pub restaurant: RestaurantDto,
}

/// PUT body; fields left `None` are omitted from the JSON.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct UpdateFoodDto {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restaurant: Option<RestaurantDto>,
}

impl From<CreateFoodDto> for UpdateFoodDto {
    fn from(food: CreateFoodDto) -> Self {
        UpdateFoodDto {
            name: Some(food.name),
            rating: Some(food.rating),
            image: Some(food.image),
            price: Some(food.price),
            restaurant: Some(food.restaurant),
        }
    }
}

/// Inbound wire shape. Older records arrive flat
/// (`food_name`/`restaurant_status: "Open Now"`), newer ones nested;
/// both normalize to [`FoodDto`].
#[derive(Deserialize)]
#[serde(untagged)]
enum WireFood {
    Nested {
        id: String,
        name: String,
        rating: f64,
        #[serde(default)]
        image: String,
        #[serde(default)]
        price: f64,
        restaurant: RestaurantDto,
    },
    Flat {
        id: String,
        food_name: String,
        food_rating: f64,
        #[serde(default)]
        food_image: String,
        restaurant_name: String,
        #[serde(default)]
        restaurant_logo: String,
        #[serde(default)]
        restaurant_status: RestaurantStatus,
        #[serde(default)]
        price: f64,
    },
}

impl From<WireFood> for FoodDto {
    fn from(wire: WireFood) -> Self {
        match wire {
            WireFood::Nested {
                id,
                name,
                rating,
                image,
                price,
                restaurant,
            } => FoodDto {
                id,
                name,
                rating,
                image,
                price,
                restaurant,
            },
            WireFood::Flat {
                id,
                food_name,
                food_rating,
                food_image,
                restaurant_name,
                restaurant_logo,
                restaurant_status,
                price,
            } => FoodDto {
                id,
                name: food_name,
                rating: food_rating,
                image: food_image,
                price,
                restaurant: RestaurantDto {
                    name: restaurant_name,
                    logo: restaurant_logo,
                    status: restaurant_status,
                },
            },
        }
    }
}

#[cfg(test)]
mod test {
    use crate::food::*;

    #[test]
    fn nested_record_deserializes_as_is() {
        let food: FoodDto = serde_json::from_str(
            r#"{
                "id": "f-1",
                "name": "Pad Thai",
                "rating": 4.5,
                "image": "https://cdn.example/pad-thai.png",
                "price": 12.99,
                "restaurant": {"name": "Bangkok Spoon", "logo": "", "status": "OPEN_NOW"}
            }"#,
        )
        .unwrap();

        assert_eq!(food.id, "f-1");
        assert_eq!(food.name, "Pad Thai");
        assert_eq!(food.restaurant.name, "Bangkok Spoon");
        assert_eq!(food.restaurant.status, RestaurantStatus::Open);
    }

    #[test]
    fn legacy_flat_record_normalizes_to_nested() {
        let food: FoodDto = serde_json::from_str(
            r#"{
                "id": "f-2",
                "food_name": "Margherita",
                "food_rating": 4.0,
                "food_image": "",
                "restaurant_name": "Luigi's",
                "restaurant_logo": "https://cdn.example/luigi.png",
                "restaurant_status": "Open Now",
                "price": 9.5
            }"#,
        )
        .unwrap();

        assert_eq!(food.name, "Margherita");
        assert_eq!(food.image, "");
        assert_eq!(food.price, 9.5);
        assert_eq!(food.restaurant.name, "Luigi's");
        assert_eq!(food.restaurant.logo, "https://cdn.example/luigi.png");
        assert_eq!(food.restaurant.status, RestaurantStatus::Open);
    }

    #[test]
    fn both_status_spellings_parse() {
        for (raw, expected) in [
            ("\"OPEN_NOW\"", RestaurantStatus::Open),
            ("\"Open Now\"", RestaurantStatus::Open),
            ("\"CLOSED\"", RestaurantStatus::Closed),
            ("\"Closed\"", RestaurantStatus::Closed),
        ] {
            let status: RestaurantStatus = serde_json::from_str(raw).unwrap();
            assert_eq!(status, expected);
        }
    }

    #[test]
    fn status_serializes_canonically() {
        assert_eq!(
            serde_json::to_string(&RestaurantStatus::Open).unwrap(),
            "\"OPEN_NOW\""
        );
        assert_eq!(
            serde_json::to_string(&RestaurantStatus::Closed).unwrap(),
            "\"CLOSED\""
        );
    }

    #[test]
    fn patch_omits_unset_fields() {
        let patch = UpdateFoodDto {
            price: Some(11.0),
            ..Default::default()
        };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"price":11.0}"#);
    }
}
