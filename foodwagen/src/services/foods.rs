use dto::food::{CreateFoodDto, FoodDto, UpdateFoodDto};
use leptos::prelude::*;

#[server]
pub async fn get_foods(search: Option<String>) -> Result<Vec<FoodDto>, ServerFnError> {
    use crate::upstream::FoodsApi;

    let api: FoodsApi =
        use_context().ok_or(ServerFnError::new("Failed to retrieve foods API client"))?;

    Ok(api.list(search.as_deref()).await?)
}

#[server]
pub async fn create_food(food: CreateFoodDto) -> Result<FoodDto, ServerFnError> {
    use crate::upstream::FoodsApi;

    let api: FoodsApi =
        use_context().ok_or(ServerFnError::new("Failed to retrieve foods API client"))?;

    log::info!("Creating food listing '{}'", food.name);
    Ok(api.create(&food).await?)
}

#[server]
pub async fn update_food(id: String, patch: UpdateFoodDto) -> Result<FoodDto, ServerFnError> {
    use crate::upstream::FoodsApi;

    let api: FoodsApi =
        use_context().ok_or(ServerFnError::new("Failed to retrieve foods API client"))?;

    log::info!("Updating food listing {}", id);
    Ok(api.update(&id, &patch).await?)
}

#[server]
pub async fn delete_food(id: String) -> Result<(), ServerFnError> {
    use crate::upstream::FoodsApi;

    let api: FoodsApi =
        use_context().ok_or(ServerFnError::new("Failed to retrieve foods API client"))?;

    log::info!("Deleting food listing {}", id);
    api.delete(&id).await?;
    Ok(())
}
