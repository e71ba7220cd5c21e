use dto::food::{CreateFoodDto, FoodDto, RestaurantStatus};
use dto::form::{FoodField, FoodForm, FormErrors};
use leptos::prelude::*;

use crate::icons::close::CloseIcon;

const INPUT: &str =
    "w-full rounded-lg border border-gray-200 px-3 py-2 outline-none focus:border-orange-500";

/// Create/edit form, one component for both: seeded blank for a new meal or
/// from `initial` when editing. Submits nothing until validation passes;
/// editing a field clears only that field's error.
#[component]
pub fn FoodModal(
    title: &'static str,
    initial: Option<FoodDto>,
    on_submit: impl Fn(CreateFoodDto) + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let seed = initial.as_ref().map(FoodForm::from_food).unwrap_or_default();

    let (name, set_name) = signal(seed.name);
    let (rating, set_rating) = signal(seed.rating);
    let (image, set_image) = signal(seed.image);
    let (restaurant_name, set_restaurant_name) = signal(seed.restaurant_name);
    let (restaurant_logo, set_restaurant_logo) = signal(seed.restaurant_logo);
    let (status, set_status) = signal(seed.status);
    let (price, set_price) = signal(seed.price);
    let errors = RwSignal::new(FormErrors::default());

    let on_save = move |_| {
        let form = FoodForm {
            name: name.get_untracked(),
            rating: rating.get_untracked(),
            image: image.get_untracked(),
            restaurant_name: restaurant_name.get_untracked(),
            restaurant_logo: restaurant_logo.get_untracked(),
            status: status.get_untracked(),
            price: price.get_untracked(),
        };
        match form.validate() {
            Ok(payload) => {
                errors.set(FormErrors::default());
                on_submit(payload);
            }
            Err(errs) => errors.set(errs),
        }
    };

    let error_line = move |field: FoodField| {
        move || {
            errors.with(|e| e.get(field).map(str::to_string)).map(|msg| {
                view! { <p class="text-red-500 text-sm mt-1">{msg}</p> }
            })
        }
    };

    view! {
        <div class="flex items-start justify-between mb-4">
            <h2 class="text-2xl font-bold text-orange-500">{title}</h2>
            <button
                class="text-gray-400 hover:text-gray-600 md:cursor-pointer"
                on:click=move |_| on_close()
            >
                <CloseIcon />
            </button>
        </div>
        <div class="flex flex-col gap-3">
            <div>
                <label class="text-sm text-gray-700" for="food_name">Food Name *</label>
                <input
                    id="food_name"
                    class=INPUT
                    class:border-red-500=move || errors.with(|e| e.name.is_some())
                    placeholder="Enter food name"
                    prop:value=name
                    on:input=move |e| {
                        set_name.set(event_target_value(&e));
                        errors.update(|errs| errs.clear(FoodField::Name));
                    }
                />
                {error_line(FoodField::Name)}
            </div>

            <div>
                <label class="text-sm text-gray-700" for="food_rating">Food Rating *</label>
                <input
                    id="food_rating"
                    class=INPUT
                    class:border-red-500=move || errors.with(|e| e.rating.is_some())
                    type="number"
                    min="0"
                    max="5"
                    step="0.1"
                    placeholder="Enter rating (0-5)"
                    prop:value=rating
                    on:input=move |e| {
                        set_rating.set(event_target_value(&e));
                        errors.update(|errs| errs.clear(FoodField::Rating));
                    }
                />
                {error_line(FoodField::Rating)}
            </div>

            <div>
                <label class="text-sm text-gray-700" for="food_image">Food Image URL</label>
                <input
                    id="food_image"
                    class=INPUT
                    placeholder="Enter image URL"
                    bind:value=(image, set_image)
                />
            </div>

            <div>
                <label class="text-sm text-gray-700" for="restaurant_name">Restaurant Name *</label>
                <input
                    id="restaurant_name"
                    class=INPUT
                    class:border-red-500=move || errors.with(|e| e.restaurant_name.is_some())
                    placeholder="Enter restaurant name"
                    prop:value=restaurant_name
                    on:input=move |e| {
                        set_restaurant_name.set(event_target_value(&e));
                        errors.update(|errs| errs.clear(FoodField::RestaurantName));
                    }
                />
                {error_line(FoodField::RestaurantName)}
            </div>

            <div>
                <label class="text-sm text-gray-700" for="restaurant_logo">Restaurant Logo URL</label>
                <input
                    id="restaurant_logo"
                    class=INPUT
                    placeholder="Enter logo URL"
                    bind:value=(restaurant_logo, set_restaurant_logo)
                />
            </div>

            <div>
                <label class="text-sm text-gray-700" for="restaurant_status">Restaurant Status</label>
                <select
                    id="restaurant_status"
                    class=INPUT
                    on:change=move |e| {
                        set_status.set(
                            if event_target_value(&e) == "CLOSED" {
                                RestaurantStatus::Closed
                            } else {
                                RestaurantStatus::Open
                            },
                        );
                    }
                >
                    <option value="OPEN_NOW" selected=move || status.get() == RestaurantStatus::Open>
                        Open Now
                    </option>
                    <option value="CLOSED" selected=move || status.get() == RestaurantStatus::Closed>
                        Closed
                    </option>
                </select>
            </div>

            <div>
                <label class="text-sm text-gray-700" for="food_price">Price *</label>
                <input
                    id="food_price"
                    class=INPUT
                    class:border-red-500=move || errors.with(|e| e.price.is_some())
                    type="number"
                    min="0"
                    step="0.01"
                    placeholder="Enter price"
                    prop:value=price
                    on:input=move |e| {
                        set_price.set(event_target_value(&e));
                        errors.update(|errs| errs.clear(FoodField::Price));
                    }
                />
                {error_line(FoodField::Price)}
            </div>

            <div class="flex gap-2 pt-4">
                <button
                    class="flex-1 bg-orange-500 hover:bg-orange-600 text-white py-2 rounded-lg font-medium md:cursor-pointer"
                    on:click=on_save
                >
                    Save
                </button>
                <button
                    class="flex-1 border-2 border-gray-200 text-gray-700 hover:bg-gray-50 py-2 rounded-lg font-medium md:cursor-pointer"
                    on:click=move |_| on_close()
                >
                    Cancel
                </button>
            </div>
        </div>
    }
}
