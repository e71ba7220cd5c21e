use dto::food::{CreateFoodDto, FoodDto, RestaurantStatus, UpdateFoodDto};
use leptos::prelude::*;

use crate::components::modal::Modal;
use crate::components::modals::delete_food::DeleteFoodModal;
use crate::components::modals::food_modal::FoodModal;
use crate::icons::{
    edit::EditIcon, more_vertical::MoreVerticalIcon, star::StarIcon, trash::TrashIcon,
};

/// Generated placeholder for records without an image, keyed by the name so
/// every meal gets a stable stand-in.
fn placeholder_url(query: &str) -> String {
    format!(
        "/placeholder.svg?height=200&width=300&query={}",
        query.replace(' ', "+")
    )
}

#[component]
pub fn FoodCard(
    food: FoodDto,
    on_update: impl Fn(String, UpdateFoodDto) + Send + Sync + Copy + 'static,
    on_delete: impl Fn(String) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let (edit_open, set_edit_open) = signal(false);
    let (delete_open, set_delete_open) = signal(false);

    let image = if food.image.is_empty() {
        placeholder_url(&food.name)
    } else {
        food.image.clone()
    };
    let logo = if food.restaurant.logo.is_empty() {
        placeholder_url(&format!("{} logo", food.restaurant.name))
    } else {
        food.restaurant.logo.clone()
    };
    let open = food.restaurant.status == RestaurantStatus::Open;

    let id = StoredValue::new(food.id.clone());
    let initial = StoredValue::new(food.clone());

    let on_save = move |payload: CreateFoodDto| {
        on_update(id.get_value(), payload.into());
        set_edit_open.set(false);
    };

    view! {
        <article class="bg-white rounded-2xl shadow-sm overflow-hidden hover:shadow-md">
            <div class="relative">
                <img src=image alt=food.name.clone() class="w-full h-48 object-cover" />
                <span class="absolute top-3 left-3 bg-orange-500 text-white px-3 py-1 rounded-full text-sm font-medium">
                    {format!("${:.2}", food.price)}
                </span>
                <div class="absolute top-3 right-3">
                    <button
                        class="bg-white/80 hover:bg-white rounded-lg p-1 md:cursor-pointer"
                        on:click=move |_| set_menu_open.set(!menu_open.get_untracked())
                    >
                        <MoreVerticalIcon />
                    </button>
                    <ul
                        class="absolute right-0 mt-1 bg-white rounded-lg shadow-md py-1 w-32"
                        class:hidden=move || !menu_open.get()
                    >
                        <li>
                            <button
                                class="flex items-center gap-2 w-full px-3 py-2 hover:bg-gray-100 text-sm md:cursor-pointer"
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    set_edit_open.set(true);
                                }
                            >
                                <EditIcon />
                                Edit
                            </button>
                        </li>
                        <li>
                            <button
                                class="flex items-center gap-2 w-full px-3 py-2 hover:bg-gray-100 text-sm text-red-600 md:cursor-pointer"
                                on:click=move |_| {
                                    set_menu_open.set(false);
                                    set_delete_open.set(true);
                                }
                            >
                                <TrashIcon />
                                Delete
                            </button>
                        </li>
                    </ul>
                </div>
            </div>

            <div class="p-4">
                <div class="flex items-center gap-3 mb-3">
                    <img
                        src=logo
                        alt=format!("{} logo", food.restaurant.name)
                        class="w-10 h-10 rounded-lg object-cover"
                    />
                    <div class="flex-1">
                        <h3 class="font-semibold text-gray-900 text-lg">{food.name.clone()}</h3>
                        <div class="flex items-center gap-1">
                            <StarIcon />
                            <span class="text-sm text-gray-600">
                                {format!("{:.1}", food.rating)}
                            </span>
                        </div>
                    </div>
                </div>

                <div class="flex items-center justify-between">
                    <span class="text-sm text-gray-600">{food.restaurant.name.clone()}</span>
                    <span
                        class="px-3 py-1 rounded-full text-xs font-medium"
                        class:bg-green-100=open
                        class:text-green-700=open
                        class:bg-red-100=!open
                        class:text-red-700=!open
                    >
                        {food.restaurant.status.label()}
                    </span>
                </div>
            </div>
        </article>

        <Modal is_open=move || edit_open.get() on_close=move || set_edit_open.set(false)>
            <FoodModal
                title="Edit Meal"
                initial=Some(initial.get_value())
                on_submit=on_save
                on_close=move || set_edit_open.set(false)
            />
        </Modal>

        <Modal is_open=move || delete_open.get() on_close=move || set_delete_open.set(false)>
            <DeleteFoodModal
                on_confirm=move || on_delete(id.get_value())
                on_close=move || set_delete_open.set(false)
            />
        </Modal>
    }
}
