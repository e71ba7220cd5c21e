use dto::food::{FoodDto, UpdateFoodDto};
use dto::paging::ListWindow;
use leptos::either::EitherOf3;
use leptos::prelude::*;

use crate::components::food_card::FoodCard;

/// The meal grid: skeletons while a fetch is in flight, an explicit empty
/// state, otherwise the first windowful of cards plus a "load more" control
/// while more remain.
#[component]
pub fn FeaturedMeals(
    foods: RwSignal<Vec<FoodDto>>,
    loading: RwSignal<bool>,
    window: RwSignal<ListWindow>,
    on_update: impl Fn(String, UpdateFoodDto) + Send + Sync + Copy + 'static,
    on_delete: impl Fn(String) + Send + Sync + Copy + 'static,
) -> impl IntoView {
    let visible_foods = move || {
        let w = window.get();
        foods.with(|f| {
            f.iter()
                .take(w.visible(f.len()))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    let has_more = move || window.get().has_more(foods.with(Vec::len));

    view! {
        <section class="py-16 px-4 bg-gray-50">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl font-bold text-center mb-12 text-gray-900">Featured Meals</h2>
                {move || {
                    if loading.get() {
                        EitherOf3::A(
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                                    {(0..8)
                                        .map(|_| {
                                            view! {
                                                <div class="bg-gray-200 animate-pulse rounded-2xl h-80"></div>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </div>
                            },
                        )
                    } else if foods.with(|f| f.is_empty()) {
                        EitherOf3::B(
                            view! {
                                <div class="text-center py-12">
                                    <p class="empty-state-message text-gray-500 text-lg">
                                        No items available
                                    </p>
                                </div>
                            },
                        )
                    } else {
                        EitherOf3::C(
                            view! {
                                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6 mb-8">
                                    <For each=visible_foods key=|food: &FoodDto| food.id.clone() let:food>
                                        <FoodCard food on_update on_delete />
                                    </For>
                                </div>
                                <Show when=has_more>
                                    <div class="text-center">
                                        <button
                                            class="bg-orange-500 hover:bg-orange-600 text-white px-8 py-3 rounded-lg font-medium md:cursor-pointer"
                                            on:click=move |_| window.update(|w| w.load_more())
                                        >
                                            Load more
                                        </button>
                                    </div>
                                </Show>
                            },
                        )
                    }
                }}
            </div>
        </section>
    }
}
