use leptos::prelude::*;

#[component]
pub fn Header(on_add_meal: impl Fn() + Send + Sync + Copy + 'static) -> impl IntoView {
    view! {
        <header class="flex flex-row items-center justify-between px-6 py-4 bg-white shadow-sm">
            <span class="text-2xl font-bold">
                <span class="text-orange-500">Food</span>
                <span class="text-yellow-500">Wagen</span>
            </span>
            <button
                class="bg-orange-500 hover:bg-orange-600 text-white px-5 py-2 rounded-lg font-medium md:cursor-pointer"
                on:click=move |_| on_add_meal()
            >
                Add Meal
            </button>
        </header>
    }
}
