use leptos::prelude::*;

/// Binary confirmation step before a delete. Confirming fires the callback
/// and closes immediately; it does not wait for the deletion to land.
#[component]
pub fn DeleteFoodModal(
    on_confirm: impl Fn() + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
) -> impl IntoView {
    view! {
        <h2 class="text-2xl font-bold text-orange-500 text-center mb-4">Delete Meal</h2>
        <p class="text-gray-600 text-center mb-8">
            Are you sure you want to delete this meal? Actions cannot be reversed.
        </p>
        <div class="flex gap-4">
            <button
                class="flex-1 bg-orange-500 hover:bg-orange-600 text-white h-12 rounded-lg font-medium md:cursor-pointer"
                on:click=move |_| {
                    on_confirm();
                    on_close();
                }
            >
                Yes
            </button>
            <button
                class="flex-1 border-2 border-gray-200 text-gray-700 hover:bg-gray-50 h-12 rounded-lg font-medium md:cursor-pointer"
                on:click=move |_| on_close()
            >
                Cancel
            </button>
        </div>
    }
}
