use leptos::prelude::*;

use crate::icons::search::SearchIcon;

#[derive(Clone, Copy, PartialEq, Eq)]
enum OrderTab {
    Delivery,
    Pickup,
}

#[component]
pub fn HeroSection(on_search: impl Fn(String) + Send + Sync + Copy + 'static) -> impl IntoView {
    let (term, set_term) = signal(String::new());
    let (tab, set_tab) = signal(OrderTab::Delivery);

    let submit = move || on_search(term.get_untracked());

    view! {
        <section class="bg-gradient-to-r from-orange-400 to-orange-500 px-4 py-16">
            <div class="max-w-7xl mx-auto grid lg:grid-cols-2 gap-8 items-center">
                <div class="text-white">
                    <h1 class="text-4xl md:text-6xl font-bold mb-4">Are you starving?</h1>
                    <p class="text-lg md:text-xl mb-8 opacity-90">
                        Within a few clicks, find meals that are accessible near you
                    </p>

                    <div class="bg-white rounded-2xl p-6 shadow-lg">
                        <div class="flex gap-2 mb-4">
                            <button
                                class="flex items-center gap-2 px-3 py-1 rounded-lg text-sm md:cursor-pointer"
                                class:bg-orange-100=move || tab.get() == OrderTab::Delivery
                                class:text-orange-600=move || tab.get() == OrderTab::Delivery
                                class:text-gray-600=move || tab.get() != OrderTab::Delivery
                                on:click=move |_| set_tab.set(OrderTab::Delivery)
                            >
                                Delivery
                            </button>
                            <button
                                class="flex items-center gap-2 px-3 py-1 rounded-lg text-sm md:cursor-pointer"
                                class:bg-orange-100=move || tab.get() == OrderTab::Pickup
                                class:text-orange-600=move || tab.get() == OrderTab::Pickup
                                class:text-gray-600=move || tab.get() != OrderTab::Pickup
                                on:click=move |_| set_tab.set(OrderTab::Pickup)
                            >
                                Pickup
                            </button>
                        </div>

                        <div class="flex gap-2">
                            <input
                                id="search-bar"
                                class="flex-1 rounded-lg border border-gray-200 px-4 py-3 text-gray-900 focus:border-orange-500 outline-none"
                                placeholder="What do you like to eat today?"
                                bind:value=(term, set_term)
                                on:keydown=move |e| {
                                    if e.key() == "Enter" {
                                        submit();
                                    }
                                }
                            />
                            <button
                                class="bg-orange-500 hover:bg-orange-600 text-white px-6 py-3 rounded-lg font-medium flex items-center gap-2 md:cursor-pointer"
                                on:click=move |_| submit()
                            >
                                <SearchIcon />
                                Find Meal
                            </button>
                        </div>
                    </div>
                </div>

                <img
                    src="/images/hero-ramen.png"
                    alt="Bowl of ramen with egg and vegetables"
                    class="w-full max-w-md mx-auto rounded-full hidden lg:block"
                />
            </div>
        </section>
    }
}
