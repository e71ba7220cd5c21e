use dto::food::{CreateFoodDto, FoodDto, UpdateFoodDto};
use dto::outcome::{fruitless_search, Refetch};
use dto::paging::ListWindow;
use dto::seq::RequestSeq;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::{
    featured_meals::FeaturedMeals,
    footer::Footer,
    header::Header,
    hero::HeroSection,
    modal::Modal,
    modals::food_modal::FoodModal,
    snackbar::{use_snackbar, Snackbar, SnackbarContext},
};
use crate::services::foods::{create_food, delete_food, get_foods, update_food};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="h-full">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body class="bg-white flex flex-col min-h-full text-gray-900">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/foodwagen.css" />
        <Title text="FoodWagen" />
        <Router>
            <Snackbar>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Snackbar>
        </Router>
    }
}

/// Owns the authoritative food list and every network mutation. The list is
/// only ever replaced from a fresh GET; mutations are confirmed by
/// re-fetching with the active search term, never applied optimistically.
#[component]
fn HomePage() -> impl IntoView {
    let snackbar = use_snackbar();

    let foods: RwSignal<Vec<FoodDto>> = RwSignal::new(Vec::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let window = RwSignal::new(ListWindow::new());
    let seq = RwSignal::new(RequestSeq::new());

    let (add_open, set_add_open) = signal(false);

    let fetch_foods = Action::new(move |term: &String| {
        let term = term.clone();
        async move {
            let ticket = seq.try_update(|s| s.begin()).unwrap_or_default();
            loading.set(true);
            let query = Some(term.clone()).filter(|t| !t.trim().is_empty());
            match get_foods(query).await {
                Ok(list) => {
                    // A newer fetch may already have landed; keep its list.
                    if seq.try_update(|s| s.try_commit(ticket)).unwrap_or(false) {
                        if fruitless_search(&term, list.len()) {
                            snackbar.warning("No meals match that search");
                        }
                        foods.set(list);
                        window.update(|w| w.reset());
                        loading.set(false);
                    }
                }
                Err(e) => {
                    // Failures of superseded requests stay quiet; the fetch
                    // that replaced them owns the loading state now.
                    if seq.try_update(|s| s.try_settle(ticket)).unwrap_or(false) {
                        log!("Failed to fetch foods: {}", e);
                        snackbar.error("Could not load meals", e);
                        loading.set(false);
                    } else {
                        log!("Ignoring failure of superseded fetch: {}", e);
                    }
                }
            }
        }
    });

    Effect::new(move |_| {
        fetch_foods.dispatch(search.get_untracked());
    });

    let on_search = move |term: String| {
        search.set(term.clone());
        fetch_foods.dispatch(term);
    };

    let add_food = Action::new(move |payload: &CreateFoodDto| {
        let payload = payload.clone();
        async move {
            let outcome = create_food(payload).await;
            match &outcome {
                Ok(_) => {
                    snackbar.success("Meal added");
                    set_add_open.set(false);
                }
                Err(e) => {
                    log!("Failed to add food: {}", e);
                    snackbar.error("Could not add meal", e);
                }
            }
            if let Refetch::With(term) = Refetch::after(&outcome, &search.get_untracked()) {
                fetch_foods.dispatch(term);
            }
        }
    });

    let update_food_action = Action::new(move |(id, patch): &(String, UpdateFoodDto)| {
        let id = id.clone();
        let patch = patch.clone();
        async move {
            let outcome = update_food(id, patch).await;
            match &outcome {
                Ok(_) => snackbar.success("Meal updated"),
                Err(e) => {
                    log!("Failed to update food: {}", e);
                    snackbar.error("Could not update meal", e);
                }
            }
            if let Refetch::With(term) = Refetch::after(&outcome, &search.get_untracked()) {
                fetch_foods.dispatch(term);
            }
        }
    });

    let delete_food_action = Action::new(move |id: &String| {
        let id = id.clone();
        async move {
            let outcome = delete_food(id).await;
            match &outcome {
                Ok(_) => snackbar.success("Meal deleted"),
                Err(e) => {
                    log!("Failed to delete food: {}", e);
                    snackbar.error("Could not delete meal", e);
                }
            }
            if let Refetch::With(term) = Refetch::after(&outcome, &search.get_untracked()) {
                fetch_foods.dispatch(term);
            }
        }
    });

    let on_update = move |id: String, patch: UpdateFoodDto| {
        update_food_action.dispatch((id, patch));
    };
    let on_delete = move |id: String| {
        delete_food_action.dispatch(id);
    };

    view! {
        <Header on_add_meal=move || set_add_open.set(true) />
        <main class="flex-1">
            <HeroSection on_search />
            <FeaturedMeals foods loading window on_update on_delete />
        </main>
        <Footer />

        <Modal is_open=move || add_open.get() on_close=move || set_add_open.set(false)>
            <FoodModal
                title="Add a meal"
                initial=None
                on_submit=move |payload: CreateFoodDto| {
                    add_food.dispatch(payload);
                }
                on_close=move || set_add_open.set(false)
            />
        </Modal>
    }
}
