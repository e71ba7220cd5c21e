use leptos::prelude::*;

#[component]
pub fn Modal(
    is_open: impl Fn() -> bool + Send + Sync + Copy + 'static,
    on_close: impl Fn() + Send + Sync + Copy + 'static,
    children: ChildrenFn,
) -> impl IntoView {
    view! {
        <div
            class="flex fixed top-0 left-0 w-full h-full z-10 justify-center items-center bg-black/40 backdrop-blur-xs"
            class:hidden=move || !is_open()
            on:click=move |_| on_close()
        >
            <div
                class="flex flex-col bg-white p-6 rounded-2xl shadow-xl w-full max-w-md"
                on:click=|e| e.stop_propagation()
            >
                <Show when=is_open>{children()}</Show>
            </div>
        </div>
    }
}
