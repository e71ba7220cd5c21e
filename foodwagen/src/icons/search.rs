use leptos::prelude::*;

#[component]
pub fn SearchIcon() -> impl IntoView {
    view! {
        <svg
            width="20px"
            height="20px"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <circle
                cx="11"
                cy="11"
                r="7"
                stroke="currentColor"
                stroke-width="2"
            />
            <path
                d="M16 16L21 21"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-width="2"
            />
        </svg>
    }
}
