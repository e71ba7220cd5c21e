use leptos::prelude::*;

#[component]
pub fn EditIcon() -> impl IntoView {
    view! {
        <svg
            width="16px"
            height="16px"
            viewBox="0 0 24 24"
            fill="none"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path
                d="M4 20h4l10.5-10.5a2.12 2.12 0 0 0-3-3L5 17v3z"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-linejoin="round"
                stroke-width="2"
            />
            <path
                d="M13.5 6.5l3 3"
                stroke="currentColor"
                stroke-linecap="round"
                stroke-width="2"
            />
        </svg>
    }
}
