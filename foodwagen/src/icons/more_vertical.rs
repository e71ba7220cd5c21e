use leptos::prelude::*;

#[component]
pub fn MoreVerticalIcon() -> impl IntoView {
    view! {
        <svg
            width="16px"
            height="16px"
            viewBox="0 0 24 24"
            fill="currentColor"
            xmlns="http://www.w3.org/2000/svg"
        >
            <circle cx="12" cy="5" r="2" />
            <circle cx="12" cy="12" r="2" />
            <circle cx="12" cy="19" r="2" />
        </svg>
    }
}
