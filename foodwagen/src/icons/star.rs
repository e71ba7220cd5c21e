use leptos::prelude::*;

#[component]
pub fn StarIcon() -> impl IntoView {
    view! {
        <svg
            width="16px"
            height="16px"
            viewBox="0 0 24 24"
            fill="#facc15"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d="M12 2l2.92 6.26L21.6 9.27l-4.8 4.42 1.14 6.81L12 17.27l-5.94 3.23 1.14-6.81-4.8-4.42 6.68-1.01L12 2z" />
        </svg>
    }
}
