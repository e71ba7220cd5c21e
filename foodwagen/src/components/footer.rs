use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-900 text-gray-300 px-6 py-12 mt-auto">
            <div class="max-w-7xl mx-auto grid md:grid-cols-3 gap-8">
                <div>
                    <h3 class="text-white font-semibold mb-3">Company</h3>
                    <ul class="flex flex-col gap-2 text-sm">
                        <li><a class="hover:text-white" href="#">About us</a></li>
                        <li><a class="hover:text-white" href="#">Team</a></li>
                        <li><a class="hover:text-white" href="#">Careers</a></li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-3">Legal</h3>
                    <ul class="flex flex-col gap-2 text-sm">
                        <li><a class="hover:text-white" href="#">Terms & Conditions</a></li>
                        <li><a class="hover:text-white" href="#">Privacy Policy</a></li>
                        <li><a class="hover:text-white" href="#">Cookie Policy</a></li>
                    </ul>
                </div>
                <div>
                    <h3 class="text-white font-semibold mb-3">Get updates</h3>
                    <div class="flex gap-2">
                        <input
                            class="flex-1 rounded-lg bg-gray-800 px-3 py-2 text-sm outline-none"
                            placeholder="Enter your email"
                        />
                        <button class="bg-orange-500 hover:bg-orange-600 text-white px-4 py-2 rounded-lg text-sm">
                            Subscribe
                        </button>
                    </div>
                </div>
            </div>
            <p class="text-center text-xs text-gray-500 mt-10">
                "© 2026 FoodWagen. All rights reserved."
            </p>
        </footer>
    }
}
