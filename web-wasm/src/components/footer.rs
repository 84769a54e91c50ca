//! フッター

use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 bg-white">
            <div class="container mx-auto px-4 py-10 flex flex-col sm:flex-row items-center justify-between gap-4">
                <div class="flex items-center gap-2">
                    <span class="w-6 h-6 rounded bg-blue-600 text-white text-xs flex items-center justify-center font-bold">"V"</span>
                    <span class="font-semibold text-slate-900">"VisionEstate"</span>
                </div>
                <p class="text-sm text-slate-500">"AI-powered property verification. Results are estimates, not certified surveys."</p>
            </div>
        </footer>
    }
}
