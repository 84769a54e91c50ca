//! ナビゲーションバー

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    let (mobile_open, set_mobile_open) = signal(false);

    view! {
        <nav class="fixed top-0 inset-x-0 z-50 bg-white/80 backdrop-blur border-b border-slate-100">
            <div class="container mx-auto px-4">
                <div class="flex justify-between h-16">
                    <div class="flex items-center">
                        <A href="/" attr:class="flex items-center gap-2">
                            <span class="w-8 h-8 rounded-lg bg-blue-600 text-white flex items-center justify-center font-bold">"V"</span>
                            <span class="text-xl font-bold text-slate-900">"VisionEstate"</span>
                        </A>
                    </div>

                    <div class="hidden md:flex items-center space-x-8">
                        <a href="/#features" class="text-slate-600 hover:text-slate-900 transition">"Features"</a>
                        <a href="/#how-it-works" class="text-slate-600 hover:text-slate-900 transition">"How it works"</a>
                        <a href="/#analysis" class="text-slate-600 hover:text-slate-900 transition">"Demo"</a>
                        <A href="/analysis" attr:class="px-4 py-2 bg-slate-900 hover:bg-slate-800 text-white font-medium rounded-full transition">
                            "Analyze Property"
                        </A>
                    </div>

                    <div class="md:hidden flex items-center">
                        <button
                            class="p-2 rounded-md text-slate-600 hover:text-slate-900 hover:bg-slate-100"
                            on:click=move |_| set_mobile_open.update(|v| *v = !*v)
                        >
                            {move || if mobile_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
            </div>

            <Show when=move || mobile_open.get()>
                <div class="md:hidden border-t border-slate-200 bg-white">
                    <div class="px-4 py-4 space-y-3">
                        <a href="/#features" class="block text-slate-600 hover:text-slate-900">"Features"</a>
                        <a href="/#how-it-works" class="block text-slate-600 hover:text-slate-900">"How it works"</a>
                        <a href="/#analysis" class="block text-slate-600 hover:text-slate-900">"Demo"</a>
                        <A href="/analysis" attr:class="block w-full text-center px-4 py-2 bg-slate-900 text-white font-medium rounded-full">
                            "Analyze Property"
                        </A>
                    </div>
                </div>
            </Show>
        </nav>
    }
}
