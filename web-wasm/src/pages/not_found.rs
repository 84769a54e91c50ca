use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 bg-slate-50">
            <h1 class="text-4xl font-bold text-slate-900">"404"</h1>
            <p class="text-slate-500">"This page does not exist."</p>
            <A href="/" attr:class="text-blue-600 hover:underline">"Back to home"</A>
        </main>
    }
}
