//! アップロード済み画像のサムネイル列

use crate::app::SessionSignal;
use leptos::prelude::*;

#[component]
pub fn FileStrip<F>(session: SessionSignal, on_remove: F) -> impl IntoView
where
    F: Fn(u64) + 'static + Clone + Send + Sync,
{
    let thumbs = move || {
        session.with(|s| {
            s.files()
                .iter()
                .map(|f| (f.id, f.name.clone(), f.preview_url.clone()))
                .collect::<Vec<_>>()
        })
    };
    let locked = move || session.with(|s| s.is_analyzing());

    view! {
        <div class="mt-6 flex flex-wrap justify-center gap-3">
            <For
                each=thumbs
                key=|(id, _, _)| *id
                children=move |(id, name, url)| {
                    let on_remove = on_remove.clone();
                    view! {
                        <div class="relative w-24 h-24 rounded-xl overflow-hidden border bg-white shadow-sm group">
                            <img src=url alt=name.clone() title=name class="w-full h-full object-cover" />
                            <button
                                class="absolute top-1 right-1 w-6 h-6 rounded-full bg-white/90 text-slate-700 text-xs shadow opacity-0 group-hover:opacity-100 disabled:hidden"
                                disabled=locked
                                on:click=move |_| on_remove(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
