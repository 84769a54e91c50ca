//! 検出結果ギャラリー
//!
//! 解析に送った画像ごとにカードを作り、検出ボックスを百分率で重ねる。

use crate::app::SessionSignal;
use leptos::prelude::*;
use visionestate_common::{overlays_for, Overlay};

#[derive(Debug, Clone, PartialEq)]
struct GalleryItem {
    key: u64,
    name: String,
    url: String,
    overlays: Vec<Overlay>,
    calibration_marker: bool,
}

#[component]
pub fn DetectionGallery(session: SessionSignal) -> impl IntoView {
    let items = move || {
        session.with(|s| {
            let Some(done) = s.completed() else {
                return Vec::new();
            };
            let count = done.file_ids.len();
            done.file_ids
                .iter()
                .enumerate()
                .filter_map(|(index, id)| {
                    let file = s.file(*id)?;
                    let detections = done.result.detections_for_image(index, count);
                    Some(GalleryItem {
                        key: *id,
                        name: file.name.clone(),
                        url: file.preview_url.clone(),
                        overlays: overlays_for(&detections),
                        calibration_marker: detections.iter().any(|d| d.is_calibration),
                    })
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section>
            <h2 class="text-2xl font-bold text-slate-900 mb-8 flex items-center gap-2">
                <span class="text-blue-600">"🔍"</span>
                "Feature Analysis Gallery"
            </h2>
            <div class="grid grid-cols-1 gap-12 max-w-5xl mx-auto">
                <For
                    each=items
                    key=|item| item.key
                    children=move |item| view! { <GalleryCard item=item /> }
                />
            </div>
        </section>
    }
}

#[component]
fn GalleryCard(item: GalleryItem) -> impl IntoView {
    let calibration_marker = item.calibration_marker;
    let boxes = item
        .overlays
        .into_iter()
        .map(|overlay| {
            view! {
                <div
                    class=format!("absolute border-2 rounded-sm {}", overlay.style.css_class())
                    style=overlay.rect.to_style()
                >
                    <span class="absolute -top-4 left-0 text-[7px] font-bold bg-white/90 px-1 text-slate-900 uppercase shadow-sm">
                        {overlay.label}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="bg-white rounded-[2.5rem] overflow-hidden border shadow-xl">
            <div
                class="relative w-full bg-slate-100 flex justify-center items-center overflow-hidden"
                style="min-height: 500px; max-height: 75vh"
            >
                <div class="relative inline-block">
                    <img src=item.url class="block h-auto max-w-full object-contain" alt="Perspective Analysis" />
                    <div class="absolute inset-0 pointer-events-none">{boxes}</div>
                </div>
            </div>
            <div class="p-6 border-t flex justify-between items-center bg-white">
                <span class="text-[10px] text-slate-400 font-mono font-bold uppercase">{item.name}</span>
                <Show when=move || calibration_marker>
                    <div class="flex items-center gap-2 bg-yellow-50 text-yellow-700 px-3 py-1 rounded-lg border border-yellow-200">
                        <span>"🛡"</span>
                        <span class="text-[10px] font-bold uppercase">"A4 Scale Reference Verified"</span>
                    </div>
                </Show>
            </div>
        </div>
    }
}
