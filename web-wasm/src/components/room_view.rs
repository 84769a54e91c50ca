//! 部屋のワイヤーフレーム表示
//!
//! 推定寸法の直方体をSVGで描く。ドラッグかスライダーで水平に回転できる。

use leptos::prelude::*;
use visionestate_common::{project_room, Camera, SpatialData};
use web_sys::PointerEvent;

const VIEW_W: f64 = 640.0;
const VIEW_H: f64 = 480.0;
const PADDING: f64 = 48.0;
// ドラッグ1pxあたりの回転角
const DRAG_DEG_PER_PX: f64 = 0.5;

#[component]
pub fn RoomView(#[prop(into)] spatial: Signal<Option<SpatialData>>) -> impl IntoView {
    let (camera, set_camera) = signal(Camera::default());
    let (drag_x, set_drag_x) = signal(None::<i32>);

    let projection = move || {
        spatial
            .get()
            .map(|dims| project_room(&dims, &camera.get(), (VIEW_W, VIEW_H), PADDING))
            .unwrap_or_default()
    };

    let on_pointerdown = move |ev: PointerEvent| set_drag_x.set(Some(ev.client_x()));
    let on_pointermove = move |ev: PointerEvent| {
        if let Some(last) = drag_x.get_untracked() {
            let dx = ev.client_x() - last;
            set_camera.update(|c| *c = c.orbit(f64::from(dx) * DRAG_DEG_PER_PX));
            set_drag_x.set(Some(ev.client_x()));
        }
    };
    let on_pointerup = move |_: PointerEvent| set_drag_x.set(None);

    view! {
        <div class="relative h-full w-full">
            <svg
                viewBox=format!("0 0 {} {}", VIEW_W, VIEW_H)
                class="h-full w-full cursor-grab touch-none select-none"
                on:pointerdown=on_pointerdown
                on:pointermove=on_pointermove
                on:pointerup=on_pointerup
                on:pointerleave=on_pointerup
            >
                {move || {
                    let p = projection();
                    let floor = p.floor_points();
                    let edges = p
                        .edges
                        .into_iter()
                        .map(|e| {
                            view! {
                                <line
                                    x1=format!("{:.2}", e.from.x)
                                    y1=format!("{:.2}", e.from.y)
                                    x2=format!("{:.2}", e.to.x)
                                    y2=format!("{:.2}", e.to.y)
                                    stroke="#3b82f6"
                                    stroke-opacity={if e.floor { "1" } else { "0.6" }}
                                    stroke-width="2"
                                />
                            }
                        })
                        .collect_view();
                    view! {
                        <polygon points=floor fill="#1e293b" fill-opacity="0.8" />
                        {edges}
                    }
                }}
            </svg>
            <div class="absolute bottom-6 left-1/2 -translate-x-1/2 flex items-center gap-3 bg-white/10 backdrop-blur px-4 py-2 rounded-full text-white text-xs">
                <span>"Rotate"</span>
                <input
                    type="range"
                    min="0"
                    max="359"
                    prop:value=move || camera.get().yaw_deg.round().to_string()
                    on:input=move |ev| {
                        if let Ok(yaw) = event_target_value(&ev).parse::<f64>() {
                            set_camera.update(|c| c.yaw_deg = yaw);
                        }
                    }
                />
            </div>
        </div>
    }
}
