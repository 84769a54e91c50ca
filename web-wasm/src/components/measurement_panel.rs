//! 寸法パネル
//!
//! 単位の切替は表示だけを更新し、再解析はしない。

use crate::app::SessionSignal;
use leptos::prelude::*;
use visionestate_common::{DisplayUnit, MeasurementSummary};

#[component]
pub fn MeasurementPanel(session: SessionSignal) -> impl IntoView {
    let summary = move || session.with(|s| s.measurements());
    let current_unit = move || session.with(|s| s.unit());

    let row = move |icon: &'static str, label: &'static str, pick: fn(&MeasurementSummary) -> String| {
        view! {
            <div class="flex justify-between p-4 bg-slate-50 rounded-2xl border text-sm items-center">
                <div class="flex items-center gap-3">
                    <span class="text-slate-400">{icon}</span>
                    <span class="text-slate-500 font-medium">{label}</span>
                </div>
                <span class="font-bold text-slate-900">
                    {move || summary().map(|m| pick(&m)).unwrap_or_default()}
                </span>
            </div>
        }
    };

    view! {
        <div class="bg-white p-8 rounded-[2rem] border shadow-sm border-slate-100">
            <div class="flex items-center justify-between mb-8">
                <h3 class="font-bold flex items-center gap-2 tracking-tight">"Measurements"</h3>
                <div class="flex bg-slate-100 p-1 rounded-lg gap-1">
                    {DisplayUnit::ALL
                        .into_iter()
                        .map(|unit| {
                            view! {
                                <button
                                    class=move || {
                                        if current_unit() == unit {
                                            "px-2 py-1 text-[9px] font-bold rounded uppercase transition-all bg-white shadow text-blue-600"
                                        } else {
                                            "px-2 py-1 text-[9px] font-bold rounded uppercase transition-all text-slate-400"
                                        }
                                    }
                                    on:click=move |_| session.update(|s| s.set_unit(unit))
                                >
                                    {unit.symbol()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="space-y-4">
                {row("↔", "Width", |m| m.width.clone())}
                {row("↕", "Height", |m| m.height.clone())}
                {row("⤢", "Length", |m| m.length.clone())}
                <div class="mt-8 p-8 bg-blue-600 text-white rounded-[2rem] text-center shadow-lg transition-all hover:scale-[1.02]">
                    <p class="text-[10px] opacity-80 uppercase font-black tracking-widest mb-2">"Total Floor Area"</p>
                    <p class="text-4xl font-bold tracking-tight">
                        {move || summary().map(|m| m.area).unwrap_or_default()}
                    </p>
                </div>
            </div>
        </div>
    }
}
