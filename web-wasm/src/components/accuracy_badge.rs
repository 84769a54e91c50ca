//! 校正状態バッジ

use leptos::prelude::*;

#[component]
pub fn AccuracyBadge(#[prop(into)] calibrated: Signal<bool>) -> impl IntoView {
    view! {
        <div class=move || {
            if calibrated.get() {
                "p-4 rounded-2xl border flex items-center gap-3 bg-green-50 border-green-200 text-green-700"
            } else {
                "p-4 rounded-2xl border flex items-center gap-3 bg-amber-50 border-amber-200 text-amber-700"
            }
        }>
            <span class="text-xl">"🛡"</span>
            <div>
                <p class="text-[10px] font-black uppercase tracking-widest">
                    {move || if calibrated.get() { "A4 Calibrated" } else { "Estimated Mode" }}
                </p>
                <p class="text-[10px] opacity-80">
                    {move || {
                        if calibrated.get() {
                            "High accuracy via physical reference."
                        } else {
                            "Standard averages used."
                        }
                    }}
                </p>
            </div>
        </div>
    }
}
