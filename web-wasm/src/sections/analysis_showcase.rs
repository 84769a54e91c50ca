//! デモ解析セクション
//!
//! 固定の物件データをタブで切り替えて見せる。通信は行わない。

use leptos::prelude::*;
use leptos_router::components::A;
use visionestate_common::showcase::{
    confidence_percent, format_sqft, DemoTab, PropertyShowcase, DEMO_PROPERTY,
};

const TILE: &str = "bg-slate-50 rounded-xl p-4 text-center";

static PROPERTY: PropertyShowcase = DEMO_PROPERTY;

fn overview_tab(p: &'static PropertyShowcase) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div class="space-y-4">
                <h3 class="text-base font-semibold text-slate-900 flex items-center gap-2">
                    <span class="text-green-600">"✓"</span>
                    "Document Verification"
                </h3>
                <div class="space-y-3">
                    {p.verification
                        .iter()
                        .map(|(key, value)| {
                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-slate-100">
                                    <span class="text-slate-500 text-sm">{*key}</span>
                                    <span class="text-slate-900 text-sm font-medium flex items-center gap-2">
                                        <span class="text-green-600">"✓"</span>
                                        {*value}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div class="grid grid-cols-2 gap-3">
                <div class=TILE>
                    <div class="text-xl font-bold text-slate-900">{format_sqft(p.area.estimated_sqft)}</div>
                    <div class="text-xs text-slate-500 mt-1">"Verified Area"</div>
                </div>
                <div class=TILE>
                    <div class="text-xl font-bold text-slate-900">{p.quality_score}</div>
                    <div class="text-xs text-slate-500 mt-1">"Quality Score"</div>
                </div>
                <div class="bg-blue-50 rounded-xl p-4 text-center border border-blue-100">
                    <div class="text-xl font-bold text-blue-600">{p.estimated_value}</div>
                    <div class="text-xs text-slate-500 mt-1">"Est. Value"</div>
                </div>
                <div class="bg-green-50 rounded-xl p-4 text-center border border-green-100">
                    <div class="text-xl font-bold text-green-600">{p.risk}</div>
                    <div class="text-xs text-slate-500 mt-1">"Risk Level"</div>
                </div>
            </div>
        </div>
    }
}

fn area_tab(p: &'static PropertyShowcase) -> impl IntoView {
    let area = p.area;
    view! {
        <div class="space-y-6">
            <div class="grid md:grid-cols-3 gap-4">
                <div class="bg-slate-50 rounded-xl p-6 text-center">
                    <div class="text-2xl font-bold text-slate-900">{format_sqft(area.estimated_sqft)}</div>
                    <div class="text-xs text-slate-500 mt-1">"AI Estimated"</div>
                </div>
                <div class="bg-slate-50 rounded-xl p-6 text-center">
                    <div class="text-2xl font-bold text-slate-400">{format_sqft(area.claimed_sqft)}</div>
                    <div class="text-xs text-slate-500 mt-1">"Seller Claimed"</div>
                </div>
                <div class="bg-green-50 rounded-xl p-6 text-center border border-green-100">
                    <div class="text-2xl font-bold text-green-600">{format!("{:.1}%", area.accuracy_percent())}</div>
                    <div class="text-xs text-slate-500 mt-1">"Accuracy"</div>
                </div>
            </div>
            <div class="bg-blue-50 rounded-xl p-4 border border-blue-100">
                <p class="text-sm text-slate-500">
                    <span class="text-blue-600 font-medium">"Method: "</span>
                    {format!("{}. {}", p.method, area.summary())}
                </p>
            </div>
        </div>
    }
}

fn quality_tab(p: &'static PropertyShowcase) -> impl IntoView {
    view! {
        <div class="grid md:grid-cols-2 gap-8">
            <div>
                <h3 class="text-base font-semibold text-slate-900 mb-4 flex items-center gap-2">
                    <span class="text-amber-500">"⚠"</span>
                    {format!("Issues ({})", p.defects.len())}
                </h3>
                <div class="space-y-2">
                    {p.defects
                        .iter()
                        .map(|defect| {
                            view! {
                                <div class="flex items-center justify-between p-3 bg-slate-50 rounded-xl">
                                    <div>
                                        <div class="font-medium text-slate-900 text-sm">{defect.name}</div>
                                        <div class="text-xs text-slate-500">
                                            {format!("Severity: {}", defect.severity.as_str())}
                                        </div>
                                    </div>
                                    <div class="text-xs text-slate-500 bg-slate-100 px-2 py-1 rounded-full">
                                        {confidence_percent(defect.confidence)}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <div>
                <h3 class="text-base font-semibold text-slate-900 mb-4 flex items-center gap-2">
                    <span class="text-green-600">"✓"</span>
                    {format!("Amenities ({})", p.amenities.len())}
                </h3>
                <div class="space-y-2">
                    {p.amenities
                        .iter()
                        .map(|amenity| {
                            view! {
                                <div class="flex items-center justify-between p-3 bg-slate-50 rounded-xl">
                                    <div class="font-medium text-slate-900 text-sm">{amenity.name}</div>
                                    <div class="text-xs text-slate-500 bg-slate-100 px-2 py-1 rounded-full">
                                        {confidence_percent(amenity.confidence)}
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

fn predictions_tab(p: &'static PropertyShowcase) -> impl IntoView {
    let predictions = p.predictions();
    let last = predictions.len() - 1;
    view! {
        <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-4">
            {predictions
                .into_iter()
                .enumerate()
                .map(|(i, prediction)| {
                    // 先頭は強調、末尾（リスク）は緑
                    let (tile, value) = match i {
                        0 => ("bg-blue-50 rounded-xl p-5 border border-blue-100", "text-2xl font-bold text-slate-900"),
                        i if i == last => ("bg-green-50 rounded-xl p-5 border border-green-100", "text-2xl font-bold text-green-600"),
                        _ => ("bg-slate-50 rounded-xl p-5", "text-2xl font-bold text-slate-900"),
                    };
                    view! {
                        <div class=tile>
                            <div class=value>{prediction.value}</div>
                            <div class="text-xs text-slate-500 mt-1">{prediction.label}</div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn AnalysisShowcase() -> impl IntoView {
    let (active, set_active) = signal(DemoTab::default());

    view! {
        <section id="analysis" class="py-24 lg:py-32 relative overflow-hidden">
            <div class="absolute inset-0 bg-slate-100/40"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center max-w-2xl mx-auto mb-16">
                    <span class="text-blue-600 font-medium text-sm uppercase tracking-wider">"Demo"</span>
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-slate-900 mt-3 mb-5">"See it in action"</h2>
                    <p class="text-lg text-slate-500">"Explore a sample property analysis showing our AI capabilities."</p>
                </div>

                <div class="max-w-4xl mx-auto bg-white rounded-2xl border border-slate-200 shadow-lg overflow-hidden">
                    <div class="flex border-b border-slate-200 overflow-x-auto" role="tablist">
                        {DemoTab::ALL
                            .into_iter()
                            .map(|tab| {
                                view! {
                                    <button
                                        id=tab.id()
                                        role="tab"
                                        aria-selected=move || (active.get() == tab).to_string()
                                        class=move || {
                                            if active.get() == tab {
                                                "flex items-center gap-2 px-6 py-4 text-sm font-medium whitespace-nowrap text-blue-600 border-b-2 border-blue-600 bg-blue-50"
                                            } else {
                                                "flex items-center gap-2 px-6 py-4 text-sm font-medium whitespace-nowrap text-slate-500 hover:text-slate-900 hover:bg-slate-50"
                                            }
                                        }
                                        on:click=move |_| set_active.set(tab)
                                    >
                                        <span>{tab.icon()}</span>
                                        {tab.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="p-8">
                        {move || match active.get() {
                            DemoTab::Overview => overview_tab(&PROPERTY).into_any(),
                            DemoTab::Area => area_tab(&PROPERTY).into_any(),
                            DemoTab::Quality => quality_tab(&PROPERTY).into_any(),
                            DemoTab::Predictions => predictions_tab(&PROPERTY).into_any(),
                        }}
                    </div>

                    <div class="px-8 py-5 border-t border-slate-200 bg-slate-50">
                        <div class="flex flex-col sm:flex-row items-center justify-between gap-4">
                            <p class="text-sm text-slate-500">"This is a demo. Upload your property for real results."</p>
                            <A href="/analysis" attr:class="rounded-lg px-4 py-2 bg-slate-900 text-white text-sm font-medium">
                                "Try With Your Property"
                            </A>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
