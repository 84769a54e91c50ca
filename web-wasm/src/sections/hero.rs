//! ヒーローセクション

use leptos::prelude::*;
use leptos_router::components::A;
use visionestate_common::showcase::{HERO_HIGHLIGHTS, HERO_STATS};

#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="relative min-h-screen flex items-center justify-center overflow-hidden pt-20">
            <div class="absolute top-0 right-0 w-[600px] h-[600px] bg-blue-500/5 rounded-full blur-[120px]"></div>
            <div class="absolute bottom-0 left-0 w-[400px] h-[400px] bg-blue-500/5 rounded-full blur-[100px]"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-4xl mx-auto text-center">
                    <div class="inline-flex items-center gap-2 px-4 py-2 rounded-full bg-blue-50 border border-blue-100 mb-8">
                        <span class="w-1.5 h-1.5 rounded-full bg-blue-600 animate-pulse"></span>
                        <span class="text-sm text-slate-500 font-medium">"AI-Powered Property Intelligence"</span>
                    </div>

                    <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold leading-[1.1] mb-6">
                        <span class="text-slate-900">"Verify properties"</span>
                        <br />
                        <span class="bg-gradient-to-r from-blue-600 to-indigo-500 bg-clip-text text-transparent">
                            "with AI precision"
                        </span>
                    </h1>

                    <p class="text-lg sm:text-xl text-slate-500 max-w-2xl mx-auto mb-8 leading-relaxed">
                        "VisionEstate uses deep learning to verify ownership, estimate floor areas, and detect hidden defects, replacing manual inspections with trusted insights."
                    </p>

                    <div class="flex flex-wrap items-center justify-center gap-4 mb-10">
                        {HERO_HIGHLIGHTS
                            .iter()
                            .map(|item| {
                                view! {
                                    <div class="flex items-center gap-2 text-sm text-slate-500">
                                        <span class="text-blue-600">"✓"</span>
                                        {*item}
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A href="/analysis" attr:class="rounded-full px-8 py-3 bg-blue-600 text-white font-semibold shadow hover:bg-blue-700">
                            "Analyze Property"
                        </A>
                        <a href="#analysis" class="rounded-full px-8 py-3 border border-slate-200 text-slate-700 font-semibold hover:bg-slate-50">
                            "View Demo"
                        </a>
                    </div>

                    <div class="grid grid-cols-3 gap-8 mt-20 pt-10 border-t border-slate-200">
                        {HERO_STATS
                            .iter()
                            .map(|stat| {
                                view! {
                                    <div class="text-center">
                                        <div class="text-3xl sm:text-4xl font-bold text-slate-900">{stat.value}</div>
                                        <div class="text-sm text-slate-500 mt-1">{stat.label}</div>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
