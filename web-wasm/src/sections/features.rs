//! 機能紹介セクション

use leptos::prelude::*;
use visionestate_common::showcase::{Accent, FEATURES};

#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section id="features" class="py-24 lg:py-32 relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-white via-slate-50 to-white"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center max-w-3xl mx-auto mb-16">
                    <span class="text-blue-600 font-medium text-sm uppercase tracking-wider">"Core Capabilities"</span>
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-slate-900 mt-4 mb-6">
                        "A Multimodal AI Verification Engine"
                    </h2>
                    <p class="text-lg text-slate-500">
                        "Six integrated AI modules work together to transform unverified listings into trusted, data-driven property insights."
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    {FEATURES
                        .iter()
                        .map(|feature| {
                            let icon_class = match feature.accent {
                                Accent::Primary => "bg-blue-50 text-blue-600",
                                Accent::Accent => "bg-indigo-50 text-indigo-600",
                            };
                            view! {
                                <div class="group p-8 rounded-2xl border border-slate-200 bg-white/70 hover:bg-white transition-all duration-300">
                                    <div class=format!(
                                        "w-14 h-14 rounded-xl flex items-center justify-center mb-6 text-2xl transition-all duration-300 group-hover:scale-110 {}",
                                        icon_class,
                                    )>{feature.icon}</div>
                                    <h3 class="text-xl font-semibold text-slate-900 mb-3">{feature.title}</h3>
                                    <p class="text-slate-500 leading-relaxed">{feature.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
