//! 利用手順セクション

use leptos::prelude::*;
use visionestate_common::showcase::STEPS;

#[component]
pub fn HowItWorksSection() -> impl IntoView {
    view! {
        <section id="how-it-works" class="py-24 lg:py-32 relative overflow-hidden">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="text-center max-w-2xl mx-auto mb-16">
                    <span class="text-blue-600 font-medium text-sm uppercase tracking-wider">"Process"</span>
                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-slate-900 mt-3 mb-5">"How it works"</h2>
                    <p class="text-lg text-slate-500">"From upload to insight in four simple steps."</p>
                </div>

                <div class="max-w-4xl mx-auto grid md:grid-cols-2 gap-6">
                    {STEPS
                        .iter()
                        .enumerate()
                        .map(|(index, step)| {
                            view! {
                                <div class="bg-white p-8 rounded-2xl border border-slate-200 h-full hover:-translate-y-1 transition-transform">
                                    <div class="flex items-center gap-4 mb-4">
                                        <span class="w-8 h-8 rounded-full bg-blue-600 text-white flex items-center justify-center text-sm font-bold">
                                            {index + 1}
                                        </span>
                                        <span class="text-slate-400">{step.icon}</span>
                                    </div>
                                    <h3 class="text-lg font-semibold text-slate-900 mb-2">{step.title}</h3>
                                    <p class="text-slate-500 text-sm leading-relaxed">{step.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
