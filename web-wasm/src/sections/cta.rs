//! 登録導線セクション

use leptos::prelude::*;
use leptos_router::components::A;
use visionestate_common::showcase::CTA_BADGES;

#[component]
pub fn CtaSection() -> impl IntoView {
    let last = CTA_BADGES.len() - 1;

    view! {
        <section class="py-24 lg:py-32 relative overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[400px] bg-blue-500/10 rounded-full blur-[150px]"></div>

            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="max-w-4xl mx-auto p-12 lg:p-16 text-center rounded-3xl border border-slate-200 bg-white/80 backdrop-blur">
                    <div class="w-20 h-20 mx-auto rounded-3xl bg-blue-50 flex items-center justify-center mb-8 text-4xl">"✨"</div>

                    <h2 class="text-3xl sm:text-4xl lg:text-5xl font-bold text-slate-900 mb-6">
                        "Ready to Democratize Trust in Real Estate?"
                    </h2>
                    <p class="text-lg text-slate-500 max-w-2xl mx-auto mb-10">
                        "Join VisionEstate and transform how you evaluate properties. Replace manual inspections with AI-powered verification and make data-driven decisions with confidence."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <A href="/analysis" attr:class="rounded-full px-8 py-3 bg-blue-600 text-white font-semibold shadow hover:bg-blue-700">
                            "Get Started Free →"
                        </A>
                        <a href="#how-it-works" class="rounded-full px-8 py-3 border border-slate-200 text-slate-700 font-semibold hover:bg-slate-50">
                            "Schedule Demo"
                        </a>
                    </div>

                    <div class="flex flex-wrap items-center justify-center gap-6 mt-12 pt-8 border-t border-slate-200/50">
                        {CTA_BADGES
                            .iter()
                            .enumerate()
                            .map(|(i, (strong, rest))| {
                                view! {
                                    <div class="text-sm text-slate-500">
                                        <span class="text-slate-900 font-medium">{*strong}</span>
                                        " "
                                        {*rest}
                                    </div>
                                    {(i < last).then(|| view! { <div class="w-1 h-1 rounded-full bg-slate-400"></div> })}
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
