//! トップページ

use crate::components::{footer::Footer, navbar::Navbar};
use crate::sections::{
    analysis_showcase::AnalysisShowcase, cta::CtaSection, features::FeaturesSection,
    hero::HeroSection, how_it_works::HowItWorksSection,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white">
            <Navbar />
            <main>
                <HeroSection />
                <FeaturesSection />
                <HowItWorksSection />
                <AnalysisShowcase />
                <CtaSection />
            </main>
            <Footer />
        </div>
    }
}
