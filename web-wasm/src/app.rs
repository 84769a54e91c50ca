//! メインアプリケーションコンポーネント

use crate::components::toaster::{provide_toaster, ToastViewport};
use crate::pages::{analysis::AnalysisPage, home::HomePage, not_found::NotFound};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use visionestate_common::AnalysisSession;
use web_sys::File;

/// 解析ページのセッション（`web_sys::File` は Send でないのでローカル保持）
pub type SessionSignal = RwSignal<AnalysisSession<File>, LocalStorage>;

#[component]
pub fn App() -> impl IntoView {
    provide_toaster();

    view! {
        <Router>
            <Routes fallback=NotFound>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/analysis") view=AnalysisPage />
            </Routes>
            <ToastViewport />
        </Router>
    }
}
