//! 解析ページ
//!
//! 画像のアップロード → `/reconstruct-room` への送信 → 結果表示。
//! セッションはこのページのものなので、離れるとオブジェクトURLごと破棄する。

use crate::api::FetchClient;
use crate::app::SessionSignal;
use crate::components::{
    accuracy_badge::AccuracyBadge, detection_gallery::DetectionGallery, file_strip::FileStrip,
    footer::Footer, measurement_panel::MeasurementPanel, navbar::Navbar, room_view::RoomView,
    toaster::use_toaster, upload_area::UploadArea,
};
use crate::config;
use leptos::ev::MouseEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use visionestate_common::{notification_for, AnalysisSession, ReconstructionClient, UploadedFile};
use web_sys::{File, Url};

fn revoke_all(urls: impl IntoIterator<Item = String>) {
    for url in urls {
        if let Err(e) = Url::revoke_object_url(&url) {
            tracing::warn!("revoke failed: {:?}", e);
        }
    }
}

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let session: SessionSignal = RwSignal::new_local(AnalysisSession::new());
    let toaster = use_toaster();
    let client = StoredValue::new(FetchClient::new(config::endpoint()));

    on_cleanup(move || {
        if let Some(urls) = session.try_update_untracked(|s| s.clear()) {
            revoke_all(urls);
        }
    });

    let on_files = move |files: Vec<UploadedFile<File>>| {
        let Some(added) = session.try_update(|s| s.add_files(files)) else {
            return;
        };
        revoke_all(added.rejected.into_iter().map(|f| f.preview_url));
        if let Some(n) = added.notification {
            toaster.push(n);
        }
    };

    let on_remove = move |id: u64| {
        if let Some(Some(file)) = session.try_update(|s| s.remove_file(id)) {
            revoke_all([file.preview_url]);
        }
    };

    let on_clear = move |_: MouseEvent| {
        if let Some(urls) = session.try_update(|s| s.clear()) {
            revoke_all(urls);
        }
    };

    let on_analyze = move |_: MouseEvent| {
        // ボタンは解析中に無効化されるが、開始判定はセッション側でも行う
        match session.try_update(|s| s.begin_analysis()) {
            Some(Ok(())) => {}
            Some(Err(e)) => {
                toaster.push(notification_for(&e));
                return;
            }
            None => return,
        }

        let files = session.with_untracked(|s| s.files().to_vec());
        let client = client.get_value();
        spawn_local(async move {
            let outcome = client.reconstruct(&files).await;
            if let Some(n) = session.try_update(|s| s.complete(outcome)) {
                toaster.push(n);
            }
        });
    };

    let has_files = move || session.with(|s| s.has_files());
    let is_analyzing = Signal::derive(move || session.with(|s| s.is_analyzing()));
    let has_result = move || session.with(|s| s.result().is_some());
    let spatial = Signal::derive(move || session.with(|s| s.result().map(|r| r.spatial_data)));
    let calibrated = Signal::derive(move || session.with(|s| s.result().is_some_and(|r| r.is_calibrated)));

    view! {
        <div class="min-h-screen flex flex-col bg-[#F8FAFC]">
            <Navbar />
            <main class="flex-grow pt-28 pb-12 container mx-auto px-4">
                <div class="max-w-4xl mx-auto text-center mb-12">
                    <h1 class="text-4xl font-extrabold text-slate-900 mb-4 tracking-tight">
                        "VisionEstate " <span class="text-blue-600">"Spatial Engine"</span>
                    </h1>
                    <UploadArea disabled=is_analyzing on_files=on_files />

                    <Show when=has_files>
                        <FileStrip session=session on_remove=on_remove />
                        <div class="mt-8 flex items-center justify-center gap-4">
                            <button
                                class="rounded-full px-12 h-14 bg-slate-900 text-white font-semibold shadow-xl disabled:opacity-60"
                                disabled=move || is_analyzing.get()
                                on:click=on_analyze
                            >
                                <span class=move || if is_analyzing.get() { "inline-block animate-spin mr-2" } else { "inline-block mr-2" }>
                                    {move || if is_analyzing.get() { "◌" } else { "🔍" }}
                                </span>
                                {move || session.with(|s| s.trigger_label())}
                            </button>
                            <button
                                class="rounded-full px-6 h-14 border border-slate-200 bg-white text-slate-600 disabled:opacity-60"
                                disabled=move || is_analyzing.get()
                                on:click=on_clear
                            >
                                "Clear"
                            </button>
                        </div>
                    </Show>
                </div>

                <Show when=has_result>
                    <div class="space-y-16">
                        <DetectionGallery session=session />

                        <div class="grid lg:grid-cols-3 gap-10">
                            <div class="lg:col-span-2">
                                <div class="bg-slate-900 rounded-[3rem] h-[600px] overflow-hidden border-[12px] border-white shadow-2xl relative">
                                    <RoomView spatial=spatial />
                                </div>
                            </div>

                            <div class="space-y-6">
                                <AccuracyBadge calibrated=calibrated />
                                <MeasurementPanel session=session />
                            </div>
                        </div>
                    </div>
                </Show>
            </main>
            <Footer />
        </div>
    }
}
