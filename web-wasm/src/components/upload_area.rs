//! アップロードエリアコンポーネント
//!
//! ドラッグ&ドロップとクリック選択の両方に対応する。
//! 画像以外はこの時点で弾き、プレビュー用のオブジェクトURLを作らない。

use leptos::html::Input;
use leptos::prelude::*;
use visionestate_common::{is_image_mime, UploadedFile};
use web_sys::{DragEvent, File, FileList, Url};

/// FileList → UploadedFile（画像のみ）
fn collect_images(files: FileList) -> Vec<UploadedFile<File>> {
    let mut images = Vec::new();
    for i in 0..files.length() {
        let Some(file) = files.get(i) else { continue };
        let mime_type = file.type_();
        if !is_image_mime(&mime_type) {
            tracing::debug!(name = %file.name(), mime = %mime_type, "skipping non-image drop");
            continue;
        }
        match Url::create_object_url_with_blob(&file) {
            Ok(url) => images.push(UploadedFile::new(file.name(), mime_type, url, file)),
            Err(e) => tracing::warn!(name = %file.name(), "object URL failed: {:?}", e),
        }
    }
    images
}

#[component]
pub fn UploadArea<F>(
    #[prop(into)] disabled: Signal<bool>,
    on_files: F,
) -> impl IntoView
where
    F: Fn(Vec<UploadedFile<File>>) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);
    let input_ref: NodeRef<Input> = NodeRef::new();

    let on_drop = {
        let on_files = on_files.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if disabled.get_untracked() {
                return;
            }

            if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
                let images = collect_images(files);
                if !images.is_empty() {
                    on_files(images);
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        if !disabled.get_untracked() {
            set_is_dragover.set(true);
        }
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = move |_| {
        if disabled.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else { return };
        if let Some(files) = input.files() {
            let images = collect_images(files);
            if !images.is_empty() {
                on_files(images);
            }
        }
        // 同じファイルを選び直しても change が発火するように
        input.set_value("");
    };

    view! {
        // input をドロップ領域の外に置き、click の再入を避ける
        <input
            node_ref=input_ref
            type="file"
            accept="image/*"
            multiple=true
            class="hidden"
            on:change=on_change
        />
        <div
            class=move || {
                let mut classes = vec![
                    "mt-10 p-12 border-2 border-dashed rounded-[2rem] transition-all cursor-pointer bg-white hover:border-blue-400 shadow-sm",
                ];
                if is_dragover.get() {
                    classes.push("border-blue-500 bg-blue-50");
                } else {
                    classes.push("border-slate-200");
                }
                if disabled.get() {
                    classes.push("opacity-60 cursor-not-allowed");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <div class="text-4xl mb-4 text-slate-400">"⬆"</div>
            <p class="font-bold text-slate-700">"Drop room perspectives here"</p>
            <p class="text-sm text-slate-400 mt-1">"or click to choose images (JPEG, PNG, WebP)"</p>
        </div>
    }
}
