//! ブラウザ上のテスト（wasm-pack test --headless --chrome）

#![cfg(target_arch = "wasm32")]

use js_sys::Array;
use visionestate_common::{UploadedFile, UPLOAD_FIELD};
use visionestate_web::api::reconstruct::build_form;
use visionestate_web::api::FetchClient;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::File;

wasm_bindgen_test_configure!(run_in_browser);

fn file(name: &str, body: &str) -> UploadedFile<File> {
    let parts = Array::of1(&JsValue::from_str(body));
    let payload = File::new_with_str_sequence(&parts, name).unwrap();
    UploadedFile::new(name, "image/jpeg", format!("blob:{}", name), payload)
}

#[wasm_bindgen_test]
fn test_build_form_uses_one_field_for_all_files() {
    let files = vec![file("front.jpg", "front"), file("back.jpg", "back")];
    let form = build_form(&files).unwrap();

    let entries = form.get_all(UPLOAD_FIELD);
    assert_eq!(entries.length(), 2);
    assert!(form.get_all("file").length() == 0);
}

#[wasm_bindgen_test]
fn test_build_form_keeps_file_names() {
    let files = vec![file("kitchen.jpg", "k")];
    let form = build_form(&files).unwrap();

    let entry: File = form.get(UPLOAD_FIELD).dyn_into().unwrap();
    assert_eq!(entry.name(), "kitchen.jpg");
}

#[wasm_bindgen_test]
fn test_fetch_client_endpoint() {
    let client = FetchClient::new("http://127.0.0.1:8000/reconstruct-room");
    assert_eq!(client.endpoint(), "http://127.0.0.1:8000/reconstruct-room");
}
