//! ビルド時設定
//!
//! `VISIONESTATE_ENDPOINT` をビルド時に指定すると解析サービスの送信先を差し替えられる。

use visionestate_common::DEFAULT_ENDPOINT;

/// トーストの表示時間（ミリ秒）
pub const TOAST_DURATION_MS: u32 = 3_500;

pub fn endpoint() -> &'static str {
    resolve_endpoint(option_env!("VISIONESTATE_ENDPOINT"))
}

fn resolve_endpoint(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_ENDPOINT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_endpoint_default() {
        assert_eq!(resolve_endpoint(None), "http://127.0.0.1:8000/reconstruct-room");
        assert_eq!(resolve_endpoint(Some("   ")), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_resolve_endpoint_override() {
        assert_eq!(
            resolve_endpoint(Some(" https://vision.example.com/reconstruct-room ")),
            "https://vision.example.com/reconstruct-room"
        );
    }
}
