//! 解析サービス連携

pub mod reconstruct;

pub use reconstruct::FetchClient;
