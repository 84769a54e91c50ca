//! トップページのセクション

pub mod analysis_showcase;
pub mod cta;
pub mod features;
pub mod hero;
pub mod how_it_works;
