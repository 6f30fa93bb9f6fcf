//! UIコンポーネント

pub mod comparison_slider;
pub mod error_banner;
pub mod header;
pub mod settings_panel;
pub mod toolbar;
pub mod upload_area;
