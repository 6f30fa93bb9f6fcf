//! ClearView Common Library
//!
//! Web(WASM)側と共有される型とユーティリティ

pub mod data_url;
pub mod error;
pub mod session;
pub mod slider;

pub use data_url::{
    build_data_url, decode_image_base64, sniff_image_format, split_data_url,
    validate_image_mime, ImagePayload, OUTPUT_MIME_TYPE,
};
pub use error::{Error, Result};
pub use session::{ProcessingStatus, Session};
pub use slider::{
    position_from_pointer, step_position, DragGesture, DragSource, DEFAULT_POSITION, KEY_STEP,
};
