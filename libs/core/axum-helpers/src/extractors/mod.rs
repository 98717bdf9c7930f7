//! Extractors whose rejections are [`AppError`](crate::errors::AppError)s,
//! so decoding failures share the error body of every other failure.

pub mod id_path;
pub mod json_body;

pub use id_path::{IdLabel, IdPath};
pub use json_body::JsonBody;
