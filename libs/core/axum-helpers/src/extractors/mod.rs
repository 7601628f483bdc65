//! Request extractors that reject with [`AppError`](crate::AppError).

pub mod id_path;
pub mod json_payload;

pub use id_path::IdPath;
pub use json_payload::JsonPayload;
