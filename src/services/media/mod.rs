//! 미디어 업로드 서비스
//!
//! - [`media_uploader::MediaUploader`] - 업로드 추상화
//! - [`cloudinary_service::CloudinaryService`] - Cloudinary 구현

pub mod media_uploader;
pub mod cloudinary_service;

pub use cloudinary_service::CloudinaryService;
pub use media_uploader::MediaUploader;
