//! Camera types shared by slides and the live presentation camera.
//!
//! Provides poses, the slide camera capability, the live camera with its
//! GPU uniform, and the frustum corners drawn by the editor preview.

/// Poses, slide camera capability, live camera and GPU uniform.
pub mod core;
/// Frustum corner points.
pub mod frustum;

pub use self::core::{CameraUniform, CameraView, LiveCamera, Pose};
pub use self::frustum::frustum_corners;
