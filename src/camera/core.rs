use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::options::CameraOptions;

/// World-space placement of a camera: position plus orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    /// Eye position in world space.
    pub position: Vec3,
    /// Orientation; the camera looks down its local `-Z` axis.
    pub rotation: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    /// Pose at the origin looking down `-Z`.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
    };

    /// Create a pose from a position and rotation.
    #[must_use]
    pub fn new(position: Vec3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    /// Pose at `eye` oriented so that it faces `target`.
    ///
    /// Degenerate input (eye on top of target) keeps the identity rotation.
    #[must_use]
    pub fn looking_at(eye: Vec3, target: Vec3, up: Vec3) -> Self {
        if (target - eye).length_squared() <= f32::EPSILON {
            return Self::new(eye, Quat::IDENTITY);
        }
        let view = Mat4::look_at_rh(eye, target, up);
        let rotation = Quat::from_mat4(&view).inverse().normalize();
        Self::new(eye, rotation)
    }

    /// Unit vector the camera is looking along.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Camera-local up direction in world space.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::Y
    }

    /// World-to-camera transform.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Straight-line distance between the two eye positions.
    #[must_use]
    pub fn distance_to(&self, other: &Self) -> f32 {
        self.position.distance(other.position)
    }

    /// Smallest rotation angle (radians) between the two orientations.
    #[must_use]
    pub fn angle_to(&self, other: &Self) -> f32 {
        self.rotation.angle_between(other.rotation)
    }

    /// Whether both position and orientation agree within tolerance.
    ///
    /// Rotations are compared component-wise, treating `q` and `-q` as the
    /// same orientation.
    #[must_use]
    pub fn approx_eq(&self, other: &Self, epsilon: f32) -> bool {
        self.distance_to(other) <= epsilon
            && (self.rotation.abs_diff_eq(other.rotation, epsilon)
                || self.rotation.abs_diff_eq(-other.rotation, epsilon))
    }
}

/// Camera capability attached to a slide object.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraView {
    /// Viewpoint of the slide.
    pub pose: Pose,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Whether this camera renders on its own. Playback discovery turns
    /// slide cameras off so only the live camera draws.
    pub enabled: bool,
}

impl Default for CameraView {
    fn default() -> Self {
        Self {
            pose: Pose::IDENTITY,
            fovy: 60.0,
            aspect: 16.0 / 9.0,
            znear: 0.3,
            zfar: 1000.0,
            enabled: true,
        }
    }
}

impl CameraView {
    /// Default camera placed at `pose`.
    #[must_use]
    pub fn at(pose: Pose) -> Self {
        Self {
            pose,
            ..Self::default()
        }
    }

    /// Replace the clip planes.
    #[must_use]
    pub fn with_clip_planes(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    /// World-to-camera transform of the slide pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.pose.view_matrix()
    }

    /// Perspective projection matrix ([0,1] depth range).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

/// The single camera that actually renders during a presentation.
///
/// Its pose is driven toward the current slide every tick; its clip planes
/// are copied from the slide without interpolation.
#[derive(Debug, Clone, PartialEq)]
pub struct LiveCamera {
    /// Current pose.
    pub pose: Pose,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for LiveCamera {
    fn default() -> Self {
        Self::from_options(&CameraOptions::default())
    }
}

impl LiveCamera {
    /// Build a live camera from configured projection parameters.
    #[must_use]
    pub fn from_options(options: &CameraOptions) -> Self {
        Self {
            pose: Pose::IDENTITY,
            fovy: options.fovy,
            aspect: options.aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Copy near/far clip planes from a slide camera.
    pub fn apply_clip_planes(&mut self, view: &CameraView) {
        self.znear = view.znear;
        self.zfar = view.zfar;
    }

    /// Jump straight to a slide camera's pose.
    pub fn snap_to(&mut self, view: &CameraView) {
        self.pose = view.pose;
    }

    /// Widen or narrow the vertical field of view so the horizontal extent
    /// matches what the slides were composed for at `design_aspect`.
    pub fn correct_fov_for_aspect(&mut self, design_aspect: f32) {
        if self.aspect > 0.0 && design_aspect > 0.0 {
            self.fovy = self.fovy * design_aspect / self.aspect;
        }
    }

    /// Update the viewport aspect ratio (e.g. after a window resize).
    pub fn resize(&mut self, width: u32, height: u32) {
        if height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }

    /// Snapshot as a [`CameraView`] (enabled).
    #[must_use]
    pub fn as_view(&self) -> CameraView {
        CameraView {
            pose: self.pose,
            fovy: self.fovy,
            aspect: self.aspect,
            znear: self.znear,
            zfar: self.zfar,
            enabled: true,
        }
    }

    /// GPU uniform for the rendering collaborator.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(self);
        uniform
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera metadata.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction.
    pub forward: [f32; 3],
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Padding for GPU alignment.
    pub(crate) _pad: [f32; 2],
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 16.0 / 9.0,
            forward: [0.0, 0.0, -1.0],
            fovy: 60.0,
            znear: 0.3,
            zfar: 1000.0,
            _pad: [0.0; 2],
        }
    }

    /// Update uniform fields from the live camera's current state.
    pub fn update_view_proj(&mut self, camera: &LiveCamera) {
        self.view_proj = camera.as_view().view_projection().to_cols_array_2d();
        self.position = camera.pose.position.to_array();
        self.aspect = camera.aspect;
        self.forward = camera.pose.forward().to_array();
        self.fovy = camera.fovy;
        self.znear = camera.znear;
        self.zfar = camera.zfar;
    }
}
