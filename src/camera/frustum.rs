//! Frustum corner points for slide cameras, used to draw each slide
//! camera's frustum as an editor gizmo.

use glam::Vec3;

use super::core::CameraView;

/// World-space frustum corners of `view`.
///
/// Order: near plane bottom-left, bottom-right, top-right, top-left, then
/// the same four on the far plane. `max_depth` pulls the far plane in so
/// gizmos for cameras with huge far clips stay readable.
#[must_use]
pub fn frustum_corners(view: &CameraView, max_depth: Option<f32>) -> [Vec3; 8] {
    let far = max_depth.map_or(view.zfar, |depth| view.zfar.min(depth));
    let far = far.max(view.znear);
    let tan_half = (view.fovy.to_radians() * 0.5).tan();

    let mut corners = [Vec3::ZERO; 8];
    for (plane, depth) in [view.znear, far].into_iter().enumerate() {
        let half_h = depth * tan_half;
        let half_w = half_h * view.aspect;
        let local = [
            Vec3::new(-half_w, -half_h, -depth),
            Vec3::new(half_w, -half_h, -depth),
            Vec3::new(half_w, half_h, -depth),
            Vec3::new(-half_w, half_h, -depth),
        ];
        for (i, point) in local.into_iter().enumerate() {
            corners[plane * 4 + i] =
                view.pose.position + view.pose.rotation * point;
        }
    }
    corners
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::core::Pose;

    fn view_from_ten() -> CameraView {
        CameraView {
            pose: Pose::looking_at(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y),
            fovy: 45.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 100.0,
            enabled: true,
        }
    }

    #[test]
    fn corners_lie_on_the_clip_planes() {
        let view = view_from_ten();
        let corners = frustum_corners(&view, None);
        let forward = view.pose.forward();

        for near in &corners[..4] {
            let depth = (*near - view.pose.position).dot(forward);
            assert!((depth - view.znear).abs() < 1e-4);
        }
        for far in &corners[4..] {
            let depth = (*far - view.pose.position).dot(forward);
            assert!((depth - view.zfar).abs() < 1e-2);
        }
    }

    #[test]
    fn max_depth_clamps_far_corners() {
        let view = view_from_ten();
        let corners = frustum_corners(&view, Some(5.0));
        let depth = (corners[6] - view.pose.position).dot(view.pose.forward());
        assert!((depth - 5.0).abs() < 1e-4);

        // Never in front of the near plane
        let tiny = frustum_corners(&view, Some(0.0));
        let depth = (tiny[4] - view.pose.position).dot(view.pose.forward());
        assert!((depth - view.znear).abs() < 1e-4);
    }

    #[test]
    fn corners_follow_the_aspect_ratio() {
        let mut view = view_from_ten();
        view.aspect = 2.0;
        let corners = frustum_corners(&view, Some(10.0));
        let width = corners[5].distance(corners[4]);
        let height = corners[6].distance(corners[5]);
        assert!((width / height - 2.0).abs() < 1e-3);
    }
}
