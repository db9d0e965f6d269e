//! The presentation engine: one explicitly owned instance wiring input,
//! the player, the editor preview and the gizmo builder together.
//!
//! The host scheduler owns the engine and passes the scene, the render
//! environment and the optional preview sink into each call:
//!
//! ```ignore
//! let mut engine = PresentationEngine::new(PresentationMode::Playback, options);
//! engine.start(&mut scene);
//!
//! // event loop
//! engine.handle_event(&event);
//!
//! // once per frame
//! let report = engine.frame(dt, &scene, &mut env, None);
//! ```

mod accessors;
pub mod command;
mod options;

pub use command::PresenterCommand;

use crate::environment::RenderEnvironment;
use crate::input::{InputEvent, InputProcessor};
use crate::mode::PresentationMode;
use crate::options::Options;
use crate::player::{Player, SyncOutcome};
use crate::preview::{FrustumGizmo, GizmoSink, LineVertex, PreviewSink, PreviewSync};
use crate::scene::SceneHost;

/// What happened during one [`PresentationEngine::frame`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReport {
    /// Navigation command sampled from input this frame, if any.
    pub command: Option<PresenterCommand>,
    /// Whether that command moved the current index.
    pub index_changed: bool,
    /// Result of the player's camera sync.
    pub outcome: SyncOutcome,
    /// Whether the editor preview was updated.
    pub preview_synced: bool,
}

/// Owns the presentation session for one scene.
pub struct PresentationEngine {
    options: Options,
    player: Player,
    input: InputProcessor,
    preview_sync: PreviewSync,
    gizmo: FrustumGizmo,
    active_preset: Option<String>,
}

impl PresentationEngine {
    /// Create an engine for `mode`. Nothing is discovered until
    /// [`start`](Self::start).
    #[must_use]
    pub fn new(mode: PresentationMode, options: Options) -> Self {
        Self {
            player: Player::new(mode, &options),
            input: InputProcessor::new(
                options.keybindings.clone(),
                options.navigation.clone(),
            ),
            preview_sync: PreviewSync::new(),
            gizmo: FrustumGizmo::from_options(&options.preview),
            options,
            active_preset: None,
        }
    }

    /// Discover slides and seed the live camera. Returns the deck length.
    pub fn start<H: SceneHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let len = self.rescan(host);
        log::info!(
            "presentation started ({}): {len} slide(s)",
            self.player.mode()
        );
        len
    }

    fn rescan<H: SceneHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let len = self.player.rescan(host);
        self.preview_sync.invalidate();
        len
    }

    /// Record a raw input event; it takes effect at the next frame.
    pub fn handle_event(&mut self, event: &InputEvent) {
        self.input.handle_event(event);
    }

    /// Apply a navigation command. Returns whether the index changed.
    /// [`PresenterCommand::Rescan`] needs the scene; use
    /// [`execute_with_host`](Self::execute_with_host).
    pub fn execute(&mut self, command: PresenterCommand) -> bool {
        self.player.execute(command)
    }

    /// Apply any command, including rescans. Returns whether the current
    /// slide changed.
    pub fn execute_with_host<H: SceneHost + ?Sized>(
        &mut self,
        command: PresenterCommand,
        host: &mut H,
    ) -> bool {
        match command {
            PresenterCommand::Rescan => {
                let before = self.player.current_slide();
                let _ = self.rescan(host);
                self.player.current_slide() != before
            }
            other => self.player.execute(other),
        }
    }

    /// Run one tick: sample input, apply at most one navigation command,
    /// sync the live camera, then mirror the current slide into the editor
    /// preview.
    pub fn frame<H, E>(
        &mut self,
        dt: f32,
        host: &H,
        env: &mut E,
        preview: Option<&mut dyn PreviewSink>,
    ) -> FrameReport
    where
        H: SceneHost + ?Sized,
        E: RenderEnvironment + ?Sized,
    {
        let command = self.input.sample(self.player.mode()).command();
        let index_changed =
            command.is_some_and(|command| self.player.execute(command));
        let outcome = self.player.tick(dt, host, env);

        let preview_synced = match preview {
            Some(sink) if self.options.preview.sync_scene_view => {
                self.preview_sync.sync(&self.player, host, sink)
            }
            _ => false,
        };

        FrameReport {
            command,
            index_changed,
            outcome,
            preview_synced,
        }
    }

    /// Force the next frame to mirror the current slide into the preview
    /// (e.g. after the host edited slide cameras).
    pub fn invalidate_preview(&mut self) {
        self.preview_sync.invalidate();
    }

    /// Frustum gizmo lines for every slide, current slide highlighted.
    /// Empty during playback or when frustums are hidden.
    pub fn frustum_lines<H: SceneHost + ?Sized>(
        &self,
        host: &H,
    ) -> Vec<LineVertex> {
        if !self.gizmos_visible() {
            return Vec::new();
        }
        self.gizmo
            .build(host, self.player.deck(), self.player.current_slide())
    }

    /// Hand the frustum gizmo lines to `sink`. Returns the vertex count.
    pub fn draw_gizmos<H: SceneHost + ?Sized>(
        &self,
        host: &H,
        sink: &mut dyn GizmoSink,
    ) -> usize {
        if !self.gizmos_visible() {
            return 0;
        }
        self.gizmo.emit(
            host,
            self.player.deck(),
            self.player.current_slide(),
            sink,
        )
    }

    fn gizmos_visible(&self) -> bool {
        !self.player.mode().is_playing() && self.options.preview.show_frustums
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::camera::{CameraView, Pose};
    use crate::environment::AmbientEnvironment;
    use crate::scene::{ObjectId, Scene, SkyboxMaterial, SlideAttributes};

    #[derive(Default)]
    struct EditorView {
        pivots: Vec<Vec3>,
        repaints: usize,
    }

    impl PreviewSink for EditorView {
        fn set_view(&mut self, pivot: Vec3, _rotation: Quat) {
            self.pivots.push(pivot);
        }

        fn request_repaint(&mut self) {
            self.repaints += 1;
        }
    }

    fn talk() -> (Scene, Vec<ObjectId>) {
        let mut scene = Scene::new();
        let intro = scene.add_section("1 Intro");
        let outro = scene.add_section("2 Outro");
        let mut slides = Vec::new();
        for (parent, x) in [(intro, 0.0), (intro, 10.0), (outro, 20.0)] {
            let pose = Pose::new(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY);
            slides.push(scene.add_slide(Some(parent), "s", CameraView::at(pose)));
        }
        let _ = scene.set_skybox(slides[2], SkyboxMaterial::new("stars"));
        (scene, slides)
    }

    #[test]
    fn key_press_advances_exactly_once() {
        let (mut scene, slides) = talk();
        let mut env = AmbientEnvironment::new();
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, Options::default());
        assert_eq!(engine.start(&mut scene), 3);

        engine.handle_event(&InputEvent::key_down("ArrowRight"));
        let report = engine.frame(0.016, &scene, &mut env, None);
        assert_eq!(report.command, Some(PresenterCommand::Advance));
        assert!(report.index_changed);
        assert_eq!(report.outcome, SyncOutcome::Synced { arrived: true });
        assert_eq!(engine.player().current_slide(), Some(slides[1]));

        // Still held: no further movement.
        let report = engine.frame(0.016, &scene, &mut env, None);
        assert_eq!(report.command, None);
        assert_eq!(engine.player().current_index(), 1);
    }

    #[test]
    fn playback_never_touches_the_preview() {
        let (mut scene, _) = talk();
        let mut env = AmbientEnvironment::new();
        let mut view = EditorView::default();
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, Options::default());
        let _ = engine.start(&mut scene);

        let report = engine.frame(0.016, &scene, &mut env, Some(&mut view));
        assert!(!report.preview_synced);
        assert_eq!(view.repaints, 0);
        assert!(engine.frustum_lines(&scene).is_empty());
    }

    #[test]
    fn authoring_syncs_preview_on_change() {
        let (mut scene, _) = talk();
        let mut env = AmbientEnvironment::new();
        let mut view = EditorView::default();
        let mut engine =
            PresentationEngine::new(PresentationMode::Authoring, Options::default());
        let _ = engine.start(&mut scene);

        assert!(engine.frame(0.016, &scene, &mut env, Some(&mut view)).preview_synced);
        assert!(!engine.frame(0.016, &scene, &mut env, Some(&mut view)).preview_synced);

        // Arrows need Alt while authoring; Space does not.
        engine.handle_event(&InputEvent::key_down("ArrowRight"));
        let report = engine.frame(0.016, &scene, &mut env, Some(&mut view));
        assert_eq!(report.command, None);
        engine.handle_event(&InputEvent::key_down("Space"));
        let report = engine.frame(0.016, &scene, &mut env, Some(&mut view));
        assert!(report.index_changed && report.preview_synced);

        assert_eq!(view.pivots, vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
        assert_eq!(engine.frustum_lines(&scene).len(), 3 * 24);
    }

    #[test]
    fn rescan_through_host_reclamps() {
        let (mut scene, slides) = talk();
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, Options::default());
        let _ = engine.start(&mut scene);
        assert!(engine.execute(PresenterCommand::GoTo { index: 2 }));
        assert!(!engine.execute(PresenterCommand::Rescan));

        let outro = scene.find_by_name("2 Outro").unwrap();
        scene.object_mut(outro).unwrap().tags.clear();
        assert!(engine.execute_with_host(PresenterCommand::Rescan, &mut scene));
        assert_eq!(engine.player().current_slide(), Some(slides[1]));
        assert_eq!(engine.player().len(), 2);
    }

    #[test]
    fn smoothed_slide_arrives_over_frames_with_skybox() {
        let (mut scene, slides) = talk();
        let _ = scene.set_attributes(slides[2], SlideAttributes::with_transition_time(0.5));
        let mut env = AmbientEnvironment::new();
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, Options::default());
        let _ = engine.start(&mut scene);
        assert!(engine.execute(PresenterCommand::GoTo { index: 2 }));

        let first = engine.frame(0.05, &scene, &mut env, None);
        assert_eq!(first.outcome, SyncOutcome::Synced { arrived: false });
        assert_eq!(env.skybox(), Some(&SkyboxMaterial::new("stars")));

        let mut arrived = false;
        for _ in 0..2000 {
            let report = engine.frame(1.0 / 60.0, &scene, &mut env, None);
            if report.outcome == (SyncOutcome::Synced { arrived: true }) {
                arrived = true;
                break;
            }
        }
        assert!(arrived);
        assert_eq!(env.swap_count(), 1);
    }

    #[test]
    fn held_space_does_not_swallow_arrow_press() {
        let (mut scene, _) = talk();
        let mut env = AmbientEnvironment::new();
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, Options::default());
        let _ = engine.start(&mut scene);

        engine.handle_event(&InputEvent::key_down("Space"));
        let _ = engine.frame(0.016, &scene, &mut env, None);
        assert_eq!(engine.current_index(), 1);

        engine.handle_event(&InputEvent::key_down("ArrowRight"));
        let report = engine.frame(0.016, &scene, &mut env, None);
        assert_eq!(report.command, Some(PresenterCommand::Advance));
        assert_eq!(engine.current_index(), 2);
    }

    #[test]
    fn easing_while_authoring_mirrors_the_target_slide() {
        let (mut scene, slides) = talk();
        let _ = scene.set_attributes(slides[1], SlideAttributes::with_transition_time(2.0));
        let mut options = Options::default();
        options.player.snap_while_authoring = false;
        let mut env = AmbientEnvironment::new();
        let mut view = EditorView::default();
        let mut engine = PresentationEngine::new(PresentationMode::Authoring, options);
        let _ = engine.start(&mut scene);
        let _ = engine.frame(1.0 / 60.0, &scene, &mut env, Some(&mut view));

        engine.handle_event(&InputEvent::key_down("Space"));
        for _ in 0..2000 {
            let _ = engine.frame(1.0 / 60.0, &scene, &mut env, Some(&mut view));
        }
        assert!((engine.live_camera().pose.position.x - 10.0).abs() < 1e-2);
        assert_eq!(view.pivots, vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)]);
    }

    #[test]
    fn resize_after_start_refits_fov() {
        let (mut scene, _) = talk();
        let mut engine =
            PresentationEngine::new(PresentationMode::Playback, Options::default());
        let _ = engine.start(&mut scene);
        assert!((engine.live_camera().fovy - 60.0).abs() < 1e-3);

        engine.resize(800, 600);
        assert!((engine.live_camera().fovy - 80.0).abs() < 1e-3);
        assert!((engine.camera_uniform().fovy - 80.0).abs() < 1e-3);
    }
}
