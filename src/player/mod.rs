//! The presentation player: current slide index, the live camera, and the
//! per-tick sync that drives the camera toward the current slide.
//!
//! ```text
//!           advance / retreat / go_to (clamped)
//!   ┌────────────────────────────────────────────┐
//!   ▼                                            │
//! [index ∈ 0..N] ──tick──▶ clip planes + skybox (instant)
//!   ▲                      pose (snap or exponential approach)
//!   │ rescan (reclamp, reseed)
//! [EMPTY] ── inert: no sync ──
//! ```

mod navigation;

use crate::animation::behavior_for;
use crate::camera::LiveCamera;
use crate::environment::RenderEnvironment;
use crate::mode::PresentationMode;
use crate::options::{CameraOptions, DiscoveryOptions, Options, PlayerOptions};
use crate::scene::{ObjectId, SceneHost, SkyboxMaterial};
use crate::slides::{discover, SlideDeck};

/// Result of one [`Player::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The deck is empty; nothing was touched.
    Inert,
    /// The current slide has no camera this tick; nothing was touched.
    MissingCamera(ObjectId),
    /// The live camera was synced toward the current slide.
    Synced {
        /// Whether the live pose now matches the slide within tolerance.
        arrived: bool,
    },
}

/// Owns the slide deck, the current index and the live camera.
#[derive(Debug, Clone)]
pub struct Player {
    mode: PresentationMode,
    options: PlayerOptions,
    discovery: DiscoveryOptions,
    camera_options: CameraOptions,
    deck: SlideDeck,
    current_index: usize,
    live_camera: LiveCamera,
    /// Last skybox applied; slides without one keep it.
    skybox: Option<SkyboxMaterial>,
}

impl Player {
    /// Create an inert player. Call [`rescan`](Self::rescan) to discover
    /// slides.
    #[must_use]
    pub fn new(mode: PresentationMode, options: &Options) -> Self {
        Self {
            mode,
            options: options.player.clone(),
            discovery: options.discovery.clone(),
            camera_options: options.camera.clone(),
            deck: SlideDeck::empty(),
            current_index: 0,
            live_camera: LiveCamera::from_options(&options.camera),
            skybox: None,
        }
    }

    /// Rebuild the deck from `host`, reclamp the index and reseed the live
    /// camera from the current slide. Returns the new deck length.
    ///
    /// A sectioned scene with slides but no sections is logged and leaves
    /// the player inert.
    pub fn rescan<H: SceneHost + ?Sized>(&mut self, host: &mut H) -> usize {
        self.deck = match discover(host, &self.discovery, self.mode) {
            Ok(deck) => deck,
            Err(err) => {
                log::warn!("slide discovery failed: {err}");
                SlideDeck::empty()
            }
        };
        self.current_index = self
            .deck
            .last_index()
            .map_or(0, |last| self.current_index.min(last));
        self.seed(host);
        self.deck.len()
    }

    /// Copy the current slide's clip planes and skybox and snap the pose.
    fn seed<H: SceneHost + ?Sized>(&mut self, host: &H) {
        let Some(slide) = self.current_slide() else {
            self.skybox = None;
            return;
        };
        if let Some(view) = host.camera(slide) {
            self.live_camera.apply_clip_planes(view);
            self.live_camera.snap_to(view);
        }
        self.skybox = host
            .skybox(slide)
            .and_then(|skybox| skybox.material.clone());
        self.fit_fov();
    }

    /// Update the viewport aspect ratio and refit the field of view.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.live_camera.resize(width, height);
        self.fit_fov();
    }

    /// During playback, derive the field of view from the configured one so
    /// the horizontal extent matches `design_aspect` at the current aspect.
    fn fit_fov(&mut self) {
        if !self.mode.is_playing() {
            return;
        }
        if let Some(design_aspect) = self.camera_options.design_aspect {
            self.live_camera.fovy = self.camera_options.fovy;
            self.live_camera.correct_fov_for_aspect(design_aspect);
            log::debug!(
                "live camera fov {:.1} for aspect {:.3}",
                self.live_camera.fovy,
                self.live_camera.aspect
            );
        }
    }

    /// Drive the live camera toward the current slide.
    ///
    /// Clip planes and skybox are applied instantly. The pose snaps when
    /// the slide has no transition time (or while authoring with
    /// `snap_while_authoring`), otherwise it approaches exponentially.
    pub fn tick<H, E>(&mut self, dt: f32, host: &H, env: &mut E) -> SyncOutcome
    where
        H: SceneHost + ?Sized,
        E: RenderEnvironment + ?Sized,
    {
        let Some(slide) = self.current_slide() else {
            return SyncOutcome::Inert;
        };
        let Some(view) = host.camera(slide) else {
            log::debug!("slide {slide} has no camera this tick");
            return SyncOutcome::MissingCamera(slide);
        };

        self.live_camera.apply_clip_planes(view);
        if let Some(material) =
            host.skybox(slide).and_then(|skybox| skybox.material.as_ref())
        {
            env.set_skybox(material);
            self.skybox = Some(material.clone());
        }

        let transition_time = if self.snaps_always() {
            0.0
        } else {
            host.attributes(slide)
                .map_or(0.0, |attributes| attributes.transition_time)
        };
        let behavior = behavior_for(transition_time);
        self.live_camera.pose =
            behavior.step(self.live_camera.pose, view.pose, dt);

        SyncOutcome::Synced {
            arrived: self
                .live_camera
                .pose
                .approx_eq(&view.pose, self.options.arrival_epsilon),
        }
    }

    /// Take new player, discovery and camera settings. Discovery changes
    /// apply at the next rescan; the live camera keeps its current pose and
    /// clip planes. A changed field of view is refit to the current
    /// viewport aspect.
    pub fn apply_options(&mut self, options: &Options) {
        self.options = options.player.clone();
        self.discovery = options.discovery.clone();
        if self.camera_options != options.camera {
            self.camera_options = options.camera.clone();
            self.live_camera.fovy = self.camera_options.fovy;
            self.fit_fov();
        }
    }

    fn snaps_always(&self) -> bool {
        self.mode == PresentationMode::Authoring
            && self.options.snap_while_authoring
    }

    // ── Accessors ──

    /// Index of the current slide (0 when the deck is empty).
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Object of the current slide.
    #[must_use]
    pub fn current_slide(&self) -> Option<ObjectId> {
        self.deck.get(self.current_index)
    }

    /// Number of slides.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deck.len()
    }

    /// Whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Whether the player has nothing to present.
    #[must_use]
    pub fn is_inert(&self) -> bool {
        self.deck.is_empty()
    }

    /// The ordered slide deck.
    #[must_use]
    pub fn deck(&self) -> &SlideDeck {
        &self.deck
    }

    /// The live camera.
    #[must_use]
    pub fn live_camera(&self) -> &LiveCamera {
        &self.live_camera
    }

    /// Last skybox applied. Moving to a slide without a skybox keeps the
    /// previous one.
    #[must_use]
    pub fn skybox(&self) -> Option<&SkyboxMaterial> {
        self.skybox.as_ref()
    }

    /// Mode the player was constructed with.
    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        self.mode
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec3};

    use super::*;
    use crate::camera::{CameraView, Pose};
    use crate::environment::AmbientEnvironment;
    use crate::scene::{Scene, SlideAttributes};

    fn view_at(x: f32) -> CameraView {
        CameraView::at(Pose::new(Vec3::new(x, 0.0, 0.0), Quat::IDENTITY))
    }

    /// Sec2 { Z }, Sec1 { X, Y }, declared in that order.
    fn two_sections() -> (Scene, [ObjectId; 3]) {
        let mut scene = Scene::new();
        let sec2 = scene.add_section("Sec2");
        let z = scene.add_slide(Some(sec2), "Z", view_at(3.0));
        let sec1 = scene.add_section("Sec1");
        let x = scene.add_slide(Some(sec1), "X", view_at(1.0));
        let y = scene.add_slide(Some(sec1), "Y", view_at(2.0));
        (scene, [x, y, z])
    }

    #[test]
    fn sectioned_scenario_walks_x_y_z() {
        let (mut scene, [x, y, z]) = two_sections();
        let mut env = AmbientEnvironment::new();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        assert_eq!(player.rescan(&mut scene), 3);
        assert_eq!(player.current_slide(), Some(x));

        assert!(player.advance());
        assert_eq!(player.current_slide(), Some(y));
        assert!(player.advance());
        assert_eq!(player.current_slide(), Some(z));
        assert!(!player.advance());
        assert_eq!(player.current_slide(), Some(z));

        let outcome = player.tick(0.016, &scene, &mut env);
        assert_eq!(outcome, SyncOutcome::Synced { arrived: true });
        assert_eq!(player.live_camera().pose.position.x, 3.0);
    }

    #[test]
    fn empty_deck_is_inert() {
        let mut scene = Scene::new();
        let mut env = AmbientEnvironment::new();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        assert_eq!(player.rescan(&mut scene), 0);

        let before = player.live_camera().clone();
        assert!(player.is_inert());
        assert!(!player.advance());
        assert!(!player.retreat());
        assert!(!player.go_to(4));
        assert_eq!(player.current_index(), 0);
        assert_eq!(player.tick(0.1, &scene, &mut env), SyncOutcome::Inert);
        assert_eq!(player.live_camera(), &before);
        assert_eq!(env.swap_count(), 0);
    }

    #[test]
    fn no_sections_leaves_player_inert() {
        let mut scene = Scene::new();
        let _ = scene.add_slide(None, "A", view_at(1.0));
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        assert_eq!(player.rescan(&mut scene), 0);
        assert!(player.is_inert());
    }

    #[test]
    fn missing_camera_is_transient() {
        let (mut scene, [x, _, _]) = two_sections();
        let mut env = AmbientEnvironment::new();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        let _ = player.rescan(&mut scene);

        let stashed = scene.remove_camera(x).unwrap();
        let before = player.live_camera().clone();
        assert_eq!(
            player.tick(0.1, &scene, &mut env),
            SyncOutcome::MissingCamera(x)
        );
        assert_eq!(player.live_camera(), &before);

        scene.object_mut(x).unwrap().camera = Some(stashed);
        assert!(matches!(
            player.tick(0.1, &scene, &mut env),
            SyncOutcome::Synced { .. }
        ));
    }

    #[test]
    fn clip_planes_and_skybox_apply_instantly() {
        let mut scene = Scene::new();
        let section = scene.add_section("S");
        let _a = scene.add_slide(Some(section), "A", view_at(0.0));
        let b = scene.add_slide(
            Some(section),
            "B",
            view_at(10.0).with_clip_planes(2.0, 80.0),
        );
        let _ = scene.set_attributes(b, SlideAttributes::with_transition_time(1.0));
        let _ = scene.set_skybox(b, SkyboxMaterial::new("night"));

        let mut env = AmbientEnvironment::new();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        let _ = player.rescan(&mut scene);
        assert!(player.skybox().is_none());
        assert!(player.advance());

        let outcome = player.tick(0.1, &scene, &mut env);
        assert_eq!(outcome, SyncOutcome::Synced { arrived: false });
        assert_eq!(player.live_camera().znear, 2.0);
        assert_eq!(player.live_camera().zfar, 80.0);
        assert_eq!(env.skybox(), Some(&SkyboxMaterial::new("night")));
        assert_eq!(player.skybox(), Some(&SkyboxMaterial::new("night")));
        // Pose eased 1.15 * 0.1 of the way
        assert!((player.live_camera().pose.position.x - 1.15).abs() < 1e-4);

        for _ in 0..1200 {
            let _ = player.tick(1.0 / 60.0, &scene, &mut env);
        }
        assert_eq!(
            player.tick(1.0 / 60.0, &scene, &mut env),
            SyncOutcome::Synced { arrived: true }
        );
        assert_eq!(env.swap_count(), 1);
    }

    #[test]
    fn zero_transition_time_snaps_even_with_zero_dt() {
        let (mut scene, [_, y, _]) = two_sections();
        let _ = scene.set_attributes(y, SlideAttributes::with_transition_time(0.0));
        let mut env = AmbientEnvironment::new();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        let _ = player.rescan(&mut scene);
        assert!(player.advance());
        let outcome = player.tick(0.0, &scene, &mut env);
        assert_eq!(outcome, SyncOutcome::Synced { arrived: true });
        assert_eq!(player.live_camera().pose, scene.camera(y).unwrap().pose);
    }

    #[test]
    fn authoring_snaps_unless_disabled() {
        let mut scene = Scene::new();
        let a = scene.add_slide(None, "A", view_at(0.0));
        let b = scene.add_slide(None, "B", view_at(10.0));
        for id in [a, b] {
            let _ = scene.set_attributes(id, SlideAttributes::with_transition_time(2.0));
        }
        let mut env = AmbientEnvironment::new();

        let mut snapping =
            Player::new(PresentationMode::Authoring, &Options::default());
        let _ = snapping.rescan(&mut scene);
        assert!(snapping.advance());
        let _ = snapping.tick(0.01, &scene, &mut env);
        assert_eq!(snapping.live_camera().pose.position.x, 10.0);

        let mut options = Options::default();
        options.player.snap_while_authoring = false;
        let mut easing = Player::new(PresentationMode::Authoring, &options);
        let _ = easing.rescan(&mut scene);
        assert!(easing.advance());
        let _ = easing.tick(0.01, &scene, &mut env);
        assert!(easing.live_camera().pose.position.x < 1.0);
        // Authoring never disables slide cameras
        assert!(scene.camera(a).unwrap().enabled);
    }

    #[test]
    fn rescan_reclamps_and_reseeds() {
        let (mut scene, [_, _, z]) = two_sections();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        let _ = player.rescan(&mut scene);
        assert!(player.go_to(2));
        assert_eq!(player.current_slide(), Some(z));

        // Drop Sec2 entirely: its slide leaves the deck.
        if let Some(sec2) = scene.find_by_name("Sec2") {
            scene.object_mut(sec2).unwrap().tags.clear();
        }
        assert_eq!(player.rescan(&mut scene), 2);
        assert_eq!(player.current_index(), 1);
        assert_eq!(player.live_camera().pose.position.x, 2.0);
    }

    #[test]
    fn playback_fits_fov_to_aspect() {
        let (mut scene, _) = two_sections();
        let mut options = Options::default();
        options.camera.aspect = 4.0 / 3.0;
        let mut player = Player::new(PresentationMode::Playback, &options);
        let _ = player.rescan(&mut scene);
        assert!((player.live_camera().fovy - 80.0).abs() < 1e-3);
        let _ = player.rescan(&mut scene);
        assert!((player.live_camera().fovy - 80.0).abs() < 1e-3);

        let mut authoring = Player::new(PresentationMode::Authoring, &options);
        let _ = authoring.rescan(&mut scene);
        assert_eq!(authoring.live_camera().fovy, 60.0);
    }

    #[test]
    fn resize_refits_fov_from_the_configured_value() {
        let (mut scene, _) = two_sections();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        let _ = player.rescan(&mut scene);
        assert!((player.live_camera().fovy - 60.0).abs() < 1e-3);

        player.resize(800, 600);
        assert!((player.live_camera().fovy - 80.0).abs() < 1e-3);
        player.resize(1600, 900);
        assert!((player.live_camera().fovy - 60.0).abs() < 1e-3);

        let mut authoring =
            Player::new(PresentationMode::Authoring, &Options::default());
        let _ = authoring.rescan(&mut scene);
        authoring.resize(800, 600);
        assert_eq!(authoring.live_camera().fovy, 60.0);
        assert!((authoring.live_camera().aspect - 4.0 / 3.0).abs() < 1e-6);
    }

    #[test]
    fn skybox_survives_slides_without_one() {
        let mut scene = Scene::new();
        let section = scene.add_section("S");
        let a = scene.add_slide(Some(section), "A", view_at(0.0));
        let _b = scene.add_slide(Some(section), "B", view_at(1.0));
        let _ = scene.set_skybox(a, SkyboxMaterial::new("dawn"));

        let mut env = AmbientEnvironment::new();
        let mut player =
            Player::new(PresentationMode::Playback, &Options::default());
        let _ = player.rescan(&mut scene);
        let _ = player.tick(0.016, &scene, &mut env);
        assert!(player.advance());
        let _ = player.tick(0.016, &scene, &mut env);
        assert_eq!(player.skybox(), Some(&SkyboxMaterial::new("dawn")));
        assert_eq!(env.skybox(), Some(&SkyboxMaterial::new("dawn")));
    }
}
