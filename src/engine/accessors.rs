//! Read-only queries and direct handles for [`PresentationEngine`].

use super::PresentationEngine;
use crate::camera::{CameraUniform, LiveCamera};
use crate::input::InputProcessor;
use crate::mode::PresentationMode;
use crate::player::Player;
use crate::scene::ObjectId;

// ── Player ──

impl PresentationEngine {
    /// The presentation player.
    #[must_use]
    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Mode the engine was created with.
    #[must_use]
    pub fn mode(&self) -> PresentationMode {
        self.player.mode()
    }

    /// Index of the current slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.player.current_index()
    }

    /// Object of the current slide.
    #[must_use]
    pub fn current_slide(&self) -> Option<ObjectId> {
        self.player.current_slide()
    }
}

// ── Camera ──

impl PresentationEngine {
    /// The live camera.
    #[must_use]
    pub fn live_camera(&self) -> &LiveCamera {
        self.player.live_camera()
    }

    /// Update the live camera's aspect ratio after a viewport resize. During
    /// playback the field of view is refit to the new aspect.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.player.resize(width, height);
    }

    /// GPU uniform for the live camera's current state.
    #[must_use]
    pub fn camera_uniform(&self) -> CameraUniform {
        self.player.live_camera().uniform()
    }
}

// ── Input ──

impl PresentationEngine {
    /// The input processor.
    #[must_use]
    pub fn input(&self) -> &InputProcessor {
        &self.input
    }

    /// Drop held keys and touches (e.g. when the window loses focus).
    pub fn reset_input(&mut self) {
        self.input.reset();
    }
}
