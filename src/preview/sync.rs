use super::PreviewSink;
use crate::player::Player;
use crate::scene::SceneHost;

/// Mirrors the current slide's view into a [`PreviewSink`] once per slide
/// change.
///
/// The mirrored pose is the slide camera's own, which is where the live
/// camera ends up even when it is still easing toward it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreviewSync {
    last_synced: Option<usize>,
}

impl PreviewSync {
    /// Sync state that has not mirrored anything yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Index mirrored by the last successful sync.
    #[must_use]
    pub fn last_synced(&self) -> Option<usize> {
        self.last_synced
    }

    /// Forget the mirrored index so the next [`sync`](Self::sync) runs.
    pub fn invalidate(&mut self) {
        self.last_synced = None;
    }

    /// Mirror the current slide if the player is authoring, has slides, and
    /// its index changed since the last sync. Returns whether the sink was
    /// updated.
    pub fn sync<H: SceneHost + ?Sized>(
        &mut self,
        player: &Player,
        host: &H,
        sink: &mut dyn PreviewSink,
    ) -> bool {
        if self.last_synced == Some(player.current_index()) {
            return false;
        }
        self.force_sync(player, host, sink)
    }

    /// Mirror the current slide regardless of the cached index. Still does
    /// nothing during playback or with an empty deck. A slide without a
    /// camera mirrors the live pose.
    pub fn force_sync<H: SceneHost + ?Sized>(
        &mut self,
        player: &Player,
        host: &H,
        sink: &mut dyn PreviewSink,
    ) -> bool {
        if player.mode().is_playing() {
            return false;
        }
        let Some(slide) = player.current_slide() else {
            return false;
        };

        let pose = host
            .camera(slide)
            .map_or(player.live_camera().pose, |view| view.pose);
        sink.set_view(pose.position, pose.rotation);
        sink.select(slide);
        sink.request_repaint();
        self.last_synced = Some(player.current_index());
        log::debug!("preview synced to slide {}", player.current_index());
        true
    }
}
