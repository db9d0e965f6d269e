//! Saturating slide navigation for [`Player`].

use super::Player;
use crate::engine::command::PresenterCommand;

impl Player {
    /// Move to the next slide. Returns whether the index changed.
    pub fn advance(&mut self) -> bool {
        self.go_to(self.current_index.saturating_add(1))
    }

    /// Move to the previous slide. Returns whether the index changed.
    pub fn retreat(&mut self) -> bool {
        if self.current_index == 0 {
            return false;
        }
        self.go_to(self.current_index - 1)
    }

    /// Jump to `index`, clamped into the deck. Returns whether the index
    /// changed; an empty deck never changes.
    pub fn go_to(&mut self, index: usize) -> bool {
        let Some(last) = self.deck.last_index() else {
            return false;
        };
        let next = index.min(last);
        if next == self.current_index {
            return false;
        }
        log::debug!("slide {} -> {next}", self.current_index);
        self.current_index = next;
        true
    }

    /// Apply a navigation command. [`PresenterCommand::Rescan`] needs the
    /// scene and is ignored here.
    pub fn execute(&mut self, command: PresenterCommand) -> bool {
        match command {
            PresenterCommand::Advance => self.advance(),
            PresenterCommand::Retreat => self.retreat(),
            PresenterCommand::GoTo { index } => self.go_to(index),
            PresenterCommand::Rescan => {
                log::debug!("rescan needs the scene host; ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use crate::camera::CameraView;
    use crate::mode::PresentationMode;
    use crate::options::Options;
    use crate::scene::Scene;

    use super::*;

    fn player_with(n: usize) -> Player {
        let mut scene = Scene::new();
        for i in 0..n {
            let _ = scene.add_slide(None, &format!("s{i}"), CameraView::default());
        }
        let mut player =
            Player::new(PresentationMode::Authoring, &Options::default());
        let _ = player.rescan(&mut scene);
        player
    }

    #[test]
    fn advance_and_retreat_saturate_for_all_positions() {
        for n in 1..8 {
            for i in 0..n {
                let mut player = player_with(n);
                assert!(player.go_to(i) || i == 0);

                let advanced = player.advance();
                assert_eq!(player.current_index(), (i + 1).min(n - 1));
                assert_eq!(advanced, i + 1 < n);

                let mut player = player_with(n);
                let _ = player.go_to(i);
                let retreated = player.retreat();
                assert_eq!(player.current_index(), i.saturating_sub(1));
                assert_eq!(retreated, i > 0);
            }
        }
    }

    #[test]
    fn go_to_clamps() {
        let mut player = player_with(3);
        assert!(player.go_to(99));
        assert_eq!(player.current_index(), 2);
        assert!(!player.go_to(2));
        assert!(player.go_to(0));
    }

    #[test]
    fn execute_dispatches_commands() {
        let mut player = player_with(4);
        assert!(player.execute(PresenterCommand::Advance));
        assert!(player.execute(PresenterCommand::GoTo { index: 3 }));
        assert!(player.execute(PresenterCommand::Retreat));
        assert_eq!(player.current_index(), 2);
        assert!(!player.execute(PresenterCommand::Rescan));
        assert_eq!(player.current_index(), 2);
    }

    #[test]
    fn random_navigation_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        for n in 0..6 {
            let mut player = player_with(n);
            let mut expected = 0usize;
            for _ in 0..500 {
                let command = match rng.random_range(0..3) {
                    0 => PresenterCommand::Advance,
                    1 => PresenterCommand::Retreat,
                    _ => PresenterCommand::GoTo {
                        index: rng.random_range(0..10),
                    },
                };
                if n > 0 {
                    expected = match command {
                        PresenterCommand::Advance => (expected + 1).min(n - 1),
                        PresenterCommand::Retreat => expected.saturating_sub(1),
                        PresenterCommand::GoTo { index } => index.min(n - 1),
                        PresenterCommand::Rescan => expected,
                    };
                }
                let before = player.current_index();
                let changed = player.execute(command);
                assert_eq!(player.current_index(), expected);
                assert_eq!(changed, before != expected);
                assert!(n == 0 || player.current_index() < n);
            }
        }
    }
}
