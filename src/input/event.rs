/// Platform-agnostic input events.
///
/// These are fed into an [`InputProcessor`](super::InputProcessor) which
/// turns them into edge-triggered navigation intents once per tick.
///
/// # Example
///
/// ```ignore
/// input_processor.handle_event(&InputEvent::Key {
///     code: "ArrowRight".into(),
///     pressed: true,
/// });
/// let intent = input_processor.sample(PresentationMode::Playback);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Physical key pressed or released.
    Key {
        /// Key string in the `winit::keyboard::KeyCode` debug format
        /// (`"ArrowRight"`, `"Space"`, ...).
        code: String,
        /// `true` for press (including auto-repeat), `false` for release.
        pressed: bool,
    },
    /// Modifier key state changed.
    ModifiersChanged {
        /// Whether either Alt key is held.
        alt: bool,
    },
    /// A finger touched the screen.
    TouchStart {
        /// Touch identifier, stable for the gesture's lifetime.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// A finger left the screen.
    TouchEnd {
        /// Touch identifier.
        id: u64,
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels.
        y: f32,
    },
    /// The platform cancelled a touch (e.g. palm rejection).
    TouchCancel {
        /// Touch identifier.
        id: u64,
    },
}

impl InputEvent {
    /// Convenience constructor for a key press.
    #[must_use]
    pub fn key_down(code: &str) -> Self {
        Self::Key {
            code: code.to_owned(),
            pressed: true,
        }
    }

    /// Convenience constructor for a key release.
    #[must_use]
    pub fn key_up(code: &str) -> Self {
        Self::Key {
            code: code.to_owned(),
            pressed: false,
        }
    }
}

#[cfg(feature = "viewer")]
impl InputEvent {
    /// Adapt a winit window event. Returns `None` for events navigation
    /// does not care about.
    #[must_use]
    pub fn from_window_event(event: &winit::event::WindowEvent) -> Option<Self> {
        use winit::event::{ElementState, TouchPhase, WindowEvent};
        use winit::keyboard::PhysicalKey;

        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let PhysicalKey::Code(code) = event.physical_key else {
                    return None;
                };
                Some(Self::Key {
                    code: format!("{code:?}"),
                    pressed: event.state == ElementState::Pressed,
                })
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                Some(Self::ModifiersChanged {
                    alt: modifiers.state().alt_key(),
                })
            }
            WindowEvent::Touch(touch) => {
                let (x, y) = (touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => Some(Self::TouchStart {
                        id: touch.id,
                        x,
                        y,
                    }),
                    TouchPhase::Ended => Some(Self::TouchEnd {
                        id: touch.id,
                        x,
                        y,
                    }),
                    TouchPhase::Cancelled => {
                        Some(Self::TouchCancel { id: touch.id })
                    }
                    TouchPhase::Moved => None,
                }
            }
            _ => None,
        }
    }
}
