// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Camera-driven spatial presentations.
//!
//! Loci turns tagged objects in a 3D scene into an ordered deck of slides
//! and drives a single live camera from slide to slide, snapping or easing
//! its pose while copying clip planes and skybox instantly.
//!
//! # Key entry points
//!
//! - [`PresentationEngine`] - owns one session; the host calls
//!   [`frame`](PresentationEngine::frame) once per tick
//! - [`scene::SceneHost`] - the query surface a host scene graph implements
//! - [`scene::Scene`] - in-memory reference host, loadable from TOML
//! - [`slides::discover`] - flat or sectioned slide ordering
//! - [`options::Options`] - runtime configuration (camera, player,
//!   navigation, keybindings, preview, discovery)
//!
//! # Architecture
//!
//! Discovery runs at start and on rescan and produces a [`slides::SlideDeck`].
//! Each frame the [`input::InputProcessor`] is sampled for an edge-triggered
//! advance/retreat, the [`player::Player`] applies it and syncs the live
//! camera toward the current slide, and in authoring mode the
//! [`preview::PreviewSync`] mirrors the result into the editor viewport.
//! Everything runs on the caller's thread; collaborators are passed in per
//! call rather than looked up globally.

pub mod animation;
pub mod camera;
pub mod engine;
pub mod environment;
pub mod error;
pub mod input;
pub mod mode;
pub mod options;
pub mod player;
pub mod preview;
pub mod scene;
pub mod slides;
pub mod util;

pub use engine::{FrameReport, PresentationEngine, PresenterCommand};
pub use error::{LociError, Result};
pub use mode::PresentationMode;
