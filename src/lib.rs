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
// Function signature hygiene
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Free-look camera for small real-time 3D programs.
//!
//! A yaw/pitch camera with WASD-style movement, mouse look, scroll zoom and
//! view-matrix construction, plus the plumbing a render loop needs around
//! it: projection and GPU uniform, key bindings, and TOML options.
//!
//! # Key entry points
//!
//! - [`camera::Camera`] - the camera value type and its math
//! - [`camera::CameraController`] - executes [`camera::CameraCommand`]s and
//!   per-frame movement
//! - [`input::InputProcessor`] - turns window events into commands
//! - [`options::Options`] - runtime configuration (camera, projection,
//!   keybindings)
//!
//! # Frame loop
//!
//! Window events go through the input processor; the resulting commands
//! are executed immediately. Once per frame the held keys are applied as
//! movement scaled by the frame delta from [`util::FrameClock`], and the
//! uniform is refreshed for upload. Window creation, shader handling and
//! drawing are left to the host program.

pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod util;

pub use camera::{Camera, CameraCommand, CameraController};
pub use error::FreelookError;
pub use input::{InputEvent, InputProcessor};
pub use options::Options;
