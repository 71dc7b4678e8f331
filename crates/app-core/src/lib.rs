//! Platform-free simulation core for the pointfield backdrop.
//!
//! Everything here runs and tests on the host: particle generation, the
//! per-frame interaction state, the transform/projection pipeline, the
//! perturbation effects and the neighbor net. The web frontend only feeds
//! pointer/viewport samples in and draws the projected output.

pub mod cloud;
pub mod constants;
pub mod interaction;
pub mod net;
pub mod physics;
pub mod transform;

pub use cloud::*;
pub use constants::*;
pub use interaction::*;
pub use net::*;
pub use transform::*;
