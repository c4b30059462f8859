//! Filter operations
//!
//! This module provides the windowed mean filter, computed with one of three algorithms
//! of increasing sophistication.

/// Filter operations
mod ops;
pub use ops::*;

/// Window clamping shared by all filter algorithms
mod window;
pub use window::BlurWindow;
