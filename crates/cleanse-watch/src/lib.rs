//! Surface watching and detection backends
//!
//! - `Surface`: a text-bearing host element that can be read and rewritten
//! - `Detector`: a source of matches, local rules or a remote scan endpoint
//! - `Watcher`: the per-surface detect / confirm / redact state machine

pub mod detector;
pub mod remote;
pub mod surface;
pub mod watcher;

pub use detector::{Detector, LocalDetector};
pub use remote::RemoteScanner;
pub use surface::{FileSurface, MemorySurface, Surface};
pub use watcher::{PassStart, Phase, Watcher};
