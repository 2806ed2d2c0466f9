//! Recycle a long-lived server process: find it in the process table by a
//! command-line substring, send it SIGTERM, and (in the restart variant)
//! start a replacement instance and wait for it.
//!
//! Two binaries share this library:
//! - `doclet-kill` — find and terminate, nothing else.
//! - `doclet-restart` — find, terminate, then relaunch.
//!
//! Both are one-shot tools meant to be driven by a scheduler; each run is
//! independent and no state is kept between runs.

pub mod config;
pub mod listing;
pub mod logging;
pub mod recycler;
pub mod relaunch;
pub mod scan;
pub mod terminate;
