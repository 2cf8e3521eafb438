//! Core building blocks: driver parameters, directory discovery and the
//! per-subdirectory planner. These are internal primitives consumed by the
//! high-level `api` module.
pub mod discovery;
pub mod params;
pub mod plan;
