//! Electron-configuration parsing and orbit layout for animated atom models.
//!
//! [`physics::configuration::expand`] turns a configuration such as
//! `[Ar] 3d6 4s2` into explicit subshell tokens, and
//! [`simulation::layout::OrbitLayoutGenerator`] turns those tokens into
//! rings a renderer can animate.

pub mod cli;
pub mod constants;
pub mod physics;
pub mod simulation;
