//! Platform-agnostic building blocks shared by components and hosts.

pub mod config;
pub mod nav;
pub mod scroll;
pub mod theme;
