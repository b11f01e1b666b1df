//! One module per route.

pub mod concepts;
pub mod course;
pub mod frameworks;
pub mod game_detail;
pub mod games;
pub mod home;
pub mod not_found;
pub mod resources;
pub mod schedule;
