//! Route handlers — thin adapters between the URL surface and the game
//! modules: parse params, mutate the session, re-render a fragment.

pub mod game;
pub mod rooms;
pub mod screen;
pub mod util;
