//! Orrery - olympiad landing experience
//!
//! A 3D hub where each orbiting planet is a content section. Clicking,
//! scrolling, swiping or pressing keys warps the camera from the overview
//! to a framed close-up of one planet with its content panel alongside.
//!
//! The library exposes every plugin so the navigation core can be driven
//! headlessly in tests.

pub mod camera;
pub mod experience;
pub mod input;
pub mod navigation;
pub mod orbit;
pub mod render;
pub mod sections;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
