//! Solar System Explorer
//!
//! An interactive 3D model of the Sun and its eight planets with a planet
//! detail view and a multiple-choice quiz.

pub mod camera;
pub mod catalog;
pub mod detail;
pub mod input;
pub mod orbit;
pub mod quiz;
pub mod render;
pub mod shell;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
