pub mod file;
pub mod gui;
pub mod model;
pub mod scene;
