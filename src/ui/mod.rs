//! UI module - reusable egui widgets shared by the app views

pub mod components;
