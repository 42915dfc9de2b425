#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod color;
pub mod components;
pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod id_generator;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod store;
pub mod surface;
pub mod tools;

pub use app::WhiteboardApp;
pub use color::Color;
pub use config::WhiteboardConfig;
pub use element::{Element, ElementPatch, Point, Style};
pub use id_generator::ElementId;
pub use input::{GestureHandler, GestureState, InputEvent, InputHandler};
pub use renderer::Renderer;
pub use store::{WhiteboardState, WhiteboardStore};
pub use tools::Tool;
