//! The in-memory slide deck built by the translator.

pub mod bullet;
pub mod colors;
pub mod common;
pub mod elements;
pub mod link;
pub mod picture;
pub mod placeholder;
pub mod presentation;
pub mod properties;
pub mod shape;
pub mod slide;
pub mod table;
pub mod text;
pub mod text_element;
