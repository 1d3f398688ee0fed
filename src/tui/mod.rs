//! Terminal UI: Elm-style app state, views, widgets and styling.

pub mod app;
pub mod events;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
