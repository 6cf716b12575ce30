pub mod api;
pub mod app;
pub mod genre;
pub mod logging;
pub mod notify;
pub mod theme;
pub mod ui;
pub mod widget;
