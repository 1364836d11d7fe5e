//! Mobile navigation sidebar: hamburger toggle, overlay and scroll lock.

pub mod config;
pub mod controller;
pub mod dom;
pub mod surface;

pub use controller::MenuToggleController;
pub use dom::{BindError, MobileMenu};
pub use surface::{MenuSurface, TimerHost};
