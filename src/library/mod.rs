//! Template library: region-based modal controller and its building blocks

pub mod buttons;
pub mod filters;
pub mod modal;
pub mod region;
pub mod view;

pub use buttons::{resolve_action_button, ActionButton};
pub use filters::{FilterHook, FilterRegistry};
pub use modal::{ConnectArgs, LibraryModal, Screen};
pub use region::{Region, RegionName};
pub use view::{LibraryView, ViewKind};
