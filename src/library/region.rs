//! Region - a named slot holding at most one active sub-view
//!
//! The modal window is divided into four fixed regions; each displays
//! exactly one view at a time. `show` and `reset` are the only mutators,
//! so the at-most-one invariant holds by construction: installing a view
//! drops the previous occupant (its `Drop` runs exactly once), and
//! resetting an empty region does nothing.

use crate::action::Action;
use crate::library::view::{LibraryView, ViewKind};
use anyhow::Result;
use crossterm::event::KeyEvent;
use ratatui::{layout::Rect, Frame};

/// Identity of a region within the library modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionName {
    Logo,
    Tools,
    Menu,
    Content,
}

/// A slot owning zero or one active view
pub struct Region {
    name: RegionName,
    occupant: Option<Box<dyn LibraryView>>,
}

impl Region {
    /// Create an empty region
    pub fn new(name: RegionName) -> Self {
        Self {
            name,
            occupant: None,
        }
    }

    /// Install `view`, dropping the current occupant if present.
    ///
    /// Always succeeds; the new occupant renders into this region's
    /// rectangle on the next draw pass.
    pub fn show(&mut self, view: Box<dyn LibraryView>) {
        self.occupant = Some(view);
    }

    /// Drop the current occupant, leaving the region empty.
    ///
    /// Idempotent: resetting an empty region is a no-op.
    pub fn reset(&mut self) {
        self.occupant = None;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.occupant.is_none()
    }

    /// Tag of the current occupant, if any
    pub fn occupant_kind(&self) -> Option<ViewKind> {
        self.occupant.as_ref().map(|v| v.kind())
    }

    /// Offer a key event to the occupant
    pub fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match self.occupant.as_mut() {
            Some(view) => view.handle_key_event(key),
            None => Ok(None),
        }
    }

    /// Draw the occupant into `area`; an empty region draws nothing
    pub fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        if let Some(view) = self.occupant.as_mut() {
            view.draw(frame, area)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Region")
            .field("name", &self.name)
            .field("occupant", &self.occupant_kind())
            .finish()
    }
}
