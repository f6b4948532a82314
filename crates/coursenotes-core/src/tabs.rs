//! Semester tab switcher.
//!
//! Exactly one semester panel is visible at a time and the tab button mapped
//! to it carries the active marker. Buttons are bound to semesters once, at
//! construction, so activation never depends on what a label happens to
//! contain.

use std::collections::HashMap;

use crate::models::{SemesterId, SemesterPanel};
use crate::{Error, Result};

/// A tab button bound to one semester
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabButton {
    pub semester: SemesterId,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemesterTabs {
    /// Panels in display order
    panels: Vec<SemesterId>,
    buttons: Vec<TabButton>,
    button_for: HashMap<SemesterId, usize>,
    visible: Option<SemesterId>,
}

impl SemesterTabs {
    /// Build the switcher for the given panels. The first panel starts visible.
    pub fn new(panels: &[SemesterPanel]) -> Result<Self> {
        let mut tabs = Self::default();

        for panel in panels {
            if tabs.button_for.contains_key(&panel.id) {
                return Err(Error::InvalidInput(format!(
                    "duplicate semester panel: {}",
                    panel.id
                )));
            }
            tabs.button_for.insert(panel.id.clone(), tabs.buttons.len());
            tabs.buttons.push(TabButton {
                semester: panel.id.clone(),
                label: panel.button_label().to_string(),
            });
            tabs.panels.push(panel.id.clone());
        }

        tabs.visible = tabs.panels.first().cloned();
        Ok(tabs)
    }

    /// Show the panel for `semester`, hide every other one, and move the
    /// active marker to its button.
    ///
    /// An unknown semester leaves the current selection untouched.
    pub fn show_semester(&mut self, semester: &SemesterId) -> Result<()> {
        if !self.button_for.contains_key(semester) {
            tracing::warn!("No panel registered for semester {}", semester);
            return Err(Error::UnknownSemester(semester.to_string()));
        }

        self.visible = Some(semester.clone());
        tracing::debug!("Showing semester {}", semester);
        Ok(())
    }

    pub fn panels(&self) -> &[SemesterId] {
        &self.panels
    }

    pub fn buttons(&self) -> &[TabButton] {
        &self.buttons
    }

    pub fn visible(&self) -> Option<&SemesterId> {
        self.visible.as_ref()
    }

    pub fn is_visible(&self, semester: &SemesterId) -> bool {
        self.visible.as_ref() == Some(semester)
    }

    /// Whether the button at `index` carries the active marker.
    pub fn is_active(&self, index: usize) -> bool {
        self.visible
            .as_ref()
            .and_then(|semester| self.button_for.get(semester))
            .is_some_and(|active| *active == index)
    }
}
