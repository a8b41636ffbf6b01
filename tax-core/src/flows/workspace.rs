use tracing::debug;

use crate::models::{ProfileRecord, Tab, TabView};

/// Single-selection state over the fixed tab set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TabController {
    active: Tab,
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Tab {
        self.active
    }

    /// Makes `tab` the active one. Returns `false` (and does nothing else)
    /// when it already was.
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.active == tab {
            return false;
        }
        debug!(from = %self.active, to = %tab, "tab selected");
        self.active = tab;
        true
    }
}

/// What the user sees after submitting the profile: the frozen record
/// plus the tab bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Workspace {
    profile: ProfileRecord,
    tabs: TabController,
}

impl Workspace {
    pub fn new(profile: ProfileRecord) -> Self {
        Self {
            profile,
            tabs: TabController::new(),
        }
    }

    pub fn profile(&self) -> &ProfileRecord {
        &self.profile
    }

    pub fn active_tab(&self) -> Tab {
        self.tabs.active()
    }

    pub fn select(&mut self, tab: Tab) -> bool {
        self.tabs.select(tab)
    }

    pub fn current_view(&self) -> TabView<'_> {
        self.tabs.active().view(&self.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AgeGroup, ProfileField};
    use pretty_assertions::assert_eq;

    #[test]
    fn selecting_active_tab_is_a_no_op() {
        let mut tabs = TabController::new();
        let before = tabs;
        assert!(!tabs.select(Tab::Profile));
        assert_eq!(tabs, before);
    }

    #[test]
    fn selecting_another_tab_switches_and_repeats_idempotently() {
        let mut tabs = TabController::new();
        assert!(tabs.select(Tab::Guidance));
        assert_eq!(tabs.active(), Tab::Guidance);
        assert!(!tabs.select(Tab::Guidance));
        assert_eq!(tabs.active(), Tab::Guidance);
    }

    #[test]
    fn current_view_follows_the_selection() {
        let mut profile = ProfileRecord::default();
        profile.apply(ProfileField::AgeGroup(AgeGroup::EightyAndAbove));
        let mut workspace = Workspace::new(profile.clone());

        assert_eq!(workspace.current_view(), TabView::Profile(&profile));

        workspace.select(Tab::Reports);
        assert_eq!(workspace.current_view(), TabView::Reports);

        workspace.select(Tab::TaxCalculation);
        assert_eq!(workspace.current_view(), TabView::TaxCalculation(&profile));
    }
}
