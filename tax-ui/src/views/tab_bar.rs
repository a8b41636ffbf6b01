//! Tab bar and key hints shown above the workspace views.

use tax_core::Tab;

/// Keyboard hint for the line under the tab bar.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyHint {
    pub const fn new(
        key: &'static str,
        action: &'static str,
    ) -> Self {
        Self { key, action }
    }
}

/// Joins hints as `key: action │ key: action`.
pub fn build_hint_line(hints: &[KeyHint]) -> String {
    hints
        .iter()
        .map(|h| format!("{}: {}", h.key, h.action))
        .collect::<Vec<_>>()
        .join(" │ ")
}

/// Hints shared by the interactive screens.
pub mod hints {
    use super::KeyHint;

    pub const SWITCH_TAB: KeyHint = KeyHint::new("1-5", "Switch tab");
    pub const QUIT: KeyHint = KeyHint::new("q", "Quit");
    pub const SKIP: KeyHint = KeyHint::new("Enter", "Skip");
}

/// One line with every tab; the active one is bracketed.
pub fn build_tab_bar(active: Tab) -> String {
    let tabs = Tab::ALL
        .iter()
        .map(|tab| {
            if *tab == active {
                format!("[{} {}]", tab.position(), tab.label())
            } else {
                format!(" {} {} ", tab.position(), tab.label())
            }
        })
        .collect::<Vec<_>>()
        .join("│");

    let rule = "─".repeat(tabs.chars().count());
    format!(
        "{tabs}\n{rule}\n{}\n",
        build_hint_line(&[hints::SWITCH_TAB, hints::QUIT])
    )
}
