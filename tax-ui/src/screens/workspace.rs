use std::io::{self, BufRead, Write};

use tax_core::{Tab, Workspace};

use super::Console;
use crate::views::{WorkspaceViews, build_tab_bar, render_view};

fn is_quit(input: &str) -> bool {
    matches!(input.to_ascii_lowercase().as_str(), "q" | "quit" | "exit")
}

/// Shows the active tab and switches tabs until the user quits or input ends.
///
/// Picking the tab that is already active redraws nothing.
pub fn run_workspace<R, W, V>(
    console: &mut Console<R, W>,
    workspace: &mut Workspace,
    views: &V,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    V: WorkspaceViews + ?Sized,
{
    let mut redraw = true;
    loop {
        if redraw {
            console.write(&build_tab_bar(workspace.active_tab()))?;
            console.write("\n")?;
            console.write(&render_view(views, workspace.current_view()))?;
            console.write("\n")?;
        }

        let Some(input) = console.prompt("tab> ")? else {
            return Ok(());
        };
        if is_quit(&input) {
            return Ok(());
        }
        if input.is_empty() {
            redraw = false;
            continue;
        }

        redraw = match input.parse::<Tab>() {
            Ok(tab) => workspace.select(tab),
            Err(err) => {
                console.write(&format!("{err}\n"))?;
                false
            }
        };
    }
}
