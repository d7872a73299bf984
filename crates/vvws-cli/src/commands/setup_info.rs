use anyhow::Result;
use console::style;
use std::path::Path;
use vvws_core::{OsFamily, PlatformProfile};

/// Print the one-time manual setup steps
pub fn execute(config_path: &Path, platform: &PlatformProfile) -> Result<()> {
    println!("\n{}", style("--- Manual Setup Required ---").bold().cyan());

    println!("1. Vivaldi Keyboard Shortcuts:");
    println!("   - Go to Vivaldi Settings > Keyboard > Window.");
    println!(
        "   - Assign unique shortcuts (e.g., Ctrl+Alt+1) to 'Switch to Workspace X' for each workspace you want to launch."
    );
    println!(
        "   - Note the shortcut for 'Next Tab' (Window > Next Tab) if the default ({}) doesn't work.",
        platform.next_tab_shortcut()
    );

    println!("2. Configure This Tool:");
    println!("   - Run: 'vvws config init'");
    println!("   - Edit the created config file at: {}", config_path.display());
    println!("   - Map your EXACT Vivaldi workspace names to the shortcuts you assigned.");
    println!("     Format: use '+' like 'ctrl+alt+1'. Key names: ctrl, alt, shift, win, command,");
    println!("     tab, enter, esc, space, pageup, pagedown, home, end, arrows, f1-f24, a-z, 0-9.");
    println!("   - Optional: \"next_tab_shortcut\", \"launch_delay_ms\", \"switch_delay_ms\".");

    println!("3. Install the automation helper for {}:", platform.family.as_str());
    for line in helper_instructions(platform.family) {
        println!("   - {}", line);
    }

    println!("{}", style("-----------------------------").cyan());
    Ok(())
}

fn helper_instructions(family: OsFamily) -> &'static [&'static str] {
    match family {
        OsFamily::Other => &[
            "Requires xdotool and an X11 session (XWayland windows work on most desktops).",
            "Debian/Ubuntu: sudo apt-get install xdotool; Fedora: sudo dnf install xdotool.",
        ],
        OsFamily::MacOs => &[
            "Uses the built-in osascript.",
            "Grant Accessibility permission to your terminal (System Settings > Privacy & Security).",
        ],
        OsFamily::Windows => &[
            "Uses the built-in Windows PowerShell; no extra install needed.",
            "Shortcuts using the Windows key cannot be sent.",
        ],
    }
}
