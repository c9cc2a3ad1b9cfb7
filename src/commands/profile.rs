use crate::settings::{self, Settings, Toggle};

fn switch(on: bool) -> &'static str {
    if on { "[ON ]" } else { "[OFF]" }
}

pub fn render_screen(current: Settings) -> String {
    let mut screen = String::from("PROFILE\nIWA Fan\n\nPREFERENCES\n");
    for (toggle, id) in [
        (Toggle::Notifications, "toggle_notifications"),
        (Toggle::DarkMode, "toggle_darkmode"),
    ] {
        screen.push_str(&format!(
            "  {:<14} {}  ({})\n",
            toggle.label(),
            switch(current.get(toggle)),
            id
        ));
    }
    screen.push_str("\nJOIN IWA\n  Apply to become a wrestler: join name=<name>;email=<email>;...\n");
    screen
}

/// Flips a preference and redraws the screen.
pub fn handle_toggle(toggle: Toggle) -> String {
    settings::toggle(toggle);
    render_screen(settings::current())
}
