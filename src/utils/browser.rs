use n8r_std::Style;
use std::process::Command;

use crate::{anyhow, N8rResult};

/// Opens `url` in the browser named by `$BROWSER`, or the system default.
pub fn open(url: &str) -> N8rResult<()> {
    let browser_var = Style::Command.paint("$BROWSER");
    let styled_url = Style::Link.paint(url);

    if let Some(browser_override) = std::env::var_os("BROWSER") {
        eprintln!(
            "Opening {} with the application specified by {}.",
            &styled_url, &browser_var
        );
        Command::new(&browser_override)
            .arg(url)
            .status()
            .map_err(|e| {
                anyhow!(
                    "Couldn't open browser {}: {}",
                    browser_override.to_string_lossy(),
                    e
                )
            })?;
    } else {
        eprintln!(
            "Opening {} with your default browser. This can be overridden by setting the {} environment variable.",
            &styled_url, &browser_var
        );
        opener::open(url)?;
    }

    Ok(())
}
