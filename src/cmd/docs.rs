//! Documentation launcher — `adhoc docs`.

use anyhow::{Context, Result};

const DOCS_URL: &str = "https://adhoc.readthedocs.io";

pub fn cmd_docs(api: bool, offline: bool) -> Result<()> {
    let url = if api {
        format!("{DOCS_URL}/en/latest/api.html")
    } else {
        format!("{DOCS_URL}/en/latest/")
    };

    if offline {
        // No docs are bundled with the binary; point at the live site.
        println!("Offline docs are not installed; see {url}");
        return Ok(());
    }

    open::that(&url).with_context(|| format!("Failed to open {url}"))?;
    println!("Opened {url}");
    Ok(())
}
