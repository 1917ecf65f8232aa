//! `silo config` — store or overwrite the LogDNA service key.

use anyhow::bail;

use crate::commands::prompt;
use crate::config::{ConfigStore, SERVICE_KEY};

pub fn run() -> anyhow::Result<()> {
    let store = ConfigStore::open_default()?;
    let existing = store.get(SERVICE_KEY)?;

    let key = prompt("LogDNA service key: ")?;
    if key.is_empty() {
        bail!("no service key provided");
    }

    if existing.is_some() {
        let answer = prompt("A service key already exists. Overwrite? [y/N] ")?;
        if !answer.eq_ignore_ascii_case("y") {
            bail!("keeping the existing service key");
        }
    }

    store.set(SERVICE_KEY, &key)?;
    tracing::debug!(path = %store.path().display(), "service key saved");
    eprintln!("Service key saved to {}", store.path().display());
    Ok(())
}
