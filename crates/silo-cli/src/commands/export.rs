//! `silo export` — export log lines from LogDNA for a time window.

use std::io::Write;
use std::str::FromStr;

use anyhow::{Context, bail};
use clap::Args;
use silo_logdna::{ExportFilters, LogDnaClient, Prefer, TimeRange, Timestamp, Transport};

use crate::commands::prompt;
use crate::config::{ConfigStore, SERVICE_KEY};
use crate::datetime::{DateParseError, parse_human};

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Start of the export window ("1 day ago", "2018-01-01T00:00:00", ...)
    #[arg(long = "from", value_name = "WHEN", default_value = "1 day ago", value_parser = parse_datetime)]
    pub from: Timestamp,

    /// End of the export window
    #[arg(long = "to", value_name = "WHEN", default_value = "now", value_parser = parse_datetime)]
    pub to: Timestamp,

    /// Maximum number of lines to return
    #[arg(long)]
    pub size: Option<u32>,

    /// Restrict to these hostnames (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub hosts: Vec<String>,

    /// Restrict to these application names (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub apps: Vec<String>,

    /// Restrict to these log levels (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub levels: Vec<String>,

    /// Search query
    #[arg(long)]
    pub query: Option<String>,

    /// Which end of the window to keep when the result is truncated
    #[arg(long, value_parser = parse_prefer)]
    pub prefer: Option<Prefer>,
}

// Date strings are rejected at argument-parse time, before any config
// lookup or network activity.
fn parse_datetime(input: &str) -> Result<Timestamp, DateParseError> {
    parse_human(input)
}

fn parse_prefer(input: &str) -> Result<Prefer, String> {
    Prefer::from_str(input)
}

pub fn run(args: ExportArgs) -> anyhow::Result<()> {
    let store = ConfigStore::open_default()?;
    let service_key = match store.get(SERVICE_KEY)? {
        Some(key) => key,
        None => {
            let key = prompt("LogDNA service key: ")?;
            if key.is_empty() {
                bail!("a LogDNA service key is required; run `silo config` to set one");
            }
            store.set(SERVICE_KEY, &key)?;
            key
        }
    };

    let client = LogDnaClient::new(service_key)?;
    let lines = fetch(&client, &args)?;

    let mut stdout = std::io::stdout().lock();
    for line in &lines {
        writeln!(stdout, "{line}")?;
    }
    Ok(())
}

fn fetch<T: Transport>(client: &LogDnaClient<T>, args: &ExportArgs) -> anyhow::Result<Vec<String>> {
    let range = TimeRange {
        from: args.from,
        to: args.to,
    };
    let filters = ExportFilters {
        size: args.size,
        hosts: args.hosts.clone(),
        apps: args.apps.clone(),
        levels: args.levels.clone(),
        query: args.query.clone(),
        prefer: args.prefer,
    };
    client.export(&range, &filters).context("export failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use silo_logdna::MockTransport;

    fn args_at_rollover() -> ExportArgs {
        let dt = Utc.with_ymd_and_hms(2038, 1, 19, 3, 14, 7).unwrap();
        ExportArgs {
            from: dt.into(),
            to: dt.into(),
            size: None,
            hosts: vec![],
            apps: vec![],
            levels: vec![],
            query: None,
            prefer: None,
        }
    }

    #[test]
    fn fetch_returns_lines() {
        let client = LogDnaClient::with_transport(
            "test service key",
            MockTransport::replying("line 1\nline 2\nline 3\n"),
        );
        let lines = fetch(&client, &args_at_rollover()).unwrap();
        assert_eq!(lines, vec!["line 1", "line 2", "line 3"]);
    }

    #[test]
    fn fetch_maps_args_to_filters() {
        let client =
            LogDnaClient::with_transport("test service key", MockTransport::replying(""));
        let mut args = args_at_rollover();
        args.size = Some(10);
        args.levels = vec!["info".into(), "warning".into()];
        args.prefer = Some(Prefer::Tail);

        fetch(&client, &args).unwrap();

        let seen = client.transport().requests();
        assert_eq!(
            seen[0].params,
            vec![
                ("from", "2147483647".to_string()),
                ("to", "2147483647".to_string()),
                ("size", "10".to_string()),
                ("levels", "info,warning".to_string()),
                ("prefer", "tail".to_string()),
            ]
        );
    }

    #[test]
    fn fetch_reports_uniform_export_failure() {
        let client = LogDnaClient::with_transport(
            "test service key",
            MockTransport::failing("connection refused"),
        );
        let err = fetch(&client, &args_at_rollover()).unwrap_err();
        assert!(err.to_string().contains("export failed"));
    }
}
