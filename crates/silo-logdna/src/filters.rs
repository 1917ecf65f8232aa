//! Export time range and optional filter set.

use std::str::FromStr;

use crate::epoch::Timestamp;

/// The export window. `from <= to` is the caller's responsibility — the
/// API rejects inverted ranges on its own.
#[derive(Debug, Clone, Copy)]
pub struct TimeRange {
    pub from: Timestamp,
    pub to: Timestamp,
}

/// Which end of the window to keep when the result is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefer {
    Head,
    Tail,
}

impl Prefer {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Head => "head",
            Self::Tail => "tail",
        }
    }
}

impl FromStr for Prefer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "head" => Ok(Self::Head),
            "tail" => Ok(Self::Tail),
            other => Err(format!("unknown prefer value: {other}")),
        }
    }
}

/// Optional filters for an export call.
///
/// Each field carries its own presence rule rather than a blanket
/// truthiness check: `size` is sent whenever it is set, zero included;
/// string and collection fields are sent only when non-empty.
#[derive(Debug, Clone, Default)]
pub struct ExportFilters {
    /// Maximum number of lines to return. `Some(0)` is still sent.
    pub size: Option<u32>,
    /// Hostnames to include, comma-joined on the wire.
    pub hosts: Vec<String>,
    /// Application names to include, comma-joined on the wire.
    pub apps: Vec<String>,
    /// Log levels to include, comma-joined on the wire.
    pub levels: Vec<String>,
    /// Search query string.
    pub query: Option<String>,
    pub prefer: Option<Prefer>,
}

impl ExportFilters {
    /// Assemble the request parameter list: mandatory `from`/`to` first,
    /// then every present optional filter.
    pub fn to_query(&self, from: i64, to: i64) -> Vec<(&'static str, String)> {
        let mut params = vec![("from", from.to_string()), ("to", to.to_string())];
        if let Some(size) = self.size {
            params.push(("size", size.to_string()));
        }
        if !self.hosts.is_empty() {
            params.push(("hosts", self.hosts.join(",")));
        }
        if !self.apps.is_empty() {
            params.push(("apps", self.apps.join(",")));
        }
        if !self.levels.is_empty() {
            params.push(("levels", self.levels.join(",")));
        }
        if let Some(query) = &self.query {
            if !query.is_empty() {
                params.push(("query", query.clone()));
            }
        }
        if let Some(prefer) = self.prefer {
            params.push(("prefer", prefer.as_str().to_string()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROLLOVER: i64 = 2_147_483_647;

    fn params(filters: &ExportFilters) -> Vec<(&'static str, String)> {
        filters.to_query(ROLLOVER, ROLLOVER)
    }

    #[test]
    fn full_filter_set() {
        let filters = ExportFilters {
            size: Some(10),
            levels: vec!["info".into(), "warning".into()],
            prefer: Some(Prefer::Tail),
            ..Default::default()
        };
        assert_eq!(
            params(&filters),
            vec![
                ("from", ROLLOVER.to_string()),
                ("to", ROLLOVER.to_string()),
                ("size", "10".into()),
                ("levels", "info,warning".into()),
                ("prefer", "tail".into()),
            ]
        );
    }

    #[test]
    fn size_zero_kept_absent_levels_dropped() {
        let filters = ExportFilters {
            size: Some(0),
            levels: vec![],
            ..Default::default()
        };
        assert_eq!(
            params(&filters),
            vec![
                ("from", ROLLOVER.to_string()),
                ("to", ROLLOVER.to_string()),
                ("size", "0".into()),
            ]
        );
    }

    #[test]
    fn empty_query_dropped() {
        let filters = ExportFilters {
            query: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(
            params(&filters),
            vec![("from", ROLLOVER.to_string()), ("to", ROLLOVER.to_string())]
        );
    }

    #[test]
    fn no_filters_sends_range_only() {
        assert_eq!(
            params(&ExportFilters::default()),
            vec![("from", ROLLOVER.to_string()), ("to", ROLLOVER.to_string())]
        );
    }

    #[test]
    fn prefer_parses_from_str() {
        assert_eq!("tail".parse::<Prefer>().unwrap(), Prefer::Tail);
        assert_eq!("head".parse::<Prefer>().unwrap(), Prefer::Head);
        assert!("middle".parse::<Prefer>().is_err());
    }
}
