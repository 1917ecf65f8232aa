//! `silo validate` — check a deploy config file against the hook schema.
//!
//! Schema violations come with hints for the mistakes people actually
//! make: misspelled hook names, unknown task options, and forgetting the
//! list dash under a hook.

use std::path::PathBuf;

use anyhow::{Context, bail};
use clap::Args;
use jsonschema::JSONSchema;
use jsonschema::error::ValidationErrorKind;
use serde_json::json;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the deploy config file (e.g. silo.yml)
    pub config: PathBuf,
}

/// One schema violation, with an optional hint.
#[derive(Debug)]
pub struct Finding {
    pub message: String,
    pub hint: Option<String>,
}

/// Hooks a deploy config may define, in run order.
const HOOKS: &[&str] = &["pre_deploy", "deploy", "post_deploy", "restart", "rollback"];

fn deploy_schema() -> serde_json::Value {
    let hook = json!({
        "type": "array",
        "items": {
            "type": "object",
            "properties": {
                "name": {"type": "string"},
                "command": {"type": "string"},
                "cwd": {"type": "string"},
                "user": {"type": "string"},
                "roles": {"type": "array", "items": {"type": "string"}},
            },
            "additionalProperties": false,
        },
    });
    let properties: serde_json::Map<String, serde_json::Value> = HOOKS
        .iter()
        .map(|name| (name.to_string(), hook.clone()))
        .collect();
    json!({
        "type": "object",
        "properties": properties,
        "additionalProperties": false,
    })
}

pub fn run(args: &ValidateArgs) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(&args.config).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            anyhow::anyhow!("config file not found: {}", args.config.display())
        } else {
            anyhow::anyhow!("could not read {}: {e}", args.config.display())
        }
    })?;

    let findings = validate_contents(&contents)
        .with_context(|| format!("validation of {} failed", args.config.display()))?;

    if findings.is_empty() {
        println!("{} is valid", args.config.display());
        return Ok(());
    }

    for finding in &findings {
        println!("{}", finding.message);
        if let Some(hint) = &finding.hint {
            println!("- Hint: {hint}");
        }
    }
    bail!("{} validation error(s) found", findings.len());
}

/// Validate YAML contents against the deploy schema.
pub fn validate_contents(contents: &str) -> anyhow::Result<Vec<Finding>> {
    let document: serde_json::Value = serde_yaml::from_str(contents)
        .map_err(|e| anyhow::anyhow!("config file appears to be invalid YAML: {e}"))?;
    if document.is_null() {
        bail!("config file appears to be invalid YAML: no data");
    }

    let schema = deploy_schema();
    let compiled = JSONSchema::compile(&schema)
        .map_err(|e| anyhow::anyhow!("internal schema error: {e}"))?;

    let findings = match compiled.validate(&document) {
        Ok(()) => Vec::new(),
        Err(errors) => errors
            .map(|error| {
                let path = error.instance_path.to_string();
                let hint = hint_for(&error.kind, &path);
                let message = if path.is_empty() {
                    error.to_string()
                } else {
                    format!("{path}: {error}")
                };
                Finding { message, hint }
            })
            .collect(),
    };
    Ok(findings)
}

fn hint_for(kind: &ValidationErrorKind, instance_path: &str) -> Option<String> {
    let segments: Vec<&str> = instance_path.split('/').filter(|s| !s.is_empty()).collect();
    match kind {
        ValidationErrorKind::AdditionalProperties { unexpected } => {
            if segments.is_empty() {
                let names = unexpected.join("\", \"");
                Some(format!("\"{names}\" is not a valid hook"))
            } else {
                let hook = segments[0];
                let names = unexpected.join("\", \"");
                Some(format!("\"{names}\" is not a valid option for the {hook} hook"))
            }
        }
        ValidationErrorKind::Type { .. } => {
            if segments.last() == Some(&"roles") {
                Some("roles must be a list, e.g. ['web']".to_string())
            } else if segments.len() == 1 {
                let hook = segments[0];
                Some(format!("the {hook} hook is malformed (did you forget the dash?)"))
            } else {
                None
            }
        }
        _ => None,
    }
}
