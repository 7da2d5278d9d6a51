use std::collections::BTreeMap;

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value as JsonValue;

use crate::routes::{users, API_ROUTES};

/// How an endpoint is addressed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EndpointKind {
    /// Fixed path, used as-is
    Literal,
    /// Path template with one capture, filled in by a builder function
    Template { param: &'static str },
}

/// One endpoint of the route table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub group: &'static str,
    pub name: &'static str,
    pub path: &'static str,
    pub kind: EndpointKind,
}

impl RouteEntry {
    const fn literal(group: &'static str, name: &'static str, path: &'static str) -> Self {
        Self {
            group,
            name,
            path,
            kind: EndpointKind::Literal,
        }
    }
}

/// All endpoints in declaration order.
pub fn entries() -> Vec<RouteEntry> {
    vec![
        RouteEntry::literal("AUTH", "LOGIN", API_ROUTES.auth.login),
        RouteEntry::literal("AUTH", "REGISTER", API_ROUTES.auth.register),
        RouteEntry::literal("AUTH", "LOGOUT", API_ROUTES.auth.logout),
        RouteEntry::literal("AUTH", "REFRESH", API_ROUTES.auth.refresh),
        RouteEntry::literal("USERS", "ME", API_ROUTES.users.me),
        RouteEntry {
            group: "USERS",
            name: "BY_ID",
            path: users::BY_ID,
            kind: EndpointKind::Template {
                param: users::BY_ID_PARAM,
            },
        },
    ]
}

/// JSON view of the route table for consumers that cannot link this crate.
#[derive(Debug, Clone)]
pub struct RouteManifest {
    entries: Vec<RouteEntry>,
    base_url: Option<String>,
}

impl RouteManifest {
    pub fn new() -> Self {
        Self {
            entries: entries(),
            base_url: None,
        }
    }

    /// Prefix every path with `base_url`. Trailing slashes on the base are dropped;
    /// the base is otherwise used verbatim.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = Some(base_url.trim_end_matches('/').to_string());
        self
    }

    pub fn entries(&self) -> &[RouteEntry] {
        &self.entries
    }

    fn render_path(&self, path: &str) -> String {
        match &self.base_url {
            Some(base) => format!("{base}{path}"),
            None => path.to_string(),
        }
    }

    /// Nested `{ GROUP: { NAME: path } }` object, keys sorted.
    pub fn to_value(&self) -> JsonValue {
        let mut groups: BTreeMap<&str, BTreeMap<&str, String>> = BTreeMap::new();
        for entry in &self.entries {
            groups
                .entry(entry.group)
                .or_default()
                .insert(entry.name, self.render_path(entry.path));
        }

        serde_json::json!(groups)
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let value = self.to_value();
        let rendered = if pretty {
            serde_json::to_string_pretty(&value)
        } else {
            serde_json::to_string(&value)
        }
        .context("Failed to serialize route manifest")?;

        tracing::debug!(
            "Rendered route manifest with {} entries ({} bytes)",
            self.entries.len(),
            rendered.len()
        );

        Ok(rendered)
    }
}

impl Default for RouteManifest {
    fn default() -> Self {
        Self::new()
    }
}
