//! Column layouts for every supported tasklist output mode
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::TasklistError;

const DEFAULT: &[&str] = &["imageName", "pid", "sessionName", "sessionNumber", "memUsage"];

const DEFAULT_VERBOSE: &[&str] = &[
    "imageName",
    "pid",
    "sessionName",
    "sessionNumber",
    "memUsage",
    "status",
    "username",
    "cpuTime",
    "windowTitle",
];

const APPS: &[&str] = &["imageName", "pid", "memUsage", "packageName"];

const APPS_VERBOSE: &[&str] = &[
    "imageName",
    "pid",
    "sessionName",
    "sessionNumber",
    "memUsage",
    "status",
    "username",
    "cpuTime",
    "windowTitle",
    "packageName",
];

const MODULES: &[&str] = &["imageName", "pid", "modules"];

const SERVICES: &[&str] = &["imageName", "pid", "services"];

/// Selector for the column layout tasklist emits for a given option set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SchemaKey {
    Default,
    DefaultVerbose,
    Apps,
    AppsVerbose,
    Modules,
    Services,
}

impl SchemaKey {
    pub const ALL: [SchemaKey; 6] = [
        SchemaKey::Default,
        SchemaKey::DefaultVerbose,
        SchemaKey::Apps,
        SchemaKey::AppsVerbose,
        SchemaKey::Modules,
        SchemaKey::Services,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SchemaKey::Default => "default",
            SchemaKey::DefaultVerbose => "defaultVerbose",
            SchemaKey::Apps => "apps",
            SchemaKey::AppsVerbose => "appsVerbose",
            SchemaKey::Modules => "modules",
            SchemaKey::Services => "services",
        }
    }

    /// Ordered column names for this layout.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            SchemaKey::Default => DEFAULT,
            SchemaKey::DefaultVerbose => DEFAULT_VERBOSE,
            SchemaKey::Apps => APPS,
            SchemaKey::AppsVerbose => APPS_VERBOSE,
            SchemaKey::Modules => MODULES,
            SchemaKey::Services => SERVICES,
        }
    }

    /// Verbose variant of a base layout.
    ///
    /// Only `default` and `apps` have one; asking for any other combination
    /// yields `UnknownSchema` carrying the name that was requested.
    pub fn verbose(self) -> Result<SchemaKey, TasklistError> {
        match self {
            SchemaKey::Default => Ok(SchemaKey::DefaultVerbose),
            SchemaKey::Apps => Ok(SchemaKey::AppsVerbose),
            other => Err(TasklistError::UnknownSchema(format!("{}Verbose", other.name()))),
        }
    }
}

impl fmt::Display for SchemaKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SchemaKey {
    type Err = TasklistError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SchemaKey::ALL
            .into_iter()
            .find(|key| key.name() == s)
            .ok_or_else(|| TasklistError::UnknownSchema(s.to_string()))
    }
}
