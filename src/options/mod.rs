//! Option validation and tasklist argument construction
use log::debug;

use crate::core::field::FieldFormat;
use crate::error::TasklistError;
use crate::schema::SchemaKey;

/// How the parsed records are handed back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// One key/value record per output line
    #[default]
    Structured,
    /// A single rendered text table
    Table,
}

/// Query configuration for one tasklist invocation.
#[derive(Debug, Clone, Default)]
pub struct Options {
    pub verbose: bool,
    pub services: bool,
    /// `Some("")` lists every module, `Some(name)` restricts to one module.
    pub modules: Option<String>,
    pub apps: bool,
    pub output_mode: OutputMode,
    pub filters: Vec<String>,
    pub system: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub field_format: FieldFormat,
}

/// A fully specified remote target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteTarget<'a> {
    pub system: &'a str,
    pub username: &'a str,
    pub password: &'a str,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn services(mut self, services: bool) -> Self {
        self.services = services;
        self
    }

    pub fn modules(mut self, modules: impl Into<String>) -> Self {
        self.modules = Some(modules.into());
        self
    }

    pub fn apps(mut self, apps: bool) -> Self {
        self.apps = apps;
        self
    }

    pub fn output_mode(mut self, mode: OutputMode) -> Self {
        self.output_mode = mode;
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    pub fn remote(
        mut self,
        system: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.system = Some(system.into());
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    pub fn field_format(mut self, format: FieldFormat) -> Self {
        self.field_format = format;
        self
    }

    /// The remote target, if all three remote fields are set.
    pub fn remote_target(&self) -> Option<RemoteTarget<'_>> {
        match (&self.system, &self.username, &self.password) {
            (Some(system), Some(username), Some(password)) => Some(RemoteTarget {
                system,
                username,
                password,
            }),
            _ => None,
        }
    }
}

type Rule = fn(&Options) -> Result<(), TasklistError>;

/// Validation rules, evaluated in order; the first violation wins.
const RULES: [Rule; 4] = [
    verbose_is_exclusive,
    modules_and_services_are_exclusive,
    remote_is_complete,
    remote_filters_are_supported,
];

fn verbose_is_exclusive(options: &Options) -> Result<(), TasklistError> {
    if options.verbose && (options.services || options.modules.is_some()) {
        return Err(TasklistError::ConflictingOptions(
            "verbose is invalid when services or modules is set",
        ));
    }
    Ok(())
}

fn modules_and_services_are_exclusive(options: &Options) -> Result<(), TasklistError> {
    if options.modules.is_some() && options.services {
        return Err(TasklistError::ConflictingOptions(
            "services and modules can't be used together",
        ));
    }
    Ok(())
}

fn remote_is_complete(options: &Options) -> Result<(), TasklistError> {
    let present = [&options.system, &options.username, &options.password]
        .iter()
        .filter(|field| field.is_some())
        .count();
    match present {
        0 | 3 => Ok(()),
        _ => Err(TasklistError::IncompleteRemoteConfig),
    }
}

fn remote_filters_are_supported(options: &Options) -> Result<(), TasklistError> {
    if options.remote_target().is_none() {
        return Ok(());
    }
    match options.filters.iter().find(|filter| is_local_only_filter(filter)) {
        Some(filter) => Err(TasklistError::UnsupportedRemoteFilter(filter.clone())),
        None => Ok(()),
    }
}

/// Whether a filter's first token names a filter tasklist refuses for remote hosts.
pub fn is_local_only_filter(filter: &str) -> bool {
    let parameter = filter.split_whitespace().next().unwrap_or("").to_lowercase();
    parameter == "windowtitle" || parameter == "status"
}

/// Check the option combination without building anything.
pub fn validate(options: &Options) -> Result<(), TasklistError> {
    RULES.iter().try_for_each(|rule| rule(options))
}

/// Command-line tokens for `tasklist.exe`, in the order the utility expects.
///
/// Assumes `options` already passed [`validate`].
pub fn build_arguments(options: &Options) -> Vec<String> {
    let mut args: Vec<String> = vec!["/nh".into(), "/fo".into(), "csv".into()];

    if options.verbose {
        args.push("/v".into());
    }

    if options.apps {
        args.push("/apps".into());
    }

    if let Some(modules) = &options.modules {
        args.push("/m".into());
        if !modules.is_empty() {
            args.push(modules.clone());
        }
    }

    if options.services {
        args.push("/svc".into());
    }

    if let Some(remote) = options.remote_target() {
        args.extend(
            ["/s", remote.system, "/u", remote.username, "/p", remote.password]
                .into_iter()
                .map(String::from),
        );
    }

    for filter in &options.filters {
        args.push("/fi".into());
        args.push(filter.clone());
    }

    args
}

/// Pick the column layout matching the options.
pub fn resolve_schema(options: &Options) -> Result<SchemaKey, TasklistError> {
    let base = if options.apps {
        SchemaKey::Apps
    } else if options.modules.is_some() {
        SchemaKey::Modules
    } else if options.services {
        SchemaKey::Services
    } else {
        SchemaKey::Default
    };

    if options.verbose {
        base.verbose()
    } else {
        Ok(base)
    }
}

/// Validate, then derive the argument list and schema for one call.
pub fn prepare(options: &Options) -> Result<(Vec<String>, SchemaKey), TasklistError> {
    validate(options)?;
    let args = build_arguments(options);
    let schema = resolve_schema(options)?;
    debug!("tasklist arguments: {:?}, schema: {}", args, schema);
    Ok((args, schema))
}
