//! Adapter options offered to the host, and the connection settings parsed
//! from their values.

use scylla::client::execution_profile::ExecutionProfile;
use scylla::client::session_builder::SessionBuilder;
use scylla::statement::Consistency;

use crate::errors::ConnectionError;
use crate::transaction::{parse_consistency, CONSISTENCY_CYCLE};

/// The only native protocol version the driver speaks.
pub const SUPPORTED_PROTOCOL_VERSION: i32 = 4;

/// Validates a text option value, returning the reason on rejection.
pub type Validator = fn(&str) -> Result<(), String>;

/// How an option takes its value.
#[derive(Clone, Copy, Debug)]
pub enum OptionKind {
    /// Free text, optionally validated.
    Text {
        /// Check applied to user input.
        validator: Option<Validator>,
    },
    /// One value out of a fixed list.
    Select {
        /// Accepted values.
        choices: &'static [&'static str],
    },
}

/// Descriptor of one host-facing option.
#[derive(Clone, Copy, Debug)]
pub struct AdapterOption {
    /// Long name, e.g. `protocol-version`.
    pub name: &'static str,
    /// Help text.
    pub description: &'static str,
    /// Short flags, e.g. `-P`.
    pub short_decls: &'static [&'static str],
    /// Value used when the user gives none.
    pub default: Option<&'static str>,
    /// Kind of value.
    pub kind: OptionKind,
}

impl AdapterOption {
    /// Checks a user-supplied value against this option.
    pub fn validate(&self, value: &str) -> Result<(), String> {
        match self.kind {
            OptionKind::Text {
                validator: Some(validator),
            } => validator(value),
            OptionKind::Text { validator: None } => Ok(()),
            OptionKind::Select { choices } => {
                if choices.contains(&value) {
                    Ok(())
                } else {
                    Err(format!("Expected one of: {}", choices.join(", ")))
                }
            }
        }
    }
}

fn int_validator(value: &str) -> Result<(), String> {
    value
        .parse::<i64>()
        .map(|_| ())
        .map_err(|_| format!("Cannot convert '{value}' to an int!"))
}

const CONSISTENCY_CHOICES: [&str; 11] = [
    "ANY",
    "ONE",
    "TWO",
    "THREE",
    "QUORUM",
    "ALL",
    "LOCAL_QUORUM",
    "EACH_QUORUM",
    "SERIAL",
    "LOCAL_SERIAL",
    "LOCAL_ONE",
];

/// All options, in the order the host lists them.
pub static ADAPTER_OPTIONS: [AdapterOption; 7] = [
    AdapterOption {
        name: "host",
        description: "Specifies the initial host to connect to. After the driver successfully \
            connects to the node, it will auto discover the rest of the nodes in the cluster \
            and will connect to them.",
        short_decls: &["-h"],
        default: Some("localhost"),
        kind: OptionKind::Text { validator: None },
    },
    AdapterOption {
        name: "port",
        description: "Port number to connect to at the server host.",
        short_decls: &["-p"],
        default: Some("9042"),
        kind: OptionKind::Text {
            validator: Some(int_validator),
        },
    },
    AdapterOption {
        name: "keyspace",
        description: "The keyspace name to use when connecting with the Cassandra server.",
        short_decls: &["-k"],
        default: None,
        kind: OptionKind::Text { validator: None },
    },
    AdapterOption {
        name: "username",
        description: "Cassandra user name to connect as.",
        short_decls: &["-u"],
        default: None,
        kind: OptionKind::Text { validator: None },
    },
    AdapterOption {
        name: "password",
        description: "Password to be used if the server demands password authentication.",
        short_decls: &[],
        default: None,
        kind: OptionKind::Text { validator: None },
    },
    AdapterOption {
        name: "protocol-version",
        description: "The maximum version of the native protocol to use. \
            If not specified, will be auto-discovered by the driver.",
        short_decls: &["-P"],
        default: None,
        kind: OptionKind::Text {
            validator: Some(int_validator),
        },
    },
    AdapterOption {
        name: "consistency-level",
        description: "Specifies how many replicas must respond for an operation to be \
            considered a success. Default: `LOCAL_ONE`.",
        short_decls: &["-C"],
        default: Some("LOCAL_ONE"),
        kind: OptionKind::Select {
            choices: &CONSISTENCY_CHOICES,
        },
    },
];

/// Looks an option up by name. Underscores match hyphens.
pub fn find_option(name: &str) -> Option<&'static AdapterOption> {
    let name = name.replace('_', "-");
    ADAPTER_OPTIONS.iter().find(|option| option.name == name)
}

/// Connection settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConnectOptions {
    /// Initial contact point.
    pub host: String,
    /// Native transport port.
    pub port: u16,
    /// Keyspace to use once connected.
    pub keyspace: Option<String>,
    /// User for plain-text authentication.
    pub username: Option<String>,
    /// Password for plain-text authentication.
    pub password: Option<String>,
    /// Requested protocol version.
    pub protocol_version: Option<i32>,
    /// Default consistency of the session.
    pub consistency: Consistency,
}

impl Default for ConnectOptions {
    fn default() -> Self {
        Self {
            host: "localhost".to_owned(),
            port: 9042,
            keyspace: None,
            username: None,
            password: None,
            protocol_version: None,
            consistency: Consistency::LocalOne,
        }
    }
}

impl ConnectOptions {
    /// Parses option values given by the host as `(name, value)` pairs.
    ///
    /// Names not listed in [ADAPTER_OPTIONS] are ignored, since the host may
    /// pass settings meant for other adapters. Empty values leave the
    /// default in place.
    pub fn from_values<'a>(
        values: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, ConnectionError> {
        let mut options = Self::default();
        for (name, value) in values {
            let Some(option) = find_option(name) else {
                continue;
            };
            if value.is_empty() {
                continue;
            }
            let invalid = |reason: String| ConnectionError::InvalidOption {
                option: option.name,
                value: value.to_owned(),
                reason,
            };
            option.validate(value).map_err(invalid)?;

            match option.name {
                "host" => options.host = value.to_owned(),
                "port" => {
                    options.port = value
                        .parse()
                        .map_err(|_| invalid("Port out of range".to_owned()))?;
                }
                "keyspace" => options.keyspace = Some(value.to_owned()),
                "username" => options.username = Some(value.to_owned()),
                "password" => options.password = Some(value.to_owned()),
                "protocol-version" => {
                    let version = value
                        .parse()
                        .map_err(|_| invalid("Protocol version out of range".to_owned()))?;
                    if version != SUPPORTED_PROTOCOL_VERSION {
                        return Err(invalid(format!(
                            "The driver only supports protocol version {SUPPORTED_PROTOCOL_VERSION}"
                        )));
                    }
                    options.protocol_version = Some(version);
                }
                "consistency-level" => {
                    options.consistency = parse_consistency(value)
                        .ok_or_else(|| invalid("Unknown consistency level".to_owned()))?;
                }
                _ => {}
            }
        }
        Ok(options)
    }

    /// Contact point in `host:port` form.
    pub fn known_node(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Session builder configured from these options.
    pub fn session_builder(&self) -> SessionBuilder {
        let profile = ExecutionProfile::builder()
            .consistency(self.consistency)
            .build();

        let mut builder = SessionBuilder::new()
            .known_node(self.known_node())
            .default_execution_profile_handle(profile.into_handle());
        if let Some(username) = &self.username {
            builder = builder.user(username, self.password.as_deref().unwrap_or_default());
        }
        if let Some(keyspace) = &self.keyspace {
            builder = builder.use_keyspace(keyspace, false);
        }
        builder
    }
}

// Keeps the choices list in step with the toggle order.
const _: () = assert!(CONSISTENCY_CHOICES.len() == CONSISTENCY_CYCLE.len());
