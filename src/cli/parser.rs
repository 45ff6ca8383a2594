//! Classification of argument tokens into a command, options and arguments.
//!
//! The accepted shapes are:
//!
//! ```text
//! [options] [arguments] [options]
//! [options] -- [arguments]
//! [command]
//! [command] [options] [arguments] [options]
//! [command] [options] -- [arguments]
//! ```
//!
//! `-la` sets the flags `l` and `a`. `--list` sets the flag `list` and
//! `--all=vertical` sets `all` to `"vertical"`. Only long options carry
//! values: `-f=bar` sets the flags `f`, `=`, `b`, `a` and `r`. Everything
//! after a bare `--` is an argument, even when it starts with `-`.

use std::{collections::BTreeMap, fmt};

use serde::{Serialize, Serializer};
use tracing::debug;

const END_OF_OPTIONS: &str = "--";

/// Value recorded for an option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
    /// Present without a value (`-x`, `--name`).
    Flag,
    /// Long option given as `--name=value`.
    Value(String),
}

impl OptionValue {
    /// Returns the string value, or `None` for a flag.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            OptionValue::Flag => None,
            OptionValue::Value(value) => Some(value),
        }
    }

    /// Returns `true` if the option was given without a value.
    pub fn is_flag(&self) -> bool {
        matches!(self, OptionValue::Flag)
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionValue::Flag => write!(f, "true"),
            OptionValue::Value(value) => write!(f, "{value}"),
        }
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            OptionValue::Flag => serializer.serialize_bool(true),
            OptionValue::Value(value) => serializer.serialize_str(value),
        }
    }
}

/// A fully classified command line.
///
/// Built fresh by [`Invocation::classify`] on every call; nothing carries
/// over from a previous invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Invocation {
    /// Command name, empty when the line did not start with one.
    pub command: String,
    /// Options keyed by name. Repeated keys keep the last value seen.
    pub options: BTreeMap<String, OptionValue>,
    /// Positional arguments in command-line order.
    pub arguments: Vec<String>,
}

impl Invocation {
    /// Classifies tokens that follow the program name.
    ///
    /// A leading token that does not start with `-` is taken as the command
    /// name before any option scanning happens. Classification never fails:
    /// every token ends up as the command, an option or an argument.
    pub fn classify<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut invocation = Invocation::default();
        let mut remaining = tokens.iter().map(|token| AsRef::<str>::as_ref(token)).peekable();

        if let Some(first) = remaining.next_if(|token| !token.starts_with('-')) {
            invocation.command = first.to_string();
        }

        let mut end_of_options = false;
        for token in remaining {
            if end_of_options {
                invocation.arguments.push(token.to_string());
                continue;
            }

            if token == END_OF_OPTIONS {
                end_of_options = true;
                continue;
            }

            if let Some(long) = token.strip_prefix("--") {
                invocation.record_long(long);
            } else if let Some(cluster) = token.strip_prefix('-') {
                invocation.record_short_cluster(cluster);
            } else {
                invocation.arguments.push(token.to_string());
            }
        }

        debug!(
            command = %invocation.command,
            options = invocation.options.len(),
            arguments = invocation.arguments.len(),
            "classified invocation"
        );

        invocation
    }

    /// Classifies a full argument vector, discarding the program name at index 0.
    pub fn from_argv<S: AsRef<str>>(argv: &[S]) -> Self {
        Self::classify(argv.get(1..).unwrap_or_default())
    }

    /// Looks up an option by name.
    pub fn option(&self, name: &str) -> Option<&OptionValue> {
        self.options.get(name)
    }

    /// Returns `true` if the option was given in any form.
    pub fn has_option(&self, name: &str) -> bool {
        self.options.contains_key(name)
    }

    /// Returns the positional argument at `index`.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }

    fn record_long(&mut self, option: &str) {
        match option.split_once('=') {
            Some((key, value)) => {
                self.options
                    .insert(key.to_string(), OptionValue::Value(value.to_string()));
            }
            None => {
                self.options.insert(option.to_string(), OptionValue::Flag);
            }
        }
    }

    fn record_short_cluster(&mut self, cluster: &str) {
        for flag in cluster.chars() {
            self.options.insert(flag.to_string(), OptionValue::Flag);
        }
    }
}
