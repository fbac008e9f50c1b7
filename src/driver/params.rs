use serde::{Deserialize, Serialize};
use std::str::FromStr;
use super::error::{DriverError, Result};

/// Ordered list of `key=value` (or bare `key`) driver options
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverParams(Vec<String>);

impl DriverParams {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Split a comma separated option string, dropping empty items
    pub fn parse_comma_separated(options: &str) -> Self {
        Self(
            options
                .split(',')
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    pub fn push(&mut self, option: impl Into<String>) {
        self.0.push(option.into());
    }

    pub fn extend<I, S>(&mut self, options: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.0.extend(options.into_iter().map(Into::into));
    }

    /// Value of option `name`: `Some("")` for a bare key, `None` when absent
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.iter().find_map(|option| {
            let rest = option.strip_prefix(name)?;
            if rest.is_empty() {
                Some("")
            } else {
                rest.strip_prefix('=')
            }
        })
    }

    pub fn get_bool(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn get_int(&self, name: &str, default: i32) -> Result<i32> {
        match self.get(name) {
            None => Ok(default),
            Some(value) => value.trim().parse().map_err(|_| DriverError::InvalidParameter {
                name: name.to_string(),
                value: value.to_string(),
            }),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for DriverParams {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Requested driver: optional explicit name plus its options
///
/// Written as `name:key=value,key2` on command lines and in config files.
/// An empty name asks for autoprobing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverSelection {
    pub name: Option<String>,
    pub params: DriverParams,
}

impl DriverSelection {
    /// Autoprobe with no options
    pub fn autoprobe() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            params: DriverParams::new(),
        }
    }

    pub fn with_params(mut self, params: DriverParams) -> Self {
        self.params = params;
        self
    }

    pub fn parse(selection: &str) -> Self {
        let (name, options) = match selection.split_once(':') {
            Some((name, options)) => (name, options),
            None => (selection, ""),
        };
        let name = name.trim();

        Self {
            name: (!name.is_empty()).then(|| name.to_string()),
            params: DriverParams::parse_comma_separated(options),
        }
    }
}

impl FromStr for DriverSelection {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}
