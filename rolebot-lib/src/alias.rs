use crate::constant::DEFAULT_ALIASES;
use crate::error::Error;
use crate::error::Result;
use itertools::Itertools;
use once_cell::sync::Lazy;
use std::collections::BTreeMap;

static DEFAULT: Lazy<AliasTable> = Lazy::new(|| {
    AliasTable(
        DEFAULT_ALIASES
            .iter()
            .map(|(key, name)| (key.to_string(), name.to_string()))
            .collect(),
    )
});

/// Short lowercase keys mapped to role display names, sorted by key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable(BTreeMap<String, String>);

impl AliasTable {
    /// Build a table, keys are lowercased and must stay unique
    pub fn new<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut table = BTreeMap::new();
        for (key, name) in pairs {
            let key = normalize(key.as_ref().split_whitespace());
            let name = name.into();
            if key.is_empty() {
                return Err(Error::Config("empty alias key".to_owned()));
            }
            if name.trim().is_empty() {
                return Err(Error::Config(format!("alias `{}` has no role name", key)));
            }
            if let Some(previous) = table.insert(key.clone(), name) {
                return Err(Error::Config(format!(
                    "alias `{}` defined twice (`{}`)",
                    key, previous
                )));
            }
        }
        if table.is_empty() {
            return Err(Error::Config("no alias defined".to_owned()));
        }
        Ok(Self(table))
    }

    /// Find the role name for the given argument tokens
    pub fn resolve<S: AsRef<str>>(&self, args: &[S]) -> Option<&str> {
        self.0
            .get(&normalize(args.iter().map(|arg| arg.as_ref())))
            .map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, name)| (key.as_str(), name.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma separated keys with leading capitals
    pub fn titled_keys(&self) -> String {
        self.keys().map(title_case).join(", ")
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        DEFAULT.clone()
    }
}

fn normalize<'a>(mut tokens: impl Iterator<Item = &'a str>) -> String {
    tokens.join(" ").to_lowercase()
}

/// Capitalize every letter following a separator (anything but a letter,
/// a digit or `_`)
pub fn title_case(key: &str) -> String {
    let mut titled = String::with_capacity(key.len());
    let mut after_separator = true;
    for c in key.chars() {
        if after_separator {
            titled.extend(c.to_uppercase());
        } else {
            titled.push(c);
        }
        after_separator = !(c.is_alphanumeric() || c == '_');
    }
    titled
}
