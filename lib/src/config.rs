//! Hierarchical access to delivery rule documents.
//!
//! A *value* is referred to using a *path* of *name*s (slice of strings), each
//! of which walks a level down the hierarchy of *section*s.  For example,
//! `&["delivery-rules", "0", "url-redirect", "path"]`.  Sequences are sections
//! whose names are the indices of their entries.
//!
//! Paths are case-insensitive.  Values are strings.

pub mod parse;
pub mod validate;

pub trait ValueParser<T>: std::fmt::Debug {
    fn parse(&self, value: &str) -> Result<T, String>;
}

pub trait ValueValidator<T>: std::fmt::Debug {
    fn validate(&self, value: &T) -> Result<(), String>;
}

/// Everything needed to read a value.
#[derive(Clone, Debug)]
pub struct ValueRef<'a, T> {
    /// Path to read the value from.
    pub names: &'a [&'a str],
    /// Default to use when there is no value at the path.
    pub def: &'a str,
    pub type_: &'a dyn ValueParser<T>,
    pub validators: &'a [&'a dyn ValueValidator<T>],
}

/// Read values from a document.
pub trait Config {
    /// Get the value at the path given by `names`, if there is one.
    fn find<'s>(&'s self, names: &[&str]) -> Option<&'s str>;

    /// Number of entries in the section at the path given by `names`; 0 if
    /// there is no section there.
    fn count(&self, names: &[&str]) -> usize;

    /// Like [`find`](Config::find), but fails when the value was not written
    /// as a string, so its text may differ from the source.
    fn find_string<'s>(&'s self, names: &[&str])
    -> Result<Option<&'s str>, String> {
        Ok(self.find(names))
    }

    /// Get the value at the path given by `names`, or the default `def`.
    fn get<'s>(&'s self, names: &[&str], def: &'s str) -> &'s str {
        self.find(names).unwrap_or(def)
    }
}

/// Get a value using a [reference](ValueRef).
pub fn get_ref<C, T>(config: &C, vref: &ValueRef<T>) -> Result<T, String>
where
    C: Config + ?Sized,
{
    let raw = config.get(vref.names, vref.def);
    log::trace!("read {:?} = {raw:?}", vref.names);
    let parsed = vref.type_.parse(raw)?;
    for val in vref.validators {
        val.validate(&parsed)?;
    }
    Ok(parsed)
}

/// Implementation of [`Config`] using an in-memory map.
///
/// A value and a section may not exist at the same path.
pub mod map {
    use std::collections::HashMap;

    /// A value or a section.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub enum Entry {
        Value(String),
        /// A value read from a source that did not keep its text, eg. a YAML
        /// number, boolean or null.
        Scalar(String),
        Section(HashMap<String, Entry>),
    }

    impl Entry {
        fn lookup(&self, names: &[&str]) -> Option<&Entry> {
            match names.split_first() {
                Some((first_name, other_names)) => match self {
                    Entry::Value(_) | Entry::Scalar(_) => None,
                    Entry::Section(section) => section
                        .get(&first_name.to_ascii_lowercase())
                        .and_then(|entry| entry.lookup(other_names)),
                },
                None => Some(self),
            }
        }
    }

    /// Implementation of [`Config`](super::Config) using an in-memory map.
    #[derive(Clone, Debug, Eq, PartialEq)]
    pub struct Config {
        cfg: Entry,
    }

    impl super::Config for Config {
        fn find<'s>(&'s self, names: &[&str]) -> Option<&'s str> {
            match self.cfg.lookup(names)? {
                Entry::Value(value) | Entry::Scalar(value) =>
                    Some(value.as_str()),
                Entry::Section(_) => None,
            }
        }

        fn find_string<'s>(&'s self, names: &[&str])
        -> Result<Option<&'s str>, String> {
            match self.cfg.lookup(names) {
                Some(Entry::Value(value)) => Ok(Some(value.as_str())),
                Some(Entry::Scalar(value)) => Err(format!(
                    "value at {} must be a quoted string, read as {value:?}",
                    names.join("."))),
                _ => Ok(None),
            }
        }

        fn count(&self, names: &[&str]) -> usize {
            match self.cfg.lookup(names) {
                Some(Entry::Section(section)) => section.len(),
                _ => 0,
            }
        }
    }

    /// Copy an entry and lowercase its keys.
    fn normalise(entry: &Entry) -> Entry {
        match entry {
            Entry::Value(v) => Entry::Value(v.to_owned()),
            Entry::Scalar(v) => Entry::Scalar(v.to_owned()),
            Entry::Section(m) => {
                let m: HashMap<String, Entry> = m.iter()
                    .map(|(k, v)| (k.to_lowercase(), normalise(v)))
                    .collect();
                Entry::Section(m)
            }
        }
    }

    /// Construct a config from a hierarchical map.
    pub fn new(cfg: HashMap<String, Entry>) -> Config {
        Config { cfg: normalise(&Entry::Section(cfg)) }
    }
}

/// Implementation of [`Config`] using a YAML document.
///
/// Strings become values.  Other scalars become [`Scalar`](map::Entry::Scalar)
/// values (`null` is the empty string), since their source text is lost, eg.
/// `Null` and `~` both read as null and `0x10` as `16`.  Sequences become
/// sections keyed by index, and non-string mapping keys are dropped.
///
/// When multiple values have equivalent paths (because paths are
/// case-insensitive), there is no defined scheme for which is returned.
pub mod file {
    use std::{fs::File, path::Path};
    use super::map::{self, Entry};
    use serde_yaml::Value;

    fn to_entry(value: &Value) -> Entry {
        match value {
            Value::Null => Entry::Scalar("".to_owned()),
            Value::Bool(b) => Entry::Scalar(b.to_string()),
            Value::Number(n) => Entry::Scalar(n.to_string()),
            Value::String(s) => Entry::Value(s.to_owned()),
            Value::Sequence(s) => {
                Entry::Section(s.iter()
                    .enumerate()
                    .map(|(i, v)| (i.to_string(), to_entry(v)))
                    .collect())
            }
            Value::Mapping(m) => {
                Entry::Section(m.iter()
                    .filter_map(|(k, v)| {
                        k.as_str().map(|k_str| (k_str.to_owned(), to_entry(v)))
                    })
                    .collect())
            }
            Value::Tagged(t) => to_entry(&t.value),
        }
    }

    fn from_value(value: &Value) -> Result<map::Config, String> {
        match (value, to_entry(value)) {
            (Value::Mapping(_), Entry::Section(e)) => Ok(map::new(e)),
            _ => Err("invalid document: top-level must be a map".to_owned()),
        }
    }

    /// Construct a config from YAML text.
    pub fn from_str(text: &str) -> Result<map::Config, String> {
        let value: Value = serde_yaml::from_str(text)
            .map_err(|e| format!("error parsing document: {e}"))?;
        from_value(&value)
    }

    /// Construct a config from a YAML file.
    pub fn new<P>(path: P) -> Result<map::Config, String>
    where
        P: AsRef<Path> + core::fmt::Debug
    {
        let file = File::open(path.as_ref())
            .map_err(|e| format!("error opening file ({path:?}): {e}"))?;
        let value: Value = serde_yaml::from_reader(file)
            .map_err(|e| format!(
                "error loading document from file ({path:?}): {e}"))?;
        from_value(&value)
    }
}
