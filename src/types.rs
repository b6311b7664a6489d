use std::fmt;

use serde::{Deserialize, Serialize};

/// A marker attached to a field that changes how it is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flag {
    /// Boolean switch: presence means `true`. Combined with `Multi` it counts.
    Flag,
    /// Repeatable: values accumulate into a list.
    Multi,
    /// Must resolve to a value, or fall back to a flag default.
    Required,
    /// Reserved for interactive prompting; ignored during resolution.
    Prompt,
}

impl Flag {
    const ALL: [Flag; 4] = [Flag::Flag, Flag::Multi, Flag::Required, Flag::Prompt];

    fn bit(self) -> u8 {
        match self {
            Flag::Flag => 1,
            Flag::Multi => 1 << 1,
            Flag::Required => 1 << 2,
            Flag::Prompt => 1 << 3,
        }
    }
}

/// An unordered set of [`Flag`]s.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FlagSet(u8);

impl FlagSet {
    pub const fn empty() -> Self {
        Self(0)
    }

    pub fn insert(&mut self, flag: Flag) {
        self.0 |= flag.bit();
    }

    pub fn contains(&self, flag: Flag) -> bool {
        self.0 & flag.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = Flag> + '_ {
        Flag::ALL.into_iter().filter(|f| self.contains(*f))
    }

    pub(crate) fn is_flag(&self) -> bool {
        self.contains(Flag::Flag)
    }

    pub(crate) fn is_multi(&self) -> bool {
        self.contains(Flag::Multi)
    }

    pub(crate) fn is_required(&self) -> bool {
        self.contains(Flag::Required)
    }

    /// `Flag` and `Multi` together: an occurrence counter.
    pub(crate) fn is_counter(&self) -> bool {
        self.is_flag() && self.is_multi()
    }
}

impl fmt::Debug for FlagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl FromIterator<Flag> for FlagSet {
    fn from_iter<I: IntoIterator<Item = Flag>>(iter: I) -> Self {
        let mut set = FlagSet::empty();
        for flag in iter {
            set.insert(flag);
        }
        set
    }
}

impl<const N: usize> From<[Flag; N]> for FlagSet {
    fn from(flags: [Flag; N]) -> Self {
        flags.into_iter().collect()
    }
}

impl From<&[Flag]> for FlagSet {
    fn from(flags: &[Flag]) -> Self {
        flags.iter().copied().collect()
    }
}

impl From<Flag> for FlagSet {
    fn from(flag: Flag) -> Self {
        [flag].into()
    }
}

/// A resolved field value.
///
/// The shape depends on the field's flags: plain fields hold a `String`,
/// `Flag` fields a `Bool`, `Multi` fields a `List`, and `Flag + Multi` fields
/// a `Count` of occurrences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Bool(bool),
    Count(u64),
    String(String),
    List(Vec<String>),
}

impl Value {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_count(&self) -> Option<u64> {
        match self {
            Value::Count(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Count(n)
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Value::List(items)
    }
}
