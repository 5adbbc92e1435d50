use std::{collections::HashMap, convert::Infallible, fmt, str::FromStr};

use indexmap::IndexMap;
use tracing::debug;

use crate::buttons::{DestButton, SourceButton};

/// What a GameCube button is mapped to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Unassigned,
    Button(DestButton),
    /// A destination name outside the N64 vocabulary, e.g. from an older mapping file.
    Unknown(String),
}

impl Target {
    pub const NONE: &'static str = "None";

    pub fn parse(name: &str) -> Self {
        if name == Self::NONE {
            return Target::Unassigned;
        }
        match DestButton::parse(name) {
            Ok(button) => Target::Button(button),
            Err(_) => Target::Unknown(name.to_owned()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Target::Unassigned => Self::NONE,
            Target::Button(button) => button.name(),
            Target::Unknown(name) => name,
        }
    }

    pub fn button(&self) -> Option<DestButton> {
        match self {
            Target::Button(button) => Some(*button),
            _ => None,
        }
    }
}

impl From<DestButton> for Target {
    fn from(button: DestButton) -> Self {
        Target::Button(button)
    }
}

impl FromStr for Target {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Target::parse(s))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping every button starts out with.
pub fn factory_default(source: SourceButton) -> DestButton {
    use SourceButton::*;

    match source {
        A => DestButton::A,
        B => DestButton::B,
        X => DestButton::CRight,
        Y => DestButton::CLeft,
        Start => DestButton::Start,
        L => DestButton::L,
        R => DestButton::R,
        Z => DestButton::Z,
        DUp => DestButton::DUp,
        DDown => DestButton::DDown,
        DLeft => DestButton::DLeft,
        DRight => DestButton::DRight,
        CStickUp => DestButton::CUp,
        CStickDown => DestButton::CDown,
        CStickLeft => DestButton::CLeft,
        CStickRight => DestButton::CRight,
    }
}

/// GameCube to N64 assignment. Buttons that were never set read as their factory default.
///
/// Keys from a loaded mapping document that don't name a GameCube button are kept in
/// `extra` so that saving the mapping again doesn't lose them.
#[derive(Debug, Clone, Default)]
pub struct Mapping {
    assigned: HashMap<SourceButton, Target>,
    extra: IndexMap<String, String>,
}

impl Mapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapping with every button unassigned.
    pub fn unassigned_all() -> Self {
        let mut mapping = Self::new();
        for source in SourceButton::all() {
            mapping.set(source, Target::Unassigned);
        }
        mapping
    }

    pub fn get(&self, source: SourceButton) -> Target {
        self.assigned
            .get(&source)
            .cloned()
            .unwrap_or_else(|| Target::Button(factory_default(source)))
    }

    pub fn set(&mut self, source: SourceButton, target: impl Into<Target>) {
        let target = target.into();
        debug!("Mapping {source} to {target}");
        self.assigned.insert(source, target);
    }

    pub fn set_extra(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.extra.insert(key.into(), value.into());
    }

    pub fn reset(&mut self) {
        self.assigned.clear();
        self.extra.clear();
    }

    /// All GameCube buttons with their effective target, in vocabulary order.
    pub fn entries(&self) -> impl Iterator<Item = (SourceButton, Target)> + '_ {
        SourceButton::all().map(|source| (source, self.get(source)))
    }

    pub fn extra_entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.extra.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }
}

// Equality is observational: an explicit default and an untouched entry compare equal.
impl PartialEq for Mapping {
    fn eq(&self, other: &Self) -> bool {
        self.entries().eq(other.entries()) && self.extra == other.extra
    }
}

impl Eq for Mapping {}
