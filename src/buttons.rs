use std::str::FromStr;

use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use thiserror::Error;

/// Buttons on the GameCube controller, in the order they are listed and compiled.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum SourceButton {
    A,
    B,
    X,
    Y,
    Start,
    L,
    R,
    Z,
    DUp,
    DDown,
    DLeft,
    DRight,
    #[strum(serialize = "CStick Up")]
    CStickUp,
    #[strum(serialize = "CStick Down")]
    CStickDown,
    #[strum(serialize = "CStick Left")]
    CStickLeft,
    #[strum(serialize = "CStick Right")]
    CStickRight,
}

/// Buttons on the N64 controller.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
pub enum DestButton {
    A,
    B,
    Z,
    Start,
    L,
    R,
    DUp,
    DDown,
    DLeft,
    DRight,
    CUp,
    CDown,
    CLeft,
    CRight,
}

/// Direction of a C-Stick source button. These are threshold tested instead of bit tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StickDirection {
    Up,
    Down,
    Left,
    Right,
}

impl StickDirection {
    pub fn is_vertical(self) -> bool {
        matches!(self, StickDirection::Up | StickDirection::Down)
    }

    /// Up and Right trigger above the high threshold, Down and Left below the low one.
    pub fn is_positive(self) -> bool {
        matches!(self, StickDirection::Up | StickDirection::Right)
    }
}

impl SourceButton {
    pub fn all() -> impl Iterator<Item = SourceButton> {
        Self::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn stick_direction(self) -> Option<StickDirection> {
        Some(match self {
            SourceButton::CStickUp => StickDirection::Up,
            SourceButton::CStickDown => StickDirection::Down,
            SourceButton::CStickLeft => StickDirection::Left,
            SourceButton::CStickRight => StickDirection::Right,
            _ => return None,
        })
    }

    pub fn parse(name: &str) -> Result<Self, ParseButtonError> {
        Self::from_str(name)
            .map_err(|_| ParseButtonError::new("GameCube", name, Self::all().map(Self::name)))
    }
}

impl DestButton {
    pub fn all() -> impl Iterator<Item = DestButton> {
        Self::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }

    pub fn parse(name: &str) -> Result<Self, ParseButtonError> {
        Self::from_str(name)
            .map_err(|_| ParseButtonError::new("N64", name, Self::all().map(Self::name)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {controller} button `{name}`, expected one of: {expected}")]
pub struct ParseButtonError {
    controller: &'static str,
    name: String,
    expected: String,
}

impl ParseButtonError {
    fn new<'a>(
        controller: &'static str,
        name: &str,
        expected: impl Iterator<Item = &'a str>,
    ) -> Self {
        Self {
            controller,
            name: name.to_owned(),
            expected: expected.collect::<Vec<_>>().join(", "),
        }
    }
}
