//! Wallet tab route identifiers.
//!
//! The five routes form a fixed display order; transition direction is
//! decided purely by comparing ordinal positions in that order.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifier for one of the five wallet tabs.
///
/// Declaration order is the display order. `Ord` follows it, so
/// `a < b` means `a` sits to the left of `b` in the tab bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteId {
    /// Wallet balance overview.
    Balance,
    /// Send funds form.
    Send,
    /// Receive address view.
    Receive,
    /// Transaction history list.
    History,
    /// Wallet settings.
    Settings,
}

impl RouteId {
    /// All routes in display order, left to right.
    pub const ORDER: [RouteId; 5] = [
        RouteId::Balance,
        RouteId::Send,
        RouteId::Receive,
        RouteId::History,
        RouteId::Settings,
    ];

    /// Ordinal position in the display order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Lowercase wire name, as used in config files and timer keys.
    pub fn as_str(self) -> &'static str {
        match self {
            RouteId::Balance => "balance",
            RouteId::Send => "send",
            RouteId::Receive => "receive",
            RouteId::History => "history",
            RouteId::Settings => "settings",
        }
    }

    /// Route one position to the right, wrapping past the end.
    pub fn next(self) -> RouteId {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    /// Route one position to the left, wrapping past the start.
    pub fn prev(self) -> RouteId {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

impl Default for RouteId {
    /// The wallet opens on the balance tab when the host supplies no route.
    fn default() -> Self {
        RouteId::Balance
    }
}

impl fmt::Display for RouteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not one of the five route names.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown route {0:?} (expected balance, send, receive, history or settings)")]
pub struct RouteParseError(
    /// The rejected route name.
    pub String,
);

impl FromStr for RouteId {
    type Err = RouteParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "balance" => Ok(RouteId::Balance),
            "send" => Ok(RouteId::Send),
            "receive" => Ok(RouteId::Receive),
            "history" => Ok(RouteId::History),
            "settings" => Ok(RouteId::Settings),
            other => Err(RouteParseError(other.to_string())),
        }
    }
}
