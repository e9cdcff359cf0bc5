//! Node references and port suffixes

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DotError;

/// Compass point used as the last segment of a port
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compass {
    #[serde(rename = "n")]
    N,
    #[serde(rename = "ne")]
    NE,
    #[serde(rename = "e")]
    E,
    #[serde(rename = "se")]
    SE,
    #[serde(rename = "s")]
    S,
    #[serde(rename = "sw")]
    SW,
    #[serde(rename = "w")]
    W,
    #[serde(rename = "nw")]
    NW,
    #[serde(rename = "c")]
    C,
    #[serde(rename = "_")]
    Underscore,
}

impl Compass {
    pub const ALL: [Compass; 10] = [
        Compass::N,
        Compass::NE,
        Compass::E,
        Compass::SE,
        Compass::S,
        Compass::SW,
        Compass::W,
        Compass::NW,
        Compass::C,
        Compass::Underscore,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Compass::N => "n",
            Compass::NE => "ne",
            Compass::E => "e",
            Compass::SE => "se",
            Compass::S => "s",
            Compass::SW => "sw",
            Compass::W => "w",
            Compass::NW => "nw",
            Compass::C => "c",
            Compass::Underscore => "_",
        }
    }
}

impl fmt::Display for Compass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Compass {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Compass::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DotError::invalid_argument(format!("unknown compass point '{s}'")))
    }
}

/// A node reference, optionally qualified with a port
///
/// The port is stored pre-formatted, leading colon included, so that it can
/// be emitted verbatim after the quoted name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId {
    name: String,
    port: Option<String>,
}

impl NodeId {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            port: None,
        }
    }

    /// Build a node id with an explicit port. A missing leading `:` is
    /// added; an empty port is the same as no port.
    pub fn with_port(name: impl Into<String>, port: impl AsRef<str>) -> Self {
        let port = port.as_ref();
        let port = if port.is_empty() {
            None
        } else if port.starts_with(':') {
            Some(port.to_string())
        } else {
            Some(format!(":{port}"))
        };

        Self {
            name: name.into(),
            port,
        }
    }

    /// Build a node id from a compartment and/or compass point
    pub fn with_compass(
        name: impl Into<String>,
        compartment: Option<&str>,
        compass: Compass,
    ) -> Self {
        let port = match compartment {
            Some(compartment) => format!(":{compartment}:{compass}"),
            None => format!(":{compass}"),
        };

        Self {
            name: name.into(),
            port: Some(port),
        }
    }

    /// Parse `name[:port[:compass]]`. Segments after the first are kept as
    /// an opaque suffix and are not checked against [`Compass`].
    pub fn parse(s: &str) -> Result<Self, DotError> {
        let mut segments = s.split(':');
        let name = segments.next().unwrap_or_default();
        if name.is_empty() {
            return Err(DotError::invalid_argument(format!(
                "node id '{s}' has an empty name"
            )));
        }

        let mut port = String::new();
        for segment in segments {
            if segment.is_empty() {
                return Err(DotError::invalid_argument(format!(
                    "node id '{s}' has an empty port segment"
                )));
            }
            port.push(':');
            port.push_str(segment);
        }

        Ok(Self {
            name: name.to_string(),
            port: (!port.is_empty()).then_some(port),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn port(&self) -> Option<&str> {
        self.port.as_deref()
    }
}

impl FromStr for NodeId {
    type Err = DotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NodeId::parse(s)
    }
}

impl TryFrom<String> for NodeId {
    type Error = DotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        NodeId::parse(&value)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        match id.port {
            Some(port) => format!("{}{}", id.name, port),
            None => id.name,
        }
    }
}

// Plain names are taken as-is; use `NodeId::parse` to split off a port.
impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        NodeId::new(name)
    }
}
