use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Direction of a single clocking: in to work, or out of it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, ValueEnum)]
pub enum StampKind {
    In,
    Out,
}

impl StampKind {
    pub fn sk_from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            _ => None,
        }
    }

    pub fn sk_as_str(&self) -> &'static str {
        match self {
            StampKind::In => "in",
            StampKind::Out => "out",
        }
    }

    /// Human label used in CLI messages.
    pub fn label(&self) -> &'static str {
        match self {
            StampKind::In => "Clock in",
            StampKind::Out => "Clock out",
        }
    }

    pub fn is_in(&self) -> bool {
        matches!(self, StampKind::In)
    }

    pub fn is_out(&self) -> bool {
        matches!(self, StampKind::Out)
    }
}
