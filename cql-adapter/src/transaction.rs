//! Transaction modes.
//!
//! CQL has no transactions; the host's transaction-mode toggle is used to
//! cycle the session's default consistency level instead.

use scylla::statement::Consistency;

/// Longest label the host displays.
pub const MAX_LABEL_LEN: usize = 10;

/// Consistency levels in toggle order.
pub const CONSISTENCY_CYCLE: [Consistency; 11] = [
    Consistency::Any,
    Consistency::One,
    Consistency::Two,
    Consistency::Three,
    Consistency::Quorum,
    Consistency::All,
    Consistency::LocalQuorum,
    Consistency::EachQuorum,
    Consistency::Serial,
    Consistency::LocalSerial,
    Consistency::LocalOne,
];

/// A consistency level as presented to the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransactionMode {
    consistency: Consistency,
}

impl TransactionMode {
    /// Mode for the given consistency level.
    pub fn new(consistency: Consistency) -> Self {
        Self { consistency }
    }

    /// Consistency level behind this mode.
    pub fn consistency(&self) -> Consistency {
        self.consistency
    }

    /// Label shown by the host: the level name cut to [MAX_LABEL_LEN] characters.
    pub fn label(&self) -> &'static str {
        let name = consistency_name(self.consistency);
        &name[..name.len().min(MAX_LABEL_LEN)]
    }

    /// The mode following this one in [CONSISTENCY_CYCLE], wrapping around.
    pub fn next(&self) -> Self {
        let position = CONSISTENCY_CYCLE
            .iter()
            .position(|c| *c == self.consistency)
            .unwrap_or(0);
        Self::new(CONSISTENCY_CYCLE[(position + 1) % CONSISTENCY_CYCLE.len()])
    }
}

/// CQL name of a consistency level, e.g. `LOCAL_QUORUM`.
pub fn consistency_name(consistency: Consistency) -> &'static str {
    match consistency {
        Consistency::Any => "ANY",
        Consistency::One => "ONE",
        Consistency::Two => "TWO",
        Consistency::Three => "THREE",
        Consistency::Quorum => "QUORUM",
        Consistency::All => "ALL",
        Consistency::LocalQuorum => "LOCAL_QUORUM",
        Consistency::EachQuorum => "EACH_QUORUM",
        Consistency::Serial => "SERIAL",
        Consistency::LocalSerial => "LOCAL_SERIAL",
        Consistency::LocalOne => "LOCAL_ONE",
    }
}

/// Parses a CQL consistency level name. Case-sensitive, as listed in the
/// `consistency-level` option choices.
pub fn parse_consistency(name: &str) -> Option<Consistency> {
    CONSISTENCY_CYCLE
        .iter()
        .copied()
        .find(|c| consistency_name(*c) == name)
}
