use std::fmt;

/// Sport of a logged session.
///
/// The closed set is enforced only when a session is created. Rows read back
/// from the log keep whatever label they carry, so an unrecognised label is
/// preserved verbatim in `Unknown` and written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Sport {
    Running,
    Gym,
    Bjj,
    Kickboxing,
    Cycling,
    Swimming,
    Other,
    Unknown(String),
}

impl Sport {
    /// All sports accepted on creation, in display order.
    pub const ALL: [Sport; 7] = [
        Sport::Running,
        Sport::Gym,
        Sport::Bjj,
        Sport::Kickboxing,
        Sport::Cycling,
        Sport::Swimming,
        Sport::Other,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Sport::Running => "Running",
            Sport::Gym => "Gym",
            Sport::Bjj => "BJJ",
            Sport::Kickboxing => "Kickboxing",
            Sport::Cycling => "Cycling",
            Sport::Swimming => "Swimming",
            Sport::Other => "Other",
            Sport::Unknown(label) => label,
        }
    }

    /// Strict lookup used by the add/edit flow (case-insensitive).
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted = s.trim();
        Sport::ALL
            .iter()
            .find(|sport| sport.as_str().eq_ignore_ascii_case(wanted))
            .cloned()
    }

    /// Lenient conversion used when reading the log: exact labels map to the
    /// known variants, anything else is kept as-is.
    pub fn from_stored(s: &str) -> Self {
        Sport::ALL
            .iter()
            .find(|sport| sport.as_str() == s)
            .cloned()
            .unwrap_or_else(|| Sport::Unknown(s.to_string()))
    }

    pub fn is_running(&self) -> bool {
        matches!(self, Sport::Running)
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
