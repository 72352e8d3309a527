use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// An academic branch of the engineering college.
///
/// The set of branches is fixed; there is no configuration that adds or
/// removes branches at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Branch {
    /// Computer Science & Engineering.
    Cse,
    /// Electronics & Communication Engineering.
    Ece,
    /// Mechanical Engineering.
    Me,
    /// Civil Engineering.
    Ce,
    /// Information Technology.
    It,
    /// Electrical Engineering.
    Ee,
    /// Bachelor of Computer Applications.
    Bca,
    /// Master of Computer Applications.
    Mca,
}

impl Branch {
    /// All branches, in display order.
    pub const ALL: [Self; 8] = [
        Self::Cse,
        Self::Ece,
        Self::Me,
        Self::Ce,
        Self::It,
        Self::Ee,
        Self::Bca,
        Self::Mca,
    ];

    /// Returns the canonical uppercase abbreviation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Cse => "CSE",
            Self::Ece => "ECE",
            Self::Me => "ME",
            Self::Ce => "CE",
            Self::It => "IT",
            Self::Ee => "EE",
            Self::Bca => "BCA",
            Self::Mca => "MCA",
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a known branch.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown branch '{0}': expected one of CSE, ECE, ME, CE, IT, EE, BCA, MCA")]
pub struct UnknownBranchError(String);

impl FromStr for Branch {
    type Err = UnknownBranchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "CSE" => Ok(Self::Cse),
            "ECE" => Ok(Self::Ece),
            "ME" => Ok(Self::Me),
            "CE" => Ok(Self::Ce),
            "IT" => Ok(Self::It),
            "EE" => Ok(Self::Ee),
            "BCA" => Ok(Self::Bca),
            "MCA" => Ok(Self::Mca),
            _ => Err(UnknownBranchError(s.to_string())),
        }
    }
}

/// A semester number, validated to lie in 1..=8.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct Semester(u8);

/// Error returned when a semester number is outside 1..=8.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("invalid semester {0}: must be between 1 and 8")]
pub struct InvalidSemesterError(u8);

impl Semester {
    /// Creates a semester, rejecting values outside 1..=8.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSemesterError`] if `value` is 0 or greater than 8.
    pub const fn new(value: u8) -> Result<Self, InvalidSemesterError> {
        if matches!(value, 1..=8) {
            Ok(Self(value))
        } else {
            Err(InvalidSemesterError(value))
        }
    }

    /// Returns the semester number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All semesters, ascending.
    pub const ALL: [Self; 8] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];
}

impl TryFrom<u8> for Semester {
    type Error = InvalidSemesterError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Semester> for u8 {
    fn from(semester: Semester) -> Self {
        semester.get()
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Semester {
    type Err = InvalidSemesterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u8 = s.parse().map_err(|_| InvalidSemesterError(0))?;
        Self::new(value)
    }
}
