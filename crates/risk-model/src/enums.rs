//! Type-safe enumerations for the categorical form fields.
//!
//! The classifier was trained on integer-coded categoricals. Each enum
//! here is a closed set: every label the form surface may offer has a
//! variant, and every variant carries the exact code used during
//! training. There is no fallback code — an unknown label is a
//! configuration error and fails loudly at parse time.
//!
//! Code assignments follow the UCI credit default dataset convention
//! the model was trained on (SEX, EDUCATION, MARRIAGE columns).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Gender of the applicant (SEX column).
///
/// Training codes: Male = 1, Female = 2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Code 1.
    Male,
    /// Code 2.
    Female,
}

impl Gender {
    /// Returns the integer code the classifier was trained on.
    pub fn code(&self) -> i64 {
        match self {
            Gender::Male => 1,
            Gender::Female => 2,
        }
    }

    /// Returns the label as offered by the form surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }

    /// All known labels, in form display order.
    pub fn all() -> &'static [Gender] {
        &[Gender::Male, Gender::Female]
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = String;

    /// Parse a form label into a `Gender` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MALE" => Ok(Gender::Male),
            "FEMALE" => Ok(Gender::Female),
            _ => Err(format!("Unknown gender label: {s}")),
        }
    }
}

/// Education level of the applicant (EDUCATION column).
///
/// Training codes: Graduate School = 1, University = 2, High School = 3,
/// Other = 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Education {
    /// Code 1.
    GraduateSchool,
    /// Code 2.
    University,
    /// Code 3.
    HighSchool,
    /// Code 4.
    Other,
}

impl Education {
    /// Returns the integer code the classifier was trained on.
    pub fn code(&self) -> i64 {
        match self {
            Education::GraduateSchool => 1,
            Education::University => 2,
            Education::HighSchool => 3,
            Education::Other => 4,
        }
    }

    /// Returns the label as offered by the form surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            Education::GraduateSchool => "Graduate School",
            Education::University => "University",
            Education::HighSchool => "High School",
            Education::Other => "Other",
        }
    }

    /// All known labels, in form display order.
    pub fn all() -> &'static [Education] {
        &[
            Education::GraduateSchool,
            Education::University,
            Education::HighSchool,
            Education::Other,
        ]
    }
}

impl fmt::Display for Education {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Education {
    type Err = String;

    /// Parse a form label into an `Education` (case-insensitive,
    /// whitespace-tolerant).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "GRADUATE SCHOOL" => Ok(Education::GraduateSchool),
            "UNIVERSITY" => Ok(Education::University),
            "HIGH SCHOOL" => Ok(Education::HighSchool),
            "OTHER" => Ok(Education::Other),
            _ => Err(format!("Unknown education label: {s}")),
        }
    }
}

/// Marital status of the applicant (MARRIAGE column).
///
/// Training codes: Married = 1, Single = 2, Other = 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MaritalStatus {
    /// Code 1.
    Married,
    /// Code 2.
    Single,
    /// Code 3.
    Other,
}

impl MaritalStatus {
    /// Returns the integer code the classifier was trained on.
    pub fn code(&self) -> i64 {
        match self {
            MaritalStatus::Married => 1,
            MaritalStatus::Single => 2,
            MaritalStatus::Other => 3,
        }
    }

    /// Returns the label as offered by the form surface.
    pub fn as_str(&self) -> &'static str {
        match self {
            MaritalStatus::Married => "Married",
            MaritalStatus::Single => "Single",
            MaritalStatus::Other => "Other",
        }
    }

    /// All known labels, in form display order.
    pub fn all() -> &'static [MaritalStatus] {
        &[
            MaritalStatus::Married,
            MaritalStatus::Single,
            MaritalStatus::Other,
        ]
    }
}

impl fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for MaritalStatus {
    type Err = String;

    /// Parse a form label into a `MaritalStatus` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "MARRIED" => Ok(MaritalStatus::Married),
            "SINGLE" => Ok(MaritalStatus::Single),
            "OTHER" => Ok(MaritalStatus::Other),
            _ => Err(format!("Unknown marital status label: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_codes() {
        assert_eq!(Gender::Male.code(), 1);
        assert_eq!(Gender::Female.code(), 2);
    }

    #[test]
    fn test_education_codes() {
        assert_eq!(Education::GraduateSchool.code(), 1);
        assert_eq!(Education::University.code(), 2);
        assert_eq!(Education::HighSchool.code(), 3);
        assert_eq!(Education::Other.code(), 4);
    }

    #[test]
    fn test_marital_status_codes() {
        assert_eq!(MaritalStatus::Married.code(), 1);
        assert_eq!(MaritalStatus::Single.code(), 2);
        assert_eq!(MaritalStatus::Other.code(), 3);
    }

    #[test]
    fn test_from_str_round_trips_every_label() {
        // Encoder totality: every offered label parses back to its variant.
        for gender in Gender::all() {
            assert_eq!(gender.as_str().parse::<Gender>().unwrap(), *gender);
        }
        for education in Education::all() {
            assert_eq!(education.as_str().parse::<Education>().unwrap(), *education);
        }
        for status in MaritalStatus::all() {
            assert_eq!(status.as_str().parse::<MaritalStatus>().unwrap(), *status);
        }
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("male".parse::<Gender>().unwrap(), Gender::Male);
        assert_eq!(
            "graduate school".parse::<Education>().unwrap(),
            Education::GraduateSchool
        );
        assert_eq!(
            "SINGLE".parse::<MaritalStatus>().unwrap(),
            MaritalStatus::Single
        );
    }

    #[test]
    fn test_unknown_label_fails_loudly() {
        assert!("Nonbinary".parse::<Gender>().is_err());
        assert!("Primary School".parse::<Education>().is_err());
        assert!("Divorced".parse::<MaritalStatus>().is_err());
    }
}
