//! The applicant record collected by the form surface.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::enums::{Education, Gender, MaritalStatus};

/// One applicant's form submission, prior to encoding.
///
/// Numeric range constraints (credit limit >= 10000, age 18..=100,
/// payment-delay codes -1..=9, amounts >= 0) are enforced by the form
/// surface, not here; the assembler deliberately performs no semantic
/// range validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Applicant {
    /// Credit limit (LIMIT_BAL).
    pub limit_bal: f64,
    /// Gender selector (SEX).
    pub gender: Gender,
    /// Education selector (EDUCATION).
    pub education: Education,
    /// Marital status selector (MARRIAGE).
    pub marital_status: MaritalStatus,
    /// Age in years (AGE).
    pub age: u32,
    /// Last month's pending-payment code (PAY_0).
    pub pay_0: i8,
    /// Pending-payment code from two months ago (PAY_2).
    pub pay_2: i8,
    /// Last bill amount (BILL_AMT1).
    pub bill_amt1: f64,
    /// Last payment amount (PAY_AMT1).
    pub pay_amt1: f64,
}

impl Applicant {
    /// Returns the applicant as a feature-name to numeric-value map,
    /// with categorical fields already encoded to their training codes.
    ///
    /// The map is keyed by the column names the classifier was trained
    /// on; the feature-name list artifact selects and orders a subset of
    /// these at assembly time.
    pub fn feature_values(&self) -> BTreeMap<String, f64> {
        let mut values = BTreeMap::new();
        values.insert("LIMIT_BAL".to_string(), self.limit_bal);
        values.insert("SEX".to_string(), self.gender.code() as f64);
        values.insert("EDUCATION".to_string(), self.education.code() as f64);
        values.insert("MARRIAGE".to_string(), self.marital_status.code() as f64);
        values.insert("AGE".to_string(), f64::from(self.age));
        values.insert("PAY_0".to_string(), f64::from(self.pay_0));
        values.insert("PAY_2".to_string(), f64::from(self.pay_2));
        values.insert("BILL_AMT1".to_string(), self.bill_amt1);
        values.insert("PAY_AMT1".to_string(), self.pay_amt1);
        values
    }
}

impl Default for Applicant {
    /// Form defaults as presented to the user before any edits.
    fn default() -> Self {
        Self {
            limit_bal: 200_000.0,
            gender: Gender::Male,
            education: Education::GraduateSchool,
            marital_status: MaritalStatus::Married,
            age: 30,
            pay_0: 0,
            pay_2: 0,
            bill_amt1: 50_000.0,
            pay_amt1: 20_000.0,
        }
    }
}
