//! Company record model and field accessors.
//!
//! Records serialize with the camelCase keys the column configuration uses
//! (`companyName`, `raisedCapital`, ...), so a record can go straight into a
//! JSON payload next to its column descriptors.

use crate::money::Money;
use crate::percent::Percent;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Account standing of a company.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub const ALL: [AccountStatus; 2] = [AccountStatus::Active, AccountStatus::Inactive];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One synthetic company, shown as one table row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub company_name: String,
    pub address: String,
    /// ISO-8601 UTC timestamp, millisecond precision.
    pub registration_date: String,
    pub number_of_employees: u32,
    pub raised_capital: Money,
    pub turnover: Money,
    pub net_profit: Money,
    pub contact_number: String,
    pub contact_email: String,
    pub company_website: String,
    pub loan_amount: Money,
    pub loan_interest: Percent,
    pub account_status: AccountStatus,
}

/// Names a [`Record`] attribute. Column descriptors refer to fields by this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordField {
    CompanyName,
    Address,
    RegistrationDate,
    NumberOfEmployees,
    RaisedCapital,
    Turnover,
    NetProfit,
    ContactNumber,
    ContactEmail,
    CompanyWebsite,
    LoanAmount,
    LoanInterest,
    AccountStatus,
}

impl RecordField {
    pub const ALL: [RecordField; 13] = [
        RecordField::CompanyName,
        RecordField::Address,
        RecordField::RegistrationDate,
        RecordField::NumberOfEmployees,
        RecordField::RaisedCapital,
        RecordField::Turnover,
        RecordField::NetProfit,
        RecordField::ContactNumber,
        RecordField::ContactEmail,
        RecordField::CompanyWebsite,
        RecordField::LoanAmount,
        RecordField::LoanInterest,
        RecordField::AccountStatus,
    ];

    /// Accessor key, as written in the column CSV.
    pub fn key(&self) -> &'static str {
        match self {
            RecordField::CompanyName => "companyName",
            RecordField::Address => "address",
            RecordField::RegistrationDate => "registrationDate",
            RecordField::NumberOfEmployees => "numberOfEmployees",
            RecordField::RaisedCapital => "raisedCapital",
            RecordField::Turnover => "turnover",
            RecordField::NetProfit => "netProfit",
            RecordField::ContactNumber => "contactNumber",
            RecordField::ContactEmail => "contactEmail",
            RecordField::CompanyWebsite => "companyWebsite",
            RecordField::LoanAmount => "loanAmount",
            RecordField::LoanInterest => "loanInterest",
            RecordField::AccountStatus => "accountStatus",
        }
    }

    /// Cell text for this field of `record`.
    pub fn display(&self, record: &Record) -> String {
        match self {
            RecordField::CompanyName => record.company_name.clone(),
            RecordField::Address => record.address.clone(),
            RecordField::RegistrationDate => record.registration_date.clone(),
            RecordField::NumberOfEmployees => record.number_of_employees.to_string(),
            RecordField::RaisedCapital => record.raised_capital.to_string(),
            RecordField::Turnover => record.turnover.to_string(),
            RecordField::NetProfit => record.net_profit.to_string(),
            RecordField::ContactNumber => record.contact_number.clone(),
            RecordField::ContactEmail => record.contact_email.clone(),
            RecordField::CompanyWebsite => record.company_website.clone(),
            RecordField::LoanAmount => record.loan_amount.to_string(),
            RecordField::LoanInterest => record.loan_interest.to_string(),
            RecordField::AccountStatus => record.account_status.to_string(),
        }
    }

    /// Order two records by this field.
    ///
    /// Numeric fields compare by value, not by their formatted text, so
    /// `$9,000.00` sorts before `$10,000.00`.
    pub fn compare(&self, a: &Record, b: &Record) -> Ordering {
        match self {
            RecordField::CompanyName => a.company_name.cmp(&b.company_name),
            RecordField::Address => a.address.cmp(&b.address),
            RecordField::RegistrationDate => a.registration_date.cmp(&b.registration_date),
            RecordField::NumberOfEmployees => a.number_of_employees.cmp(&b.number_of_employees),
            RecordField::RaisedCapital => a.raised_capital.cmp(&b.raised_capital),
            RecordField::Turnover => a.turnover.cmp(&b.turnover),
            RecordField::NetProfit => a.net_profit.cmp(&b.net_profit),
            RecordField::ContactNumber => a.contact_number.cmp(&b.contact_number),
            RecordField::ContactEmail => a.contact_email.cmp(&b.contact_email),
            RecordField::CompanyWebsite => a.company_website.cmp(&b.company_website),
            RecordField::LoanAmount => a.loan_amount.cmp(&b.loan_amount),
            RecordField::LoanInterest => a.loan_interest.cmp(&b.loan_interest),
            RecordField::AccountStatus => a.account_status.cmp(&b.account_status),
        }
    }
}

impl FromStr for RecordField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordField::ALL
            .iter()
            .copied()
            .find(|field| field.key() == s)
            .ok_or_else(|| s.to_string())
    }
}

impl fmt::Display for RecordField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
pub(crate) fn sample_record(name: &str, capital_cents: i64) -> Record {
    Record {
        company_name: name.to_string(),
        address: "12 Main Street".to_string(),
        registration_date: "2024-03-01T12:00:00.000Z".to_string(),
        number_of_employees: 42,
        raised_capital: Money::from_cents(capital_cents),
        turnover: Money::from_cents(5_000_000),
        net_profit: Money::from_cents(2_500_050),
        contact_number: "(555) 010-2030".to_string(),
        contact_email: "info@example.com".to_string(),
        company_website: "https://example.com".to_string(),
        loan_amount: Money::from_cents(1_000_000),
        loan_interest: Percent::from_tenths(42),
        account_status: AccountStatus::Active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_keys_round_trip_through_from_str() {
        for field in RecordField::ALL {
            assert_eq!(field.key().parse::<RecordField>(), Ok(field));
        }
        assert_eq!("bogus".parse::<RecordField>(), Err("bogus".to_string()));
    }

    #[test]
    fn display_uses_formatted_values() {
        let record = sample_record("Acme", 1_234_567);
        assert_eq!(RecordField::RaisedCapital.display(&record), "$12,345.67");
        assert_eq!(RecordField::LoanInterest.display(&record), "4.2%");
        assert_eq!(RecordField::NumberOfEmployees.display(&record), "42");
        assert_eq!(RecordField::AccountStatus.display(&record), "Active");
    }

    #[test]
    fn money_fields_compare_numerically() {
        let small = sample_record("A", 900_000);
        let large = sample_record("B", 1_000_000);
        // "$9,000.00" > "$10,000.00" as text
        assert!(small.raised_capital.to_string() > large.raised_capital.to_string());
        assert_eq!(
            RecordField::RaisedCapital.compare(&small, &large),
            Ordering::Less
        );
    }

    #[test]
    fn serializes_with_camel_case_keys_and_formatted_strings() {
        let record = sample_record("Acme", 1_234_567);
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["companyName"], "Acme");
        assert_eq!(json["raisedCapital"], "$12,345.67");
        assert_eq!(json["loanInterest"], "4.2%");
        assert_eq!(json["accountStatus"], "Active");
        assert_eq!(json["numberOfEmployees"], 42);

        let back: Record = serde_json::from_value(json).unwrap();
        assert_eq!(back, record);
    }
}
