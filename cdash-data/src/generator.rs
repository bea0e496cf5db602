//! Synthetic company record generation.

use crate::faker;
use crate::money::Money;
use crate::percent::Percent;
use crate::record::{AccountStatus, Record};
use chrono::{Duration, SecondsFormat, Utc};
use rand::seq::SliceRandom;
use rand::Rng;

/// Number of records the dashboard loads at startup.
pub const DEFAULT_RECORD_COUNT: usize = 1000;

/// Currency fields are sampled in [$10,000, $100,000).
const MONEY_RANGE_CENTS: std::ops::Range<i64> = 1_000_000..10_000_000;
/// Loan interest is sampled in [1%, 10%).
const INTEREST_RANGE: std::ops::Range<f64> = 0.01..0.1;
const EMPLOYEE_RANGE: std::ops::RangeInclusive<u32> = 1..=100;
const REGISTRATION_WINDOW_SECS: i64 = 365 * 24 * 60 * 60;

/// Generate `count` records using the thread-local RNG.
pub fn generate(count: usize) -> Vec<Record> {
    generate_with(&mut rand::thread_rng(), count)
}

/// Generate `count` records from the given RNG.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<Record> {
    let records: Vec<Record> = (0..count).map(|_| generate_record(rng)).collect();
    log::info!("[CDash] generator: Generated {} records", records.len());
    records
}

fn generate_record<R: Rng + ?Sized>(rng: &mut R) -> Record {
    Record {
        company_name: faker::company_name(rng),
        address: faker::street_address(rng),
        registration_date: past_timestamp(rng),
        number_of_employees: rng.gen_range(EMPLOYEE_RANGE),
        raised_capital: money(rng),
        turnover: money(rng),
        net_profit: money(rng),
        contact_number: faker::phone_number(rng),
        contact_email: faker::email(rng),
        company_website: faker::url(rng),
        loan_amount: money(rng),
        loan_interest: Percent::from_fraction(rng.gen_range(INTEREST_RANGE)),
        account_status: AccountStatus::ALL
            .choose(rng)
            .copied()
            .unwrap_or(AccountStatus::Active),
    }
}

fn money<R: Rng + ?Sized>(rng: &mut R) -> Money {
    Money::from_cents(rng.gen_range(MONEY_RANGE_CENTS))
}

/// A timestamp within the past year, e.g. `2024-03-01T12:00:00.000Z`.
fn past_timestamp<R: Rng + ?Sized>(rng: &mut R) -> String {
    let offset = Duration::seconds(rng.gen_range(1..=REGISTRATION_WINDOW_SECS));
    (Utc::now() - offset).to_rfc3339_opts(SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn zero_count_yields_empty() {
        assert!(generate(0).is_empty());
    }

    #[test]
    fn generates_exact_count() {
        for count in [1, 3, 17, 250] {
            assert_eq!(generate(count).len(), count);
        }
    }

    #[test]
    fn every_field_is_populated_and_in_range() {
        let mut rng = StdRng::seed_from_u64(42);
        for record in generate_with(&mut rng, 200) {
            assert!(!record.company_name.is_empty());
            assert!(!record.address.is_empty());
            assert!(!record.contact_number.is_empty());
            assert!(!record.contact_email.is_empty());
            assert!(!record.company_website.is_empty());
            assert!(EMPLOYEE_RANGE.contains(&record.number_of_employees));

            for money in [
                record.raised_capital,
                record.turnover,
                record.net_profit,
                record.loan_amount,
            ] {
                assert!(MONEY_RANGE_CENTS.contains(&money.cents()), "{money}");
                assert!(money.to_string().starts_with('$'));
            }

            // Rounding to a tenth of a percent can land on the upper bound.
            assert!((10..=100).contains(&record.loan_interest.tenths()));
            assert!(record.loan_interest.to_string().ends_with('%'));

            assert!(AccountStatus::ALL.contains(&record.account_status));

            let registered = DateTime::parse_from_rfc3339(&record.registration_date).unwrap();
            assert!(registered <= Utc::now());
            assert!(record.registration_date.ends_with('Z'));
        }
    }

    #[test]
    fn both_statuses_appear() {
        let mut rng = StdRng::seed_from_u64(9);
        let records = generate_with(&mut rng, 100);
        assert!(records
            .iter()
            .any(|r| r.account_status == AccountStatus::Active));
        assert!(records
            .iter()
            .any(|r| r.account_status == AccountStatus::Inactive));
    }

    #[test]
    fn same_seed_same_records() {
        let a = generate_with(&mut StdRng::seed_from_u64(1), 5);
        let b = generate_with(&mut StdRng::seed_from_u64(1), 5);
        let names = |rs: &[Record]| rs.iter().map(|r| r.company_name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&a[..]), names(&b[..]));
    }
}
