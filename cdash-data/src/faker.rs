//! Word-list fake data for company records.

use rand::seq::SliceRandom;
use rand::Rng;

const LAST_NAMES: &[&str] = &[
    "Abbott", "Bailey", "Barton", "Bechtelar", "Bergstrom", "Brekke", "Carroll", "Cassin",
    "Collins", "Cronin", "Daniel", "Dietrich", "Dooley", "Ebert", "Feeney", "Fisher",
    "Gleason", "Goodwin", "Grant", "Hagenes", "Hansen", "Harber", "Heller", "Hills", "Jacobs",
    "Jast", "Kemmer", "Kuhn", "Larson", "Lehner", "Lind", "Lowe", "Mayer", "McClure", "Mills",
    "Murray", "Nolan", "O'Kon", "Parker", "Pollich", "Quigley", "Reilly", "Ritchie", "Rohan",
    "Schmidt", "Schultz", "Stark", "Stokes", "Torp", "Turner", "Walker", "Weber", "Wolff",
    "Zieme",
];

const FIRST_NAMES: &[&str] = &[
    "Ada", "Brandon", "Carla", "Dennis", "Elena", "Felix", "Grace", "Hector", "Irene", "Jamal",
    "Kara", "Luis", "Maya", "Nolan", "Olive", "Pedro", "Quinn", "Rosa", "Samir", "Tessa",
];

const COMPANY_SUFFIXES: &[&str] = &["Inc", "LLC", "Group", "and Sons", "Ltd", "Corp"];

const STREET_NAMES: &[&str] = &[
    "Maple", "Oak", "Cedar", "Elm", "Willow", "Lakeview", "Hillcrest", "Sunset", "Park",
    "Highland", "River", "Meadow", "Spring", "Church", "Mill",
];

const STREET_SUFFIXES: &[&str] = &[
    "Street", "Avenue", "Road", "Lane", "Drive", "Court", "Way", "Boulevard", "Place",
];

const PHONE_FORMATS: &[&str] = &[
    "###-###-####",
    "(###) ###-####",
    "1-###-###-####",
    "###.###.####",
    "###-###-#### x###",
];

const EMAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "hotmail.com"];

const URL_WORDS: &[&str] = &[
    "ample", "brisk", "clever", "dapper", "eager", "famous", "gentle", "hearty", "jolly",
    "lively", "mellow", "nimble", "proud", "quick", "rapid", "sunny", "tidy", "vivid",
];

const TLDS: &[&str] = &["com", "net", "org", "info", "biz", "io"];

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, list: &[&'a str]) -> &'a str {
    list.choose(rng).copied().unwrap_or_default()
}

/// Replace every `#` with a random digit.
fn fill_digits<R: Rng + ?Sized>(rng: &mut R, pattern: &str) -> String {
    pattern
        .chars()
        .map(|c| match c {
            '#' => char::from(b'0' + rng.gen_range(0..10u8)),
            other => other,
        })
        .collect()
}

/// Company name in one of three shapes: `Last Suffix`, `Last - Last`,
/// `Last, Last and Last`.
pub fn company_name<R: Rng + ?Sized>(rng: &mut R) -> String {
    match rng.gen_range(0..3) {
        0 => format!("{} {}", pick(rng, LAST_NAMES), pick(rng, COMPANY_SUFFIXES)),
        1 => format!("{} - {}", pick(rng, LAST_NAMES), pick(rng, LAST_NAMES)),
        _ => format!(
            "{}, {} and {}",
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES),
            pick(rng, LAST_NAMES)
        ),
    }
}

pub fn street_address<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{} {} {}",
        rng.gen_range(1..10_000),
        pick(rng, STREET_NAMES),
        pick(rng, STREET_SUFFIXES)
    )
}

pub fn phone_number<R: Rng + ?Sized>(rng: &mut R) -> String {
    let format = pick(rng, PHONE_FORMATS);
    fill_digits(rng, format)
}

pub fn email<R: Rng + ?Sized>(rng: &mut R) -> String {
    let first = pick(rng, FIRST_NAMES);
    let last = pick(rng, LAST_NAMES).replace('\'', "");
    let separator = pick(rng, &[".", "_", ""]);
    format!(
        "{}{}{}{}@{}",
        first,
        separator,
        last,
        rng.gen_range(0..100),
        pick(rng, EMAIL_DOMAINS)
    )
}

pub fn url<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "https://{}-{}.{}",
        pick(rng, URL_WORDS),
        pick(rng, URL_WORDS),
        pick(rng, TLDS)
    )
}
