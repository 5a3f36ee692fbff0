//! Sample tournament data.
//!
//! The generator stands in for a real ingestion pipeline: it produces a fixed
//! set of tournaments with start dates spread over the coming year.

use chrono::{Duration, Local, NaiveDate};
use rand::Rng;

use crate::tournament::NewTournament;
use crate::validate::DATE_FORMAT;

/// Anything that can produce tournament records for insertion.
pub trait TournamentSource {
    /// Collects a batch of records. Records are not guaranteed to be valid.
    fn collect(&mut self) -> Vec<NewTournament>;
}

/// A sample tournament template.
struct Template {
    name: &'static str,
    level: &'static str,
    duration_days: i64,
}

const fn template(name: &'static str, level: &'static str, duration_days: i64) -> Template {
    Template {
        name,
        level,
        duration_days,
    }
}

const CATALOG: &[(&str, &[Template])] = &[
    (
        "Cricket",
        &[
            template("IPL 2025", "International", 45),
            template("Ranji Trophy", "National", 30),
            template("Corporate Cricket League", "Corporate", 7),
            template("Inter-College Cricket Championship", "College/University", 14),
        ],
    ),
    (
        "Football",
        &[
            template("FIFA World Cup Qualifiers", "International", 60),
            template("I-League", "National", 180),
            template("Corporate Football Tournament", "Corporate", 5),
            template("School Football Championship", "School", 10),
        ],
    ),
    (
        "Basketball",
        &[
            template("NBA India Games", "International", 3),
            template("National Basketball Championship", "National", 21),
            template("College Basketball League", "College/University", 14),
        ],
    ),
    (
        "Chess",
        &[
            template("World Chess Championship", "International", 21),
            template("National Chess Championship", "National", 14),
            template("State Chess Tournament", "State", 7),
        ],
    ),
];

const STREAMING_PARTNERS: [&str; 3] = ["Star Sports", "Hotstar", "Sony Liv"];

/// Generates the sample catalog relative to `today`.
///
/// Each tournament starts between 1 and 365 days after `today` and ends
/// after its template's fixed duration.
pub fn generate<R: Rng>(today: NaiveDate, rng: &mut R) -> Vec<NewTournament> {
    let mut tournaments = Vec::new();

    for (sport, templates) in CATALOG {
        for t in *templates {
            let start = today + Duration::days(rng.gen_range(1..=365));
            let end = start + Duration::days(t.duration_days);

            tournaments.push(NewTournament {
                name: t.name.to_string(),
                sport: sport.to_string(),
                level: t.level.to_string(),
                start_date: start.format(DATE_FORMAT).to_string(),
                end_date: end.format(DATE_FORMAT).to_string(),
                official_url: Some(format!("https://example.com/{}", slug(t.name))),
                streaming_links: STREAMING_PARTNERS.iter().map(|s| s.to_string()).collect(),
                image_url: Some(format!(
                    "https://example.com/images/{}.jpg",
                    sport.to_lowercase()
                )),
                summary: Some(format!(
                    "Premier {} tournament at {} level featuring top teams and players.",
                    sport, t.level
                )),
            });
        }
    }

    tournaments
}

fn slug(name: &str) -> String {
    name.to_lowercase().replace(' ', "-")
}

/// The built-in sample catalog, dated from the local calendar day.
#[derive(Debug, Default, Clone, Copy)]
pub struct SampleCatalog;

impl SampleCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl TournamentSource for SampleCatalog {
    fn collect(&mut self) -> Vec<NewTournament> {
        generate(Local::now().date_naive(), &mut rand::thread_rng())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::validate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
    }

    #[test]
    fn test_generates_fourteen_tournaments_over_four_sports() {
        let tournaments = generate(today(), &mut StdRng::seed_from_u64(7));
        assert_eq!(tournaments.len(), 14);

        let mut sports: Vec<&str> = tournaments.iter().map(|t| t.sport.as_str()).collect();
        sports.dedup();
        assert_eq!(sports, vec!["Cricket", "Football", "Basketball", "Chess"]);
    }

    #[test]
    fn test_every_generated_record_validates() {
        let tournaments = generate(today(), &mut StdRng::seed_from_u64(1));
        for t in &tournaments {
            assert!(validate(t), "{} should validate", t.name);
        }
    }

    #[test]
    fn test_start_dates_within_next_year() {
        let tournaments = generate(today(), &mut StdRng::seed_from_u64(42));
        for t in &tournaments {
            let start = NaiveDate::parse_from_str(&t.start_date, DATE_FORMAT).unwrap();
            let offset = (start - today()).num_days();
            assert!((1..=365).contains(&offset), "offset {offset} out of range");
        }
    }

    #[test]
    fn test_end_date_uses_template_duration() {
        let tournaments = generate(today(), &mut StdRng::seed_from_u64(3));
        let league = tournaments.iter().find(|t| t.name == "I-League").unwrap();

        let start = NaiveDate::parse_from_str(&league.start_date, DATE_FORMAT).unwrap();
        let end = NaiveDate::parse_from_str(&league.end_date, DATE_FORMAT).unwrap();
        assert_eq!((end - start).num_days(), 180);
    }

    #[test]
    fn test_derived_fields() {
        let tournaments = generate(today(), &mut StdRng::seed_from_u64(5));
        let ipl = &tournaments[0];

        assert_eq!(ipl.name, "IPL 2025");
        assert_eq!(
            ipl.official_url.as_deref(),
            Some("https://example.com/ipl-2025")
        );
        assert_eq!(
            ipl.image_url.as_deref(),
            Some("https://example.com/images/cricket.jpg")
        );
        assert_eq!(ipl.streaming_links, vec!["Star Sports", "Hotstar", "Sony Liv"]);
        assert_eq!(
            ipl.summary.as_deref(),
            Some("Premier Cricket tournament at International level featuring top teams and players.")
        );
    }

    #[test]
    fn test_same_seed_same_dates() {
        let a = generate(today(), &mut StdRng::seed_from_u64(99));
        let b = generate(today(), &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_sample_catalog_collects_full_set() {
        let mut source = SampleCatalog::new();
        assert_eq!(source.collect().len(), 14);
    }
}
