//! First-start population of an empty catalog.

use tournament_core::{check, TournamentSource};

use crate::db::StorageError;
use crate::repo::TournamentRepo;

/// Outcome of a seeding attempt.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    /// Records already present; seeding is skipped when non-zero.
    pub existing: usize,
    /// Records inserted.
    pub inserted: usize,
    /// Records rejected by validation.
    pub skipped: usize,
    /// Valid records the store refused.
    pub failed: usize,
}

/// Populates the store from `source` if it holds no tournaments.
///
/// Each record is validated and inserted on its own: invalid records are
/// skipped with a warning, and a failed insert does not undo earlier ones.
///
/// # Errors
///
/// Returns an error only if the store cannot be counted.
pub fn populate_if_empty<S: TournamentSource>(
    repo: &TournamentRepo,
    source: &mut S,
) -> Result<SeedReport, StorageError> {
    let existing = repo.count()?;
    if existing > 0 {
        tracing::info!(existing, "Database already contains tournaments");
        return Ok(SeedReport {
            existing,
            ..SeedReport::default()
        });
    }

    tracing::info!("Populating database with sample tournaments");
    let mut report = SeedReport::default();

    for tournament in source.collect() {
        if let Err(reason) = check(&tournament) {
            tracing::warn!(name = %tournament.name, %reason, "Skipped invalid tournament");
            report.skipped += 1;
            continue;
        }

        match repo.insert(&tournament) {
            Ok(id) => {
                tracing::info!(id, name = %tournament.name, sport = %tournament.sport, "Added tournament");
                report.inserted += 1;
            }
            Err(e) => {
                tracing::error!(name = %tournament.name, error = %e, "Failed to insert tournament");
                report.failed += 1;
            }
        }
    }

    tracing::info!(
        inserted = report.inserted,
        skipped = report.skipped,
        failed = report.failed,
        "Seeding finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_db;
    use tournament_core::{NewTournament, SampleCatalog};

    struct FixedSource(Vec<NewTournament>);

    impl TournamentSource for FixedSource {
        fn collect(&mut self) -> Vec<NewTournament> {
            std::mem::take(&mut self.0)
        }
    }

    fn repo() -> TournamentRepo {
        TournamentRepo::new(init_db(":memory:").unwrap())
    }

    #[test]
    fn test_seeds_sample_catalog() {
        let repo = repo();
        let report = populate_if_empty(&repo, &mut SampleCatalog::new()).unwrap();

        assert_eq!(report.inserted, 14);
        assert_eq!(report.skipped, 0);
        assert_eq!(repo.count().unwrap(), 14);
    }

    #[test]
    fn test_invalid_records_are_skipped() {
        let repo = repo();
        let mut source = FixedSource(vec![
            NewTournament::new("Good", "Chess", "State", "2025-06-01", "2025-06-10"),
            NewTournament::new("Darts Night", "Darts", "State", "2025-06-01", "2025-06-02"),
            NewTournament::new("Bad Date", "Chess", "State", "13-13-2025", "2025-06-02"),
            NewTournament::new("No Level", "Chess", "", "2025-06-01", "2025-06-02"),
        ]);

        let report = populate_if_empty(&repo, &mut source).unwrap();

        assert_eq!(report.inserted, 1);
        assert_eq!(report.skipped, 3);
        let all = repo.list_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Good");
    }

    #[test]
    fn test_populated_store_is_left_alone() {
        let repo = repo();
        repo.insert(&NewTournament::new(
            "Existing",
            "Yoga",
            "School",
            "2025-01-01",
            "2025-01-01",
        ))
        .unwrap();

        let report = populate_if_empty(&repo, &mut SampleCatalog::new()).unwrap();

        assert_eq!(report.existing, 1);
        assert_eq!(report.inserted, 0);
        assert_eq!(repo.count().unwrap(), 1);
    }
}
