//! The sport and level tables shared by validation and the listing endpoints.

/// Every sport a validated tournament may belong to.
pub const SPORTS: [&str; 12] = [
    "Cricket",
    "Football",
    "Badminton",
    "Running",
    "Gym",
    "Cycling",
    "Swimming",
    "Kabaddi",
    "Yoga",
    "Basketball",
    "Chess",
    "Table Tennis",
];

/// Competitive tiers, from grassroots to international.
pub const LEVELS: [&str; 9] = [
    "Corporate",
    "School",
    "College/University",
    "Club/Academy",
    "District",
    "State",
    "Zonal/Regional",
    "National",
    "International",
];

/// Returns true if `sport` is in [`SPORTS`]. Case-sensitive.
#[must_use]
pub fn is_sport(sport: &str) -> bool {
    SPORTS.contains(&sport)
}

/// Returns true if `level` is in [`LEVELS`]. Case-sensitive.
#[must_use]
pub fn is_level(level: &str) -> bool {
    LEVELS.contains(&level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(SPORTS.len(), 12);
        assert_eq!(LEVELS.len(), 9);
    }

    #[test]
    fn test_membership_is_case_sensitive() {
        assert!(is_sport("Table Tennis"));
        assert!(!is_sport("table tennis"));
        assert!(is_level("College/University"));
        assert!(!is_level("national"));
    }

    #[test]
    fn test_no_duplicates() {
        for (i, sport) in SPORTS.iter().enumerate() {
            assert!(!SPORTS[i + 1..].contains(sport), "duplicate sport {sport}");
        }
        for (i, level) in LEVELS.iter().enumerate() {
            assert!(!LEVELS[i + 1..].contains(level), "duplicate level {level}");
        }
    }
}
