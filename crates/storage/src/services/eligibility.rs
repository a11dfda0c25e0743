//! Pure age/division eligibility rules. No I/O here; the repositories feed
//! these functions the event's division list.

use chrono::{Datelike, NaiveDate};

use crate::models::{Division, Gender};

/// Whole-years age at `reference`, decremented when the birthday has not
/// yet occurred in the reference year.
pub fn age_on(reference: NaiveDate, dob: NaiveDate) -> i32 {
    let mut age = reference.year() - dob.year();
    if (reference.month(), reference.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

/// First division whose gender matches and whose inclusive age range
/// contains `age`. Divisions for one event+gender are expected not to
/// overlap (see [`verify_no_overlap`]), so "first" is also "unique".
pub fn match_division(divisions: &[Division], gender: Gender, age: i32) -> Option<&Division> {
    divisions
        .iter()
        .find(|d| d.gender == gender && d.contains_age(age))
}

/// [`match_division`], falling back to an OPEN-gender division when no
/// gender-specific band matches. Used by the seed tooling only; the live
/// entry-creation path matches strictly.
pub fn match_division_with_open_fallback(
    divisions: &[Division],
    gender: Gender,
    age: i32,
) -> Option<&Division> {
    match_division(divisions, gender, age)
        .or_else(|| match_division(divisions, Gender::Open, age))
}

/// Checks the seed-time data precondition that no two divisions for the
/// same gender have overlapping age ranges. Returns the offending pair of
/// division keys on failure.
pub fn verify_no_overlap(divisions: &[Division]) -> Result<(), (String, String)> {
    for (i, a) in divisions.iter().enumerate() {
        for b in &divisions[i + 1..] {
            if a.gender == b.gender && a.min_age <= b.max_age && b.min_age <= a.max_age {
                return Err((a.key.clone(), b.key.clone()));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn division(key: &str, gender: Gender, min_age: i32, max_age: i32) -> Division {
        Division {
            division_id: Uuid::new_v4(),
            event_id: Uuid::new_v4(),
            key: key.to_string(),
            name: key.to_string(),
            min_age,
            max_age,
            gender,
        }
    }

    #[test]
    fn test_age_on_before_birthday() {
        assert_eq!(age_on(date(2025, 9, 20), date(2009, 9, 21)), 15);
    }

    #[test]
    fn test_age_on_on_birthday() {
        assert_eq!(age_on(date(2025, 9, 20), date(2009, 9, 20)), 16);
    }

    #[test]
    fn test_age_on_after_birthday() {
        assert_eq!(age_on(date(2025, 9, 20), date(2009, 1, 2)), 16);
    }

    #[test]
    fn test_age_on_year_boundary() {
        assert_eq!(age_on(date(2025, 1, 1), date(2024, 12, 31)), 0);
        assert_eq!(age_on(date(2025, 12, 31), date(2024, 12, 31)), 1);
    }

    #[test]
    fn test_match_division_unique_hit() {
        let divisions = vec![
            division("cadet-m", Gender::Male, 14, 15),
            division("junior-m", Gender::Male, 16, 17),
            division("cadet-f", Gender::Female, 14, 15),
        ];
        let hit = match_division(&divisions, Gender::Male, 16).unwrap();
        assert_eq!(hit.key, "junior-m");
    }

    #[test]
    fn test_match_division_none_when_out_of_range() {
        let divisions = vec![division("cadet-m", Gender::Male, 14, 15)];
        assert!(match_division(&divisions, Gender::Male, 18).is_none());
        assert!(match_division(&divisions, Gender::Female, 14).is_none());
    }

    #[test]
    fn test_open_fallback_only_when_no_gender_match() {
        let divisions = vec![
            division("senior-open", Gender::Open, 18, 99),
            division("senior-f", Gender::Female, 18, 34),
        ];
        let strict = match_division(&divisions, Gender::Male, 20);
        assert!(strict.is_none());
        let fallback = match_division_with_open_fallback(&divisions, Gender::Male, 20).unwrap();
        assert_eq!(fallback.key, "senior-open");
        // A gender-specific band wins over the open one.
        let female = match_division_with_open_fallback(&divisions, Gender::Female, 20).unwrap();
        assert_eq!(female.key, "senior-f");
    }

    #[test]
    fn test_verify_no_overlap_accepts_adjacent_bands() {
        let divisions = vec![
            division("cadet-m", Gender::Male, 14, 15),
            division("junior-m", Gender::Male, 16, 17),
            division("cadet-f", Gender::Female, 14, 15),
        ];
        assert!(verify_no_overlap(&divisions).is_ok());
    }

    #[test]
    fn test_verify_no_overlap_rejects_overlap_within_gender() {
        let divisions = vec![
            division("cadet-m", Gender::Male, 14, 16),
            division("junior-m", Gender::Male, 16, 17),
        ];
        let (a, b) = verify_no_overlap(&divisions).unwrap_err();
        assert_eq!((a.as_str(), b.as_str()), ("cadet-m", "junior-m"));
    }

    #[test]
    fn test_verify_no_overlap_ignores_cross_gender_overlap() {
        let divisions = vec![
            division("cadet-m", Gender::Male, 14, 15),
            division("cadet-f", Gender::Female, 14, 15),
        ];
        assert!(verify_no_overlap(&divisions).is_ok());
    }
}
