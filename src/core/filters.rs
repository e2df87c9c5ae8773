use crate::models::{FilterCriteria, UniversityRecord};

/// Check a record against the ANDed filter criteria.
///
/// Inactive records never match. Omitted criteria are no-ops.
pub fn matches_criteria(record: &UniversityRecord, criteria: &FilterCriteria) -> bool {
    if !record.is_active {
        return false;
    }

    if let Some(location) = &criteria.location {
        let needle = location.to_lowercase();
        let country = record.location.country.to_lowercase();
        let city = record.location.city.to_lowercase();
        if !country.contains(&needle) && !city.contains(&needle) {
            return false;
        }
    }

    if let Some(program) = &criteria.program {
        let needle = program.to_lowercase();
        let any_program = record
            .programs
            .iter()
            .any(|p| p.name.to_lowercase().contains(&needle));
        if !any_program {
            return false;
        }
    }

    if let Some(max_tuition) = criteria.max_tuition {
        match record.tuition_for(criteria.student_type) {
            Some(tuition) if tuition <= max_tuition => {}
            // No published figure cannot satisfy a tuition ceiling
            _ => return false,
        }
    }

    if let Some(min_ranking) = criteria.min_ranking {
        // "min ranking" means best-or-better: numerically <= the threshold
        match record.ranking.global {
            Some(rank) if rank <= min_ranking => {}
            _ => return false,
        }
    }

    true
}

/// Case-insensitive free-text match against name, description, city,
/// country, program names and tags. `query` must already be lowercased.
pub fn matches_search(record: &UniversityRecord, query: &str) -> bool {
    if !record.is_active {
        return false;
    }

    record.name.to_lowercase().contains(query)
        || record.description.to_lowercase().contains(query)
        || record.location.city.to_lowercase().contains(query)
        || record.location.country.to_lowercase().contains(query)
        || record
            .programs
            .iter()
            .any(|p| p.name.to_lowercase().contains(query))
        || record
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(query))
}

/// Apply the filter criteria to a collection, preserving order
pub fn filter_by_criteria<'a>(
    records: &'a [UniversityRecord],
    criteria: &FilterCriteria,
) -> Vec<&'a UniversityRecord> {
    records
        .iter()
        .filter(|record| matches_criteria(record, criteria))
        .collect()
}

/// Search a collection, returning the first `limit` matches in collection
/// order. No relevance ranking is applied.
pub fn search<'a>(
    records: &'a [UniversityRecord],
    query: &str,
    limit: usize,
) -> Vec<&'a UniversityRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| matches_search(record, &needle))
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::reference::reference_universities;

    #[test]
    fn test_filter_location() {
        let records = reference_universities();
        let criteria = FilterCriteria {
            location: Some("USA".to_string()),
            ..Default::default()
        };

        let results = filter_by_criteria(&records, &criteria);

        assert!(!results.is_empty());
        for uni in &results {
            assert!(uni.location.country.to_lowercase().contains("usa"));
        }
    }

    #[test]
    fn test_filter_max_tuition() {
        let records = reference_universities();
        let criteria = FilterCriteria {
            max_tuition: Some(40000.0),
            ..Default::default()
        };

        let results = filter_by_criteria(&records, &criteria);

        assert!(!results.is_empty());
        for uni in &results {
            let tuition = uni.tuition_for(criteria.student_type).unwrap();
            assert!(tuition <= 40000.0);
        }
    }

    #[test]
    fn test_filter_min_ranking_is_best_or_better() {
        let records = reference_universities();
        let criteria = FilterCriteria {
            min_ranking: Some(3),
            ..Default::default()
        };

        let results = filter_by_criteria(&records, &criteria);

        assert_eq!(results.len(), 3);
        for uni in &results {
            assert!(uni.ranking.global.unwrap() <= 3);
        }
    }

    #[test]
    fn test_filter_criteria_are_anded() {
        let records = reference_universities();
        let criteria = FilterCriteria {
            location: Some("USA".to_string()),
            program: Some("Computer Science".to_string()),
            max_tuition: Some(55000.0),
            ..Default::default()
        };

        let results = filter_by_criteria(&records, &criteria);

        for uni in &results {
            assert!(uni.location.country.contains("USA"));
            assert!(uni
                .programs
                .iter()
                .any(|p| p.name.to_lowercase().contains("computer science")));
        }
    }

    #[test]
    fn test_filter_excludes_inactive() {
        let mut records = reference_universities();
        records[0].is_active = false;
        let inactive_id = records[0].id.clone();

        let results = filter_by_criteria(&records, &FilterCriteria::default());

        assert!(results.iter().all(|uni| uni.id != inactive_id));
        assert_eq!(results.len(), records.len() - 1);
    }

    #[test]
    fn test_search_by_name_and_location() {
        let records = reference_universities();

        let by_name = search(&records, "stanford", 10);
        assert_eq!(by_name.len(), 1);
        assert!(by_name[0].name.contains("Stanford"));

        let by_city = search(&records, "cambridge", 10);
        // MIT, Harvard (Cambridge, MA) and Cambridge (UK)
        assert!(by_city.len() >= 3);
    }

    #[test]
    fn test_search_respects_limit() {
        let records = reference_universities();
        let results = search(&records, "university", 2);
        assert!(results.len() <= 2);
    }

    #[test]
    fn test_search_no_match_is_empty() {
        let records = reference_universities();
        let results = search(&records, "zzzzzz-no-such-place", 10);
        assert!(results.is_empty());
    }
}
