use crate::models::{
    CampusStatistics, Location, Program, ProgramLevel, Ranking, Tuition, TuitionByLevel,
    UniversityRecord,
};

/// What the query service does when the primary store returns zero rows.
///
/// The policy is explicit and configured at construction time rather than
/// silently triggered by row count deep inside the data layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallbackPolicy {
    /// Re-run the query against the bundled reference dataset
    UseReferenceDataset,
    /// Return the empty primary result as-is
    Disabled,
}

struct ReferenceEntry {
    id: &'static str,
    name: &'static str,
    country: &'static str,
    city: &'static str,
    state: Option<&'static str>,
    global_rank: u32,
    national_rank: u32,
    acceptance_rate: f64,
    tuition: f64,
    programs: &'static [&'static str],
    website: &'static str,
    description: &'static str,
    specializations: &'static [&'static str],
    user_reviews: f64,
    total_students: u32,
}

const REFERENCE_ENTRIES: &[ReferenceEntry] = &[
    ReferenceEntry {
        id: "ref-mit",
        name: "Massachusetts Institute of Technology (MIT)",
        country: "USA",
        city: "Cambridge",
        state: Some("MA"),
        global_rank: 1,
        national_rank: 1,
        acceptance_rate: 7.3,
        tuition: 55000.0,
        programs: &["Computer Science", "Engineering", "Physics", "Mathematics"],
        website: "https://mit.edu",
        description: "World-renowned institution for science and technology education.",
        specializations: &["engineering", "technology", "science", "research"],
        user_reviews: 4.8,
        total_students: 11_520,
    },
    ReferenceEntry {
        id: "ref-stanford",
        name: "Stanford University",
        country: "USA",
        city: "Stanford",
        state: Some("CA"),
        global_rank: 2,
        national_rank: 2,
        acceptance_rate: 4.3,
        tuition: 56000.0,
        programs: &["Computer Science", "Business", "Engineering", "Medicine"],
        website: "https://stanford.edu",
        description: "Leading research university in the heart of Silicon Valley.",
        specializations: &["engineering", "technology", "business", "medicine"],
        user_reviews: 4.7,
        total_students: 17_249,
    },
    ReferenceEntry {
        id: "ref-harvard",
        name: "Harvard University",
        country: "USA",
        city: "Cambridge",
        state: Some("MA"),
        global_rank: 3,
        national_rank: 3,
        acceptance_rate: 4.6,
        tuition: 54000.0,
        programs: &["Law", "Business", "Medicine", "Arts & Sciences"],
        website: "https://harvard.edu",
        description: "Ivy League institution with centuries of academic excellence.",
        specializations: &["law", "business", "medicine", "humanities"],
        user_reviews: 4.7,
        total_students: 21_613,
    },
    ReferenceEntry {
        id: "ref-berkeley",
        name: "University of California, Berkeley",
        country: "USA",
        city: "Berkeley",
        state: Some("CA"),
        global_rank: 4,
        national_rank: 4,
        acceptance_rate: 14.8,
        tuition: 44000.0,
        programs: &[
            "Engineering",
            "Computer Science",
            "Business",
            "Environmental Science",
        ],
        website: "https://berkeley.edu",
        description: "Public research university known for innovation and social impact.",
        specializations: &["engineering", "technology", "science", "research"],
        user_reviews: 4.5,
        total_students: 45_057,
    },
    ReferenceEntry {
        id: "ref-oxford",
        name: "University of Oxford",
        country: "UK",
        city: "Oxford",
        state: Some("England"),
        global_rank: 5,
        national_rank: 1,
        acceptance_rate: 17.5,
        tuition: 39000.0,
        programs: &["Humanities", "Sciences", "Medicine", "Law"],
        website: "https://ox.ac.uk",
        description: "One of the oldest and most prestigious universities in the world.",
        specializations: &["humanities", "science", "medicine", "law"],
        user_reviews: 4.6,
        total_students: 26_000,
    },
    ReferenceEntry {
        id: "ref-cambridge",
        name: "University of Cambridge",
        country: "UK",
        city: "Cambridge",
        state: Some("England"),
        global_rank: 6,
        national_rank: 2,
        acceptance_rate: 21.0,
        tuition: 38000.0,
        programs: &["Natural Sciences", "Engineering", "Mathematics", "Arts"],
        website: "https://cam.ac.uk",
        description: "Historic university with world-class research facilities.",
        specializations: &["science", "engineering", "research", "humanities"],
        user_reviews: 4.6,
        total_students: 24_450,
    },
    ReferenceEntry {
        id: "ref-eth",
        name: "ETH Zurich",
        country: "Switzerland",
        city: "Zurich",
        state: None,
        global_rank: 7,
        national_rank: 1,
        acceptance_rate: 27.0,
        tuition: 1500.0,
        programs: &[
            "Engineering",
            "Architecture",
            "Mathematics",
            "Natural Sciences",
        ],
        website: "https://ethz.ch",
        description: "Leading science and technology university in Europe.",
        specializations: &["engineering", "technology", "science", "design"],
        user_reviews: 4.5,
        total_students: 24_500,
    },
    ReferenceEntry {
        id: "ref-toronto",
        name: "University of Toronto",
        country: "Canada",
        city: "Toronto",
        state: Some("Ontario"),
        global_rank: 8,
        national_rank: 1,
        acceptance_rate: 43.0,
        tuition: 45000.0,
        programs: &["Medicine", "Engineering", "Arts & Science", "Business"],
        website: "https://utoronto.ca",
        description: "Canada's leading research university with global impact.",
        specializations: &["medicine", "engineering", "science", "business"],
        user_reviews: 4.4,
        total_students: 97_000,
    },
];

/// Bundled reference dataset of well-known universities.
///
/// Used by the query service when the primary store returns zero rows and
/// the fallback policy allows it. The figures mirror the product's
/// long-standing seed data so fallback responses stay consistent release
/// to release.
pub fn reference_universities() -> Vec<UniversityRecord> {
    REFERENCE_ENTRIES.iter().map(build_record).collect()
}

fn build_record(entry: &ReferenceEntry) -> UniversityRecord {
    UniversityRecord {
        id: entry.id.to_string(),
        name: entry.name.to_string(),
        location: Location {
            country: entry.country.to_string(),
            city: entry.city.to_string(),
            state: entry.state.map(str::to_string),
            coordinates: None,
        },
        ranking: Ranking {
            global: Some(entry.global_rank),
            national: Some(entry.national_rank),
            regional: None,
        },
        acceptance_rate: Some(entry.acceptance_rate),
        tuition: Tuition {
            domestic: TuitionByLevel {
                undergraduate: Some(entry.tuition),
                graduate: None,
            },
            international: TuitionByLevel {
                undergraduate: Some(entry.tuition),
                graduate: None,
            },
            currency: "USD".to_string(),
        },
        programs: entry
            .programs
            .iter()
            .map(|name| Program {
                name: name.to_string(),
                level: ProgramLevel::Undergraduate,
                department: None,
                tuition: None,
                requirements: vec![],
            })
            .collect(),
        website: Some(entry.website.to_string()),
        description: entry.description.to_string(),
        statistics: CampusStatistics {
            total_students: Some(entry.total_students),
            ..Default::default()
        },
        scholarships: vec![],
        tags: vec!["reference".to_string()],
        specializations: entry.specializations.iter().map(|s| s.to_string()).collect(),
        user_reviews: Some(entry.user_reviews),
        is_active: true,
        is_verified: Some(true),
        is_featured: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StudentType;

    #[test]
    fn test_reference_dataset_shape() {
        let records = reference_universities();

        assert_eq!(records.len(), 8);
        for record in &records {
            assert!(record.is_active);
            assert!(record.acceptance_rate.is_some());
            assert!(record.tuition_for(StudentType::International).is_some());
            assert!(!record.programs.is_empty());
        }
    }

    #[test]
    fn test_reference_ids_are_unique() {
        let records = reference_universities();
        let mut ids: Vec<&str> = records.iter().map(|r| r.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), records.len());
    }

    #[test]
    fn test_reference_acceptance_rates_in_range() {
        for record in reference_universities() {
            let rate = record.acceptance_rate.unwrap();
            assert!((0.0..=100.0).contains(&rate));
        }
    }
}
