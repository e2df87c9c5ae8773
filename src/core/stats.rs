use std::collections::HashMap;

use crate::models::{ProgramCount, StudentType, UniversityRecord, UniversityStatistics};

/// Number of entries reported in the top-programs list
const TOP_PROGRAMS: usize = 10;

/// Aggregate statistics over a university collection.
///
/// Inactive records are excluded. Averages are taken over the records that
/// actually carry the relevant figure and rounded to the nearest integer.
pub fn compute_statistics(records: &[UniversityRecord]) -> UniversityStatistics {
    let active: Vec<&UniversityRecord> = records.iter().filter(|r| r.is_active).collect();

    let tuitions: Vec<f64> = active
        .iter()
        .filter_map(|r| r.tuition_for(StudentType::International))
        .collect();
    let average_tuition = mean(&tuitions).round() as i64;

    let acceptance_rates: Vec<f64> = active.iter().filter_map(|r| r.acceptance_rate).collect();
    let average_acceptance_rate = mean(&acceptance_rates).round() as i64;

    UniversityStatistics {
        total_universities: active.len(),
        average_tuition,
        average_acceptance_rate,
        top_programs: top_programs(&active),
        countries: distinct_countries(&active),
    }
}

#[inline]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// The most frequently occurring program names, descending by count.
/// Ties are broken alphabetically so the report is stable across runs.
fn top_programs(records: &[&UniversityRecord]) -> Vec<ProgramCount> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for record in records {
        for program in &record.programs {
            *counts.entry(program.name.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<ProgramCount> = counts
        .into_iter()
        .map(|(program, count)| ProgramCount {
            program: program.to_string(),
            count,
        })
        .collect();

    ranked.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.program.cmp(&b.program)));
    ranked.truncate(TOP_PROGRAMS);
    ranked
}

/// Deduplicated set of countries, in first-seen collection order
fn distinct_countries(records: &[&UniversityRecord]) -> Vec<String> {
    let mut countries: Vec<String> = Vec::new();
    for record in records {
        if !countries.contains(&record.location.country) {
            countries.push(record.location.country.clone());
        }
    }
    countries
}
