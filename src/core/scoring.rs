use crate::core::parse::AcademicScore;
use crate::models::{BudgetBracket, ScoringWeights, StudentProfile, StudentType, UniversityRecord};

/// Calculate a match score (0-100) for a university against a student profile
///
/// Scoring formula (default weights sum to 100):
/// ```text
/// score = academic_fit * 40    # marks vs. acceptance rate thresholds
///       + location_fit * 20    # preferred location substring match
///       + budget_fit   * 20    # tuition vs. budget bracket ceiling
///       + field_fit    * 10    # preferred field vs. specializations
///       + quality_fit  * 10    # national rank blended with reviews
/// ```
///
/// Each component returns a fraction in [0, 1]; under the default weights
/// the products reproduce the product's published point values exactly
/// (40/35/30/25/15 academic tiers, 20/5/10 location, and so on). The
/// thresholds are a deliberately coarse heuristic; identical inputs always
/// yield identical output.
pub fn calculate_match_score(
    university: &UniversityRecord,
    profile: &StudentProfile,
    weights: &ScoringWeights,
) -> u8 {
    let academic = AcademicScore::parse(profile.percentage.as_deref().unwrap_or(""));

    let total = academic_fit(academic.value(), university.acceptance_rate) * weights.academic
        + location_fit(profile.location_preference.as_deref(), university) * weights.location
        + budget_fit(profile.budget.as_deref(), university) * weights.budget
        + field_fit(profile.preferred_field.as_deref(), university) * weights.field
        + quality_fit(university) * weights.quality;

    let max_score =
        weights.academic + weights.location + weights.budget + weights.field + weights.quality;

    // Default weights sum to 100, so this is effectively round(total)
    let normalized = (total / max_score * 100.0).round();
    normalized.clamp(0.0, 100.0) as u8
}

/// Academic fit: fixed tiers comparing the student's marks against the
/// university's acceptance rate. Fractions of the 40-point component:
/// 40 -> 1.0, 35 -> 0.875, 30 -> 0.75, 25 -> 0.625, 15 -> 0.375.
#[inline]
fn academic_fit(student_value: f64, acceptance_rate: Option<f64>) -> f64 {
    let acceptance = match acceptance_rate {
        Some(rate) => rate,
        // No published acceptance rate: only the marks-based tiers apply
        None => return if student_value >= 60.0 { 25.0 / 40.0 } else { 15.0 / 40.0 },
    };

    if student_value >= 90.0 && acceptance <= 10.0 {
        1.0
    } else if student_value >= 80.0 && acceptance <= 25.0 {
        35.0 / 40.0
    } else if student_value >= 70.0 && acceptance <= 50.0 {
        30.0 / 40.0
    } else if student_value >= 60.0 {
        25.0 / 40.0
    } else {
        15.0 / 40.0
    }
}

/// Location fit: full marks for a preferred-location substring hit, a small
/// baseline for a stated preference that misses, neutral when no preference
/// was given (20 / 5 / 10 out of the 20-point component)
#[inline]
fn location_fit(preference: Option<&str>, university: &UniversityRecord) -> f64 {
    let preference = match preference {
        Some(p) if !p.trim().is_empty() => p,
        _ => return 0.5,
    };

    let country = university.location.country.to_lowercase();
    let city = university.location.city.to_lowercase();
    let state = university
        .location
        .state
        .as_deref()
        .unwrap_or("")
        .to_lowercase();

    let matched = preference
        .to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .any(|token| country.contains(token) || state.contains(token) || city.contains(token));

    if matched {
        1.0
    } else {
        0.25
    }
}

/// Budget fit: within the bracket ceiling 20, up to 20% over 10, way over 2;
/// missing or unknown bracket is neutral (fractions of the 20-point component)
#[inline]
fn budget_fit(budget_key: Option<&str>, university: &UniversityRecord) -> f64 {
    let bracket = match budget_key.and_then(BudgetBracket::parse) {
        Some(b) => b,
        None => return 0.5,
    };

    // A record with no published figure cannot demonstrate affordability,
    // so a stated budget scores it in the lowest band
    let tuition = match university.tuition_for(StudentType::International) {
        Some(t) => t,
        None => return 0.1,
    };

    match bracket.ceiling() {
        None => 1.0,
        Some(ceiling) if tuition <= ceiling => 1.0,
        Some(ceiling) if tuition <= ceiling * 1.2 => 0.5,
        Some(_) => 0.1,
    }
}

/// Keyword vocabulary for the preferred-field keys used by the student form
fn field_keywords(field: &str) -> Vec<&str> {
    match field {
        "engineering" => vec!["engineering", "technology"],
        "medicine" => vec!["medicine", "healthcare"],
        "business" => vec!["business", "management", "commerce"],
        "computer-science" => vec!["engineering", "technology"],
        "science" => vec!["science", "research"],
        "arts" => vec!["liberal-arts", "humanities"],
        "law" => vec!["law"],
        "design" => vec!["design", "arts"],
        other => vec![other],
    }
}

/// Field-of-study fit: 10 when any specialization keyword overlaps the
/// mapped vocabulary, 3 for a stated field that misses, 5 when no
/// preference was given (fractions of the 10-point component)
#[inline]
fn field_fit(preferred_field: Option<&str>, university: &UniversityRecord) -> f64 {
    let field = match preferred_field {
        Some(f) if !f.trim().is_empty() => f.to_lowercase(),
        _ => return 0.5,
    };

    if university.specializations.is_empty() {
        return 0.5;
    }

    let keywords = field_keywords(&field);
    let matched = university.specializations.iter().any(|spec| {
        let spec = spec.to_lowercase();
        keywords
            .iter()
            .any(|kw| spec.contains(kw) || kw.contains(spec.as_str()))
    });

    if matched {
        1.0
    } else {
        0.3
    }
}

/// Quality fit: ranking-derived score blended with the normalized community
/// review score, as a fraction of the 10-point component
#[inline]
fn quality_fit(university: &UniversityRecord) -> f64 {
    let ranking_score = university
        .ranking
        .national
        .map(|rank| (10.0 - rank as f64 / 10.0).max(0.0))
        .unwrap_or(0.0);

    let review_score = university
        .user_reviews
        .map(|reviews| reviews / 5.0 * 5.0)
        .unwrap_or(0.0);

    (ranking_score + review_score) / 2.0 / 10.0
}
