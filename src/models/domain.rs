use serde::{Deserialize, Serialize};

/// A single institution as stored in the university collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityRecord {
    pub id: String,
    pub name: String,
    pub location: Location,
    #[serde(default)]
    pub ranking: Ranking,
    #[serde(rename = "acceptanceRate", default)]
    pub acceptance_rate: Option<f64>,
    #[serde(default)]
    pub tuition: Tuition,
    #[serde(default)]
    pub programs: Vec<Program>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub statistics: CampusStatistics,
    #[serde(default)]
    pub scholarships: Vec<Scholarship>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub specializations: Vec<String>,
    #[serde(rename = "userReviews", default)]
    pub user_reviews: Option<f64>,
    #[serde(rename = "isActive", default = "default_true")]
    pub is_active: bool,
    #[serde(rename = "isVerified", default)]
    pub is_verified: Option<bool>,
    #[serde(rename = "isFeatured", default)]
    pub is_featured: Option<bool>,
}

impl UniversityRecord {
    /// Tuition figure used for budget comparisons and statistics
    pub fn tuition_for(&self, student_type: StudentType) -> Option<f64> {
        let fees = match student_type {
            StudentType::Domestic => &self.tuition.domestic,
            StudentType::International => &self.tuition.international,
        };
        fees.undergraduate
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub country: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub coordinates: Option<Coordinates>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Ranking {
    #[serde(default)]
    pub global: Option<u32>,
    #[serde(default)]
    pub national: Option<u32>,
    #[serde(default)]
    pub regional: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuition {
    #[serde(default)]
    pub domestic: TuitionByLevel,
    #[serde(default)]
    pub international: TuitionByLevel,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Tuition {
    fn default() -> Self {
        Self {
            domestic: TuitionByLevel::default(),
            international: TuitionByLevel::default(),
            currency: default_currency(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TuitionByLevel {
    #[serde(default)]
    pub undergraduate: Option<f64>,
    #[serde(default)]
    pub graduate: Option<f64>,
}

fn default_currency() -> String {
    "USD".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Program {
    pub name: String,
    pub level: ProgramLevel,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub tuition: Option<f64>,
    #[serde(default)]
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgramLevel {
    Undergraduate,
    Graduate,
    Phd,
    Certificate,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CampusStatistics {
    #[serde(rename = "totalStudents", default)]
    pub total_students: Option<u32>,
    #[serde(rename = "internationalStudents", default)]
    pub international_students: Option<u32>,
    #[serde(rename = "studentFacultyRatio", default)]
    pub student_faculty_ratio: Option<f64>,
    #[serde(rename = "graduationRate", default)]
    pub graduation_rate: Option<f64>,
    #[serde(rename = "employmentRate", default)]
    pub employment_rate: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Scholarship {
    pub name: String,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(rename = "type", default)]
    pub scholarship_type: Option<String>,
    #[serde(default)]
    pub eligibility: Option<String>,
    #[serde(default)]
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
}

/// Which tuition table a query should be priced against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StudentType {
    Domestic,
    International,
}

impl Default for StudentType {
    fn default() -> Self {
        StudentType::International
    }
}

/// Caller-supplied student profile used for recommendations.
///
/// Transient: it never outlives a single scoring call and is not persisted.
/// All fields are optional; missing fields score as their neutral defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentProfile {
    /// Raw academic score text as entered by the student, e.g. "85%" or "8.5 CGPA"
    #[serde(default)]
    pub percentage: Option<String>,
    #[serde(default)]
    pub stream: Option<String>,
    /// Comma-separated preferred locations, matched case-insensitively
    #[serde(rename = "locationPreference", default)]
    pub location_preference: Option<String>,
    /// Named budget bracket key, e.g. "5-10-lakh"
    #[serde(default)]
    pub budget: Option<String>,
    #[serde(rename = "preferredField", default)]
    pub preferred_field: Option<String>,
    #[serde(rename = "examScores", default)]
    pub exam_scores: Vec<ExamScore>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExamScore {
    pub name: String,
    pub score: f64,
}

/// Filter constraints for the university collection, ANDed together.
/// Omitted fields are no-ops.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub program: Option<String>,
    #[serde(rename = "maxTuition", default)]
    pub max_tuition: Option<f64>,
    /// Best-or-better ranking threshold: matches `ranking.global <= min_ranking`
    #[serde(rename = "minRanking", default)]
    pub min_ranking: Option<u32>,
    #[serde(rename = "studentType", default)]
    pub student_type: StudentType,
}

/// A university paired with its computed compatibility score for one profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub university: UniversityRecord,
    #[serde(rename = "matchScore")]
    pub match_score: u8,
}

/// Named budget brackets from the student onboarding form, mapped to a
/// maximum annual tuition ceiling. `AboveTwentyLakh` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BudgetBracket {
    UnderTwoLakh,
    TwoToFiveLakh,
    FiveToTenLakh,
    TenToTwentyLakh,
    AboveTwentyLakh,
}

impl BudgetBracket {
    pub fn parse(key: &str) -> Option<Self> {
        match key {
            "under-2-lakh" => Some(BudgetBracket::UnderTwoLakh),
            "2-5-lakh" => Some(BudgetBracket::TwoToFiveLakh),
            "5-10-lakh" => Some(BudgetBracket::FiveToTenLakh),
            "10-20-lakh" => Some(BudgetBracket::TenToTwentyLakh),
            "above-20-lakh" => Some(BudgetBracket::AboveTwentyLakh),
            _ => None,
        }
    }

    /// Maximum tuition for the bracket; `None` means unbounded
    pub fn ceiling(&self) -> Option<f64> {
        match self {
            BudgetBracket::UnderTwoLakh => Some(200_000.0),
            BudgetBracket::TwoToFiveLakh => Some(500_000.0),
            BudgetBracket::FiveToTenLakh => Some(1_000_000.0),
            BudgetBracket::TenToTwentyLakh => Some(2_000_000.0),
            BudgetBracket::AboveTwentyLakh => None,
        }
    }
}

/// Scoring weights for the five match components. The defaults sum to 100
/// so the combined score is already on the 0-100 scale.
#[derive(Debug, Clone, Copy)]
pub struct ScoringWeights {
    pub academic: f64,
    pub location: f64,
    pub budget: f64,
    pub field: f64,
    pub quality: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            academic: 40.0,
            location: 20.0,
            budget: 20.0,
            field: 10.0,
            quality: 10.0,
        }
    }
}

/// Aggregate statistics over the active university collection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UniversityStatistics {
    #[serde(rename = "totalUniversities")]
    pub total_universities: usize,
    #[serde(rename = "averageTuition")]
    pub average_tuition: i64,
    #[serde(rename = "averageAcceptanceRate")]
    pub average_acceptance_rate: i64,
    #[serde(rename = "topPrograms")]
    pub top_programs: Vec<ProgramCount>,
    pub countries: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProgramCount {
    pub program: String,
    pub count: usize,
}
