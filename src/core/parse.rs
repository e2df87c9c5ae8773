/// Parsed academic score from free-form user input.
///
/// Students enter their marks as text ("85%", "8.5 CGPA", "92"), so the
/// parser tags the value instead of silently stripping suffixes at every
/// call site. Scoring treats the tagged numeric value uniformly to keep
/// output identical to the historical heuristic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AcademicScore {
    Percentage(f64),
    Cgpa(f64),
    Unparseable,
}

impl AcademicScore {
    /// Parse a raw academic score string.
    ///
    /// "85%" -> Percentage(85.0), "8.5 CGPA" -> Cgpa(8.5), "92" -> Percentage(92.0).
    /// Anything without a leading number is Unparseable.
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return AcademicScore::Unparseable;
        }

        let lower = trimmed.to_lowercase();
        let is_cgpa = lower.contains("cgpa");

        // Take the leading numeric prefix, tolerating a decimal point
        let numeric: String = trimmed
            .chars()
            .take_while(|c| c.is_ascii_digit() || *c == '.')
            .collect();

        match numeric.parse::<f64>() {
            Ok(value) if value.is_finite() => {
                if is_cgpa {
                    AcademicScore::Cgpa(value)
                } else {
                    AcademicScore::Percentage(value)
                }
            }
            _ => AcademicScore::Unparseable,
        }
    }

    /// Numeric value fed into the academic-fit thresholds.
    ///
    /// CGPA values are deliberately not rescaled: the thresholds were tuned
    /// against this raw value and rescaling would change every published
    /// match score.
    pub fn value(&self) -> f64 {
        match self {
            AcademicScore::Percentage(v) | AcademicScore::Cgpa(v) => *v,
            AcademicScore::Unparseable => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_percentage() {
        assert_eq!(AcademicScore::parse("85%"), AcademicScore::Percentage(85.0));
        assert_eq!(AcademicScore::parse("92"), AcademicScore::Percentage(92.0));
        assert_eq!(
            AcademicScore::parse("  73.5% "),
            AcademicScore::Percentage(73.5)
        );
    }

    #[test]
    fn test_parse_cgpa() {
        assert_eq!(AcademicScore::parse("8.5 CGPA"), AcademicScore::Cgpa(8.5));
        assert_eq!(AcademicScore::parse("9.1cgpa"), AcademicScore::Cgpa(9.1));
    }

    #[test]
    fn test_parse_garbage() {
        assert_eq!(AcademicScore::parse(""), AcademicScore::Unparseable);
        assert_eq!(AcademicScore::parse("good grades"), AcademicScore::Unparseable);
        assert_eq!(AcademicScore::parse("%"), AcademicScore::Unparseable);
    }

    #[test]
    fn test_value_defaults_to_zero() {
        assert_eq!(AcademicScore::Unparseable.value(), 0.0);
        assert_eq!(AcademicScore::Percentage(85.0).value(), 85.0);
        assert_eq!(AcademicScore::Cgpa(8.5).value(), 8.5);
    }
}
