//! Experience Extractor — regex heuristics for years of experience.
//!
//! `resume_years` takes the most generous figure stated anywhere in a resume.
//! `required_years` applies a fixed precedence over JD phrasings and stops at
//! the first pattern family that matches.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::matching::round2;

static RE_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:years?|yrs?)").unwrap());

static RE_MONTHS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*(?:months?|mos?)").unwrap());

static RE_YEARS_MONTHS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*years?\s*(\d+(?:\.\d+)?)\s*months?").unwrap()
});

static RE_RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\d+(?:\.\d+)?)\s*[-to]{1,3}\s*(\d+(?:\.\d+)?)\s*years?").unwrap()
});

static RE_PLUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*\+\s*years?").unwrap());

static RE_MINIMUM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:minimum|min)\s*(\d+(?:\.\d+)?)\s*years?").unwrap());

static RE_PLAIN: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+(?:\.\d+)?)\s*years?").unwrap());

/// Approximate years of experience stated in resume text.
///
/// Collects every "N years", "N months" and "N years M months" mention and
/// returns the largest, rounded to 2 decimals. 0.0 when nothing matches.
pub fn resume_years(text: &str) -> f64 {
    let text = text.to_lowercase();
    let mut values = Vec::new();

    for caps in RE_YEARS.captures_iter(&text) {
        values.extend(parse_number(caps.get(1).map(|m| m.as_str())));
    }

    for caps in RE_MONTHS.captures_iter(&text) {
        values.extend(parse_number(caps.get(1).map(|m| m.as_str())).map(|m| m / 12.0));
    }

    for caps in RE_YEARS_MONTHS.captures_iter(&text) {
        let years = parse_number(caps.get(1).map(|m| m.as_str()));
        let months = parse_number(caps.get(2).map(|m| m.as_str()));
        if let (Some(y), Some(m)) = (years, months) {
            values.push(y + m / 12.0);
        }
    }

    values
        .into_iter()
        .fold(None, |best: Option<f64>, v| Some(best.map_or(v, |b| b.max(v))))
        .map(round2)
        .unwrap_or(0.0)
}

/// Minimum years of experience a job description asks for.
///
/// Precedence (first family with any match wins):
/// 1. range "3-5 years" / "3 to 5 years" → low bound
/// 2. "3+ years"
/// 3. "minimum 3 years" / "min 3 years"
/// 4. bare "3 years"
pub fn required_years(jd_text: &str) -> f64 {
    let text = jd_text.to_lowercase();

    [&*RE_RANGE, &*RE_PLUS, &*RE_MINIMUM, &*RE_PLAIN]
        .into_iter()
        .find_map(|re| {
            re.captures(&text)
                .and_then(|caps| parse_number(caps.get(1).map(|m| m.as_str())))
        })
        .map(round2)
        .unwrap_or(0.0)
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw.and_then(|s| s.parse::<f64>().ok())
        .filter(|v| v.is_finite())
}
