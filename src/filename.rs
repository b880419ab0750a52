use chrono::NaiveDate;

const FALLBACK_STEM: &str = "export";

/// Builds a download-friendly filename such as `quarterly-report-2026-10-17.pdf`.
pub fn suggested_filename(title: &str, date: NaiveDate, extension: &str) -> String {
    let stem = slug::slugify(title);
    let stem = if stem.is_empty() { FALLBACK_STEM } else { stem.as_str() };
    format!("{}-{}.{}", stem, date.format("%Y-%m-%d"), extension)
}
