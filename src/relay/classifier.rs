use crate::core::rules::RuleSet;

/// Returns the first entry of `list` found in `text`.
///
/// `text` and `list` are expected to be lower-cased already.
#[must_use]
pub fn first_match<'a>(text: &str, list: &'a [String]) -> Option<&'a str> {
    list.iter()
        .find(|keyword| text.contains(keyword.as_str()))
        .map(String::as_str)
}

#[must_use]
pub fn contains_any(text: &str, list: &[String]) -> bool {
    first_match(text, list).is_some()
}

/// Decide whether `text` advertises a job.
///
/// A posting needs a link and at least one text or link keyword. Any exclusion
/// vetoes the message regardless of the rest.
#[must_use]
pub fn is_job_posting(text: &str, rules: &RuleSet) -> bool {
    let text = text.to_lowercase();

    let has_link = rules.url_pattern.is_match(&text);
    let with_keyword =
        contains_any(&text, &rules.text_keywords) || contains_any(&text, &rules.link_keywords);

    has_link && with_keyword && !contains_any(&text, &rules.exclusions)
}
