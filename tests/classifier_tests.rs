use jobrelay::core::rules::RuleSet;
use jobrelay::relay::classifier::{contains_any, is_job_posting};

const SKYPE_VACANCY: &str = "[skype - tamara.mishcherina ]\nВсем привет! Открылась вакансия для QA automation (опыт от 3+) на удаленку. English level (speaking, writing, reading) - intermediate level. Автоматизация на С#. Пишите в личку, отвечу на все вопросы. :slightly_smiling_face:";

#[test]
fn test_url_pattern() {
    let rules = RuleSet::default();
    let cases = [
        (SKYPE_VACANCY, false),
        ("htttp://hh.ru/dfffgfgf", false),
        ("http://hh.ru/dfffgfgf", true),
        ("something http://example.com/jobs", true),
        ("http://example.com/jobs dfdf f- dfd ", true),
        ("dsssdsdsd http://example.com  dfdf f- dfd ", true),
        ("https://localhost/path", false),
    ];

    for (input, expected) in cases {
        assert_eq!(
            rules.url_pattern.is_match(input),
            expected,
            "For string: {input}"
        );
    }
}

#[test]
fn test_contains_link_keyword() {
    let rules = RuleSet::default();
    let cases = [
        ("dfd/", false),
        ("htttp://hh.ru/dfffgfgf", true),
        ("http://example.com/jobs", true),
    ];

    for (input, expected) in cases {
        assert_eq!(
            contains_any(input, &rules.link_keywords),
            expected,
            "For string: {input}"
        );
    }
}

#[test]
fn test_is_job_posting() {
    let rules = RuleSet::default();
    let cases = [
        (SKYPE_VACANCY, false),
        ("http://hh.ru/something", true),
        ("something interesting http://example.com/jobs", true),
        ("something interesting http://example.com/jobs .slack.com", false),
        (
            "something interesting http://example.com/jobs www.linkedin.com/comm/profile/fvfvf",
            false,
        ),
        ("dsssdsdsd http://example.com  dfdf f- dfd ", false),
        ("", false),
    ];

    for (input, expected) in cases {
        assert_eq!(is_job_posting(input, &rules), expected, "For string: {input}");
    }
}

#[test]
fn test_text_keyword_with_link_is_posting() {
    let rules = RuleSet::default();
    assert!(is_job_posting(
        "Открыта вакансия тестировщика, подробности http://example.com/x",
        &rules
    ));
}

#[test]
fn test_keyword_matching_is_case_insensitive() {
    let rules = RuleSet::default();
    assert_eq!(
        is_job_posting("JOB opening http://x.com", &rules),
        is_job_posting("job opening http://x.com", &rules)
    );
    assert!(is_job_posting("JOB opening http://x.com", &rules));
    assert!(is_job_posting("Apply at HTTP://HH.RU/VACANCY/42", &rules));
}

#[test]
fn test_exclusion_vetoes_keywords_and_link() {
    let rules = RuleSet::default();
    assert!(!is_job_posting(
        "vacancy https://acme.slack.com/archives/C1/p2 career position",
        &rules
    ));
    assert!(!is_job_posting(
        "JOB http://example.com LinkedIn.com/comm/profile/abc",
        &rules
    ));
}

#[test]
fn test_no_url_never_matches() {
    let rules = RuleSet::default();
    for text in ["job vacancy career work", "hh.ru position", "ваканси работа"] {
        assert!(!is_job_posting(text, &rules), "For string: {text}");
    }
}

#[test]
fn test_non_ascii_host_is_not_a_link() {
    let rules = RuleSet::default();
    assert!(!is_job_posting("работа http://компания.рф/x", &rules));
    assert!(is_job_posting("работа http://company.ru/x", &rules));
}
