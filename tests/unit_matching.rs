// Unit tests for title normalization, similarity, and matching.
//
// Covers the normalizer's rewrite rules, the three-rule similarity score,
// and the matcher's dedup and accounting guarantees. All fixtures are
// deterministic in-memory records; nothing touches the network or the
// filesystem.

use std::collections::{BTreeSet, HashSet};

use gazette::matching::matcher::{match_baselines, MatchMode, DEFAULT_FUZZY_THRESHOLD};
use gazette::matching::normalize::normalize_title;
use gazette::matching::similarity::similarity;
use gazette::models::{BaselineEntry, MatchType, StatuteRecord, StatuteStatus};

fn baseline(id: &str, title: &str) -> BaselineEntry {
    BaselineEntry {
        id: id.to_string(),
        title: title.to_string(),
        categories: BTreeSet::new(),
    }
}

fn record(id: &str, title: &str, effective: &str) -> StatuteRecord {
    StatuteRecord {
        id: id.to_string(),
        title: title.to_string(),
        effective_date: effective.to_string(),
        promulgation_date: String::new(),
        amendment_type: "일부개정".to_string(),
        law_type: "법률".to_string(),
        ministry: "고용노동부".to_string(),
        status: StatuteStatus::Current,
        categories: BTreeSet::new(),
    }
}

// ============================================================
// normalize_title — rewrite rules
// ============================================================

#[test]
fn normalize_strips_all_whitespace() {
    assert_eq!(normalize_title("개인정보 보호법"), "개인정보보호법");
    // Tabs and ideographic space (U+3000) count as whitespace too
    assert_eq!(normalize_title("산업\t안전\u{3000}보건법"), "산업안전보건법");
}

#[test]
fn normalize_drops_brackets_and_separators() {
    assert_eq!(
        normalize_title("화학물질관리법(화관법)"),
        "화학물질관리법화관법"
    );
    assert_eq!(
        normalize_title("위험물 안전관리법·시행규칙"),
        "위험물안전관리법시행규칙"
    );
    assert_eq!(normalize_title("【별표】 기준"), "별표기준");
}

#[test]
fn normalize_removes_connective_characters() {
    assert_eq!(
        normalize_title("화재예방 및 안전관리에 관한 법률"),
        "화재예방안전관리관한법률"
    );
    assert_eq!(
        normalize_title("중대재해 처벌 등에 관한 법률"),
        "중대재해처벌관한법률"
    );
}

#[test]
fn normalize_rewrites_attached_particles() {
    assert_eq!(normalize_title("근로자 참여 에 관한 법률"), "근로자참여관한법률");
    assert_eq!(normalize_title("국가배상 에 대한 특례"), "국가배상대한특례");
    // Stacked particles collapse in a single call
    assert_eq!(normalize_title("에에관한법"), "관한법");
}

#[test]
fn normalize_lowercases_latin() {
    assert_eq!(normalize_title("IT 산업 진흥법"), "it산업진흥법");
}

#[test]
fn normalize_is_idempotent() {
    let titles = [
        "개인정보 보호법",
        "중대재해 처벌 등에 관한 법률",
        "화학물질의 등록 및 평가 등에 관한 법률",
        "에에관한법",
        "IT 산업(진흥)·규제법",
        "",
    ];
    for title in titles {
        let once = normalize_title(title);
        assert_eq!(
            normalize_title(&once),
            once,
            "normalization of {title:?} must be stable"
        );
    }
}

#[test]
fn normalize_spacing_variants_converge() {
    let variants = ["개인정보 보호법", "개인정보보호법", "개 인 정 보 보 호 법"];
    let normalized: Vec<String> = variants.iter().map(|t| normalize_title(t)).collect();
    assert_eq!(normalized[0], normalized[1]);
    assert_eq!(normalized[1], normalized[2]);
}

// ============================================================
// similarity — score properties
// ============================================================

#[test]
fn identical_titles_score_one() {
    for title in ["산업안전보건법", "근로기준법", ""] {
        assert_eq!(similarity(title, title), 1.0);
    }
}

#[test]
fn similarity_is_symmetric() {
    let pairs = [
        ("산업안전보건법", "산업안전보건법시행령"),
        ("근로기준법", "최저임금법"),
        ("개인정보보호법", "정보통신망법"),
        ("가나다", "라마바"),
    ];
    for (a, b) in pairs {
        assert_eq!(
            similarity(a, b),
            similarity(b, a),
            "similarity({a}, {b}) must be symmetric"
        );
    }
}

#[test]
fn similarity_stays_within_bounds() {
    let titles = ["산업안전보건법", "산업안전보건법시행령", "근로기준법", "가나다", ""];
    for a in titles {
        for b in titles {
            let score = similarity(a, b);
            assert!(
                (0.0..=1.0).contains(&score),
                "similarity({a:?}, {b:?}) out of bounds: {score}"
            );
        }
    }
}

#[test]
fn containment_scales_with_length_ratio() {
    // 7 shared chars of 10: 7/10 * 0.9 = 0.63
    let score = similarity("개인정보보호법", "개인정보보호법시행령");
    assert!((score - 0.63).abs() < 1e-9, "got {score}");
}

#[test]
fn disjoint_character_sets_score_zero() {
    assert_eq!(similarity("가나다", "라마바"), 0.0);
}

#[test]
fn distinct_laws_stay_below_the_default_threshold() {
    // Different laws sharing only generic characters must not fuzzy-match
    for (a, b) in [
        ("근로기준법", "최저임금법"),
        ("산업안전보건법", "건설안전기본법"),
    ] {
        let score = similarity(a, b);
        assert!(
            score < DEFAULT_FUZZY_THRESHOLD,
            "{a} vs {b} scored {score}, above the retention threshold"
        );
    }
}

// ============================================================
// MatchType — tier edges the score can actually produce
// ============================================================

#[test]
fn tier_nan_falls_to_low() {
    // NaN fails all >= comparisons, so it falls through to the wildcard arm
    assert_eq!(MatchType::from_score(f64::NAN), MatchType::Low);
}

#[test]
fn tier_display_matches_as_str() {
    for tier in [
        MatchType::Exact,
        MatchType::High,
        MatchType::Partial,
        MatchType::Low,
    ] {
        assert_eq!(tier.to_string(), tier.as_str());
    }
}

// ============================================================
// match_baselines — modes, dedup, accounting
// ============================================================

#[test]
fn exact_mode_requires_normalized_equality() {
    let baselines = vec![
        baseline("L1", "개인정보 보호법"),
        baseline("L2", "근로기준법"),
    ];
    let candidates = vec![
        record("C1", "개인정보보호법", "2025-03-13"),
        record("C2", "근로 기준법 시행령", "2025-01-01"),
    ];

    let report = match_baselines(&baselines, &candidates, MatchMode::Exact);

    assert_eq!(report.matches.len(), 1);
    assert_eq!(report.matches[0].baseline.id, "L1");
    assert_eq!(report.matches[0].results[0].score, 1.0);
    assert_eq!(report.matches[0].results[0].match_type, MatchType::Exact);
    assert_eq!(report.unmatched.len(), 1);
    assert_eq!(report.unmatched[0].id, "L2");
}

#[test]
fn fuzzy_mode_catches_decree_variants() {
    let baselines = vec![baseline("L1", "개인정보 보호법")];
    let candidates = vec![record("C1", "개인정보 보호법 시행령", "2025-01-01")];

    let report = match_baselines(&baselines, &candidates, MatchMode::fuzzy());

    assert_eq!(report.matches.len(), 1);
    let result = &report.matches[0].results[0];
    assert!((result.score - 0.63).abs() < 1e-9, "got {}", result.score);
    assert_eq!(result.match_type, MatchType::Low);
    assert!(report.unmatched.is_empty());
}

#[test]
fn fuzzy_threshold_is_honored() {
    let baselines = vec![baseline("L1", "개인정보 보호법")];
    let candidates = vec![record("C1", "개인정보 보호법 시행령", "2025-01-01")];

    // The decree variant scores 0.63; a 0.7 threshold drops it
    let strict = match_baselines(&baselines, &candidates, MatchMode::Fuzzy { threshold: 0.7 });
    assert!(strict.matches.is_empty());
    assert_eq!(strict.unmatched.len(), 1);

    assert_eq!(MatchMode::fuzzy().threshold(), Some(DEFAULT_FUZZY_THRESHOLD));
}

#[test]
fn candidate_goes_to_best_scoring_baseline() {
    // C1 scores 1.0 against L1 and 0.63 against L2 — only L1 keeps it,
    // regardless of the order the baseline entries arrive in.
    let candidates = vec![record("C1", "개인정보보호법", "2025-03-13")];
    for baselines in [
        vec![
            baseline("L1", "개인정보 보호법"),
            baseline("L2", "개인정보 보호법 시행령"),
        ],
        vec![
            baseline("L2", "개인정보 보호법 시행령"),
            baseline("L1", "개인정보 보호법"),
        ],
    ] {
        let report = match_baselines(&baselines, &candidates, MatchMode::fuzzy());
        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].baseline.id, "L1");
        assert_eq!(report.unmatched.len(), 1);
        assert_eq!(report.unmatched[0].id, "L2");
    }
}

#[test]
fn tied_scores_stay_with_earlier_baseline() {
    let baselines = vec![
        baseline("L1", "개인정보 보호법"),
        baseline("L2", "개인정보보호법"),
    ];
    let candidates = vec![record("C1", "개 인정보보호법", "2025-03-13")];

    let report = match_baselines(&baselines, &candidates, MatchMode::fuzzy());

    assert_eq!(report.matches[0].baseline.id, "L1");
    assert_eq!(report.unmatched[0].id, "L2");
}

#[test]
fn results_sorted_best_first_then_by_date() {
    let baselines = vec![baseline("L1", "산업안전보건법")];
    let candidates = vec![
        record("C-JUN", "산업안전보건법", "2025-06-01"),
        record("C-DEC", "산업안전보건법 시행령", "2025-12-01"),
        record("C-JAN", "산업안전보건법", "2025-01-01"),
    ];

    let report = match_baselines(&baselines, &candidates, MatchMode::fuzzy());

    let ids: Vec<&str> = report.matches[0]
        .results
        .iter()
        .map(|r| r.candidate.id.as_str())
        .collect();
    assert_eq!(ids, vec!["C-JAN", "C-JUN", "C-DEC"]);
}

#[test]
fn every_baseline_is_matched_or_unmatched() {
    let baselines = vec![
        baseline("L1", "산업안전보건법"),
        baseline("L2", "근로기준법"),
        baseline("L3", "화학물질관리법"),
        baseline("L4", "폐지된 옛 특별조치법"),
    ];
    let candidates = vec![
        record("C1", "산업안전보건법", "2025-01-01"),
        record("C2", "산업안전보건법 시행령", "2025-02-01"),
        record("C3", "근로기준법", "2025-03-01"),
        record("C4", "선박안전법", "2025-04-01"),
    ];

    let report = match_baselines(&baselines, &candidates, MatchMode::fuzzy());

    assert_eq!(report.matches.len() + report.unmatched.len(), baselines.len());
    assert_eq!(report.baseline_total(), baselines.len());

    let matched_ids: HashSet<&str> = report.matches.iter().map(|g| g.baseline.id.as_str()).collect();
    let unmatched_ids: HashSet<&str> = report.unmatched.iter().map(|e| e.id.as_str()).collect();
    assert!(matched_ids.is_disjoint(&unmatched_ids));
    assert_eq!(matched_ids.len() + unmatched_ids.len(), baselines.len());

    // No candidate may be claimed by two baseline entries
    let mut seen = HashSet::new();
    for result in report.iter_results() {
        assert!(
            seen.insert(result.candidate.id.clone()),
            "candidate {} claimed twice",
            result.candidate.id
        );
    }
}

#[test]
fn blank_titles_never_match() {
    let baselines = vec![baseline("L1", "   ")];
    let candidates = vec![record("C1", "", "2025-01-01")];

    for mode in [MatchMode::Exact, MatchMode::fuzzy()] {
        let report = match_baselines(&baselines, &candidates, mode);
        assert!(report.matches.is_empty(), "{mode:?} matched a blank title");
        assert_eq!(report.unmatched.len(), 1);
    }
}

#[test]
fn empty_inputs_produce_empty_report() {
    let report = match_baselines(&[], &[], MatchMode::fuzzy());
    assert!(report.matches.is_empty());
    assert!(report.unmatched.is_empty());

    let report = match_baselines(&[baseline("L1", "근로기준법")], &[], MatchMode::fuzzy());
    assert!(report.matches.is_empty());
    assert_eq!(report.unmatched.len(), 1);
}
