//! Domain-specific synonym expansion.
//!
//! Free-text input is matched against an ordered trigger table. The first
//! trigger whose terms appear in the input wins and replaces the input with a
//! fixed bilingual disjunction, so that e.g. "운임" also finds articles that
//! only say "freight". Unmatched multi-word input is quoted as an exact
//! phrase to keep the search engine from splitting it into independent terms.

/// One entry in the trigger table: any of `terms` appearing in the lowercased
/// input selects `expansion`.
struct Trigger {
    terms: &'static [&'static str],
    expansion: &'static str,
}

/// Trigger table, checked top-down. Order matters: "항만공사" must win over
/// the bare "항만" prefix, and "shipping" over "ship".
const TRIGGERS: &[Trigger] = &[
    Trigger {
        terms: &["항만공사"],
        expansion: "(항만공사 OR 부산항만공사 OR 인천항만공사 OR 여수광양항만공사 OR 울산항만공사 OR \"port authority\")",
    },
    Trigger {
        terms: &["항만"],
        expansion: "(항만 OR 항만청 OR 항만물류 OR 항만정책 OR \"seaport\" OR port)",
    },
    Trigger {
        terms: &["물류"],
        expansion: "(물류 OR 공급망 OR 물류센터 OR logistics OR \"supply chain\")",
    },
    Trigger {
        terms: &["해운", "shipping", "maritime"],
        expansion: "(해운 OR 해상운송 OR 해운업 OR shipping OR maritime)",
    },
    Trigger {
        terms: &["선박", "vessel", "ship"],
        expansion: "(선박 OR 선사 OR 선박운항 OR vessel OR ship)",
    },
    Trigger {
        terms: &["컨테이너", "container"],
        expansion: "(컨테이너 OR 컨테이너선 OR container OR TEU OR terminal)",
    },
    Trigger {
        terms: &["운임", "freight"],
        expansion: "(운임 OR 해상운임 OR 해운운임 OR freight OR spot rate)",
    },
    Trigger {
        terms: &["파업", "strike"],
        expansion: "(파업 OR 노사분규 OR strike OR industrial action)",
    },
    Trigger {
        terms: &["항로", "route"],
        expansion: "(항로 OR 항로변경 OR 항해경로 OR route)",
    },
    Trigger {
        terms: &["연료", "fuel", "벙커"],
        expansion: "(연료 OR 벙커링 OR bunker OR fuel OR LNG OR methanol OR ammonia)",
    },
    Trigger {
        terms: &["탄소", "co2", "emission"],
        expansion: "(탄소 OR 배출량 OR ETS OR emission OR decarbonization OR IMO)",
    },
];

/// Expand raw user input into a search clause fragment.
///
/// Returns `None` for empty/whitespace-only input (the caller falls back to a
/// domain-bundle-only search).
pub fn expand(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let lower = trimmed.to_lowercase();
    for trigger in TRIGGERS {
        if trigger.terms.iter().any(|term| lower.contains(term)) {
            return Some(trigger.expansion.to_string());
        }
    }

    if trimmed.contains(char::is_whitespace) {
        return Some(format!("\"{trimmed}\""));
    }
    Some(trimmed.to_string())
}
