use crate::company::CompanyRecord;
use std::collections::HashSet;

/// Concatenates `lists` in priority order, keeping only the first record for
/// each case-insensitive company name.
pub fn merge_unique<I>(lists: I) -> Vec<CompanyRecord>
where
    I: IntoIterator<Item = Vec<CompanyRecord>>,
{
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    for record in lists.into_iter().flatten() {
        if seen.insert(record.name_key()) {
            merged.push(record);
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BusinessRole, DataType, HsCode, Source};

    fn record(name: &str, source: Source) -> CompanyRecord {
        CompanyRecord::new(
            name,
            source,
            DataType::Scraped,
            HsCode::new("0904").unwrap(),
            BusinessRole::Exporter,
        )
        .unwrap()
    }

    fn names(records: &[CompanyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.company_name()).collect()
    }

    #[test]
    fn test_case_insensitive_first_wins() {
        let merged = merge_unique(vec![
            vec![record("Acme", Source::Dgft), record("Beta", Source::Dgft)],
            vec![
                record("ACME", Source::TradePortal),
                record("Gamma", Source::TradePortal),
            ],
        ]);

        assert_eq!(names(&merged), vec!["Acme", "Beta", "Gamma"]);
        assert_eq!(merged[0].source(), Source::Dgft);
    }

    #[test]
    fn test_duplicates_within_one_list_are_dropped() {
        let merged = merge_unique(vec![vec![
            record("Acme", Source::Dgft),
            record("acme", Source::Dgft),
            record("Beta", Source::Dgft),
        ]]);

        assert_eq!(names(&merged), vec!["Acme", "Beta"]);
    }

    #[test]
    fn test_idempotent_on_self_append() {
        let original = vec![
            record("Acme", Source::Dgft),
            record("Beta", Source::Dgft),
            record("Gamma", Source::Dgft),
        ];

        let merged = merge_unique(vec![original.clone(), original.clone()]);

        assert_eq!(merged, original);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge_unique(Vec::<Vec<CompanyRecord>>::new()).is_empty());
        assert!(merge_unique(vec![Vec::new(), Vec::new()]).is_empty());
    }
}
