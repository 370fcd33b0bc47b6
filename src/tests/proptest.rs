mod prop_tests {
    use crate::{RawTerm, aggregate_terms, normalize_arabic, normalize_english, normalize_french};
    use proptest::prelude::*;

    /// Arabic-heavy alphabet: articles, hamza alefs, tatweel, a vowel mark,
    /// parentheses and a stray Latin letter.
    const ARABIC_ALPHABET: &str = "[اأإآلكتبمـَ ()a\n]{0,40}";

    /// `normalize_arabic` is stable exactly when its output starts no word
    /// with the article: every other step leaves nothing behind to redo.
    fn leaves_article(normalized: &str) -> bool {
        normalized.split(' ').any(|w| w.starts_with("\u{0627}\u{0644}"))
    }

    fn term_strategy() -> impl Strategy<Value = RawTerm> {
        (
            0i64..1000,
            0i64..5,
            "(ال)?[كتبقلم]{1,3}",
            "[a-c ]{0,6}",
            proptest::option::of("[a-c]{0,3}( \\(m\\.\\))?"),
            0.0f64..100.0,
            any::<bool>(),
        )
            .prop_map(|(id, dict, arabic, english, french, relevance, linked)| {
                let mut term = RawTerm::new(id, dict, arabic, english, relevance);
                term.french = french;
                if linked {
                    term = term.with_wikidata_id("Q1");
                }
                term
            })
    }

    proptest! {
        #[test]
        fn arabic_idempotent(s in ".{0,200}") {
            let once = normalize_arabic(&s);
            if !leaves_article(&once) {
                prop_assert_eq!(normalize_arabic(&once), once);
            }
        }

        #[test]
        fn arabic_idempotent_dense(s in ARABIC_ALPHABET) {
            let once = normalize_arabic(&s);
            if !leaves_article(&once) {
                prop_assert_eq!(normalize_arabic(&once), once);
            }
        }

        #[test]
        fn arabic_idempotent_without_alef_lam(s in "[كتبمـَ ()a\n]{0,40}") {
            let once = normalize_arabic(&s);
            prop_assert_eq!(normalize_arabic(&once), once);
        }

        #[test]
        fn arabic_second_pass_only_strips_articles(s in ARABIC_ALPHABET) {
            let once = normalize_arabic(&s);
            let twice = normalize_arabic(&once);
            let expected: Vec<&str> = once
                .split(' ')
                .map(|w| w.strip_prefix("\u{0627}\u{0644}").unwrap_or(w))
                .filter(|w| !w.is_empty())
                .collect();
            prop_assert_eq!(twice, expected.join(" "));
        }

        #[test]
        fn arabic_output_is_clean(s in ARABIC_ALPHABET) {
            let out = normalize_arabic(&s);
            prop_assert!(!out.starts_with(' ') && !out.ends_with(' '));
            prop_assert!(!out.contains("  "));
            let forbidden = ['\u{0640}', '\u{064E}', '(', 'a', '\u{0623}'];
            prop_assert!(!out.contains(forbidden));
        }

        #[test]
        fn english_idempotent(s in ".{0,200}") {
            let once = normalize_english(&s);
            prop_assert_eq!(normalize_english(&once), once);
        }

        #[test]
        fn french_idempotent(s in ".{0,200}") {
            let once = normalize_french(&s);
            prop_assert_eq!(normalize_french(&once), once);
        }

        #[test]
        fn french_idempotent_dense(s in "[mf. ()\\[\\]]{0,40}") {
            let once = normalize_french(&s);
            prop_assert_eq!(normalize_french(&once), once);
        }

        #[test]
        fn partition_law(terms in proptest::collection::vec(term_strategy(), 0..30)) {
            let n = terms.len();
            let clusters = aggregate_terms(terms).unwrap();
            prop_assert_eq!(clusters.iter().map(|c| c.len()).sum::<usize>(), n);
            for c in &clusters {
                prop_assert!(!c.is_empty());
                prop_assert!(c.dictionary_count() <= c.len());
                prop_assert!(c.members.iter().all(|m| m.arabic_normalised == c.arabic_key));
                // linked members never follow unlinked ones
                let linked: Vec<bool> = c
                    .members
                    .iter()
                    .map(|m| m.term.dictionary_wikidata_id.is_some())
                    .collect();
                prop_assert!(linked.windows(2).all(|w| w[0] || !w[1]));
            }
            let mut keys: Vec<&str> = clusters.iter().map(|c| c.arabic_key.as_str()).collect();
            keys.sort_unstable();
            keys.dedup();
            prop_assert_eq!(keys.len(), clusters.len());
        }

        #[test]
        fn clusters_are_ranked(terms in proptest::collection::vec(term_strategy(), 0..30)) {
            let clusters = aggregate_terms(terms).unwrap();
            for w in clusters.windows(2) {
                prop_assert!(w[0].dictionary_count() >= w[1].dictionary_count());
                if w[0].dictionary_count() == w[1].dictionary_count() {
                    prop_assert!(w[0].total_relevance >= w[1].total_relevance);
                }
            }
        }

        #[test]
        fn aggregation_is_deterministic(terms in proptest::collection::vec(term_strategy(), 0..20)) {
            let a = aggregate_terms(terms.clone()).unwrap();
            let b = aggregate_terms(terms).unwrap();
            prop_assert_eq!(a, b);
        }
    }
}
