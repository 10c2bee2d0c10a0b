//! Property-based checks over the answer and scoring domain.

use proptest::prelude::*;

use startup_compass::domain::answer::{canonically_equal, AnswerValue};
use startup_compass::domain::foundation::{Category, Percentage};
use startup_compass::domain::question::{Question, QuestionOption, QuestionType};
use startup_compass::domain::scoring::{
    compute_scores, AppliedPattern, PatternCatalogEntry, RoundingPolicy,
};
use startup_compass::domain::validation::build_validation_schema;

fn option_value() -> impl Strategy<Value = String> {
    "[a-z]{1,8}"
}

fn value_list() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(option_value(), 0..6)
}

fn category() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::Entrepreneur),
        Just(Category::Team),
        Just(Category::Stakeholders),
        Just(Category::Product),
        Just(Category::Sustainability),
        Just(Category::TimeSpace),
    ]
}

proptest! {
    #[test]
    fn multi_select_equality_ignores_order(items in value_list(), seed in any::<u64>()) {
        let mut shuffled = items.clone();
        // Cheap deterministic shuffle driven by the seed.
        if shuffled.len() > 1 {
            let i = (seed as usize) % shuffled.len();
            shuffled.rotate_left(i);
        }
        let a = AnswerValue::List(items);
        let b = AnswerValue::List(shuffled);
        prop_assert!(canonically_equal(&a, &b, QuestionType::SelectMultiple));
        prop_assert!(canonically_equal(&b, &a, QuestionType::SelectMultiple));
    }

    #[test]
    fn rank_equality_is_order_sensitive(items in proptest::collection::hash_set(option_value(), 2..6)) {
        let ordered: Vec<String> = items.into_iter().collect();
        let mut rotated = ordered.clone();
        rotated.rotate_left(1);
        let a = AnswerValue::List(ordered);
        let b = AnswerValue::List(rotated);
        prop_assert!(canonically_equal(&a, &a.clone(), QuestionType::Rank));
        prop_assert!(!canonically_equal(&a, &b, QuestionType::Rank));
    }

    #[test]
    fn canonical_equality_is_symmetric(
        a in value_list(),
        b in value_list(),
        kind in prop_oneof![
            Just(QuestionType::SelectMultiple),
            Just(QuestionType::CheckboxMultiple),
            Just(QuestionType::Rank),
        ]
    ) {
        let left = AnswerValue::List(a);
        let right = AnswerValue::List(b);
        prop_assert_eq!(
            canonically_equal(&left, &right, kind),
            canonically_equal(&right, &left, kind)
        );
    }

    #[test]
    fn percentage_ratio_is_always_in_bounds(achieved in 0.0f64..1000.0, total in 0.0f64..1000.0) {
        let p = Percentage::from_ratio(achieved, total);
        prop_assert!(p.value() <= 100);
    }

    #[test]
    fn scores_stay_within_bounds_under_both_policies(
        entries in proptest::collection::vec((category(), 0.0f64..5.0), 1..12),
        policy in prop_oneof![Just(RoundingPolicy::RoundThenAverage), Just(RoundingPolicy::AverageThenRound)],
    ) {
        let catalog: Vec<PatternCatalogEntry> = entries
            .iter()
            .map(|(cat, _)| PatternCatalogEntry::new("p", *cat))
            .collect();
        let applied: Vec<AppliedPattern> = catalog
            .iter()
            .zip(entries.iter())
            .map(|(entry, (_, points))| AppliedPattern::new(entry, *points))
            .collect();

        let record = compute_scores(&catalog, &applied, None, policy);

        prop_assert!(record.overall.value() <= 100);
        for percentage in record.per_category.values() {
            prop_assert!(percentage.value() <= 100);
        }
    }

    #[test]
    fn any_permutation_of_rank_options_validates(rotation in 0usize..5) {
        let question = Question::new("rank it", QuestionType::Rank).with_options(vec![
            QuestionOption::new("a", "A"),
            QuestionOption::new("b", "B"),
            QuestionOption::new("c", "C"),
            QuestionOption::new("d", "D"),
            QuestionOption::new("e", "E"),
        ]);
        let mut order = question.option_values();
        let len = order.len();
        order.rotate_left(rotation % len);

        let schema = build_validation_schema(std::slice::from_ref(&question));
        let mut values = std::collections::BTreeMap::new();
        values.insert(question.id, AnswerValue::List(order));

        prop_assert!(schema.validate(&values).is_ok());
    }
}
