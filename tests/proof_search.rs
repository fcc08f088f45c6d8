//! Property tests for proof search through the public API.

use logic_theorist::expr::Expression;
use logic_theorist::prover::{
    self, KnowledgeBase, Premise, ProverConfig, SharedKnowledgeBase, match_pattern, prove, similar,
};
use proptest::prelude::*;
use rstest::rstest;

fn var(name: &str) -> Expression {
    Expression::var(name).unwrap_or_else(|e| panic!("invalid variable {name}: {e}"))
}

fn expression_over(names: Vec<&'static str>) -> impl Strategy<Value = Expression> {
    let leaf = prop::sample::select(names).prop_map(var);
    leaf.prop_recursive(3, 16, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(Expression::negation),
            (inner.clone(), inner.clone()).prop_map(|(l, r)| Expression::or(l, r)),
            (inner.clone(), inner).prop_map(|(l, r)| Expression::implies(l, r)),
        ]
    })
}

/// Replaces `p`, `q` and `r` with `a`, `b` and `c`.
fn rename(expr: &Expression) -> Expression {
    match expr {
        Expression::Variable(name) => {
            let renamed = match name.as_str() {
                "p" => "a",
                "q" => "b",
                "r" => "c",
                other => other,
            };
            var(renamed)
        }
        Expression::Negation(operand) => Expression::negation(rename(operand)),
        Expression::Binary {
            connective,
            left,
            right,
        } => Expression::binary(*connective, rename(left), rename(right)),
    }
}

proptest! {
    #[test]
    fn every_axiom_proves_itself(axiom in expression_over(vec!["p", "q", "r"])) {
        let mut kb = KnowledgeBase::new([axiom.clone()]);
        let outcome = prove(&mut kb, &axiom);
        prop_assert_eq!(outcome.strategy(), Some(prover::Strategy::Substitution));
        prop_assert_eq!(outcome.proof().map(|p| p.premise), Some(Premise::Axiom(0)));
        prop_assert_eq!(kb.theorems(), std::slice::from_ref(&axiom));

        prop_assert!(prove(&mut kb, &axiom).is_proved());
        prop_assert_eq!(kb.theorems(), std::slice::from_ref(&axiom));
    }

    #[test]
    fn renamed_axioms_are_proved(axiom in expression_over(vec!["p", "q", "r"])) {
        let target = rename(&axiom);
        prop_assert!(similar(&axiom, &target));
        let mut kb = KnowledgeBase::new([axiom]);
        prop_assert!(prove(&mut kb, &target).is_proved());
        prop_assert!(kb.contains(&target));
    }

    #[test]
    fn proved_targets_are_known_and_failures_change_nothing(
        axioms in prop::collection::vec(expression_over(vec!["p", "q"]), 1..4),
        target in expression_over(vec!["p", "q", "r"]),
    ) {
        let mut kb = KnowledgeBase::new(axioms);
        let before = kb.clone();
        if prove(&mut kb, &target).is_proved() {
            prop_assert!(kb.contains(&target));
        } else {
            prop_assert_eq!(kb, before);
        }
    }

    #[test]
    fn successful_matches_rebuild_the_target(
        pattern in expression_over(vec!["p", "q"]),
        concrete in expression_over(vec!["p", "q", "r"]),
    ) {
        if let Some(bindings) = match_pattern(&pattern, &concrete) {
            prop_assert_eq!(bindings.apply(&pattern), concrete);
        }
    }
}

#[rstest]
#[case::deduplicating(true, 1)]
#[case::appending(false, 2)]
fn reproving_respects_the_deduplication_policy(#[case] deduplicate: bool, #[case] expected: usize) {
    let config = ProverConfig {
        deduplicate,
        ..ProverConfig::default()
    };
    let tautology = Expression::implies(Expression::or(var("p"), var("p")), var("p"));
    let target = Expression::implies(Expression::or(var("q"), var("q")), var("q"));
    let mut kb = KnowledgeBase::with_config([tautology], config);
    assert!(prove(&mut kb, &target).is_proved());
    assert!(prove(&mut kb, &target).is_proved());
    assert_eq!(kb.theorems().len(), expected);
}

#[test]
fn disjunction_of_a_repeated_variable_does_not_match_distinct_operands() {
    let pattern = Expression::or(var("p"), var("p"));
    let concrete = Expression::or(var("a"), var("b"));
    assert!(match_pattern(&pattern, &concrete).is_none());
}

#[test]
fn shared_knowledge_base_proves_like_an_owned_one() {
    let tautology = Expression::implies(Expression::or(var("p"), var("p")), var("p"));
    let shared = SharedKnowledgeBase::new(KnowledgeBase::new([tautology]));
    let target = Expression::implies(Expression::or(var("q"), var("q")), var("q"));
    assert!(shared.prove(&target).is_proved());
    assert!(!shared.prove(&var("z")).is_proved());
    assert_eq!(shared.theorem_count(), 1);
}
