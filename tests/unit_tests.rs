// Unit tests for Unitinder Match

use unitinder_match::core::{
    aggregator::aggregate,
    dimensions::{total_weight, weight_for, Dimension, DIMENSION_COUNT},
    scoring::{compatibility_score, score_pair, BEST_COUNT, WORST_COUNT},
};
use unitinder_match::models::{Contribution, Persona};

/// Deterministic persona with a spread of values, shifted by `seed`
fn create_persona(seed: usize) -> Persona {
    Dimension::ALL
        .iter()
        .map(|d| {
            let step = (d.index() * 7 + seed * 3) % 21;
            (*d, step as f64 * 0.05)
        })
        .collect()
}

#[test]
fn test_weight_table_total() {
    assert_eq!(total_weight(), 4.0 * 3.0 + 6.0 * 2.0 + 14.0 * 1.0);
    assert_eq!(weight_for("verbal_density"), 3.0);
    assert_eq!(weight_for("real_world_need"), 2.0);
    assert_eq!(weight_for("note_taking_style"), 1.0);
    assert_eq!(weight_for("not_a_dimension"), 1.0);
}

#[test]
fn test_aggregate_empty_is_neutral() {
    let persona = aggregate(&[] as &[Contribution]);

    assert_eq!(persona.len(), DIMENSION_COUNT);
    for dim in Dimension::ALL {
        assert_eq!(persona.get(dim), Some(0.5), "{} should be neutral", dim);
    }
}

#[test]
fn test_aggregate_single_and_average() {
    let single = aggregate(&[Contribution::new("pace", 0.9)]);
    assert_eq!(single.get(Dimension::Pace), Some(0.9));
    assert_eq!(single.get(Dimension::Structure), Some(0.5));

    let averaged = aggregate(&[Contribution::new("pace", 0.2), Contribution::new("pace", 0.8)]);
    assert_eq!(averaged.get(Dimension::Pace), Some(0.5));
}

#[test]
fn test_score_is_deterministic() {
    let student = create_persona(1);
    let teacher = create_persona(4);

    let first = score_pair(&student, &teacher).unwrap();
    let second = score_pair(&student, &teacher).unwrap();

    assert_eq!(first.compatibility_score.to_bits(), second.compatibility_score.to_bits());
    assert_eq!(first.why, second.why);
}

#[test]
fn test_score_bounds_and_disjoint_explanation() {
    for a in 0..8 {
        for b in 0..8 {
            let result = score_pair(&create_persona(a), &create_persona(b)).unwrap();

            assert!(result.compatibility_score > 0.0);
            assert!(result.compatibility_score <= 100.0);
            assert_eq!(result.compatibility_score == 100.0, a % 7 == b % 7);

            assert_eq!(result.why.best.len(), BEST_COUNT);
            assert_eq!(result.why.worst.len(), WORST_COUNT);
            assert!(result.why.best.iter().all(|d| !result.why.worst.contains(d)));
        }
    }
}

#[test]
fn test_score_is_symmetric() {
    let a = create_persona(2);
    let b = create_persona(5);

    assert_eq!(
        score_pair(&a, &b).unwrap().compatibility_score,
        score_pair(&b, &a).unwrap().compatibility_score
    );
}

#[test]
fn test_all_neutral_scores_perfect() {
    let result = score_pair(&Persona::neutral(), &Persona::neutral()).unwrap();

    assert_eq!(result.compatibility_score, 100.0);
    assert_eq!(
        result.why.best,
        vec![Dimension::Pace, Dimension::Structure, Dimension::Abstraction]
    );
    assert_eq!(
        result.why.worst,
        vec![Dimension::RevisionStyle, Dimension::StorytellingAffinity]
    );
}

#[test]
fn test_all_opposite_scores_floor() {
    let result = score_pair(&Persona::uniform(0.0), &Persona::uniform(1.0)).unwrap();
    assert_eq!(result.compatibility_score, 2.56);
    assert_eq!(compatibility_score(38.0), 2.56);
}

#[test]
fn test_heavier_dimension_dominates_worst() {
    // Same raw gap, different weights
    let teacher = Persona::neutral()
        .with(Dimension::HumorReceptivity, 0.8)
        .with(Dimension::Autonomy, 0.8)
        .with(Dimension::VerbalDensity, 0.8);

    let result = score_pair(&Persona::neutral(), &teacher).unwrap();

    assert_eq!(result.why.worst, vec![Dimension::VerbalDensity, Dimension::Autonomy]);
}

#[test]
fn test_missing_student_dimension_errors() {
    let mut student = Persona::neutral();
    student.remove(Dimension::RevisionStyle);
    student.remove(Dimension::Pace);

    let err = score_pair(&student, &Persona::neutral()).unwrap_err();

    assert_eq!(err.owner(), "student");
    assert_eq!(err.dimensions(), vec!["pace", "revision_style"]);
}
