use std::sync::Arc;

use serde_json::json;

use super::common::*;
use crate::assessment::{
    CareerCatalog, Confidence, EngineConfig, ScoringEngine, Signal, SubjectScore,
};

#[test]
fn coding_averse_student_is_steered_to_medicine() {
    let outcome = engine().score(&input(coding_averse_submission()));

    let top = &outcome.careers[0];
    assert_eq!(top.career_name, "Doctor");
    assert_eq!(top.final_score, 100);
    assert_eq!(top.confidence, Confidence::High);
    assert!(top
        .adjustments
        .iter()
        .any(|adjustment| adjustment.signal == Signal::DreamCareer));

    let developer = find(&outcome.careers, "Software Developer");
    assert_eq!(developer.final_score, 34);
    assert_eq!(developer.confidence, Confidence::Low);
    assert_eq!(developer.practical_adjustment, -50);
    assert_eq!(developer.subject_score, SubjectScore::Scored(90.0));

    assert_eq!(outcome.buckets[0].bucket_name, "Healthcare");
    assert_eq!(outcome.buckets[0].bucket_score, 100);
    assert_eq!(outcome.buckets[0].careers[0].career_name, "Doctor");
}

#[test]
fn reporting_a_single_subject_filters_careers_without_it() {
    let outcome = engine().score(&input(biology_only_submission()));

    let developer = find(&outcome.careers, "Software Developer");
    assert_eq!(developer.subject_score, SubjectScore::Disqualified);
    assert_eq!(developer.final_score, 57);

    let doctor = find(&outcome.careers, "Doctor");
    assert_eq!(doctor.subject_score, SubjectScore::Scored(80.0));
    assert_eq!(doctor.final_score, 81);

    let chef = find(&outcome.careers, "Chef");
    assert_eq!(chef.subject_score, SubjectScore::Scored(50.0));
    assert_eq!(chef.final_score, 72);

    assert_eq!(outcome.careers.len(), 36);
}

#[test]
fn a_bucket_with_every_career_disqualified_is_not_reported() {
    let outcome = engine().score(&input(biology_only_submission()));

    let core_tech: Vec<_> = outcome
        .careers
        .iter()
        .filter(|score| score.bucket == "Core Tech")
        .collect();
    assert_eq!(core_tech.len(), 3);
    assert!(core_tech
        .iter()
        .all(|score| score.subject_score == SubjectScore::Disqualified));
    assert!(outcome
        .buckets
        .iter()
        .all(|bucket| bucket.bucket_name != "Core Tech"));
}

#[test]
fn disqualified_careers_keep_only_personality_baseline_and_adjustments() {
    let student = with_answer(biology_only_submission(), "e_12", json!("coding and machines"));
    let student = with_answer(student, "e_05", json!("Top 1%"));
    let outcome = engine().score(&input(student));

    let disqualified: Vec<_> = outcome
        .careers
        .iter()
        .filter(|score| score.subject_score.is_disqualified())
        .collect();
    assert!(!disqualified.is_empty());
    for score in disqualified {
        // 0.4 * riasec + 20 + 10 baseline + adjustments, nothing from subjects.
        let ceiling = (0.4 * score.riasec_score
            + 30.0
            + f64::from(score.practical_adjustment)
            + f64::from(score.context_adjustment))
        .clamp(0.0, 100.0);
        assert!(
            f64::from(score.final_score) <= ceiling + 0.5,
            "{} scored {} above {ceiling}",
            score.career_name,
            score.final_score
        );
    }
}

#[test]
fn rejecting_a_career_always_lowers_its_score() {
    let engine = engine();
    let keen = with_answer(submission(), "e_12", json!("coding"));

    let without = engine.score(&input(keen.clone()));
    let with = engine.score(&input(with_answer(keen, "e_13", json!("coding"))));

    let before = find(&without.careers, "Software Developer");
    let after = find(&with.careers, "Software Developer");
    assert!(after.practical_adjustment <= -40);
    assert!(after
        .adjustments
        .iter()
        .any(|adjustment| adjustment.delta <= -50));
    assert!(after.final_score < before.final_score);
}

#[test]
fn family_support_counts_when_the_career_is_named_before_a_comma() {
    let engine = engine();
    let baseline = engine.score(&input(submission()));
    let outcome = engine.score(&input(with_answer(
        submission(),
        "e_08",
        json!("Doctor, my parents fully support that"),
    )));

    let doctor = find(&outcome.careers, "Doctor");
    let signals: Vec<Signal> = doctor.adjustments.iter().map(|a| a.signal).collect();
    assert_eq!(signals, vec![Signal::FamilySupport]);
    assert_eq!(
        doctor.final_score,
        find(&baseline.careers, "Doctor").final_score + 15
    );
    assert_eq!(doctor.final_score, 87);
}

#[test]
fn scoring_is_deterministic() {
    let engine = engine();
    let first = engine.score(&input(coding_averse_submission()));
    let second = engine.score(&input(coding_averse_submission()));
    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serializes"),
        serde_json::to_string(&second).expect("serializes")
    );
}

#[test]
fn scores_stay_within_bounds_for_extreme_answers() {
    let mut generous = submission();
    for value in generous.answers.values_mut() {
        *value = json!(3);
    }
    for subject in ["Mathematics", "Physics", "Biology", "Chemistry", "English"] {
        generous.subject_scores.insert(subject.to_string(), 100.0);
    }
    let generous = with_answer(generous, "e_05", json!("Top 1%"));
    let generous = with_answer(generous, "e_09", json!("Yes, definitely"));
    let generous = with_answer(generous, "e_12", json!("medicine, coding, fitness and cooking"));
    let generous = with_answer(generous, "e_08", json!("My parents love medicine"));
    let generous = with_answer(generous, "e_15", json!("Doctor or Electrician"));

    let mut harsh = submission();
    for value in harsh.answers.values_mut() {
        *value = json!(0);
    }
    harsh.subject_scores.insert("Mathematics".to_string(), 0.0);
    let harsh = with_answer(harsh, "e_05", json!("Below average"));
    let harsh = with_answer(harsh, "e_09", json!("No"));
    let harsh = with_answer(harsh, "e_14", json!("No"));
    let harsh = with_answer(harsh, "e_13", json!("coding, medicine, law, machines, data"));
    let harsh = with_answer(harsh, "e_08", json!("They hate software and medicine"));

    let engine = engine();
    let high = engine.score(&input(generous));
    assert_eq!(find(&high.careers, "Doctor").final_score, 100);
    assert_eq!(high.careers[0].final_score, 100);

    let low = engine.score(&input(harsh));
    assert_eq!(find(&low.careers, "Software Developer").final_score, 0);
    assert_eq!(find(&low.careers, "Doctor").final_score, 0);
    assert!(low.careers.iter().all(|career| career.final_score <= 100));
}

#[test]
fn negative_family_terms_win_within_a_clause() {
    let engine = engine();

    let opposed = engine.score(&input(with_answer(
        submission(),
        "e_08",
        json!("My parents don't want me to be a lawyer."),
    )));
    let lawyer = find(&opposed.careers, "Lawyer");
    let signals: Vec<Signal> = lawyer.adjustments.iter().map(|a| a.signal).collect();
    assert_eq!(signals, vec![Signal::FamilyOpposition]);
    assert_eq!(lawyer.final_score, 52);

    let supportive = engine.score(&input(with_answer(
        submission(),
        "e_08",
        json!("My parents would love me to become a lawyer."),
    )));
    let lawyer = find(&supportive.careers, "Lawyer");
    let signals: Vec<Signal> = lawyer.adjustments.iter().map(|a| a.signal).collect();
    assert_eq!(signals, vec![Signal::FamilySupport]);
    assert_eq!(lawyer.final_score, 87);
}

#[test]
fn ranking_ignores_catalog_order() {
    let catalog = standard_catalog();
    let mut careers: Vec<_> = catalog.careers().map(|(_, career)| career.clone()).collect();
    careers.reverse();
    let reversed = Arc::new(CareerCatalog::from_careers(careers).expect("catalog rebuilds"));

    let forward = ScoringEngine::new(catalog, EngineConfig::standard()).expect("engine compiles");
    let backward =
        ScoringEngine::new(reversed, EngineConfig::standard()).expect("engine compiles");
    let student = input(coding_averse_submission());

    let ranked = |engine: &ScoringEngine| -> Vec<(String, u8)> {
        engine
            .score(&student)
            .careers
            .into_iter()
            .map(|score| (score.career_name, score.final_score))
            .collect()
    };
    assert_eq!(ranked(&forward), ranked(&backward));

    let buckets = |engine: &ScoringEngine| -> Vec<String> {
        engine
            .score(&student)
            .buckets
            .into_iter()
            .map(|bucket| bucket.bucket_name)
            .collect()
    };
    assert_eq!(buckets(&forward), buckets(&backward));
}

#[test]
fn class_rank_only_moves_competitive_buckets() {
    let engine = engine();

    let top = engine.score(&input(with_answer(submission(), "e_05", json!("Top 1%"))));
    assert_eq!(find(&top.careers, "Doctor").final_score, 77);
    assert_eq!(find(&top.careers, "Chef").final_score, 72);

    let low = engine.score(&input(with_answer(
        submission(),
        "e_05",
        json!("Below average"),
    )));
    assert_eq!(find(&low.careers, "Software Developer").final_score, 62);
    assert_eq!(find(&low.careers, "Chef").final_score, 72);
}

#[test]
fn vocational_preference_moves_vocational_careers() {
    let engine = engine();

    let keen = engine.score(&input(with_answer(
        submission(),
        "e_09",
        json!("Yes, definitely"),
    )));
    assert_eq!(find(&keen.careers, "Electrician").final_score, 97);
    assert_eq!(find(&keen.careers, "Doctor").final_score, 72);

    let reluctant = engine.score(&input(with_answer(submission(), "e_09", json!("No"))));
    assert_eq!(find(&reluctant.careers, "Electrician").final_score, 47);
}

#[test]
fn unwillingness_to_study_long_penalizes_long_degrees() {
    let outcome = engine().score(&input(with_answer(submission(), "e_14", json!("No"))));
    let doctor = find(&outcome.careers, "Doctor");
    assert_eq!(doctor.final_score, 42);
    assert_eq!(doctor.context_adjustment, -30);
    assert_eq!(find(&outcome.careers, "Nurse").final_score, 72);
}

#[test]
fn enjoyed_activities_add_a_practical_bonus() {
    let outcome = engine().score(&input(with_answer(
        submission(),
        "e_12",
        json!(["Baking", "cricket"]),
    )));
    assert_eq!(find(&outcome.careers, "Chef").practical_adjustment, 10);
    assert_eq!(find(&outcome.careers, "Sports Coach").final_score, 82);
}

#[test]
fn bucket_limits_follow_engine_config() {
    let config = EngineConfig {
        top_buckets: 2,
        careers_per_bucket: 1,
        ..EngineConfig::standard()
    };
    let engine = ScoringEngine::new(standard_catalog(), config).expect("engine compiles");
    let outcome = engine.score(&input(coding_averse_submission()));

    assert_eq!(outcome.buckets.len(), 2);
    assert!(outcome.buckets.iter().all(|bucket| bucket.careers.len() == 1));
    assert!(outcome.buckets[0].bucket_score >= outcome.buckets[1].bucket_score);
}
