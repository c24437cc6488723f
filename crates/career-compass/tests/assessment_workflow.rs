//! End-to-end scenarios through the public service facade and HTTP router, using both the
//! bundled catalog and a catalog loaded from CSV.

use std::sync::Arc;

use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use career_compass::assessment::{
    assessment_router, AssessmentService, AssessmentSubmission, CareerCatalog, CatalogError,
    Confidence, EngineConfig, ScoringEngine,
};

const GAMES_CATALOG: &str = "\
Career ID,Career Name,Bucket,RIASEC,Primary Subjects,Keywords,Long Duration,Vocational,Study Path
GM-01,Game Designer,Games,AIR,Computer Science;Fine Arts,games;gaming,,,B.Des Game Design;BCA Gaming
GM-02,Esports Player,Games,R:1;E:2,,esports;tournaments,no,yes,Bootcamp
";

fn service_for(catalog: CareerCatalog) -> AssessmentService {
    let engine = ScoringEngine::new(Arc::new(catalog), EngineConfig::standard())
        .expect("engine compiles");
    AssessmentService::new(Arc::new(engine))
}

fn games_submission() -> AssessmentSubmission {
    serde_json::from_value(json!({
        "userName": "Ravi",
        "grade": 12,
        "board": "State Board",
        "answers": {
            "v_05": 3,
            "v_10": "3",
            "v_99": 2,
            "e_09": "Yes, definitely",
            "e_12": "gaming and sketching"
        },
        "subjectScores": { "CS": 88 }
    }))
    .expect("submission deserializes")
}

#[test]
fn csv_catalog_drives_scoring_and_report() {
    let catalog = CareerCatalog::from_reader(GAMES_CATALOG.as_bytes()).expect("catalog parses");
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.bucket_count(), 1);

    let report = service_for(catalog)
        .assess(games_submission())
        .expect("submission is valid");

    assert_eq!(report.top5_buckets.len(), 1);
    let games = &report.top5_buckets[0];
    assert_eq!(games.bucket_name, "Games");
    assert_eq!(games.bucket_score, 89);

    let names: Vec<&str> = games
        .top_careers
        .iter()
        .map(|view| view.career_name.as_str())
        .collect();
    assert_eq!(names, vec!["Game Designer", "Esports Player"]);
    assert_eq!(games.top_careers[0].match_score, 89);
    assert_eq!(games.top_careers[1].match_score, 83);
    assert_eq!(games.top_careers[1].confidence, Confidence::High);
    assert_eq!(
        games.top_careers[0].study_path,
        vec!["B.Des Game Design", "BCA Gaming"]
    );
    assert_eq!(report.edu_stats.get("Computer Science"), Some(&88));
    assert_eq!(report.vibe_scores.get("A"), Some(&100));
}

#[test]
fn catalog_rejects_malformed_rows() {
    let header = "Career ID,Career Name,Bucket,RIASEC,Primary Subjects,Keywords,Long Duration,Vocational,Study Path\n";

    let empty = CareerCatalog::from_reader(header.as_bytes());
    assert!(matches!(empty, Err(CatalogError::Empty)));

    let missing_bucket = format!("{header}X-1,Game Designer,,AIR,,,,,\n");
    assert!(matches!(
        CareerCatalog::from_reader(missing_bucket.as_bytes()),
        Err(CatalogError::MissingField {
            line: 2,
            field: "Bucket"
        })
    ));

    let bad_profile = format!("{header}X-1,Game Designer,Games,XYZ,,,,,\n");
    assert!(matches!(
        CareerCatalog::from_reader(bad_profile.as_bytes()),
        Err(CatalogError::InvalidRiasec { .. })
    ));

    let bad_flag = format!("{header}X-1,Game Designer,Games,AIR,,,sometimes,,\n");
    assert!(matches!(
        CareerCatalog::from_reader(bad_flag.as_bytes()),
        Err(CatalogError::InvalidFlag { .. })
    ));

    let duplicate = format!("{header}X-1,Game Designer,Games,AIR,,,,,\nX-2,game designer,Games,A,,,,,\n");
    assert!(matches!(
        CareerCatalog::from_reader(duplicate.as_bytes()),
        Err(CatalogError::DuplicateCareer { .. })
    ));
}

#[tokio::test]
async fn router_scores_raw_json_payloads() {
    let catalog = CareerCatalog::standard().expect("bundled catalog loads");
    let router = assessment_router(Arc::new(service_for(catalog)));

    let body = json!({
        "grade": 10,
        "board": "CBSE",
        "answers": { "e_15": "I want to be a pilot", "e_13": "cooking" },
        "subjectsTaken": ["Maths", "Science"],
        "extracurriculars": ["Chess club"],
        "parentCareers": ["Teacher"]
    });

    let response = router
        .oneshot(
            Request::post("/api/v1/assessments/score")
                .header(header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    let payload: Value = serde_json::from_slice(&bytes).expect("json payload");

    assert!(payload.get("studentName").is_none());
    assert_eq!(payload["parents"], json!(["Teacher"]));
    let buckets = payload["top5Buckets"].as_array().expect("bucket list");
    assert_eq!(buckets.len(), 5);
    for bucket in buckets {
        let careers = bucket["topCareers"].as_array().expect("career list");
        assert!(!careers.is_empty() && careers.len() <= 3);
        for career in careers {
            let score = career["matchScore"].as_u64().expect("numeric score");
            assert!(score <= 100);
            assert!(career["topReasons"].as_array().expect("reasons").len() <= 3);
        }
    }
}
