// Integration tests for Career Match

use actix_web::{http::StatusCode, test as actix_test, web, App};
use career_match::catalog::Catalog;
use career_match::core::Matcher;
use career_match::models::{CareerDefinition, UserProfile};
use career_match::routes::{configure_routes, AppState};
use serde_json::{json, Value};

fn developer() -> CareerDefinition {
    CareerDefinition::new("software-developer", "Software Developer")
        .with_keywords(&["tech", "coding"])
        .with_skills(&["JavaScript", "React"])
}

fn create_test_catalog() -> Vec<CareerDefinition> {
    vec![
        CareerDefinition::new("nurse", "Registered Nurse")
            .with_keywords(&["health", "hospital"])
            .with_skills(&["Patient Care", "First Aid"]),
        developer(),
        CareerDefinition::new("chef", "Chef")
            .with_keywords(&["food", "cooking"])
            .with_skills(&["Knife Skills", "Menu Planning"]),
        CareerDefinition::new("pilot", "Airline Pilot")
            .with_keywords(&["aviation", "travel"])
            .with_skills(&["Navigation", "Radio Communication"]),
        CareerDefinition::new("farmer", "Farmer")
            .with_keywords(&["agriculture", "outdoors"])
            .with_skills(&["Irrigation", "Crop Rotation"]),
    ]
}

fn strings(values: &[&str]) -> Option<Vec<String>> {
    Some(values.iter().map(|s| s.to_string()).collect())
}

#[test]
fn test_goal_scenario_ranks_first() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_test_catalog();
    let profile = UserProfile {
        career_goal: Some("software developer".to_string()),
        hard_skills: Some(vec![]),
        interests: Some(vec![]),
        ..Default::default()
    };

    let result = matcher.find_matches(&profile, &catalog);

    assert_eq!(result[0].career.id, "software-developer");
    assert!(result[0].score >= 50);
}

#[test]
fn test_skill_scenario() {
    let matcher = Matcher::with_default_weights();
    let catalog = vec![developer()];
    let profile = UserProfile {
        hard_skills: strings(&["javascript", "react"]),
        career_goal: Some(String::new()),
        ..Default::default()
    };

    let result = matcher.find_matches(&profile, &catalog);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].score, 20);
    assert!(result[0]
        .reasons
        .contains(&"Matches skills: javascript, react".to_string()));
}

#[test]
fn test_empty_profile_scenario() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_test_catalog();

    let result = matcher.find_matches(&UserProfile::default(), &catalog);

    assert!(result.is_empty());
}

#[test]
fn test_interest_keyword_scenario() {
    let matcher = Matcher::with_default_weights();
    let catalog = create_test_catalog();
    let profile = UserProfile {
        interests: strings(&["coding"]),
        hard_skills: Some(vec![]),
        career_goal: Some(String::new()),
        ..Default::default()
    };

    let result = matcher.find_matches(&profile, &catalog);

    assert_eq!(result.len(), 1);
    assert_eq!(result[0].career.id, "software-developer");
    assert_eq!(result[0].score, 5);
    assert!(result[0].reasons.is_empty());
}

#[test]
fn test_top_three_truncation_scenario() {
    let matcher = Matcher::with_default_weights();
    // Scores 20, 30, 40, 50 in catalog order
    let catalog = vec![
        CareerDefinition::new("d", "Career D").with_skills(&["alpha", "bravo"]),
        CareerDefinition::new("c", "Career C").with_skills(&["alpha", "bravo", "charlie"]),
        CareerDefinition::new("b", "Career B").with_skills(&["alpha", "bravo", "charlie", "delta"]),
        CareerDefinition::new("a", "Career A")
            .with_skills(&["alpha", "bravo", "charlie", "delta", "echo"]),
    ];
    let profile = UserProfile {
        hard_skills: strings(&["alpha", "bravo", "charlie", "delta", "echo"]),
        ..Default::default()
    };

    let result = matcher.find_matches(&profile, &catalog);
    let ranked: Vec<(&str, u32)> = result
        .iter()
        .map(|m| (m.career.id.as_str(), m.score))
        .collect();

    assert_eq!(ranked, vec![("a", 50), ("b", 40), ("c", 30)]);
}

#[test]
fn test_unmatched_goal_only_profile() {
    let matcher = Matcher::with_default_weights();
    let profile = UserProfile {
        career_goal: Some("marine biologist".to_string()),
        ..Default::default()
    };

    assert!(matcher.find_matches(&profile, &create_test_catalog()).is_empty());
}

#[test]
fn test_results_are_deterministic_bounded_and_sorted() {
    let matcher = Matcher::with_default_weights();
    let catalog = Catalog::builtin();
    let profiles = vec![
        UserProfile {
            hard_skills: strings(&["Excel", "SQL", "Python", "Communication"]),
            interests: strings(&["numbers", "business", "health"]),
            career_goal: Some("Data Analyst".to_string()),
            bio: Some("I like building things and research".to_string()),
            education_level: Some("Bachelor's Degree".to_string()),
        },
        UserProfile {
            interests: strings(&["art", "social media", "cooking"]),
            ..Default::default()
        },
        UserProfile {
            hard_skills: strings(&["a", "e"]),
            ..Default::default()
        },
    ];

    for profile in &profiles {
        let first = matcher.find_matches(profile, catalog.careers());
        let second = matcher.find_matches(profile, catalog.careers());

        assert_eq!(first, second, "Matching should be deterministic");
        assert!(first.len() <= 3, "Should not exceed 3 results");
        for m in &first {
            assert!(m.score > 0, "Zero scores must be filtered");
        }
        for i in 1..first.len() {
            assert!(
                first[i - 1].score >= first[i].score,
                "Matches not sorted by score"
            );
        }
    }
}

#[test]
fn test_adding_matching_skill_never_lowers_score() {
    let matcher = Matcher::with_default_weights();
    let catalog = vec![developer()];
    let before = UserProfile {
        hard_skills: strings(&["javascript"]),
        ..Default::default()
    };
    let after = UserProfile {
        hard_skills: strings(&["javascript", "react"]),
        ..Default::default()
    };

    let before_score = matcher.find_matches(&before, &catalog)[0].score;
    let after_score = matcher.find_matches(&after, &catalog)[0].score;

    assert!(after_score >= before_score);
    assert_eq!(after_score, 20);
}

#[test]
fn test_catalog_file_round_trip_through_matcher() {
    let catalog = Catalog::from_toml_str(
        r#"
        [[careers]]
        id = "vet"
        title = "Veterinarian"
        keywords = ["animals"]
        requiredSkills = ["Animal Care"]
        requiredEducation = ["Degree in Veterinary Science"]
        "#,
    )
    .unwrap();
    let profile = UserProfile {
        interests: strings(&["Animals"]),
        hard_skills: strings(&["animal care"]),
        education_level: Some("PhD".to_string()),
        ..Default::default()
    };

    let result = Matcher::with_default_weights().find_matches(&profile, catalog.careers());

    // 10 skill + 5 keyword ("animals" in interests) + 5 education
    assert_eq!(result[0].score, 20);
    assert_eq!(result[0].reasons, vec!["Matches skills: animal care"]);
}

fn test_state() -> AppState {
    AppState::new(
        Catalog::new(create_test_catalog()).unwrap(),
        Matcher::with_default_weights(),
        10,
    )
}

#[actix_web::test]
async fn test_http_match_endpoint() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({
            "profile": {
                "careerGoal": "Software Developer",
                "hardSkills": ["React"]
            }
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["totalCareers"], 5);
    assert_eq!(body["matches"][0]["career"]["id"], "software-developer");
    assert_eq!(body["matches"][0]["score"], 60);
    assert_eq!(
        body["matches"][0]["reasons"],
        json!(["Matches your primary career goal.", "Matches skills: React"])
    );
}

#[actix_web::test]
async fn test_http_empty_match_is_success() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches")
        .set_json(json!({ "profile": {} }))
        .to_request();
    let resp = actix_test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(resp).await;
    assert_eq!(body["matches"], json!([]));
}

#[actix_web::test]
async fn test_http_batch_and_catalog() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/matches/batch")
        .set_json(json!({
            "profiles": [
                { "careerGoal": "chef" },
                { "interests": ["aviation"] }
            ]
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["results"][0][0]["career"]["id"], "chef");
    assert_eq!(body["results"][1][0]["career"]["id"], "pilot");

    let req = actix_test::TestRequest::get().uri("/api/v1/careers").to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["total"], 5);
    assert_eq!(body["careers"][1]["requiredSkills"], json!(["JavaScript", "React"]));
}

#[actix_web::test]
async fn test_http_profile_progress() {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(test_state()))
            .configure(configure_routes),
    )
    .await;

    let req = actix_test::TestRequest::post()
        .uri("/api/v1/profiles/progress")
        .set_json(json!({
            "profile": { "careerGoal": "Chef", "bio": "Home cook" }
        }))
        .to_request();
    let body: Value = actix_test::call_and_read_body_json(&app, req).await;

    assert_eq!(body["percent"], 40);
    assert_eq!(body["filled"], json!(["careerGoal", "bio"]));
    assert_eq!(body["missing"], json!(["hardSkills", "interests", "educationLevel"]));
}
