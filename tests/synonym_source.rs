use std::fs;
use std::sync::Arc;
use std::thread;

use ingredient_canon::{
    IngredientNormalizer, NormalizerConfig, NormalizerError, SynonymTable, raw_terms_from_json,
};
use serde_json::json;

#[test]
fn on_disk_definitions_feed_the_pipeline() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("synonyms.json");
    fs::write(
        &path,
        serde_json::to_vec_pretty(&json!({
            "scallion": "green onion",
            "garbanzo bean": "chickpea",
            "cilantro": "coriander"
        }))
        .unwrap(),
    )
    .unwrap();

    let normalizer = NormalizerConfig::default()
        .with_synonyms_path(&path)
        .build()
        .unwrap();
    assert_eq!(normalizer.synonyms().len(), 3);
    assert_eq!(
        normalizer.normalize(["Garbanzo Beans", "fresh Cilantro", "chickpea", "Scallions"]),
        vec!["chickpea", "coriander", "green onion"]
    );
}

#[test]
fn missing_definitions_source_is_not_an_error() {
    let temp = tempfile::tempdir().unwrap();
    let table = SynonymTable::load(temp.path().join("nope.json")).unwrap();
    assert!(table.is_empty());
    assert_eq!(IngredientNormalizer::new(table).normalize(["Kale"]), vec!["kale"]);
}

#[test]
fn malformed_definitions_source_fails_startup() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("synonyms.json");

    for body in ["", "{", "[]", r#"{"scallion": ["green onion"]}"#, "null"] {
        fs::write(&path, body).unwrap();
        let err = NormalizerConfig::default()
            .with_synonyms_path(&path)
            .build()
            .unwrap_err();
        assert!(
            matches!(err, NormalizerError::MalformedSynonyms { .. }),
            "body {body:?} produced {err}"
        );
        assert!(err.to_string().contains("malformed"));
    }
}

#[test]
fn shared_normalizer_serves_concurrent_callers() {
    let normalizer = Arc::new(IngredientNormalizer::new(SynonymTable::from_pairs([(
        "scallion",
        "green onion",
    )])));

    let results: Vec<Vec<String>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|idx| {
                let normalizer = Arc::clone(&normalizer);
                scope.spawn(move || {
                    let raw = if idx % 2 == 0 {
                        vec!["Scallions", "Eggs", "eggs"]
                    } else {
                        vec!["eggs", "Scallions", "Egg"]
                    };
                    normalizer.normalize(raw)
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    for (idx, list) in results.iter().enumerate() {
        if idx % 2 == 0 {
            assert_eq!(list, &vec!["green onion", "egg"]);
        } else {
            assert_eq!(list, &vec!["egg", "green onion"]);
        }
    }
}

#[test]
fn detector_response_flows_into_normalizer() {
    let body = json!({
        "ingredients_detected": ["Tomatoes", "tomato", "Large Eggs", null, "  "]
    })
    .to_string();
    let raw = raw_terms_from_json(&body).unwrap();
    let normalizer = IngredientNormalizer::default();
    let (list, report) = normalizer.normalize_with_report(&raw);

    assert_eq!(list, vec!["tomato", "egg"]);
    assert_eq!(report.inputs, 4);
    assert_eq!(report.blank, 1);
    assert_eq!(report.duplicates, 1);
}
