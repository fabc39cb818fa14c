//! End-to-end tests for the generation and improvement flows, driven by the
//! fake completion client so no network access is needed.

use souschef_core::{
    generate_recipe, improve_recipe, CannedReply, DirectionDraft, FakeClient, GenerateError,
    IngredientDraft, RecipeDraft,
};

const CHILI_ARGS: &str = r#"{
    "title": "Vegan Chili",
    "description": "A hearty chili built on beans and smoked paprika.",
    "preparation_time": 15,
    "cook_time": 40,
    "serves": 4,
    "ingredients": [
        {"index": 1, "content": "2 cans kidney beans"},
        {"index": 2, "content": "1 onion, diced"}
    ],
    "directions": [
        {"index": 1, "content": "Sweat the onion."},
        {"index": 2, "content": "Add the beans and simmer."}
    ]
}"#;

fn original_recipe() -> RecipeDraft {
    RecipeDraft {
        title: "Pancakes".to_string(),
        description: "Fluffy homemade pancakes".to_string(),
        preparation_time: 10,
        cook_time: Some(5),
        serves: 2,
        is_favorite: false,
        ingredients: vec![IngredientDraft {
            index: 1,
            content: Some("1 cup flour".to_string()),
        }],
        directions: vec![DirectionDraft {
            index: 1,
            content: Some("Mix ingredients".to_string()),
        }],
    }
}

#[tokio::test]
async fn generate_returns_validated_draft() {
    let client = FakeClient::with_arguments("vegan chili", CHILI_ARGS);

    let draft = generate_recipe(&client, "vegan chili", "fr").await.unwrap();

    assert_eq!(draft.title, "Vegan Chili");
    assert_eq!(draft.serves, 4);
    assert!(!draft.is_favorite);
    assert_eq!(draft.ingredients.len(), 2);
    assert_eq!(draft.ingredients[0].index, 1);
    assert_eq!(draft.directions.len(), 2);
}

#[tokio::test]
async fn generate_fails_when_no_function_call_returned() {
    // A model ignoring the schema and answering with prose must not produce
    // a recipe.
    let client = FakeClient::with_content("chili", "Sure! Here is a recipe: ...");

    let err = generate_recipe(&client, "vegan chili", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Extraction(_)));
}

#[tokio::test]
async fn generate_fails_on_malformed_arguments() {
    let client = FakeClient::with_arguments("chili", "{not valid json");

    let err = generate_recipe(&client, "vegan chili", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Extraction(_)));
}

#[tokio::test]
async fn generate_fails_on_wrong_shape() {
    // Well-formed JSON that does not match the creation schema is rejected,
    // not coerced.
    let client =
        FakeClient::with_arguments("chili", r#"{"title": "Chili", "serves": "many"}"#);

    let err = generate_recipe(&client, "vegan chili", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Extraction(_)));
}

#[tokio::test]
async fn generate_rejects_draft_violating_limits() {
    let args = format!(
        r#"{{
            "title": "{}",
            "description": "ok",
            "preparation_time": 5,
            "cook_time": 10,
            "serves": 2,
            "ingredients": [],
            "directions": []
        }}"#,
        "x".repeat(300)
    );
    let client = FakeClient::with_arguments("chili", &args);

    let err = generate_recipe(&client, "vegan chili", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::InvalidRecipe(_)));
}

#[tokio::test]
async fn generate_upstream_failure_propagates() {
    // No reply registered and no default: the client errors like a failed
    // upstream call.
    let client = FakeClient::new();

    let err = generate_recipe(&client, "vegan chili", "en")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Ai(_)));
}

#[tokio::test]
async fn improve_embeds_the_original_recipe_in_the_prompt() {
    // The reply is keyed on text that only appears in the serialized
    // original, proving the prompt embeds it.
    let client = FakeClient::with_arguments("fluffy homemade pancakes", CHILI_ARGS);

    let draft = improve_recipe(&client, &original_recipe(), "make it chili")
        .await
        .unwrap();

    assert_eq!(draft.title, "Vegan Chili");
}

#[tokio::test]
async fn improve_keeps_the_full_field_set() {
    let client = FakeClient::new().with_default_reply(CannedReply::FunctionArgs(
        CHILI_ARGS.to_string(),
    ));

    let draft = improve_recipe(&client, &original_recipe(), "more spice")
        .await
        .unwrap();

    assert_eq!(draft.preparation_time, 15);
    assert_eq!(draft.cook_time, Some(40));
    assert_eq!(draft.directions[1].index, 2);
}

#[tokio::test]
async fn improve_fails_on_malformed_reply_without_side_effects() {
    let client = FakeClient::with_content("pancakes", "```json\n{\"title\": \"x\"}\n```");

    let original = original_recipe();
    let err = improve_recipe(&client, &original, "more spice")
        .await
        .unwrap_err();

    assert!(matches!(err, GenerateError::Extraction(_)));
    // The caller-owned original is untouched.
    assert_eq!(original.title, "Pancakes");
}
