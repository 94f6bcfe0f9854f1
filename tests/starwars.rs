//! End-to-end coverage over the Star Wars fixture: plain fields, arguments,
//! interfaces, mutations, and the null-bubbling rules around resolve errors.

mod support;

use graphql_engine::ast::AstValue;
use graphql_engine::value::{Value, VariableMap};
use graphql_engine::GraphQLError;
use support::{aliased_field_sel, field_sel, get, mutation, query, build_schema, Database};

#[tokio::test]
async fn resolves_a_human_by_id() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel(
        "human",
        vec![("id", AstValue::String("1000".into()))],
        vec![field_sel("name", vec![], vec![]), field_sel("homePlanet", vec![], vec![])],
    )]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.errors.is_empty());
    let human = get(response.data.as_ref().unwrap(), "human");
    assert_eq!(get(human, "name"), &Value::string("Luke Skywalker"));
    assert_eq!(get(human, "homePlanet"), &Value::string("Tatooine"));
}

#[tokio::test]
async fn missing_human_resolves_to_null_without_an_error() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel(
        "human",
        vec![("id", AstValue::String("no-such-id".into()))],
        vec![field_sel("name", vec![], vec![])],
    )]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.errors.is_empty());
    assert_eq!(get(response.data.as_ref().unwrap(), "human"), &Value::Null);
}

#[tokio::test]
async fn variable_substitution_feeds_an_argument() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel(
        "droid",
        vec![("id", AstValue::Variable("droidId".into()))],
        vec![field_sel("primaryFunction", vec![], vec![])],
    )]);
    let mut variables = VariableMap::new();
    variables.insert("droidId".to_string(), Value::string("2001"));

    let response = graphql_engine::execute(&schema, &document, None, &variables, &database).await;

    assert!(response.errors.is_empty());
    let droid = get(response.data.as_ref().unwrap(), "droid");
    assert_eq!(get(droid, "primaryFunction"), &Value::string("Astromech"));
}

#[tokio::test]
async fn hero_resolves_through_the_character_interface_to_each_concrete_type() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![
        aliased_field_sel(
            "luke",
            "hero",
            vec![("episode", AstValue::Enum("EMPIRE".into()))],
            vec![field_sel("__typename", vec![], vec![]), field_sel("name", vec![], vec![])],
        ),
        aliased_field_sel(
            "artoo",
            "hero",
            vec![("episode", AstValue::Enum("NEW_HOPE".into()))],
            vec![field_sel("__typename", vec![], vec![]), field_sel("name", vec![], vec![])],
        ),
    ]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.errors.is_empty());
    let data = response.data.unwrap();
    let luke = get(&data, "luke");
    assert_eq!(get(luke, "__typename"), &Value::string("Human"));
    assert_eq!(get(luke, "name"), &Value::string("Luke Skywalker"));
    let artoo = get(&data, "artoo");
    assert_eq!(get(artoo, "__typename"), &Value::string("Droid"));
    assert_eq!(get(artoo, "name"), &Value::string("R2-D2"));
}

#[tokio::test]
async fn unknown_field_is_a_validation_error_that_aborts_the_operation() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel(
        "human",
        vec![("id", AstValue::String("1000".into()))],
        vec![field_sel("notAField", vec![], vec![])],
    )]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("notAField"));
}

#[tokio::test]
async fn required_argument_missing_is_an_argument_error() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel("human", vec![], vec![field_sel("name", vec![], vec![])])]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
}

#[tokio::test]
async fn resolve_error_on_a_non_null_field_nulls_the_whole_response_but_keeps_the_error() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel("boom", vec![], vec![])]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
    assert!(response.errors[0].message.contains("boom"));
}

#[tokio::test]
async fn mutation_fields_run_sequentially_and_return_the_created_review() {
    let schema = build_schema();
    let database = Database::new();
    let document = mutation(vec![field_sel(
        "createReview",
        vec![
            ("episode", AstValue::Enum("JEDI".into())),
            (
                "review",
                AstValue::Map(vec![
                    ("stars".to_string(), AstValue::Int(5)),
                    ("commentary".to_string(), AstValue::String("Great movie!".into())),
                ]),
            ),
        ],
        vec![field_sel("episode", vec![], vec![]), field_sel("stars", vec![], vec![]), field_sel("commentary", vec![], vec![])],
    )]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.errors.is_empty());
    let review = get(response.data.as_ref().unwrap(), "createReview");
    assert_eq!(get(review, "episode"), &Value::string("JEDI"));
    assert_eq!(get(review, "stars"), &Value::int(5));
    assert_eq!(get(review, "commentary"), &Value::string("Great movie!"));
}

#[tokio::test]
async fn mutations_are_rejected_when_the_schema_has_no_mutation_root() {
    let query_only = graphql_engine::schema::create(build_schema().query, None);
    let database = Database::new();
    let document = mutation(vec![field_sel("createReview", vec![], vec![])]);

    let response = graphql_engine::execute(&query_only, &document, None, &VariableMap::new(), &database).await;

    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, GraphQLError::MutationsNotConfigured.message());
}

#[tokio::test]
async fn missing_variable_is_reported_with_the_mandated_message() {
    let schema = build_schema();
    let database = Database::new();
    let document = query(vec![field_sel(
        "human",
        vec![("id", AstValue::Variable("id".into()))],
        vec![field_sel("name", vec![], vec![])],
    )]);

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.data.is_none());
    assert_eq!(response.errors.len(), 1);
    assert_eq!(response.errors[0].message, "Missing variable `id`");
    assert_eq!(response.errors[0].path, Vec::<String>::new());
}

#[tokio::test]
async fn empty_document_is_a_no_operation_found_error() {
    let schema = build_schema();
    let database = Database::new();
    let document = graphql_engine::ast::Document { definitions: vec![] };

    let response = graphql_engine::execute(&schema, &document, None, &VariableMap::new(), &database).await;

    assert!(response.data.is_none());
    assert_eq!(response.errors[0].message, GraphQLError::NoOperationFound.message());
}
