use crate::ast;
use crate::types::GraphQLType;
use crate::types::ScalarType;
use crate::types::TypeRegistry;
use crate::types::TypesMap;
use crate::types::TypesMapError;

#[test]
fn new_types_map_contains_only_builtin_scalars() {
    let types_map = TypesMap::new();

    assert_eq!(types_map.len(), 5);
    assert_eq!(types_map.get("Boolean"), Some(&GraphQLType::Bool));
    assert_eq!(types_map.get("Float"), Some(&GraphQLType::Float));
    assert_eq!(types_map.get("ID"), Some(&GraphQLType::ID));
    assert_eq!(types_map.get("Int"), Some(&GraphQLType::Int));
    assert_eq!(types_map.get("String"), Some(&GraphQLType::String));
    assert!(types_map.lookup("Query").is_none());
}

#[test]
fn from_sdl_loads_every_named_type_kind() {
    let types_map = TypesMap::from_sdl(concat!(
        "scalar DateTime\n",
        "enum Sort { ASC DESC }\n",
        "input Filter { name: String, limit: Int = 10 }\n",
        "interface Node { id: ID! }\n",
        "type User implements Node { id: ID! }\n",
        "union SearchResult = User\n",
        "directive @upper on FIELD_DEFINITION\n",
    )).unwrap();

    assert_eq!(types_map.len(), 11);

    let sort = types_map.get("Sort").and_then(GraphQLType::as_enum).unwrap();
    assert_eq!(sort.values(), &["ASC".to_string(), "DESC".to_string()]);

    let filter = types_map.get("Filter")
        .and_then(GraphQLType::as_input_object)
        .unwrap();
    assert_eq!(
        filter.fields().keys().collect::<Vec<_>>(),
        vec!["name", "limit"],
    );

    assert!(matches!(types_map.get("DateTime"), Some(GraphQLType::Scalar(_))));
    assert!(matches!(types_map.get("Node"), Some(GraphQLType::Interface(_))));
    assert!(matches!(types_map.get("User"), Some(GraphQLType::Object(_))));
    assert!(matches!(types_map.get("SearchResult"), Some(GraphQLType::Union(_))));
    assert!(types_map.get("upper").is_none());
}

#[test]
fn from_sdl_keeps_type_descriptions() {
    let types_map = TypesMap::from_sdl(concat!(
        "\"An ISO-8601 timestamp\"\n",
        "scalar DateTime\n",
    )).unwrap();

    let GraphQLType::Scalar(scalar) = types_map.get("DateTime").unwrap() else {
        panic!("expected a scalar type");
    };
    assert_eq!(scalar.description(), Some("An ISO-8601 timestamp"));
}

#[test]
fn from_sdl_rejects_duplicate_type_names() {
    let result = TypesMap::from_sdl(concat!(
        "scalar DateTime\n",
        "enum DateTime { NOW }\n",
    ));

    assert_eq!(result.unwrap_err(), TypesMapError::DuplicateTypeDefinition {
        type_name: "DateTime".to_string(),
        position: Some(ast::Pos { line: 2, column: 1 }),
    });
}

#[test]
fn from_sdl_rejects_redefinition_of_builtin_scalar() {
    let result = TypesMap::from_sdl("scalar Int");

    assert!(matches!(
        result,
        Err(TypesMapError::DuplicateTypeDefinition { type_name, .. })
            if type_name == "Int",
    ));
}

#[test]
fn from_sdl_rejects_dunder_prefixed_type_names() {
    let result = TypesMap::from_sdl("scalar __Secret");

    assert!(matches!(
        result,
        Err(TypesMapError::InvalidDunderPrefixedTypeName { type_name, .. })
            if type_name == "__Secret",
    ));
}

#[test]
fn from_sdl_reports_parse_errors() {
    let result = TypesMap::from_sdl("type Query {");

    assert!(matches!(result, Err(TypesMapError::ParseError(_))));
}

#[test]
fn add_type_makes_type_available_for_lookup() {
    let mut types_map = TypesMap::new();
    types_map.add_type(GraphQLType::Scalar(ScalarType::new("JSON"))).unwrap();

    let looked_up = types_map.lookup("JSON").unwrap();
    assert_eq!(looked_up.name(), "JSON");
    assert!(!looked_up.is_builtin());
    assert!(looked_up.is_input_type());
}
