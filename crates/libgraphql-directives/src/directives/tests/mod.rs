mod directive_discovery_tests;
mod schema_document_tests;
