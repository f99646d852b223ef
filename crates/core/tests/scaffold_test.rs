//! End-to-end generation from JSON metadata

use std::fs;
use tempfile::TempDir;
use testit_core::{
    Configuration, FileMetadata, KotlinTypeClassifier, Mocker, MockerCodeGenerator,
    scaffold::generate_file_scaffold,
};

const METADATA: &str = r#"{
    "classes": [{
        "package_name": "com.example.checkout",
        "imports": {
            "PaymentGateway": "com.example.payments.PaymentGateway",
            "Cart": "com.example.cart.Cart"
        },
        "class_name": "CheckoutUseCase",
        "is_abstract": false,
        "constructor_parameters": [
            { "name": "gateway", "type": "PaymentGateway" },
            { "name": "currency", "type": "String" }
        ],
        "functions": [{
            "name": "execute",
            "is_abstract": false,
            "parameters": [
                { "name": "cart", "type": "Cart" },
                { "name": "coupons", "type": "List<String>?" }
            ],
            "body": "{ gateway.charge(cart.total) }",
            "return_type": "Boolean"
        }]
    }]
}"#;

#[test]
fn test_scaffold_from_metadata_with_discovered_config() {
    let temp_dir = TempDir::new().unwrap();
    let source_dir = temp_dir.path().join("app/src/main");
    fs::create_dir_all(&source_dir).unwrap();
    fs::write(
        temp_dir.path().join(".testit.json"),
        r#"{ "mocker": "MOCKITO", "actual_value": "result" }"#,
    )
    .unwrap();

    let config = Configuration::discover(&source_dir).unwrap();
    assert_eq!(config.mocker, Mocker::Mockito);

    let metadata: FileMetadata = serde_json::from_str(METADATA).unwrap();
    let scaffold = generate_file_scaffold(&config, &KotlinTypeClassifier, &metadata);

    let class = &scaffold.classes[0];
    assert_eq!(
        class.mock_fields,
        vec![
            "    @Mock\n    lateinit var gateway: PaymentGateway",
            "private val currency = \"currency\"",
        ]
    );
    assert_eq!(class.class_under_test, "CheckoutUseCase(gateway, currency)");
    assert_eq!(
        class.set_up_statements.as_deref(),
        Some("        MockitoAnnotations.openMocks(this)\n")
    );
    assert_eq!(
        class.functions[0].given,
        vec![
            "        val cart = mock<Cart>()",
            "        val coupons = listOf<String>()",
        ]
    );
    assert_eq!(class.functions[0].when, "        val result = cut.execute(cart, coupons)");
    assert_eq!(
        class.imports,
        vec![
            "com.example.cart.Cart",
            "com.example.payments.PaymentGateway",
            "org.junit.Before",
            "org.junit.runner.RunWith",
            "org.mockito.Mock",
            "org.mockito.MockitoAnnotations",
            "org.mockito.junit.MockitoJUnitRunner",
            "org.mockito.kotlin.mock",
        ]
    );
}

#[test]
fn test_missing_config_uses_defaults() {
    let temp_dir = TempDir::new().unwrap();

    let config = Configuration::discover(temp_dir.path()).unwrap();

    assert_eq!(config, Configuration::default());
}

#[test]
fn test_generator_is_single_use_accumulator() {
    let classifier = KotlinTypeClassifier;
    let metadata: FileMetadata = serde_json::from_str(METADATA).unwrap();
    let class = &metadata.classes[0];

    let mut first = MockerCodeGenerator::new(Mocker::MockK, &classifier);
    for parameter in &class.constructor_parameters {
        first.mocked_variable_definition(parameter);
    }
    let context = first.into_context();
    assert!(context.has_mocked_constructor_parameters());
    assert!(!context.has_mocked_function_parameters());

    let second = MockerCodeGenerator::new(Mocker::MockK, &classifier);
    assert!(!second.context().has_mocked_constructor_parameters());
    assert!(second.required_imports().is_empty());
}
