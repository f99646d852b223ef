use super::{INDENT, INDENT_2, MockingStrategy};
use crate::config::Mocker;

/// Mockito (with mockito-kotlin): runs under `MockitoJUnitRunner`, `@Mock` lateinit
/// properties and `mock<T>()` for function arguments
#[derive(Debug, Default, Clone, Copy)]
pub struct MockitoStrategy;

impl MockingStrategy for MockitoStrategy {
    fn mocker(&self) -> Mocker {
        Mocker::Mockito
    }

    fn known_imports(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("Before", "org.junit.Before"),
            ("RunWith", "org.junit.runner.RunWith"),
            ("MockitoJUnitRunner", "org.mockito.junit.MockitoJUnitRunner"),
            ("Mock", "org.mockito.Mock"),
            ("MockitoAnnotations", "org.mockito.MockitoAnnotations"),
            ("mock", "org.mockito.kotlin.mock"),
        ]
    }

    fn used_imports(&self) -> &'static [&'static str] {
        &["RunWith", "MockitoJUnitRunner"]
    }

    fn test_class_annotation(&self) -> Option<&'static str> {
        Some("@RunWith(MockitoJUnitRunner::class)")
    }

    fn initialization_statements(&self) -> String {
        format!("{INDENT_2}MockitoAnnotations.openMocks(this)\n")
    }

    fn constructor_mock(&self, parameter_name: &str, parameter_type: &str) -> String {
        format!("{INDENT}@Mock\n{INDENT}lateinit var {parameter_name}: {parameter_type}")
    }

    fn mocked_instance(&self, variable_type: &str) -> String {
        format!("mock<{variable_type}>()")
    }

    fn constructor_mock_imports(&self) -> &'static [&'static str] {
        &["Before", "Mock", "MockitoAnnotations"]
    }

    fn function_mock_imports(&self) -> &'static [&'static str] {
        &["mock"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::MockerCodeGenerator;
    use crate::mockable::KotlinTypeClassifier;
    use crate::types::{DataType, TypedParameter};

    #[test]
    fn test_runner_annotation_and_imports() {
        let generator = MockerCodeGenerator::new(Mocker::Mockito, &KotlinTypeClassifier);

        assert_eq!(
            generator.test_class_annotation(),
            Some("@RunWith(MockitoJUnitRunner::class)")
        );
        assert_eq!(
            generator.resolved_imports(),
            vec!["org.junit.runner.RunWith", "org.mockito.junit.MockitoJUnitRunner"]
        );
        assert!(generator.required_imports().is_empty());
    }

    #[test]
    fn test_constructor_mock_enables_set_up() {
        let mut generator = MockerCodeGenerator::new(Mocker::Mockito, &KotlinTypeClassifier);

        let field = generator
            .mocked_variable_definition(&TypedParameter::new("api", DataType::specific("Api", true)));

        assert_eq!(field, "    @Mock\n    lateinit var api: Api");
        assert_eq!(
            generator.set_up_statements().as_deref(),
            Some("        MockitoAnnotations.openMocks(this)\n")
        );
        assert_eq!(
            generator.required_imports().iter().copied().collect::<Vec<_>>(),
            vec!["Before", "Mock", "MockitoAnnotations"]
        );
    }

    #[test]
    fn test_non_mockable_parameter_is_plain_property() {
        let mut generator = MockerCodeGenerator::new(Mocker::Mockito, &KotlinTypeClassifier);

        let field = generator
            .mocked_variable_definition(&TypedParameter::new("retries", DataType::specific("Int", false)));

        assert_eq!(field, "private val retries = 0");
        assert_eq!(generator.set_up_statements(), None);
    }

    #[test]
    fn test_mocked_instance() {
        let mut generator = MockerCodeGenerator::new(Mocker::Mockito, &KotlinTypeClassifier);

        assert_eq!(
            generator.mocked_instance(&DataType::specific("Callback", false)),
            "mock<Callback>()"
        );
        assert_eq!(
            generator.required_imports().iter().copied().collect::<Vec<_>>(),
            vec!["mock"]
        );
    }
}
