use super::{INDENT, INDENT_2, MockingStrategy};
use crate::config::Mocker;

/// MockK: `@MockK` lateinit properties initialized through `MockKAnnotations`
#[derive(Debug, Default, Clone, Copy)]
pub struct MockkStrategy;

impl MockingStrategy for MockkStrategy {
    fn mocker(&self) -> Mocker {
        Mocker::MockK
    }

    fn known_imports(&self) -> &'static [(&'static str, &'static str)] {
        &[
            ("Before", "org.junit.Before"),
            ("MockKAnnotations", "io.mockk.MockKAnnotations"),
            ("MockK", "io.mockk.impl.annotations.MockK"),
            ("mockk", "io.mockk.mockk"),
        ]
    }

    fn used_imports(&self) -> &'static [&'static str] {
        &[]
    }

    fn test_class_annotation(&self) -> Option<&'static str> {
        None
    }

    fn initialization_statements(&self) -> String {
        format!("{INDENT_2}MockKAnnotations.init(this, relaxUnitFun = true)\n")
    }

    fn constructor_mock(&self, parameter_name: &str, parameter_type: &str) -> String {
        format!("{INDENT}@MockK\n{INDENT}lateinit var {parameter_name}: {parameter_type}")
    }

    fn mocked_instance(&self, variable_type: &str) -> String {
        format!("mockk<{variable_type}>()")
    }

    fn constructor_mock_imports(&self) -> &'static [&'static str] {
        &["Before", "MockKAnnotations", "MockK"]
    }

    fn function_mock_imports(&self) -> &'static [&'static str] {
        &["mockk"]
    }
}
