//! Mock code generation for the supported mocking frameworks
//!
//! A [`MockingStrategy`] knows how one framework spells mocks. A [`MockerCodeGenerator`]
//! pairs a strategy with a [`MockabilityClassifier`] and a fresh [`GenerationContext`],
//! and is meant to be used for exactly one class under test.

pub mod mockito;
pub mod mockk;

use std::collections::BTreeSet;

use crate::{
    config::Mocker,
    mockable::MockabilityClassifier,
    types::{ClassMetadata, DataType, TypedParameter},
};

pub use mockito::MockitoStrategy;
pub use mockk::MockkStrategy;

pub const INDENT: &str = "    ";
pub const INDENT_2: &str = "        ";
pub const INDENT_3: &str = "            ";

/// Framework-specific spelling of mocks and the imports they need
pub trait MockingStrategy: Send + Sync {
    fn mocker(&self) -> Mocker;

    /// Every import this strategy may ever need, as symbolic name to fully-qualified name
    fn known_imports(&self) -> &'static [(&'static str, &'static str)];

    /// Symbolic imports needed regardless of what gets generated
    fn used_imports(&self) -> &'static [&'static str];

    fn test_class_annotation(&self) -> Option<&'static str>;

    /// Framework initialization, emitted once a constructor dependency has been mocked
    fn initialization_statements(&self) -> String;

    /// Field declaration for a mocked constructor dependency
    fn constructor_mock(&self, parameter_name: &str, parameter_type: &str) -> String;

    /// Expression creating a mock of `variable_type`
    fn mocked_instance(&self, variable_type: &str) -> String;

    fn constructor_mock_imports(&self) -> &'static [&'static str];

    fn function_mock_imports(&self) -> &'static [&'static str];

    fn abstract_class_imports(&self) -> &'static [&'static str] {
        &[]
    }
}

/// Create the strategy for a configured mocker
pub fn create_strategy(mocker: Mocker) -> Box<dyn MockingStrategy> {
    match mocker {
        Mocker::Mockito => Box::new(MockitoStrategy),
        Mocker::MockK => Box::new(MockkStrategy),
    }
}

/// State accumulated over one generation run. Flags only ever go from `false` to
/// `true` and the import set only grows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationContext {
    has_mocked_constructor_parameters: bool,
    has_mocked_function_parameters: bool,
    is_abstract_class_under_test: bool,
    required_imports: BTreeSet<&'static str>,
}

impl GenerationContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_mocked_constructor_parameters(&self) -> bool {
        self.has_mocked_constructor_parameters
    }

    pub fn has_mocked_function_parameters(&self) -> bool {
        self.has_mocked_function_parameters
    }

    pub fn is_abstract_class_under_test(&self) -> bool {
        self.is_abstract_class_under_test
    }

    pub fn required_imports(&self) -> &BTreeSet<&'static str> {
        &self.required_imports
    }

    fn set_has_mocked_constructor_parameters(&mut self, imports: &[&'static str]) {
        self.has_mocked_constructor_parameters = true;
        self.required_imports.extend(imports);
    }

    fn set_has_mocked_function_parameters(&mut self, imports: &[&'static str]) {
        self.has_mocked_function_parameters = true;
        self.required_imports.extend(imports);
    }

    fn set_is_abstract_class_under_test(&mut self, imports: &[&'static str]) {
        self.is_abstract_class_under_test = true;
        self.required_imports.extend(imports);
    }
}

/// Generates mock code for one class under test
pub struct MockerCodeGenerator<'a> {
    strategy: Box<dyn MockingStrategy>,
    classifier: &'a dyn MockabilityClassifier,
    context: GenerationContext,
}

impl<'a> MockerCodeGenerator<'a> {
    pub fn new(mocker: Mocker, classifier: &'a dyn MockabilityClassifier) -> Self {
        Self::with_strategy(create_strategy(mocker), classifier)
    }

    pub fn with_strategy(
        strategy: Box<dyn MockingStrategy>,
        classifier: &'a dyn MockabilityClassifier,
    ) -> Self {
        Self {
            strategy,
            classifier,
            context: GenerationContext::new(),
        }
    }

    pub fn mocker(&self) -> Mocker {
        self.strategy.mocker()
    }

    pub fn known_imports(&self) -> &'static [(&'static str, &'static str)] {
        self.strategy.known_imports()
    }

    pub fn used_imports(&self) -> &'static [&'static str] {
        self.strategy.used_imports()
    }

    pub fn test_class_annotation(&self) -> Option<&'static str> {
        self.strategy.test_class_annotation()
    }

    /// Only meaningful once every constructor parameter of the class has been generated
    pub fn set_up_statements(&self) -> Option<String> {
        self.context
            .has_mocked_constructor_parameters
            .then(|| self.strategy.initialization_statements())
    }

    /// The classifier's default for non-mockable types, otherwise a mock instance
    pub fn mocked_value(&mut self, variable_name: &str, data_type: &DataType) -> String {
        match self.classifier.non_mockable_default(variable_name, data_type) {
            Some(value) => value,
            None => self.mocked_instance(data_type),
        }
    }

    /// A test class property for a constructor parameter
    pub fn mocked_variable_definition(&mut self, parameter: &TypedParameter) -> String {
        match self
            .classifier
            .non_mockable_default(&parameter.name, &parameter.data_type)
        {
            Some(value) => format!("private val {} = {value}", parameter.name),
            None => self.constructor_mock(&parameter.name, &parameter.data_type),
        }
    }

    pub fn constructor_mock(&mut self, parameter_name: &str, parameter_type: &DataType) -> String {
        self.context
            .set_has_mocked_constructor_parameters(self.strategy.constructor_mock_imports());
        self.strategy
            .constructor_mock(parameter_name, &parameter_type.to_non_nullable_kotlin_string())
    }

    pub fn mocked_instance(&mut self, variable_type: &DataType) -> String {
        self.context
            .set_has_mocked_function_parameters(self.strategy.function_mock_imports());
        self.strategy
            .mocked_instance(&variable_type.to_non_nullable_kotlin_string())
    }

    /// An anonymous subclass of an abstract class under test, overriding every
    /// abstract function with a mocked return value
    pub fn abstract_class_under_test(&mut self, class_under_test: &ClassMetadata) -> String {
        self.context
            .set_is_abstract_class_under_test(self.strategy.abstract_class_imports());

        let constructor_arguments = class_under_test
            .constructor_parameters
            .iter()
            .map(|parameter| parameter.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let mut code = format!(
            "object : {}({constructor_arguments}) {{\n",
            class_under_test.class_name
        );

        for function in class_under_test.abstract_functions() {
            let parameters = function
                .parameters
                .iter()
                .map(|parameter| format!("{}: {}", parameter.name, parameter.data_type))
                .collect::<Vec<_>>()
                .join(", ");
            let mocked_value = self.mocked_value(&function.name, &function.return_type);
            code.push_str(&format!(
                "{INDENT_3}override fun {}({parameters}) = {mocked_value}\n",
                function.name
            ));
        }

        code.push_str(INDENT_2);
        code.push('}');
        code
    }

    /// Symbolic imports triggered so far in this run
    pub fn required_imports(&self) -> &BTreeSet<&'static str> {
        self.context.required_imports()
    }

    /// Used and required imports as sorted fully-qualified names
    pub fn resolved_imports(&self) -> Vec<String> {
        let known = self.strategy.known_imports();
        let mut imports: Vec<String> = self
            .strategy
            .used_imports()
            .iter()
            .chain(self.context.required_imports())
            .filter_map(|key| {
                known
                    .iter()
                    .find(|(name, _)| name == key)
                    .map(|(_, qualified)| (*qualified).to_string())
            })
            .collect();
        imports.sort();
        imports.dedup();
        imports
    }

    pub fn context(&self) -> &GenerationContext {
        &self.context
    }

    pub fn into_context(self) -> GenerationContext {
        self.context
    }
}
