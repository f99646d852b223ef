//! Drives a [`MockerCodeGenerator`] over a file's metadata and collects the generated
//! fragments. Laying the fragments out into a test file is left to the caller.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

use crate::{
    config::Configuration,
    generator::{INDENT_2, MockerCodeGenerator},
    mockable::MockabilityClassifier,
    types::{
        ClassMetadata, DataType, FileMetadata, FunctionMetadata, StaticFunctionsMetadata,
    },
};

/// Generated fragments for one class under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassScaffold {
    pub package_name: String,
    pub class_name: String,
    pub test_class_name: String,
    pub test_class_annotation: Option<String>,
    /// One declaration per constructor parameter, in constructor order
    pub mock_fields: Vec<String>,
    /// Expression assigned to the class-under-test placeholder
    pub class_under_test: String,
    pub set_up_statements: Option<String>,
    pub functions: Vec<FunctionScaffold>,
    /// Fully-qualified imports, sorted
    pub imports: Vec<String>,
}

/// Given/when/then statements for one function under test
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FunctionScaffold {
    pub name: String,
    pub given: Vec<String>,
    pub when: String,
    pub then: String,
}

/// Generated fragments for a file's top-level functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StaticFunctionsScaffold {
    pub package_name: String,
    pub functions: Vec<FunctionScaffold>,
    pub imports: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FileScaffold {
    pub classes: Vec<ClassScaffold>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub static_functions: Option<StaticFunctionsScaffold>,
}

/// Scaffold every class (each with its own generator) and the top-level functions of a file
pub fn generate_file_scaffold(
    config: &Configuration,
    classifier: &dyn MockabilityClassifier,
    file: &FileMetadata,
) -> FileScaffold {
    FileScaffold {
        classes: file
            .classes
            .iter()
            .map(|class| generate_class_scaffold(config, classifier, class))
            .collect(),
        static_functions: file
            .static_functions
            .as_ref()
            .filter(|statics| !statics.functions.is_empty())
            .map(|statics| generate_static_functions_scaffold(config, classifier, statics)),
    }
}

pub fn generate_class_scaffold(
    config: &Configuration,
    classifier: &dyn MockabilityClassifier,
    class: &ClassMetadata,
) -> ClassScaffold {
    debug!(
        "Generating {} scaffold for {}.{}",
        config.mocker, class.package_name, class.class_name
    );
    let mut generator = MockerCodeGenerator::new(config.mocker, classifier);

    let mock_fields: Vec<String> = class
        .constructor_parameters
        .iter()
        .map(|parameter| generator.mocked_variable_definition(parameter))
        .collect();

    let class_under_test = if class.is_abstract {
        generator.abstract_class_under_test(class)
    } else {
        let arguments = class
            .constructor_parameters
            .iter()
            .map(|parameter| parameter.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        format!("{}({arguments})", class.class_name)
    };

    let functions = class
        .functions
        .iter()
        .filter(|function| !function.is_abstract)
        .map(|function| {
            let target = format!("{}.{}", config.class_under_test, function.name);
            function_scaffold(config, &mut generator, function, &target)
        })
        .collect();

    let set_up_statements = generator.set_up_statements();
    let mut imports = generator.resolved_imports();
    imports.extend(referenced_imports(
        &class.imports,
        class
            .constructor_parameters
            .iter()
            .map(|parameter| &parameter.data_type)
            .chain(class.functions.iter().flat_map(function_types)),
    ));
    imports.sort();
    imports.dedup();

    debug!(
        "{} mock fields, {} functions, {} imports for {}",
        mock_fields.len(),
        class.functions.len(),
        imports.len(),
        class.class_name
    );

    ClassScaffold {
        package_name: class.package_name.clone(),
        class_name: class.class_name.clone(),
        test_class_name: format!("{}Test", class.class_name),
        test_class_annotation: generator.test_class_annotation().map(str::to_string),
        mock_fields,
        class_under_test,
        set_up_statements,
        functions,
        imports,
    }
}

pub fn generate_static_functions_scaffold(
    config: &Configuration,
    classifier: &dyn MockabilityClassifier,
    statics: &StaticFunctionsMetadata,
) -> StaticFunctionsScaffold {
    debug!(
        "Generating {} scaffold for top-level functions in {}",
        config.mocker, statics.package_name
    );
    let mut generator = MockerCodeGenerator::new(config.mocker, classifier);

    let functions = statics
        .functions
        .iter()
        .map(|function| function_scaffold(config, &mut generator, function, &function.name))
        .collect();

    let mut imports = generator.resolved_imports();
    imports.extend(referenced_imports(
        &statics.imports,
        statics.functions.iter().flat_map(function_types),
    ));
    imports.sort();
    imports.dedup();

    StaticFunctionsScaffold {
        package_name: statics.package_name.clone(),
        functions,
        imports,
    }
}

fn function_scaffold(
    config: &Configuration,
    generator: &mut MockerCodeGenerator<'_>,
    function: &FunctionMetadata,
    target: &str,
) -> FunctionScaffold {
    let given = function
        .parameters
        .iter()
        .map(|parameter| {
            let value = generator.mocked_value(&parameter.name, &parameter.data_type);
            format!("{INDENT_2}val {} = {value}", parameter.name)
        })
        .collect();

    let arguments = function
        .parameters
        .iter()
        .map(|parameter| parameter.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let when = if function.returns_unit() {
        format!("{INDENT_2}{target}({arguments})")
    } else {
        format!("{INDENT_2}val {} = {target}({arguments})", config.actual_value)
    };

    FunctionScaffold {
        name: function.name.clone(),
        given,
        when,
        then: format!("{INDENT_2}{}", config.default_assertion),
    }
}

fn function_types(function: &FunctionMetadata) -> impl Iterator<Item = &DataType> {
    function
        .parameters
        .iter()
        .map(|parameter| &parameter.data_type)
        .chain(std::iter::once(&function.return_type))
}

/// Source-file imports whose short name appears anywhere in the given types
fn referenced_imports<'a>(
    imports: &BTreeMap<String, String>,
    types: impl Iterator<Item = &'a DataType>,
) -> BTreeSet<String> {
    let mut referenced = BTreeSet::new();
    for data_type in types {
        data_type.walk(&mut |node| {
            // `Outer.Inner` is imported through `Outer`
            let short_name = node.name().split('.').next().unwrap_or_default();
            if let Some(qualified) = imports.get(short_name) {
                referenced.insert(qualified.clone());
            }
        });
    }
    referenced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mocker;
    use crate::mockable::KotlinTypeClassifier;
    use crate::types::TypedParameter;

    fn parameter(name: &str, signature: &str) -> TypedParameter {
        TypedParameter::new(name, signature.parse().unwrap())
    }

    fn function(name: &str, parameters: Vec<TypedParameter>, return_type: &str) -> FunctionMetadata {
        FunctionMetadata {
            name: name.to_string(),
            is_abstract: false,
            parameters,
            body: None,
            return_type: return_type.parse().unwrap(),
        }
    }

    fn user_service() -> ClassMetadata {
        ClassMetadata {
            package_name: "com.example.user".to_string(),
            imports: BTreeMap::from([
                ("Repository".to_string(), "com.example.data.Repository".to_string()),
                ("Clock".to_string(), "java.time.Clock".to_string()),
                ("Unused".to_string(), "com.example.Unused".to_string()),
            ]),
            class_name: "UserService".to_string(),
            is_abstract: false,
            constructor_parameters: vec![
                parameter("repository", "Repository<User>"),
                parameter("retries", "Int"),
            ],
            functions: vec![
                function("find", vec![parameter("id", "Long"), parameter("clock", "Clock")], "User?"),
                function("clear", vec![], "Unit"),
            ],
        }
    }

    #[test]
    fn test_mockk_class_scaffold() {
        let scaffold = generate_class_scaffold(
            &Configuration::default(),
            &KotlinTypeClassifier,
            &user_service(),
        );

        assert_eq!(scaffold.test_class_name, "UserServiceTest");
        assert_eq!(scaffold.test_class_annotation, None);
        assert_eq!(
            scaffold.mock_fields,
            vec![
                "    @MockK\n    lateinit var repository: Repository<User>".to_string(),
                "private val retries = 0".to_string(),
            ]
        );
        assert_eq!(scaffold.class_under_test, "UserService(repository, retries)");
        assert_eq!(
            scaffold.set_up_statements.as_deref(),
            Some("        MockKAnnotations.init(this, relaxUnitFun = true)\n")
        );

        let find = &scaffold.functions[0];
        assert_eq!(
            find.given,
            vec!["        val id = 0L", "        val clock = mockk<Clock>()"]
        );
        assert_eq!(find.when, "        val actualValue = cut.find(id, clock)");
        assert_eq!(find.then, "        assertEquals(expected, actualValue)");
        assert_eq!(scaffold.functions[1].when, "        cut.clear()");

        assert_eq!(
            scaffold.imports,
            vec![
                "com.example.data.Repository",
                "io.mockk.MockKAnnotations",
                "io.mockk.impl.annotations.MockK",
                "io.mockk.mockk",
                "java.time.Clock",
                "org.junit.Before",
            ]
        );
    }

    #[test]
    fn test_mockito_abstract_class_scaffold() {
        let config = Configuration {
            mocker: Mocker::Mockito,
            class_under_test: "subject".to_string(),
            ..Default::default()
        };
        let class = ClassMetadata {
            is_abstract: true,
            constructor_parameters: vec![parameter("name", "String")],
            functions: vec![
                FunctionMetadata {
                    is_abstract: true,
                    ..function("load", vec![], "Repository")
                },
                function("describe", vec![], "String"),
            ],
            ..user_service()
        };

        let scaffold = generate_class_scaffold(&config, &KotlinTypeClassifier, &class);

        assert_eq!(
            scaffold.test_class_annotation.as_deref(),
            Some("@RunWith(MockitoJUnitRunner::class)")
        );
        assert_eq!(scaffold.mock_fields, vec!["private val name = \"name\""]);
        assert_eq!(
            scaffold.class_under_test,
            "object : UserService(name) {\n            override fun load() = mock<Repository>()\n        }"
        );
        assert_eq!(scaffold.set_up_statements, None);
        assert_eq!(scaffold.functions.len(), 1);
        assert_eq!(scaffold.functions[0].when, "        val actualValue = subject.describe()");
        assert_eq!(
            scaffold.imports,
            vec![
                "com.example.data.Repository",
                "org.junit.runner.RunWith",
                "org.mockito.junit.MockitoJUnitRunner",
                "org.mockito.kotlin.mock",
            ]
        );
    }

    #[test]
    fn test_file_scaffold_uses_fresh_generator_per_class() {
        let plain = ClassMetadata {
            class_name: "Formatter".to_string(),
            constructor_parameters: vec![parameter("width", "Int")],
            functions: vec![],
            ..user_service()
        };
        let file = FileMetadata {
            classes: vec![user_service(), plain],
            static_functions: Some(StaticFunctionsMetadata {
                package_name: "com.example.user".to_string(),
                imports: BTreeMap::new(),
                functions: vec![function("format", vec![parameter("user", "User")], "String")],
            }),
        };

        let scaffold = generate_file_scaffold(&Configuration::default(), &KotlinTypeClassifier, &file);

        assert_eq!(scaffold.classes.len(), 2);
        assert!(scaffold.classes[0].set_up_statements.is_some());
        assert_eq!(scaffold.classes[1].set_up_statements, None);
        assert!(scaffold.classes[1].imports.is_empty());

        let statics = scaffold.static_functions.unwrap();
        assert_eq!(statics.functions[0].given, vec!["        val user = mockk<User>()"]);
        assert_eq!(statics.functions[0].when, "        val actualValue = format(user)");
        assert_eq!(statics.imports, vec!["io.mockk.mockk"]);
    }

    #[test]
    fn test_nested_type_imports_through_outer_name() {
        let imports = BTreeMap::from([("Outer".to_string(), "com.example.Outer".to_string())]);
        let types: Vec<DataType> = vec!["List<Outer.Inner>".parse().unwrap()];

        let referenced = referenced_imports(&imports, types.iter());

        assert_eq!(referenced.into_iter().collect::<Vec<_>>(), vec!["com.example.Outer"]);
    }
}
