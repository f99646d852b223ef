//! testit - mock-based unit test scaffolding
//!
//! This crate provides functionality to:
//! - Parse textual type signatures (`Map<String, List<Data?>>?`) into [`DataType`] trees
//! - Generate mock declarations, abstract-class stand-ins and set-up code for Mockito or MockK
//! - Track the imports the generated code needs
pub mod config;
pub mod error;
pub mod formatting;
pub mod generator;
pub mod mockable;
pub mod parser;
pub mod scaffold;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use config::{CONFIG_FILE_NAMES, Configuration, Mocker};
pub use generator::{GenerationContext, MockerCodeGenerator, MockingStrategy, create_strategy};
pub use mockable::{KotlinTypeClassifier, MockabilityClassifier};
pub use parser::DataTypeParser;
pub use scaffold::{ClassScaffold, FileScaffold, FunctionScaffold, StaticFunctionsScaffold};
