use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use super::DataType;
use crate::error::{Error, Result};

/// One function or constructor parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypedParameter {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: DataType,
}

impl TypedParameter {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: name.into(),
            data_type,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionMetadata {
    pub name: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub parameters: Vec<TypedParameter>,
    /// Source of the function body, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub return_type: DataType,
}

impl FunctionMetadata {
    pub fn returns_unit(&self) -> bool {
        self.return_type == DataType::specific("Unit", false)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassMetadata {
    pub package_name: String,
    /// Short name to fully-qualified name, as imported by the source file
    #[serde(default)]
    pub imports: BTreeMap<String, String>,
    pub class_name: String,
    #[serde(default)]
    pub is_abstract: bool,
    #[serde(default)]
    pub constructor_parameters: Vec<TypedParameter>,
    #[serde(default)]
    pub functions: Vec<FunctionMetadata>,
}

impl ClassMetadata {
    pub fn abstract_functions(&self) -> impl Iterator<Item = &FunctionMetadata> {
        self.functions.iter().filter(|function| function.is_abstract)
    }
}

/// Top-level functions of a single source file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticFunctionsMetadata {
    pub package_name: String,
    #[serde(default)]
    pub imports: BTreeMap<String, String>,
    #[serde(default)]
    pub functions: Vec<FunctionMetadata>,
}

/// Everything extracted from one source file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMetadata {
    #[serde(default)]
    pub classes: Vec<ClassMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_functions: Option<StaticFunctionsMetadata>,
}

/// A class or function left out of a metadata file, with the reason
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedEntry {
    /// `Class`, `Class.function` or the name of a top-level function
    pub entry: String,
    pub reason: String,
}

/// Result of [`FileMetadata::load_lenient`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadedMetadata {
    pub metadata: FileMetadata,
    pub skipped: Vec<SkippedEntry>,
}

impl FileMetadata {
    /// Load a metadata document entry by entry.
    ///
    /// A class whose own fields fail to load (for instance an unparseable constructor
    /// parameter type) is skipped, and so is a single function with a bad signature. Every
    /// other class and function of the file still loads. Only a document that is not a
    /// JSON object, or whose top-level shape is wrong, fails as a whole.
    pub fn load_lenient(contents: &str) -> Result<LoadedMetadata> {
        let Value::Object(mut root) = serde_json::from_str::<Value>(contents)? else {
            return Err(shape_error("metadata must be a JSON object"));
        };
        let mut skipped = Vec::new();

        let classes = match root.remove("classes") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Array(entries)) => entries
                .into_iter()
                .filter_map(|entry| load_class(entry, &mut skipped))
                .collect(),
            Some(_) => return Err(shape_error("`classes` must be an array")),
        };

        let static_functions = match root.remove("static_functions") {
            None | Some(Value::Null) => None,
            Some(entry) => load_static_functions(entry, &mut skipped),
        };

        Ok(LoadedMetadata {
            metadata: FileMetadata {
                classes,
                static_functions,
            },
            skipped,
        })
    }
}

fn shape_error(message: &str) -> Error {
    Error::SerializationError(<serde_json::Error as serde::de::Error>::custom(message))
}

fn load_class(mut entry: Value, skipped: &mut Vec<SkippedEntry>) -> Option<ClassMetadata> {
    let label = entry
        .get("class_name")
        .and_then(Value::as_str)
        .unwrap_or("<unnamed class>")
        .to_string();
    let functions = take_functions(&mut entry, &format!("{label}."), skipped);

    match serde_json::from_value::<ClassMetadata>(entry) {
        Ok(class) => Some(ClassMetadata { functions, ..class }),
        Err(e) => {
            skip(skipped, label, &e);
            None
        }
    }
}

fn load_static_functions(
    mut entry: Value,
    skipped: &mut Vec<SkippedEntry>,
) -> Option<StaticFunctionsMetadata> {
    let functions = take_functions(&mut entry, "", skipped);

    match serde_json::from_value::<StaticFunctionsMetadata>(entry) {
        Ok(statics) => Some(StaticFunctionsMetadata { functions, ..statics }),
        Err(e) => {
            skip(skipped, "<top-level functions>".to_string(), &e);
            None
        }
    }
}

/// Remove the `functions` array from `entry` and load each function on its own.
/// A `functions` value that is not an array stays in place for the caller to reject.
fn take_functions(
    entry: &mut Value,
    prefix: &str,
    skipped: &mut Vec<SkippedEntry>,
) -> Vec<FunctionMetadata> {
    let Some(object) = entry.as_object_mut() else {
        return Vec::new();
    };
    let functions = match object.remove("functions") {
        Some(Value::Array(functions)) => functions,
        Some(other) => {
            object.insert("functions".to_string(), other);
            return Vec::new();
        }
        None => return Vec::new(),
    };

    functions
        .into_iter()
        .filter_map(|function| {
            let name = function
                .get("name")
                .and_then(Value::as_str)
                .unwrap_or("<unnamed function>");
            let label = format!("{prefix}{name}");
            match serde_json::from_value::<FunctionMetadata>(function) {
                Ok(function) => Some(function),
                Err(e) => {
                    skip(skipped, label, &e);
                    None
                }
            }
        })
        .collect()
}

fn skip(skipped: &mut Vec<SkippedEntry>, entry: String, error: &serde_json::Error) {
    warn!("Skipping {}: {}", entry, error);
    skipped.push(SkippedEntry {
        entry,
        reason: error.to_string(),
    });
}
