use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::parser::DataTypeParser;

/// A parsed type signature.
///
/// Nullability belongs to the node it is written on: in `List<String?>` only the
/// `String` argument is nullable. Values are built once by the parser and never mutated.
///
/// Serializes to (and deserializes from) its textual signature, so metadata files can
/// spell types the way they appear in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DataType {
    /// A non-generic named type, e.g. `String` or `Int?`
    Specific { name: String, is_nullable: bool },
    /// A named type with one or more type arguments, e.g. `Map<String, Int>`
    Generic {
        name: String,
        is_nullable: bool,
        type_arguments: Vec<DataType>,
    },
}

impl DataType {
    pub fn specific(name: impl Into<String>, is_nullable: bool) -> Self {
        DataType::Specific {
            name: name.into(),
            is_nullable,
        }
    }

    /// A generic type. With no type arguments this is a `Specific`, the same value
    /// parsing `Name<>` yields.
    pub fn generic(name: impl Into<String>, is_nullable: bool, type_arguments: Vec<DataType>) -> Self {
        if type_arguments.is_empty() {
            return DataType::specific(name, is_nullable);
        }
        DataType::Generic {
            name: name.into(),
            is_nullable,
            type_arguments,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            DataType::Specific { name, .. } | DataType::Generic { name, .. } => name,
        }
    }

    pub fn is_nullable(&self) -> bool {
        match self {
            DataType::Specific { is_nullable, .. } | DataType::Generic { is_nullable, .. } => {
                *is_nullable
            }
        }
    }

    /// Type arguments in declaration order; empty for `Specific`
    pub fn type_arguments(&self) -> &[DataType] {
        match self {
            DataType::Specific { .. } => &[],
            DataType::Generic { type_arguments, .. } => type_arguments,
        }
    }

    /// Visit this type and every nested type argument, depth first
    pub fn walk<'a>(&'a self, visit: &mut impl FnMut(&'a DataType)) {
        visit(self);
        for argument in self.type_arguments() {
            argument.walk(visit);
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_kotlin_string())
    }
}

impl FromStr for DataType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataTypeParser::new().parse(s)
    }
}

impl TryFrom<String> for DataType {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DataType> for String {
    fn from(value: DataType) -> Self {
        value.to_kotlin_string()
    }
}
