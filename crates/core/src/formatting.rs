//! Textual rendering of [`DataType`] values

use crate::types::DataType;

impl DataType {
    /// Source spelling with nullability markers, e.g. `Map<String, Int?>?`
    pub fn to_kotlin_string(&self) -> String {
        let base = match self {
            DataType::Specific { name, .. } => name.clone(),
            DataType::Generic {
                name,
                type_arguments,
                ..
            } => format!("{name}<{}>", join_arguments(type_arguments, DataType::to_kotlin_string)),
        };

        if self.is_nullable() {
            format!("{base}?")
        } else {
            base
        }
    }

    /// Source spelling with every nullability marker dropped, for contexts such as
    /// `lateinit` declarations and mock factories that reject nullable types
    pub fn to_non_nullable_kotlin_string(&self) -> String {
        match self {
            DataType::Specific { name, .. } => name.clone(),
            DataType::Generic {
                name,
                type_arguments,
                ..
            } => format!(
                "{name}<{}>",
                join_arguments(type_arguments, DataType::to_non_nullable_kotlin_string)
            ),
        }
    }
}

fn join_arguments(arguments: &[DataType], render: fn(&DataType) -> String) -> String {
    arguments.iter().map(render).collect::<Vec<_>>().join(", ")
}
