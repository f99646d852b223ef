//! Deciding whether a type gets a mock or a literal default value

use crate::types::{DataType, TypedParameter};

/// Decides, per type, between a generated mock and a literal default.
///
/// Generators never make this call themselves.
pub trait MockabilityClassifier {
    /// Default expression for a value of `data_type` bound to `variable_name`, or
    /// `None` when the type should be mocked
    fn non_mockable_default(&self, variable_name: &str, data_type: &DataType) -> Option<String>;

    fn is_mockable(&self, data_type: &DataType) -> bool {
        self.non_mockable_default(data_type.name(), data_type).is_none()
    }

    fn is_parameter_mockable(&self, parameter: &TypedParameter) -> bool {
        self.non_mockable_default(&parameter.name, &parameter.data_type)
            .is_none()
    }
}

/// Classifier for Kotlin's built-in value and collection types. Anything it does not
/// recognise is considered mockable.
#[derive(Debug, Default, Clone, Copy)]
pub struct KotlinTypeClassifier;

impl KotlinTypeClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl MockabilityClassifier for KotlinTypeClassifier {
    fn non_mockable_default(&self, variable_name: &str, data_type: &DataType) -> Option<String> {
        let value = match data_type.name() {
            "Boolean" => "false".to_string(),
            "Byte" => "0.toByte()".to_string(),
            "Short" => "0.toShort()".to_string(),
            "Int" => "0".to_string(),
            "Long" => "0L".to_string(),
            "Float" => "0f".to_string(),
            "Double" => "0.0".to_string(),
            "Char" => "'a'".to_string(),
            "String" | "CharSequence" => format!("\"{variable_name}\""),
            "Unit" => "Unit".to_string(),
            "BooleanArray" => "booleanArrayOf()".to_string(),
            "ByteArray" => "byteArrayOf()".to_string(),
            "ShortArray" => "shortArrayOf()".to_string(),
            "IntArray" => "intArrayOf()".to_string(),
            "LongArray" => "longArrayOf()".to_string(),
            "FloatArray" => "floatArrayOf()".to_string(),
            "DoubleArray" => "doubleArrayOf()".to_string(),
            "CharArray" => "charArrayOf()".to_string(),
            "List" | "Collection" | "Iterable" => empty_collection("listOf", data_type),
            "MutableList" | "ArrayList" => empty_collection("mutableListOf", data_type),
            "Set" => empty_collection("setOf", data_type),
            "MutableSet" | "HashSet" => empty_collection("mutableSetOf", data_type),
            "Map" => empty_collection("mapOf", data_type),
            "MutableMap" | "HashMap" => empty_collection("mutableMapOf", data_type),
            "Array" => empty_collection("arrayOf", data_type),
            "Sequence" => empty_collection("emptySequence", data_type),
            _ => return None,
        };
        Some(value)
    }
}

/// `listOf<String>()` for a generic, plain `listOf()` when the arguments are unknown
fn empty_collection(factory: &str, data_type: &DataType) -> String {
    let arguments = data_type.type_arguments();
    if arguments.is_empty() {
        format!("{factory}()")
    } else {
        let arguments = arguments
            .iter()
            .map(DataType::to_kotlin_string)
            .collect::<Vec<_>>()
            .join(", ");
        format!("{factory}<{arguments}>()")
    }
}
