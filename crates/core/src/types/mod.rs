pub mod data_type;
pub mod metadata;

// Re-export commonly used types
pub use data_type::DataType;
pub use metadata::{
    ClassMetadata, FileMetadata, FunctionMetadata, LoadedMetadata, SkippedEntry,
    StaticFunctionsMetadata, TypedParameter,
};
