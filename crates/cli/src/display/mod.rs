pub mod formatter;

pub use formatter::format_type_tree;
