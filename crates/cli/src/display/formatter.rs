use testit_core::DataType;

/// One line per node, children indented under their parent
pub fn format_type_tree(data_type: &DataType) -> Vec<String> {
    let mut lines = Vec::new();
    push_node(data_type, 0, &mut lines);
    lines
}

fn push_node(data_type: &DataType, depth: usize, lines: &mut Vec<String>) {
    let kind = match data_type {
        DataType::Specific { .. } => "specific",
        DataType::Generic { .. } => "generic",
    };
    let nullable = if data_type.is_nullable() { ", nullable" } else { "" };
    lines.push(format!(
        "{}{} ({kind}{nullable})",
        "  ".repeat(depth),
        data_type.name()
    ));

    for argument in data_type.type_arguments() {
        push_node(argument, depth + 1, lines);
    }
}
