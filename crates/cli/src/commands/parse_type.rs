use anyhow::Result;
use testit_core::DataTypeParser;
use tracing::debug;

use crate::display::format_type_tree;

pub fn parse_type_command(signature: &str, tree: bool) -> Result<()> {
    debug!("Parsing type signature: {}", signature);

    let data_type = DataTypeParser::new().parse(signature)?;

    if tree {
        for line in format_type_tree(&data_type) {
            println!("{line}");
        }
    } else {
        println!("🔍 Parsing: {signature}");
        println!("   Nullable:     {}", data_type.to_kotlin_string());
        println!("   Non-nullable: {}", data_type.to_non_nullable_kotlin_string());
    }

    Ok(())
}
