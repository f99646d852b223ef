pub mod init;
pub mod parse_type;
pub mod scaffold;

pub use init::init_command;
pub use parse_type::parse_type_command;
pub use scaffold::scaffold_command;
