// Input loading and output formats
pub mod input;
pub mod json;
pub mod tree;

pub use input::{example, load_hex_file, Example, InputError, EXAMPLES};
pub use json::{from_json, from_json_with_config, to_json, JsonError};
pub use tree::render_tree;
