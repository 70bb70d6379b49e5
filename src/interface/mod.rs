pub mod render;

pub use render::{name_list, selection_line, selection_line_with_error};
