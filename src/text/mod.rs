pub mod position;

pub use position::{
    LineTable, compute_line_starts, convert_byte_to_utf16_in_line, convert_char_to_byte_in_line,
};
