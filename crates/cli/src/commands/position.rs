use pointerpos_core::types::CursorPosition;
use pointerpos_runtime::PointerQuery;

use crate::util::{CliResult, map_query_error};

/// Queries the pointer once and returns the complete output line.
pub fn run(query: &PointerQuery) -> CliResult<String> {
    let position = query.current_position().map_err(map_query_error)?;
    Ok(format_position(&position))
}

/// Renders `x,y\n` in whole display units.
pub fn format_position(position: &CursorPosition) -> String {
    let (x, y) = position.to_whole_units();
    format!("{x},{y}\n")
}
