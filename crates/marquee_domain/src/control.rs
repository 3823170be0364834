/// Moves the cursor to column 0 and erases to the end of the line.
pub const ERASE_LINE: &[u8] = b"\r\x1b[K";

/// Pushes prior content above the next render.
pub const LINE_BREAK: &[u8] = b"\n";
