// Layout of operator trace blocks:
//
// Left            : [0101]
// Right           : [1010]
// &               : [0000]
// <blank line>

/// Width the label column is padded to
pub const LABEL_WIDTH: usize = 16;

/// One `label: value` line, label left-justified, newline terminated
pub fn trace_line(label: &str, value: &str) -> String {
    format!("{:<width$}: {}\n", label, value, width = LABEL_WIDTH)
}

/// Trace for an operator with two Bitfield operands
pub fn binary_block(left: &str, right: &str, symbol: &str, result: &str) -> String {
    let mut block = trace_line("Left", left);
    block.push_str(&trace_line("Right", right));
    block.push_str(&trace_line(symbol, result));
    block.push('\n');
    block
}

/// Trace for an operator with a single Bitfield operand (NOT and the shifts)
pub fn unary_block(operand: &str, symbol: &str, result: &str) -> String {
    let mut block = trace_line("Operand", operand);
    block.push_str(&trace_line(symbol, result));
    block.push('\n');
    block
}
