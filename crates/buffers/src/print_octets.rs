//! Hex dump helper for diagnostics.

/// Formats a byte slice as space-separated hex, showing at most `max` bytes.
///
/// # Example
///
/// ```
/// use nbt_buffers::print_octets;
///
/// assert_eq!(print_octets(&[0x20, 0x45, 0x47, 0x00], 16), "20 45 47 00");
/// assert_eq!(print_octets(&[0xc0, 0x0c, 0x00], 2), "c0 0c ... (1 more)");
/// assert_eq!(print_octets(&[], 16), "");
/// ```
pub fn print_octets(octets: &[u8], max: usize) -> String {
    let mut result = octets
        .iter()
        .take(max)
        .map(|byte| format!("{byte:02x}"))
        .collect::<Vec<_>>()
        .join(" ");

    if octets.len() > max {
        result.push_str(&format!(" ... ({} more)", octets.len() - max));
    }

    result
}
