//! Splitting a dotted name into a NetBIOS short name and a scope ID.

use tracing::debug;

use crate::constants::{LABEL_SEPARATOR, NETBIOS_NAME_LEN, PAD_BYTE};
use crate::error::{NameError, Result};
use crate::latin1;

/// A full name split at its first dot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecomposedName {
    /// The first label, right-padded with spaces to exactly 15 characters.
    pub netbios_name: String,
    /// Everything after the first dot, or empty when there is none.
    pub scope_id: String,
}

/// Splits `full_name` into a padded 15-character NetBIOS name and its scope
/// ID.
///
/// Only the first label is the NetBIOS name; the remaining labels, without
/// the separating dot, form the scope. Each character of the name stands for
/// one byte on the wire, so it must lie in U+0000..=U+00FF.
///
/// # Example
///
/// ```
/// use netbios_name::decompose;
///
/// let parts = decompose("foobar.example.com").unwrap();
/// assert_eq!(parts.netbios_name, "foobar         ");
/// assert_eq!(parts.scope_id, "example.com");
///
/// assert!(decompose("ThisNameIsTooLong").is_err());
/// ```
pub fn decompose(full_name: &str) -> Result<DecomposedName> {
    let (short_name, scope_id) = full_name
        .split_once(LABEL_SEPARATOR)
        .unwrap_or((full_name, ""));

    let len = latin1::to_bytes(short_name)?.len();
    if len > NETBIOS_NAME_LEN {
        debug!(name = short_name, len, "NetBIOS name too long");
        return Err(NameError::NameTooLong {
            name: short_name.to_owned(),
            len,
        });
    }

    let mut netbios_name = String::with_capacity(short_name.len() + NETBIOS_NAME_LEN - len);
    netbios_name.push_str(short_name);
    let padding = NETBIOS_NAME_LEN - len;
    netbios_name.extend(std::iter::repeat(char::from(PAD_BYTE)).take(padding));

    Ok(DecomposedName {
        netbios_name,
        scope_id: scope_id.to_owned(),
    })
}
