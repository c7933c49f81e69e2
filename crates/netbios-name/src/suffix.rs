//! Well-known values of the 16th (type) byte of a NetBIOS name.

pub const WORKSTATION: u8 = 0x00;
pub const MESSENGER: u8 = 0x03;
pub const RAS_SERVER: u8 = 0x06;
pub const DOMAIN_MASTER_BROWSER: u8 = 0x1b;
pub const DOMAIN_CONTROLLERS: u8 = 0x1c;
pub const MASTER_BROWSER: u8 = 0x1d;
pub const BROWSER_ELECTION: u8 = 0x1e;
pub const FILE_SERVER: u8 = 0x20;

/// Returns the conventional meaning of a suffix byte, if it has one.
///
/// ```
/// use netbios_name::suffix;
///
/// assert_eq!(suffix::describe(suffix::FILE_SERVER), Some("file server"));
/// assert_eq!(suffix::describe(0x7f), None);
/// ```
pub fn describe(suffix: u8) -> Option<&'static str> {
    match suffix {
        WORKSTATION => Some("workstation"),
        MESSENGER => Some("messenger"),
        RAS_SERVER => Some("RAS server"),
        DOMAIN_MASTER_BROWSER => Some("domain master browser"),
        DOMAIN_CONTROLLERS => Some("domain controllers"),
        MASTER_BROWSER => Some("master browser"),
        BROWSER_ELECTION => Some("browser election"),
        FILE_SERVER => Some("file server"),
        _ => None,
    }
}
