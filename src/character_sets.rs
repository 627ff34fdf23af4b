/// Check if a byte is an ASCII tab or newline
pub fn is_ascii_tab_or_newline(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

/// C0 control or space
pub fn is_c0_control_or_space(b: u8) -> bool {
    b <= 0x20
}

/// Host byte classes: bit 0 = forbidden host code point, bit 1 = forbidden domain code point
const FORBIDDEN_HOST: u8 = 1;
const FORBIDDEN_DOMAIN: u8 = 2;

const HOST_CHAR_TABLE: [u8; 256] = {
    let mut table = [0u8; 256];

    // Forbidden host code points (and therefore forbidden domain code points)
    let forbidden = b"\0\t\n\r #/:<>?@[\\]^|";
    let mut i = 0;
    while i < forbidden.len() {
        table[forbidden[i] as usize] = FORBIDDEN_HOST | FORBIDDEN_DOMAIN;
        i += 1;
    }

    // Domains additionally reject all C0 controls, % and DEL
    let mut i = 0;
    while i <= 0x1F {
        table[i] |= FORBIDDEN_DOMAIN;
        i += 1;
    }
    table[b'%' as usize] |= FORBIDDEN_DOMAIN;
    table[0x7F] |= FORBIDDEN_DOMAIN;

    table
};

/// Forbidden host code point (checked on opaque hosts)
pub fn is_forbidden_host_code_point(b: u8) -> bool {
    HOST_CHAR_TABLE[b as usize] & FORBIDDEN_HOST != 0
}

/// Forbidden domain code point (checked on IDNA output)
pub fn is_forbidden_domain_code_point(b: u8) -> bool {
    HOST_CHAR_TABLE[b as usize] & FORBIDDEN_DOMAIN != 0
}

/// First byte of a scheme
pub fn is_scheme_start(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// Any later byte of a scheme
pub fn is_scheme_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'+' | b'-' | b'.')
}
