use soroban_sdk::String;

const MAX_NAME_LEN: usize = 64;

/// ASCII case-insensitive medicine-name comparison. Names longer than the
/// buffer never match.
pub fn eq_ignore_ascii_case(a: &String, b: &String) -> bool {
    let len_a = a.len() as usize;
    let len_b = b.len() as usize;
    if len_a != len_b || len_a == 0 || len_a > MAX_NAME_LEN {
        return false;
    }

    let mut buf_a = [0u8; MAX_NAME_LEN];
    let mut buf_b = [0u8; MAX_NAME_LEN];
    a.copy_into_slice(&mut buf_a[..len_a]);
    b.copy_into_slice(&mut buf_b[..len_b]);

    buf_a[..len_a].eq_ignore_ascii_case(&buf_b[..len_b])
}

pub fn is_nonempty(value: &String) -> bool {
    value.len() > 0
}

pub fn is_valid_latitude(lat_e6: i64) -> bool {
    (-90_000_000..=90_000_000).contains(&lat_e6)
}

pub fn is_valid_longitude(lon_e6: i64) -> bool {
    (-180_000_000..=180_000_000).contains(&lon_e6)
}
