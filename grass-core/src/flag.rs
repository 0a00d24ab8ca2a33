/// Offset from `'A'` to REGIONAL INDICATOR SYMBOL LETTER A.
const REGIONAL_INDICATOR_A: u32 = 0x1F1E6;

/// Turn an ISO 3166 alpha-2 code into its flag emoji, e.g. `"fr"` -> 🇫🇷.
pub fn country_flag(code: &str) -> Option<String> {
    let code = code.trim();
    if code.len() != 2 || !code.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }

    code.chars()
        .map(|c| {
            let offset = c.to_ascii_uppercase() as u32 - 'A' as u32;
            char::from_u32(REGIONAL_INDICATOR_A + offset)
        })
        .collect()
}
