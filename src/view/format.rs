// src/view/format.rs

/// Thousands separators, pt-BR style ("1.234.567").
pub fn thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(c);
    }
    out
}

/// One-decimal percentage ("93.4%").
pub fn percent1(value: f64) -> String {
    format!("{:.1}%", value)
}
