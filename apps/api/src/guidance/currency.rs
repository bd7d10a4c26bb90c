//! Salary formatting. Catalog salaries are kept in USD and shown in INR using
//! the Indian lakh / crore units.

/// 1 USD = 88.09 INR, kept in hundredths so conversion stays in integers.
const USD_TO_INR_HUNDREDTHS: u64 = 8_809;
const LAKH: u64 = 100_000;
const CRORE: u64 = 10_000_000;

/// Converts a whole-dollar amount to whole rupees, rounding to nearest.
/// `None` when the amount is too large to convert.
pub fn usd_to_inr(usd: u64) -> Option<u64> {
    usd.checked_mul(USD_TO_INR_HUNDREDTHS)?
        .checked_add(50)
        .map(|hundredths| hundredths / 100)
}

/// Formats rupees as `₹1.14 crores`, `₹61.66 lakhs` or `₹88,090`.
///
/// The fractional part is truncated, not rounded: two digits of lakhs for
/// crores, two digits of thousands for lakhs.
pub fn format_inr(amount: u64) -> String {
    if amount >= CRORE {
        let crores = amount / CRORE;
        let lakhs = (amount % CRORE) / LAKH;
        if lakhs > 0 {
            format!("₹{crores}.{lakhs:02} crores")
        } else {
            format!("₹{crores} crores")
        }
    } else if amount >= LAKH {
        let lakhs = amount / LAKH;
        let thousands = (amount % LAKH) / 1_000;
        if thousands > 0 {
            format!("₹{lakhs}.{thousands:02} lakhs")
        } else {
            format!("₹{lakhs} lakhs")
        }
    } else {
        format!("₹{}", group_thousands(amount))
    }
}

/// `usd_range_to_inr(70_000, 130_000)` → `₹61.66 lakhs - ₹1.14 crores`.
pub fn usd_range_to_inr(min_usd: u64, max_usd: u64) -> Option<String> {
    Some(format!(
        "{} - {}",
        format_inr(usd_to_inr(min_usd)?),
        format_inr(usd_to_inr(max_usd)?)
    ))
}

/// Rewrites a free-text `$60,000 - $120,000` range into rupees. `$90k` and
/// `$1.2M` style suffixes are honoured. Text without at least two dollar
/// amounts, with an unknown unit suffix or with amounts too large to convert
/// is returned unchanged.
pub fn convert_usd_text(text: &str) -> String {
    let converted = dollar_amounts(text).and_then(|amounts| match amounts.as_slice() {
        [min, max, ..] => usd_range_to_inr(*min, *max),
        _ => None,
    });
    converted.unwrap_or_else(|| text.to_string())
}

/// Every `$<amount>[k|m]` in order of appearance. `None` when an amount
/// cannot be read as whole dollars.
fn dollar_amounts(text: &str) -> Option<Vec<u64>> {
    let mut amounts = Vec::new();
    let mut rest = text;
    while let Some(idx) = rest.find('$') {
        rest = &rest[idx + 1..];
        let number_len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == ',' || c == '.'))
            .unwrap_or(rest.len());
        let number = rest[..number_len].trim_end_matches(&['.', ','][..]);
        if !number.bytes().any(|b| b.is_ascii_digit()) {
            continue;
        }
        let multiplier = match rest[number_len..].chars().next() {
            Some('k' | 'K') => 1_000,
            Some('m' | 'M') => 1_000_000,
            Some(c) if c.is_alphabetic() => return None,
            _ => 1,
        };
        amounts.push(parse_dollars(number, multiplier)?);
    }
    Some(amounts)
}

/// `"1,250"` x 1 → 1250, `"1.5"` x 1000 → 1500. Fractions that do not come
/// out to whole dollars are rejected.
fn parse_dollars(number: &str, multiplier: u64) -> Option<u64> {
    let digits: String = number.chars().filter(|c| *c != ',').collect();
    let (whole, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
    let whole: u64 = if whole.is_empty() { 0 } else { whole.parse().ok()? };
    let mut value = whole.checked_mul(multiplier)?;
    if !fraction.is_empty() {
        let scale = 10u64.checked_pow(u32::try_from(fraction.len()).ok()?)?;
        let fraction: u64 = fraction.parse().ok()?;
        let scaled = fraction.checked_mul(multiplier)?;
        if scaled % scale != 0 {
            return None;
        }
        value = value.checked_add(scaled / scale)?;
    }
    Some(value)
}

fn group_thousands(amount: u64) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lakhs_format() {
        assert_eq!(format_inr(usd_to_inr(70_000).unwrap()), "₹61.66 lakhs");
    }

    #[test]
    fn test_crores_format() {
        assert_eq!(format_inr(usd_to_inr(130_000).unwrap()), "₹1.14 crores");
    }

    #[test]
    fn test_whole_units_drop_fraction() {
        assert_eq!(format_inr(2 * CRORE), "₹2 crores");
        assert_eq!(format_inr(5 * LAKH + 999), "₹5 lakhs");
    }

    #[test]
    fn test_small_amount_grouped() {
        assert_eq!(format_inr(usd_to_inr(1_000).unwrap()), "₹88,090");
        assert_eq!(format_inr(950), "₹950");
    }

    #[test]
    fn test_range_text_converted() {
        assert_eq!(
            convert_usd_text("$70,000 - $130,000"),
            "₹61.66 lakhs - ₹1.14 crores"
        );
    }

    #[test]
    fn test_unparseable_text_unchanged() {
        assert_eq!(convert_usd_text("Competitive"), "Competitive");
        assert_eq!(convert_usd_text("$90k+"), "$90k+");
        assert_eq!(convert_usd_text("$90x - $150x"), "$90x - $150x");
        assert_eq!(convert_usd_text("₹10 lakhs - ₹20 lakhs"), "₹10 lakhs - ₹20 lakhs");
    }

    #[test]
    fn test_thousand_and_million_suffixes_scaled() {
        assert_eq!(convert_usd_text("$90k - $150k"), "₹79.28 lakhs - ₹1.32 crores");
        assert_eq!(convert_usd_text("$70K-$130K per year"), "₹61.66 lakhs - ₹1.14 crores");
        assert_eq!(convert_usd_text("$1.5M - $2M"), "₹13.21 crores - ₹17.61 crores");
    }

    #[test]
    fn test_huge_amounts_left_unchanged() {
        let text = "$9,999,999,999,999,999 - $99,999,999,999,999,999";
        assert_eq!(convert_usd_text(text), text);
        assert_eq!(usd_to_inr(u64::MAX / 100), None);
        assert_eq!(usd_range_to_inr(1, u64::MAX), None);
    }
}
