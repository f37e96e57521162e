use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum AnyNumber {
    U64(u64),
    I64(i64),
    F64(f64),
    Str(String),
}

fn to_u64(n: AnyNumber) -> Option<u64> {
    match n {
        AnyNumber::U64(u) => Some(u),
        AnyNumber::I64(i) => u64::try_from(i).ok(),
        AnyNumber::F64(f) => {
            let r = f.round();
            // This cast is safe as we check finiteness and sign first.
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            (f.is_finite() && r >= 0.0 && (f - r).abs() < 1e-6).then_some(r as u64)
        }
        AnyNumber::Str(s) => s.trim().replace(',', "").parse::<u64>().ok(),
    }
}

/// Accepts u64, integer-like f64 (e.g., `4.0`), numeric strings, or null/missing.
/// Values that cannot be represented map to `None` instead of failing the whole payload.
pub(crate) fn de_opt_u64_lenient<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<AnyNumber>::deserialize(deserializer)?.and_then(to_u64))
}

/// Same rules as [`de_opt_u64_lenient`], element-wise over an array with nulls.
pub(crate) fn de_vec_opt_u64_lenient<'de, D>(deserializer: D) -> Result<Vec<Option<u64>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Vec<Option<AnyNumber>>>::deserialize(deserializer)?;
    Ok(raw
        .unwrap_or_default()
        .into_iter()
        .map(|v| v.and_then(to_u64))
        .collect())
}
