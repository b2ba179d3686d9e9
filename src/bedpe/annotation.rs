//! Extraction of `key=value` fields from the `;`-separated annotation column of BEDPE files.

/// Extract the values of the given keys from an annotation string like
/// `TYPE=DEL;SCORE=10;CIPOS=None`.
///
/// The returned vector has the same length and order as `names`. If a key occurs multiple
/// times, the last occurrence wins. Keys that do not occur yield an empty string. A value
/// given literally as `None` yields `None`. Fields without a `=` are ignored.
pub fn extract_sv_info<'a>(annotation: &'a str, names: &[&str]) -> Vec<Option<&'a str>> {
    let mut values = vec![Some(""); names.len()];
    for field in annotation.split(';') {
        let mut kv = field.split('=');
        let (key, value) = match (kv.next(), kv.next()) {
            (Some(key), Some(value)) => (key, value),
            _ => continue,
        };
        for (name, slot) in names.iter().zip(values.iter_mut()) {
            if *name == key {
                *slot = if value == "None" { None } else { Some(value) };
            }
        }
    }
    values
}
