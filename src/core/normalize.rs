/// Rewrites a roster time ("10:00am") into the finals page form ("10:00 a.m.").
///
/// Only a trailing `am`/`pm` is rewritten. Already-normalized input comes back
/// unchanged, so applying this twice is the same as applying it once.
pub fn normalize_time(time: &str) -> String {
    let lower = time.trim().to_lowercase();
    if lower.ends_with("a.m.") || lower.ends_with("p.m.") {
        return lower;
    }
    if let Some(rest) = lower.strip_suffix("am") {
        return format!("{} a.m.", rest.trim_end());
    }
    if let Some(rest) = lower.strip_suffix("pm") {
        return format!("{} p.m.", rest.trim_end());
    }
    lower
}
