use chrono::{DateTime, Utc};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

pub const OUTPUT_PREFIX: &str = "processados";

static BATCH_SOURCE_KEY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^lotes/([0-9A-Fa-f]{8}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{4}-[0-9A-Fa-f]{12})/([^/]+)$",
    )
    .expect("batch source key pattern is valid")
});

fn file_stem(name: &str) -> &str {
    Path::new(name)
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or(name)
}

/// Destination key for the PCL artifact of `source_key`.
///
/// `lotes/<guid>/<name>.<ext>` maps to `processados/<guid>/<name>.pcl`; any
/// other key is filed under a timestamped folder named after `file_name`.
pub fn output_key(source_key: &str, file_name: &str, now: DateTime<Utc>) -> String {
    if let Some(caps) = BATCH_SOURCE_KEY.captures(source_key) {
        return format!("{}/{}/{}.pcl", OUTPUT_PREFIX, &caps[1], file_stem(&caps[2]));
    }

    format!(
        "{}/{}/{}.pcl",
        OUTPUT_PREFIX,
        now.format("%Y%m%d_%H%M%S"),
        file_stem(file_name)
    )
}
