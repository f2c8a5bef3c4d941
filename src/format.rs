/// Format a byte count as `B`, `KB`, `MB` or `GB` (1024 based).
///
/// Anything from one KiB upward gets exactly two decimals. GB is the largest
/// unit, so terabyte-sized counts keep growing in GB.
pub fn human_readable_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        return format!("{} B", bytes);
    }
    let kb = bytes as f64 / 1024.0;
    if kb < 1024.0 {
        return format!("{:.2} KB", kb);
    }
    let mb = kb / 1024.0;
    if mb < 1024.0 {
        return format!("{:.2} MB", mb);
    }
    format!("{:.2} GB", mb / 1024.0)
}

/// Format a rate in Mbps with two decimals.
pub fn format_mbps(mbps: f64) -> String {
    format!("{:.2}", mbps)
}
