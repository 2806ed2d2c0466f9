/// Scan a process listing for the target process and extract its PID.

/// Find the PID of the first listing line that matches the target.
///
/// A line matches when it contains `target`, does not contain `exclusion`
/// (so a grep in the pipeline never matches itself), and does not contain
/// the decimal rendering of `self_pid` (so the caller's own invocation is
/// never selected). The PID is the second whitespace-separated field; lines
/// whose second field fails integer parsing are skipped, not errors, and
/// the scan continues. The first successfully parsed match wins.
pub fn find_target(lines: &[String], target: &str, exclusion: &str, self_pid: u32) -> Option<i32> {
    let self_pid = self_pid.to_string();

    for line in lines {
        if !line.contains(target) || line.contains(exclusion) || line.contains(&self_pid) {
            continue;
        }
        let Some(field) = line.split_whitespace().nth(1) else {
            continue;
        };
        match field.parse::<i32>() {
            Ok(pid) => {
                tracing::debug!(pid, line = %line, "target process found");
                return Some(pid);
            }
            Err(_) => continue,
        }
    }
    None
}
