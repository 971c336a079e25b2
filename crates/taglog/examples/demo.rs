//! Walks the public surface: console output at every severity, threshold
//! filtering, then a custom sink taking over delivery.

use taglog::Severity;

fn main() {
    let mut sequence = 0u32;
    taglog::log_error!("demo", "error #{sequence}");
    sequence += 1;
    taglog::log_warning!("demo", "warning #{sequence}");
    sequence += 1;
    taglog::log_info!("demo", "info #{sequence}");
    sequence += 1;
    taglog::log_debug!("demo", "debug #{sequence}");
    sequence += 1;
    taglog::log_verbose!("demo", "verbose #{sequence}");

    taglog::set_log_level(Severity::Warning);
    taglog::log_info!("demo", "suppressed by the Warning threshold");
    taglog::log_warning!("demo", "still delivered");

    // From here on, parts arrive at the sink instead of the console.
    taglog::register_custom_logger(
        |part: &[u8]| println!("sink part ({} bytes): {:?}", part.len(), String::from_utf8_lossy(part)),
        vec![0; 96],
    );
    taglog::log_error!("demo", "rendered through a {}-byte scratch buffer", 96);
}
