/// Render whole seconds as `MM:SS`. Minutes keep counting past an hour.
pub fn format_time(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{mins:02}:{secs:02}")
}

/// Percentage for a progress gauge, clamped to 0..=100
pub fn percent(done: usize, total: usize) -> u16 {
    match total {
        0 => 0,
        total => ((done.min(total) * 100) / total) as u16,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(0), "00:00");
        assert_eq!(format_time(9), "00:09");
        assert_eq!(format_time(61), "01:01");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn test_format_time_past_an_hour() {
        assert_eq!(format_time(3_725), "62:05");
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(0, 104), 0);
        assert_eq!(percent(52, 104), 50);
        assert_eq!(percent(104, 104), 100);
    }

    #[test]
    fn test_percent_empty_total() {
        assert_eq!(percent(3, 0), 0);
    }

    #[test]
    fn test_percent_never_exceeds_full() {
        assert_eq!(percent(5, 2), 100);
    }
}
