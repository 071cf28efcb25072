use super::*;

#[test]
fn known_values() {
    assert_eq!(format_sectors(0), "00:00:00");
    assert_eq!(format_sectors(75), "00:01:00");
    assert_eq!(format_sectors(4500), "01:00:00");
    assert_eq!(format_sectors(333000), "74:00:00");
    assert_eq!(format_sectors(150), "00:02:00");
    assert_eq!(format_sectors(4574), "01:00:74");
}

#[test]
fn minutes_past_99_keep_all_digits() {
    assert_eq!(format_sectors(100 * FRAMES_PER_MINUTE), "100:00:00");
    assert_eq!(format_sectors(1234 * FRAMES_PER_MINUTE + 76), "1234:01:01");
}

#[test]
fn components_reassemble_to_input() {
    for sectors in (0..20_000).step_by(7).chain([u32::MAX, u32::MAX - 1, 449_999]) {
        let msf = Msf::from_sectors(sectors);
        assert!(msf.seconds < 60, "seconds out of range for {sectors}");
        assert!(msf.frames < 75, "frames out of range for {sectors}");
        assert_eq!(msf.to_sectors(), sectors);

        let text = format_sectors(sectors);
        let parts: Vec<&str> = text.split(':').collect();
        assert_eq!(parts.len(), 3, "{text}");
        assert!(parts[0].len() >= 2, "{text}");
        assert_eq!(parts[1].len(), 2, "{text}");
        assert_eq!(parts[2].len(), 2, "{text}");
        assert!(text.chars().all(|c| c.is_ascii_digit() || c == ':'), "{text}");
    }
}
