//! Booking export
//!
//! Writes a single booking as a two-line CSV document (header plus one quoted row) or
//! as pretty JSON.

use crate::booking::ledger::Booking;
use crate::desk::error::HotelResult;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Column headers of the guest export
pub const CSV_HEADERS: [&str; 6] = [
    "Guest Name",
    "Phone",
    "Email",
    "Duration (Days)",
    "Rooms",
    "Total Travel Time (mins)",
];

/// Render a booking as CSV
pub fn booking_to_csv(booking: &Booking) -> String {
    let rooms = booking
        .room_numbers()
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join("; ");

    let row = [
        booking.guest.name.clone(),
        booking.guest.phone.clone(),
        booking.guest.email.clone(),
        booking.guest.nights.to_string(),
        rooms,
        booking.cost.to_string(),
    ];

    let row = row.iter().map(|field| quote(field)).collect::<Vec<_>>().join(",");
    format!("{}\n{}", CSV_HEADERS.join(","), row)
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// File name for a guest's export, whitespace runs in the name become `_`
pub fn export_file_name(guest_name: &str) -> String {
    format!("booking_{}.csv", guest_name.split_whitespace().collect::<Vec<_>>().join("_"))
}

/// Write a booking's CSV export into a directory, returning the file path
pub fn write_csv(booking: &Booking, directory: impl AsRef<Path>) -> HotelResult<PathBuf> {
    let directory = directory.as_ref();
    fs::create_dir_all(directory)?;

    let path = directory.join(export_file_name(&booking.guest.name));
    fs::write(&path, booking_to_csv(booking))?;

    info!("Exported booking {} to {}", booking.id, path.display());
    Ok(path)
}

/// Render a booking as pretty JSON
pub fn booking_to_json(booking: &Booking) -> HotelResult<String> {
    Ok(serde_json::to_string_pretty(booking)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocation::find_allocation;
    use crate::booking::GuestInfo;
    use crate::hotel::Room;

    fn sample_booking() -> Booking {
        let rooms = vec![Room::new(3, 1), Room::new(3, 2)];
        let allocation = find_allocation(2, &rooms).unwrap();
        let guest = GuestInfo::new("Ada  King Lovelace", "555-0100")
            .with_email("ada@example.com")
            .with_nights(2);
        Booking::new(guest, allocation)
    }

    #[test]
    fn test_csv_layout() {
        let csv = booking_to_csv(&sample_booking());
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Guest Name,Phone,Email,Duration (Days),Rooms,Total Travel Time (mins)"
        );
        assert_eq!(
            lines[1],
            "\"Ada  King Lovelace\",\"555-0100\",\"ada@example.com\",\"2\",\"301; 302\",\"1\""
        );
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn test_csv_escapes_quotes() {
        let mut booking = sample_booking();
        booking.guest.name = "Ada \"Countess\"".to_string();

        let csv = booking_to_csv(&booking);
        assert!(csv.contains("\"Ada \"\"Countess\"\"\""));
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Ada  King Lovelace"), "booking_Ada_King_Lovelace.csv");
        assert_eq!(export_file_name("Grace"), "booking_Grace.csv");
    }

    #[test]
    fn test_write_csv() {
        let dir = tempfile::tempdir().unwrap();
        let booking = sample_booking();

        let path = write_csv(&booking, dir.path().join("exports")).unwrap();
        assert!(path.ends_with("booking_Ada_King_Lovelace.csv"));

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(content, booking_to_csv(&booking));
    }

    #[test]
    fn test_booking_json() {
        let booking = sample_booking();
        let json = booking_to_json(&booking).unwrap();

        assert!(json.contains("\"ROOM_301\""));
        assert!(json.contains("\"SameFloor\""));
        let back: Booking = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, booking.id);
        assert_eq!(back.cost, 1);
    }
}
