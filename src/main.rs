// Hotel Room Allocator - Main Entry Point
//
// You can run it via Cargo:
//
// ```console
// $ cargo build --release
// $ ./target/release/hotel-allocator --rooms 3
// ```
//
// Or with a guest and random occupancy:
//
// ```console
// $ ./target/release/hotel-allocator --rooms 4 --randomize --seed 7 --guest-name "Ada Lovelace" --guest-phone 555-0100
// ```

use anyhow::{Context, Result};
use clap::Parser;
use hotel_room_allocator::booking::{booking_to_csv, booking_to_json, write_csv};
use hotel_room_allocator::desk::{FrontDesk, LoggingConfig, OccupancyStatistics};
use hotel_room_allocator::hotel::OccupancyGenerator;
use hotel_room_allocator::types::config::CliArgs;
use hotel_room_allocator::types::{HotelConfig, OutputFormat};
use hotel_room_allocator::{Allocation, Booking, GuestInfo};
use std::process;
use tracing::{error, info, warn};

fn main() {
    // Parse CLI arguments first to check for special flags
    let args = CliArgs::parse();

    if args.print_config {
        match HotelConfig::default().print_json() {
            Ok(json) => {
                println!("{}", json);
                return;
            }
            Err(e) => {
                eprintln!("Failed to serialize default configuration: {}", e);
                process::exit(1);
            }
        }
    }

    if let Err(e) = LoggingConfig::from_cli_args(&args).init() {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Starting Hotel Room Allocator");

    let config = match HotelConfig::from_cli_args(args.clone()) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = config.validate() {
        error!("Configuration validation failed: {}", e);
        process::exit(1);
    }

    if args.dry_run {
        eprintln!("Configuration validation successful!");
        eprintln!("Dry run mode - no rooms will be allocated.");
        print_configuration_summary(&config);
        return;
    }

    if let Err(e) = run_session(&config) {
        error!("Allocation failed: {:#}", e);
        process::exit(1);
    }

    info!("Hotel Room Allocator completed successfully");
}

/// Serve one request: quote it, or book it when guest details are present
fn run_session(config: &HotelConfig) -> Result<()> {
    let format = config
        .get_output_format()
        .map_err(anyhow::Error::msg)
        .context("Invalid output format")?;

    let mut desk = FrontDesk::from_config(config);

    if config.randomize {
        let mut generator = OccupancyGenerator::from_seed(config.occupancy_ratio, config.seed);
        desk.randomize_occupancy(&mut generator);
    }

    if config.has_guest_details() {
        let guest = guest_from_config(config);
        let booking = desk
            .book(guest, config.rooms)
            .with_context(|| format!("Could not book {} rooms", config.rooms))?
            .clone();

        print_booking(&booking, format)?;

        if let Some(directory) = &config.export_dir {
            let path = write_csv(&booking, directory)
                .with_context(|| format!("Failed to export booking to '{}'", directory))?;
            eprintln!("Booking exported to {}", path.display());
        }
    } else {
        if config.export_dir.is_some() {
            warn!("Export requested without guest details, nothing will be written");
        }

        let allocation = desk
            .quote(config.rooms)
            .with_context(|| format!("Could not allocate {} rooms", config.rooms))?;

        print_allocation(&allocation, format)?;
    }

    print_statistics(&desk.statistics());
    Ok(())
}

fn guest_from_config(config: &HotelConfig) -> GuestInfo {
    let guest = GuestInfo::new(
        config.guest_name.clone().unwrap_or_default(),
        config.guest_phone.clone().unwrap_or_default(),
    )
    .with_nights(config.nights);

    match &config.guest_email {
        Some(email) => guest.with_email(email.clone()),
        None => guest,
    }
}

fn print_booking(booking: &Booking, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = booking_to_json(booking).context("Failed to serialize booking")?;
            println!("{}", json);
        }
        OutputFormat::Csv => println!("{}", booking_to_csv(booking)),
        OutputFormat::Text => {
            println!("Booking {} confirmed for {}", booking.id, booking.guest.name);
            println!("  Rooms: {}", join_numbers(&booking.room_numbers()));
            println!("  Strategy: {}", booking.strategy);
            println!("  Total Travel Time: {} mins", booking.cost);
            println!("  Nights: {}", booking.guest.nights);
        }
    }
    Ok(())
}

fn print_allocation(allocation: &Allocation, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json =
                serde_json::to_string_pretty(allocation).context("Failed to serialize allocation")?;
            println!("{}", json);
        }
        OutputFormat::Csv => {
            println!("Rooms,Total Travel Time (mins)");
            println!("\"{}\",\"{}\"", join_numbers(&allocation.room_numbers()), allocation.cost);
        }
        OutputFormat::Text => {
            println!("Best rooms: {}", join_numbers(&allocation.room_numbers()));
            println!("  Strategy: {}", allocation.strategy);
            println!("  Total Travel Time: {} mins", allocation.cost);
        }
    }
    Ok(())
}

fn join_numbers(numbers: &[u32]) -> String {
    numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("; ")
}

/// Print configuration summary
fn print_configuration_summary(config: &HotelConfig) {
    eprintln!("Configuration:");
    eprintln!("  Rooms Requested: {}", config.rooms);
    eprintln!("  Max Rooms per Booking: {}", config.max_rooms_per_booking);
    if config.randomize {
        eprintln!("  Random Occupancy: {:.1}%", config.occupancy_ratio * 100.0);
    }
    if let Some(seed) = config.seed {
        eprintln!("  Random Seed: {}", seed);
    }
    match &config.guest_name {
        Some(name) => eprintln!("  Guest: {} ({} nights)", name, config.nights),
        None => eprintln!("  Guest: none, quote only"),
    }
    eprintln!("  Output Format: {}", config.output_format);
    if let Some(directory) = &config.export_dir {
        eprintln!("  Export Directory: {}", directory);
    }
    eprintln!();
}

fn print_statistics(stats: &OccupancyStatistics) {
    eprintln!();
    eprintln!("{}", stats);
}
