//! Configuration structures for the hotel room allocator
//!
//! This module contains the booking session configuration and validation logic
//! used by the command line front end and the front desk.

use super::OutputFormat;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Request limits carried over from the reservation form
pub mod limits {
    /// Largest group a single booking may request
    pub const MAX_ROOMS_PER_BOOKING: usize = 5;

    /// Share of rooms marked occupied by the random occupancy generator
    pub const DEFAULT_OCCUPANCY_RATIO: f64 = 0.3;
}

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "hotel-allocator",
    version = "0.1.0",
    about = "Hotel Room Allocator - Finds the free rooms with the shortest guest travel time",
    long_about = "Allocates a group of free hotel rooms that minimizes travel time between the first and last room of the group. Rooms on one floor are preferred; groups spread across floors are used only when no single floor has enough free rooms.

EXAMPLES:
    # Quote the best group of 3 rooms in an empty hotel
    hotel-allocator --rooms 3

    # Book 4 rooms for a guest after randomly occupying 30% of the hotel
    hotel-allocator --rooms 4 --randomize --seed 7 --guest-name \"Ada Lovelace\" --guest-phone 555-0100

    # Export the confirmed booking as CSV
    hotel-allocator --rooms 2 --guest-name Ada --guest-phone 555-0100 --export ./bookings

    # Generate configuration template
    hotel-allocator --print-config > hotel.json

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Number of rooms to allocate
    #[arg(
        short,
        long,
        help = "Number of rooms to allocate",
        long_help = "Number of rooms in the requested group. Must be between 1 and the booking limit. Default: 1"
    )]
    pub rooms: Option<usize>,

    /// Largest group a single booking may request
    #[arg(long, help = "Maximum rooms per booking")]
    pub max_rooms_per_booking: Option<usize>,

    /// Share of rooms to mark occupied when randomizing (0.0-1.0)
    #[arg(
        long,
        help = "Random occupancy ratio (0.0-1.0)",
        long_help = "Probability that each room is marked occupied when --randomize is given. Range: 0.0-1.0. Default: 0.3"
    )]
    pub occupancy_ratio: Option<f64>,

    /// Randomly occupy part of the hotel before allocating
    #[arg(long, help = "Randomly occupy rooms before allocating")]
    pub randomize: bool,

    /// Random seed for reproducible occupancy
    #[arg(long, help = "Random seed for reproducible occupancy")]
    pub seed: Option<u64>,

    /// Guest full name
    #[arg(long, help = "Guest full name (required to confirm a booking)")]
    pub guest_name: Option<String>,

    /// Guest phone number
    #[arg(long, help = "Guest phone number (required to confirm a booking)")]
    pub guest_phone: Option<String>,

    /// Guest email address
    #[arg(long, help = "Guest email address")]
    pub guest_email: Option<String>,

    /// Length of stay in nights
    #[arg(long, help = "Length of stay in nights")]
    pub nights: Option<u32>,

    /// Output format for the allocation
    #[arg(
        long,
        help = "Output format (text, json or csv)",
        long_help = "Output format for the allocation result. Supported formats: text, json, csv. Default: text"
    )]
    pub output_format: Option<String>,

    /// Directory to write the booking CSV export into
    #[arg(long, help = "Directory for the booking CSV export")]
    pub export: Option<String>,

    /// Directory for a daily rolling JSON log file
    #[arg(long, help = "Also write JSON logs to a daily rolling file in this directory")]
    pub log_dir: Option<String>,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON")]
    pub log_json: bool,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without allocating
    #[arg(long, help = "Validate configuration without allocating rooms")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Number of rooms to allocate
    pub rooms: Option<usize>,

    /// Largest group a single booking may request
    pub max_rooms_per_booking: Option<usize>,

    /// Share of rooms to mark occupied when randomizing
    pub occupancy_ratio: Option<f64>,

    /// Randomly occupy part of the hotel before allocating
    pub randomize: Option<bool>,

    /// Random seed for reproducible occupancy
    pub seed: Option<u64>,

    /// Guest full name
    pub guest_name: Option<String>,

    /// Guest phone number
    pub guest_phone: Option<String>,

    /// Guest email address
    pub guest_email: Option<String>,

    /// Length of stay in nights
    pub nights: Option<u32>,

    /// Output format for the allocation
    pub output_format: Option<String>,

    /// Directory to write the booking CSV export into
    pub export_dir: Option<String>,
}

/// Configuration for a booking session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotelConfig {
    /// Number of rooms to allocate
    pub rooms: usize,

    /// Largest group a single booking may request
    pub max_rooms_per_booking: usize,

    /// Share of rooms to mark occupied when randomizing (0.0-1.0)
    pub occupancy_ratio: f64,

    /// Randomly occupy part of the hotel before allocating
    pub randomize: bool,

    /// Random seed for reproducible occupancy
    pub seed: Option<u64>,

    /// Guest full name
    pub guest_name: Option<String>,

    /// Guest phone number
    pub guest_phone: Option<String>,

    /// Guest email address
    pub guest_email: Option<String>,

    /// Length of stay in nights
    pub nights: u32,

    /// Output format for the allocation
    pub output_format: String,

    /// Directory to write the booking CSV export into
    pub export_dir: Option<String>,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for the session configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// Room count is invalid
    #[error("Room count must be greater than 0, got {0}")]
    InvalidRoomCount(usize),

    /// Booking limit is invalid
    #[error("Maximum rooms per booking must be greater than 0, got {0}")]
    InvalidBookingLimit(usize),

    /// Requested rooms exceed the booking limit
    #[error("Requested {requested} rooms but a booking may hold at most {limit}")]
    RoomCountExceedsLimit {
        /// Number of rooms requested
        requested: usize,
        /// Configured booking limit
        limit: usize,
    },

    /// Occupancy ratio is out of range
    #[error("Invalid occupancy ratio: {0} (must be between 0.0 and 1.0)")]
    InvalidOccupancyRatio(f64),

    /// Nights count is invalid
    #[error("Nights must be greater than 0, got {0}")]
    InvalidNights(u32),

    /// Output format is not recognised
    #[error("{0}")]
    InvalidOutputFormat(String),
}

impl Default for HotelConfig {
    fn default() -> Self {
        Self {
            rooms: 1,
            max_rooms_per_booking: limits::MAX_ROOMS_PER_BOOKING,
            occupancy_ratio: limits::DEFAULT_OCCUPANCY_RATIO,
            randomize: false,
            seed: None,
            guest_name: None,
            guest_phone: None,
            guest_email: None,
            nights: 1,
            output_format: "text".to_string(),
            export_dir: None,
        }
    }
}

impl HotelConfig {
    /// Create configuration from parsed CLI arguments and the optional config file
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let content = fs::read_to_string(path)?;
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            rooms: config_file.rooms.unwrap_or(defaults.rooms),
            max_rooms_per_booking: config_file
                .max_rooms_per_booking
                .unwrap_or(defaults.max_rooms_per_booking),
            occupancy_ratio: config_file.occupancy_ratio.unwrap_or(defaults.occupancy_ratio),
            randomize: config_file.randomize.unwrap_or(defaults.randomize),
            seed: config_file.seed.or(defaults.seed),
            guest_name: config_file.guest_name.or(defaults.guest_name),
            guest_phone: config_file.guest_phone.or(defaults.guest_phone),
            guest_email: config_file.guest_email.or(defaults.guest_email),
            nights: config_file.nights.unwrap_or(defaults.nights),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            export_dir: config_file.export_dir.or(defaults.export_dir),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.rooms {
            config.rooms = value;
        }
        if let Some(value) = args.max_rooms_per_booking {
            config.max_rooms_per_booking = value;
        }
        if let Some(value) = args.occupancy_ratio {
            config.occupancy_ratio = value;
        }
        if args.randomize {
            config.randomize = true;
        }
        if let Some(value) = args.seed {
            config.seed = Some(value);
        }
        if let Some(value) = args.guest_name {
            config.guest_name = Some(value);
        }
        if let Some(value) = args.guest_phone {
            config.guest_phone = Some(value);
        }
        if let Some(value) = args.guest_email {
            config.guest_email = Some(value);
        }
        if let Some(value) = args.nights {
            config.nights = value;
        }
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if let Some(value) = args.export {
            config.export_dir = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.rooms == 0 {
            return Err(ConfigValidationError::InvalidRoomCount(self.rooms));
        }

        if self.max_rooms_per_booking == 0 {
            return Err(ConfigValidationError::InvalidBookingLimit(self.max_rooms_per_booking));
        }

        if self.rooms > self.max_rooms_per_booking {
            return Err(ConfigValidationError::RoomCountExceedsLimit {
                requested: self.rooms,
                limit: self.max_rooms_per_booking,
            });
        }

        if !(0.0..=1.0).contains(&self.occupancy_ratio) {
            return Err(ConfigValidationError::InvalidOccupancyRatio(self.occupancy_ratio));
        }

        if self.nights == 0 {
            return Err(ConfigValidationError::InvalidNights(self.nights));
        }

        self.get_output_format().map_err(ConfigValidationError::InvalidOutputFormat)?;

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Whether enough guest details were given to confirm a booking
    pub fn has_guest_details(&self) -> bool {
        self.guest_name.is_some() && self.guest_phone.is_some()
    }
}
