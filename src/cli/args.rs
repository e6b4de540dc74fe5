//! CLI argument parsing and configuration.

use std::io;
use std::path::PathBuf;

use crate::models::Route;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Configuration from CLI arguments
pub struct CliConfig {
    pub route: Route,
    pub catalog_path: Option<PathBuf>,
    pub skip_reveal: bool,
}

/// Print usage information
pub fn print_usage() {
    eprintln!("Shortmedia TUI - terminal showcase for the Shortmedia brand");
    eprintln!();
    eprintln!("Usage: shortmedia-tui [route] [OPTIONS]");
    eprintln!();
    eprintln!("Arguments:");
    eprintln!("  [route]                Start screen: /, /about or /portfolio (default: /)");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  -c, --catalog <PATH>   Load content from a catalog.json file");
    eprintln!("  -s, --skip-reveal      Start with the landing aperture already open");
    eprintln!("  -h, --help             Show this help message");
    eprintln!("  -V, --version          Show version");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  shortmedia-tui                       # Landing screen, embedded catalog");
    eprintln!("  shortmedia-tui /portfolio            # Jump straight to the gallery");
    eprintln!("  shortmedia-tui -c media/catalog.json # Custom content");
}

/// Parse CLI arguments and return configuration
pub fn parse_args() -> io::Result<CliConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut route: Option<Route> = None;
    let mut catalog_path: Option<PathBuf> = None;
    let mut skip_reveal = false;

    let mut i = 1;
    while i < args.len() {
        let arg = &args[i];
        if arg == "-h" || arg == "--help" {
            print_usage();
            std::process::exit(0);
        } else if arg == "-V" || arg == "--version" {
            println!("shortmedia-tui {}", VERSION);
            std::process::exit(0);
        } else if arg == "-s" || arg == "--skip-reveal" {
            skip_reveal = true;
            i += 1;
        } else if arg == "-c" || arg == "--catalog" {
            i += 1;
            if i >= args.len() {
                print_usage();
                return Err(io::Error::new(
                    io::ErrorKind::InvalidInput,
                    "Missing value for --catalog",
                ));
            }
            catalog_path = Some(PathBuf::from(&args[i]));
            i += 1;
        } else if !arg.starts_with('-') {
            let parsed = Route::parse(arg).ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::InvalidInput,
                    format!("Unknown route: {}", arg),
                )
            })?;
            route = Some(parsed);
            i += 1;
        } else {
            print_usage();
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("Unknown argument: {}", arg),
            ));
        }
    }

    Ok(CliConfig {
        route: route.unwrap_or_default(),
        catalog_path,
        skip_reveal,
    })
}
