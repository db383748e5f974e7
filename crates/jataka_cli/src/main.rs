use chrono::Datelike;
use clap::{Parser, Subcommand};
use jataka_kundali::{birth_profile, natal_moon, natal_nakshatra, summarize_transit};
use jataka_moon::{moon_longitude, sidereal_longitude};
use jataka_numerology::{NumerologyError, NumerologyResult, expression, life_path, soul_urge};
use jataka_time::{CivilDate, CivilDateTime, CivilTime};
use jataka_vedic::{daily_rashifol, moon_traits, sign_from_longitude};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "jataka", about = "Moon sign and numerology CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign from sidereal longitude
    Rashi {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Nakshatra and pada from sidereal longitude
    Nakshatra {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
    },
    /// Moon sign, nakshatra, and texts for a birth instant
    MoonSign {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24h)
        #[arg(long, default_value = "12:00")]
        time: String,
    },
    /// Moon transit summary against the natal sign
    Transit {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24h)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Current instant override (YYYY-MM-DDTHH:MM, default today at noon)
        #[arg(long)]
        now: Option<String>,
    },
    /// Life Path, Expression, and Soul Urge readings
    Numerology {
        /// Full name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },
    /// Full profile: moon sign, nakshatra, transit, and numerology
    Profile {
        /// Full name
        #[arg(long)]
        name: String,
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24h)
        #[arg(long, default_value = "12:00")]
        time: String,
        /// Birth place, echoed in the header (no geographic correction)
        #[arg(long)]
        location: Option<String>,
        /// Current instant override (YYYY-MM-DDTHH:MM, default today at noon)
        #[arg(long)]
        now: Option<String>,
    },
}

fn init_tracing() {
    FmtSubscriber::builder()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

fn parse_birth_instant(date: &str, time: &str) -> CivilDateTime {
    let date: CivilDate = date.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    let time: CivilTime = time.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    });
    CivilDateTime::new(date, time)
}

fn parse_date(s: &str) -> CivilDate {
    s.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

/// The transit instant: an explicit override, or today at 12:00.
fn resolve_now(now: Option<&str>) -> CivilDateTime {
    match now {
        Some(s) => s.parse().unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => {
            let today = chrono::Local::now().date_naive();
            let date = CivilDate::new(today.year(), today.month(), today.day())
                .unwrap_or_else(|e| {
                    eprintln!("{e}");
                    std::process::exit(1);
                });
            CivilDateTime::new(date, CivilTime { hour: 12, minute: 0 })
        }
    }
}

fn require_reading(r: Result<NumerologyResult, NumerologyError>) -> NumerologyResult {
    r.unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        std::process::exit(1);
    })
}

/// Formats a calculation trace as "a + b + c = total = final".
fn format_trace(trace: &[u32]) -> String {
    let (steps, tail) = trace.split_at(trace.len().saturating_sub(2));
    match tail {
        [total, final_value] if !steps.is_empty() => {
            let sums: Vec<String> = steps.iter().map(u32::to_string).collect();
            format!("{} = {total} = {final_value}", sums.join(" + "))
        }
        _ => {
            let all: Vec<String> = trace.iter().map(u32::to_string).collect();
            all.join(" + ")
        }
    }
}

fn print_reading(label: &str, reading: &NumerologyResult) {
    println!("{label}: {}", reading.number.value());
    println!("  Trace: {}", format_trace(&reading.trace));
    println!("  Meaning: {}", reading.meaning);
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Rashi { lon } => {
            let pos = sign_from_longitude(lon);
            println!(
                "{} ({}) - {:.4} deg in sign",
                pos.sign.name(),
                pos.sign.symbol(),
                pos.degree_in_sign
            );
            println!(
                "  Element: {}  Ruling planet: {}",
                pos.sign.element().name(),
                pos.sign.ruling_planet().name()
            );
        }

        Commands::Nakshatra { lon } => {
            let pos = sign_from_longitude(lon);
            let placement = natal_nakshatra(&pos);
            println!(
                "{} - Pada {} ({} {:.4} deg)",
                placement.nakshatra.name(),
                placement.pada,
                pos.sign.name(),
                pos.degree_in_sign
            );
        }

        Commands::MoonSign { date, time } => {
            let birth = parse_birth_instant(&date, &time);
            let lon = moon_longitude(&birth);
            let pos = sign_from_longitude(lon.sidereal_deg);
            let placement = natal_nakshatra(&pos);
            println!(
                "Moon sign: {} ({}) - {:.4} deg in sign",
                pos.sign.name(),
                pos.sign.symbol(),
                pos.degree_in_sign
            );
            println!(
                "Nakshatra: {} - Pada {}",
                placement.nakshatra.name(),
                placement.pada
            );
            println!(
                "  JD: {:.4}  Tropical: {:.4} deg  Ayanamsa: {:.4} deg  Sidereal: {:.4} deg",
                lon.jd, lon.tropical_deg, lon.ayanamsa_deg, lon.sidereal_deg
            );
            println!("Traits: {}", moon_traits(pos.sign));
            println!("Rashifol: {}", daily_rashifol(pos.sign));
        }

        Commands::Transit { date, time, now } => {
            let birth = parse_birth_instant(&date, &time);
            let now = resolve_now(now.as_deref());
            let natal = natal_moon(&birth);
            let current = sign_from_longitude(sidereal_longitude(&now));
            println!(
                "Natal moon: {} ({:.4} deg in sign)",
                natal.sign.name(),
                natal.degree_in_sign
            );
            println!("Current moon ({}): {}", now, current.sign.name());
            println!("{}", summarize_transit(natal.sign, &now));
        }

        Commands::Numerology { name, date } => {
            let date = parse_date(&date);
            print_reading("Life Path", &life_path(&date));
            print_reading("Expression", &require_reading(expression(&name)));
            print_reading("Soul Urge", &require_reading(soul_urge(&name)));
        }

        Commands::Profile {
            name,
            date,
            time,
            location,
            now,
        } => {
            let birth = parse_birth_instant(&date, &time);
            let now = resolve_now(now.as_deref());
            let profile = birth_profile(&name, &birth, &now).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                std::process::exit(1);
            });

            println!("Profile for {name}");
            match &location {
                Some(place) => println!("Born: {} at {} ({place})", birth.date, birth.time),
                None => println!("Born: {} at {}", birth.date, birth.time),
            }
            println!();
            println!(
                "Moon sign: {} ({}) - {:.4} deg in sign",
                profile.moon.sign.name(),
                profile.moon.sign.symbol(),
                profile.moon.degree_in_sign
            );
            println!(
                "Nakshatra: {} - Pada {}",
                profile.nakshatra.nakshatra.name(),
                profile.nakshatra.pada
            );
            println!("Traits: {}", profile.traits);
            println!("Rashifol: {}", profile.rashifol);
            println!();
            println!("{}", profile.transit);
            println!();
            print_reading("Life Path", &profile.life_path);
            print_reading("Expression", &profile.expression);
            print_reading("Soul Urge", &profile.soul_urge);
        }
    }
}
