mod logger;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use saju_rs::{
    DEFAULT_LOG_FILTER, FourPillars, LegacyPillars, Pillar, SajuConfig, SajuError, SajuRequest,
    SearchError, calculate_request, canonical_key, init, key_of, same_saju, solar_terms,
};

#[derive(Parser)]
#[command(name = "saju", about = "Four Pillars (Saju) calculator")]
struct Cli {
    /// TOML config file (locale profiles, search tuning, log filter)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Four Pillars for a birth timestamp
    Pillars {
        /// Birth time: YYYY-MM-DD[THH:MM[:SS]][Z|+HH:MM]
        date: String,
        /// Only the date is known
        #[arg(long)]
        unknown_time: bool,
        /// Locale tag (ko, ko-KR, en, ...)
        #[arg(long, default_value = "ko-KR")]
        locale: String,
        /// Print the legacy sky/grd record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Solar-term boundaries of a Gregorian year
    Terms {
        year: i32,
        /// Only the 12 month-opening terms
        #[arg(long)]
        jie_only: bool,
        /// Show local times at this UTC offset in minutes
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        offset: i32,
    },
    /// Canonical cache key for a birth timestamp
    Key {
        date: String,
        #[arg(long)]
        unknown_time: bool,
        #[arg(long, default_value = "ko-KR")]
        locale: String,
    },
    /// Whether two birth timestamps share a Saju
    Compare {
        first: String,
        second: String,
        #[arg(long)]
        unknown_time: bool,
        #[arg(long, default_value = "ko-KR")]
        locale: String,
    },
    /// Stem and branch at a sexagenary cycle position
    Cycle {
        #[arg(allow_negative_numbers = true)]
        index: i64,
    },
}

fn load_config(path: Option<&PathBuf>) -> Result<SajuConfig, SajuError> {
    match path {
        Some(p) => Ok(SajuConfig::from_file(p)?),
        None => Ok(SajuConfig::default()),
    }
}

fn describe(p: Pillar) -> String {
    format!(
        "{} ({}) {} {} {}",
        p.hanja(),
        p.hangul(),
        p.stem().element().name(),
        p.stem().polarity().name(),
        p.branch().animal().name()
    )
}

fn print_pillars(fp: &FourPillars) {
    println!("Year:  {}", describe(fp.year));
    println!("Month: {}", describe(fp.month));
    println!("Day:   {}", describe(fp.day));
    match fp.hour {
        Some(h) => println!("Hour:  {}", describe(h)),
        None => println!("Hour:  unknown"),
    }
    println!("Key:   {}", key_of(fp));
}

fn display_zone(offset_minutes: i32) -> Result<chrono::FixedOffset, SearchError> {
    offset_minutes
        .checked_mul(60)
        .and_then(chrono::FixedOffset::east_opt)
        .ok_or_else(|| {
            SearchError::InvalidCivilDateTime(format!(
                "offset {offset_minutes} minutes out of range"
            ))
        })
}

fn run(command: Commands) -> Result<(), SajuError> {
    match command {
        Commands::Pillars {
            date,
            unknown_time,
            locale,
            json,
        } => {
            let fp = calculate_request(&SajuRequest::new(&date, unknown_time, &locale))?;
            if json {
                let record = LegacyPillars::from(&fp);
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                print_pillars(&fp);
            }
        }

        Commands::Terms {
            year,
            jie_only,
            offset,
        } => {
            let terms = solar_terms(year)?;
            let zone = display_zone(offset)?;
            for b in terms.boundaries().iter().filter(|b| !jie_only || b.is_jie()) {
                let local = b.instant_utc.with_timezone(&zone);
                println!(
                    "{:>2}  {}  {}  {:<22} {}",
                    b.term_index(),
                    b.term.hanja(),
                    b.term.hangul(),
                    b.term.name(),
                    local.format("%Y-%m-%d %H:%M:%S %:z")
                );
            }
        }

        Commands::Key {
            date,
            unknown_time,
            locale,
        } => {
            println!(
                "{}",
                canonical_key(&SajuRequest::new(&date, unknown_time, &locale))?
            );
        }

        Commands::Compare {
            first,
            second,
            unknown_time,
            locale,
        } => {
            let a = SajuRequest::new(&first, unknown_time, &locale);
            let b = SajuRequest::new(&second, unknown_time, &locale);
            let same = same_saju(&a, &b)?;
            println!("{}  {}", canonical_key(&a)?, first);
            println!("{}  {}", canonical_key(&b)?, second);
            println!("{}", if same { "same" } else { "different" });
        }

        Commands::Cycle { index } => {
            let p = Pillar::from_position(index);
            println!("{:>2}  {}", p.index(), describe(p));
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(cli.config.as_ref()) {
        Ok(c) => c,
        Err(e) => {
            logger::init_cli_logger(cli.verbose, DEFAULT_LOG_FILTER);
            tracing::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    logger::init_cli_logger(cli.verbose, &config.log.filter);

    if let Err(e) = init(config) {
        tracing::error!("{e}");
        return ExitCode::FAILURE;
    }
    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillars_defaults_to_korean_locale() {
        let cli = Cli::try_parse_from(["saju", "pillars", "1990-05-15T14:30"]).unwrap();
        match cli.command {
            Commands::Pillars {
                date,
                unknown_time,
                locale,
                json,
            } => {
                assert_eq!(date, "1990-05-15T14:30");
                assert!(!unknown_time && !json);
                assert_eq!(locale, "ko-KR");
            }
            _ => panic!("expected pillars"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "saju", "terms", "2024", "--offset", "-300", "--config", "saju.toml", "-v",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("saju.toml")));
        assert!(matches!(
            cli.command,
            Commands::Terms {
                year: 2024,
                jie_only: false,
                offset: -300
            }
        ));
    }

    #[test]
    fn negative_cycle_position() {
        let cli = Cli::try_parse_from(["saju", "cycle", "-1"]).unwrap();
        assert!(matches!(cli.command, Commands::Cycle { index: -1 }));
    }

    #[test]
    fn compare_needs_two_dates() {
        assert!(Cli::try_parse_from(["saju", "compare", "1990-05-15T14:30"]).is_err());
    }

    #[test]
    fn display_zone_rejects_huge_offsets() {
        assert_eq!(display_zone(-300).unwrap().local_minus_utc(), -18_000);
        assert!(display_zone(1_500).is_err());
        assert!(display_zone(i32::MAX).is_err());
        assert!(display_zone(i32::MIN).is_err());
    }

    #[test]
    fn describe_names_element_and_animal() {
        let text = describe(Pillar::from_position(0));
        assert!(text.starts_with("甲子 (갑자)"), "{text}");
    }
}
