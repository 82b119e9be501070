use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use drik::{
    Engine, Location, SolarCalendar, Vaar, day_of_week, days_in_month, gregorian_to_hindu,
    gregorian_to_jd, gregorian_to_solar, jd_to_local_hms, month_panchang, tithi_at_sunrise,
    validate_gregorian,
};
use drik_config::Overrides;

/// Drik panchang: lunisolar and regional solar calendars for any date
/// and location.
#[derive(Parser)]
#[command(name = "drik", version)]
struct Cli {
    /// Gregorian year
    #[arg(short = 'y', long = "year")]
    year: i32,

    /// Gregorian month (1-12)
    #[arg(short = 'm', long = "month")]
    month: u32,

    /// Day of month; omit for a full-month table
    #[arg(short = 'd', long = "day")]
    day: Option<u32>,

    /// Solar calendar (tamil | bengali | odia | malayalam); omit for the
    /// lunisolar panchang
    #[arg(short = 's', long = "solar")]
    solar: Option<String>,

    /// Location as LAT,LON (degrees north, degrees east)
    #[arg(short = 'l', long = "location")]
    location: Option<String>,

    /// UTC offset in hours
    #[arg(short = 'u', long = "utc-offset")]
    utc_offset: Option<f64>,

    /// Built-in location preset (delhi, mumbai, kolkata, chennai,
    /// bhubaneswar, thiruvananthapuram)
    #[arg(long)]
    preset: Option<String>,

    /// TOML file with latitude/longitude/altitude/utc_offset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the day as JSON (requires -d)
    #[arg(long)]
    json: bool,
}

fn bad_args(msg: &str) -> ExitCode {
    eprintln!("error: {msg}");
    ExitCode::from(2)
}

fn parse_lat_lon(s: &str) -> Option<(f64, f64)> {
    let (lat, lon) = s.split_once(',')?;
    Some((lat.trim().parse().ok()?, lon.trim().parse().ok()?))
}

fn hms(jd_ut: f64, utc_offset: f64) -> String {
    let (h, m, s) = jd_to_local_hms(jd_ut, utc_offset);
    format!("{h:02}:{m:02}:{s:02}")
}

fn print_lunisolar_day(engine: &mut Engine, cli: &Cli, day: u32, loc: &Location) -> Result<(), String> {
    let ti = tithi_at_sunrise(engine, cli.year, cli.month, day, loc).map_err(|e| e.to_string())?;
    let hd = gregorian_to_hindu(engine, cli.year, cli.month, day, loc).map_err(|e| e.to_string())?;
    let jd = gregorian_to_jd(cli.year, cli.month, day);
    let rise = drik::sunrise_jd(engine, jd, loc).map_err(|e| e.to_string())?;
    let vaar = Vaar::from_dow(day_of_week(jd));

    if cli.json {
        let value = serde_json::json!({
            "date": format!("{:04}-{:02}-{:02}", cli.year, cli.month, day),
            "weekday": vaar.english(),
            "sunrise": hms(rise, loc.utc_offset),
            "tithi": {
                "number": ti.number,
                "paksha": ti.paksha.name(),
                "name": ti.name(),
                "start": ti.jd_start,
                "end": ti.jd_end,
                "kshaya": ti.is_kshaya,
                "adhika": hd.is_adhika_tithi,
            },
            "masa": {
                "name": hd.masa.name(),
                "adhika": hd.is_adhika_masa,
            },
            "year_saka": hd.year_saka,
            "year_vikram": hd.year_vikram,
        });
        println!("{value:#}");
        return Ok(());
    }

    let adhika = if hd.is_adhika_masa { "Adhika " } else { "" };
    println!("Date:       {:04}-{:02}-{:02} ({})", cli.year, cli.month, day, vaar.english());
    println!("Sunrise:    {} local", hms(rise, loc.utc_offset));
    println!(
        "Tithi:      {} {} ({}-{})",
        ti.paksha.name(),
        ti.name(),
        ti.paksha.letter(),
        ti.in_paksha
    );
    println!(
        "Hindu Date: {}{} {} {}, Saka {} (Vikram {})",
        adhika,
        hd.masa.name(),
        hd.paksha.name(),
        hd.tithi,
        hd.year_saka,
        hd.year_vikram
    );
    if ti.is_kshaya {
        println!("Note:       kshaya tithi (the next tithi is skipped)");
    }
    if hd.is_adhika_tithi {
        println!("Note:       adhika tithi (repeats the previous day)");
    }
    Ok(())
}

fn print_lunisolar_month(engine: &mut Engine, cli: &Cli, loc: &Location) -> Result<(), String> {
    println!(
        "Panchang {:04}-{:02} ({:.4}N, {:.4}E, UTC{:+.1})\n",
        cli.year, cli.month, loc.latitude, loc.longitude, loc.utc_offset
    );
    println!(
        "{:<12} {:<5} {:<10} {:<28} {}",
        "Date", "Day", "Sunrise", "Tithi", "Hindu Date"
    );

    let days = month_panchang(engine, cli.year, cli.month, loc).map_err(|e| e.to_string())?;
    for pd in &days {
        let adhika = if pd.hindu.is_adhika_masa { "Adhika " } else { "" };
        println!(
            "{:04}-{:02}-{:02}   {:<5} {:<10} {:<28} {}{} {} {}, Saka {}",
            pd.year,
            pd.month,
            pd.day,
            pd.vaar.abbrev(),
            hms(pd.jd_sunrise, loc.utc_offset),
            format!(
                "{} {} ({}-{})",
                pd.tithi.paksha.name(),
                pd.tithi.name(),
                pd.tithi.paksha.letter(),
                pd.tithi.in_paksha
            ),
            adhika,
            pd.hindu.masa.name(),
            pd.hindu.paksha.name(),
            pd.hindu.tithi,
            pd.hindu.year_saka
        );
    }
    Ok(())
}

fn print_solar_day(
    engine: &mut Engine,
    cli: &Cli,
    day: u32,
    loc: &Location,
    cal: SolarCalendar,
) -> Result<(), String> {
    let sd = gregorian_to_solar(engine, cli.year, cli.month, day, loc, cal)
        .map_err(|e| e.to_string())?;
    let jd = gregorian_to_jd(cli.year, cli.month, day);
    let vaar = Vaar::from_dow(day_of_week(jd));

    if cli.json {
        let value = serde_json::json!({
            "date": format!("{:04}-{:02}-{:02}", cli.year, cli.month, day),
            "weekday": vaar.english(),
            "calendar": cal.name(),
            "era": cal.era_name(),
            "year": sd.year,
            "month": sd.month,
            "month_name": cal.month_name(sd.month),
            "day": sd.day,
            "rashi": sd.rashi,
        });
        println!("{value:#}");
        return Ok(());
    }

    println!("Date:        {:04}-{:02}-{:02} ({})", cli.year, cli.month, day, vaar.english());
    println!("Calendar:    {} solar", cal.name());
    println!(
        "Solar Date:  {} {}, {} ({})",
        cal.month_name(sd.month),
        sd.day,
        sd.year,
        cal.era_name()
    );
    Ok(())
}

fn print_solar_month(
    engine: &mut Engine,
    cli: &Cli,
    loc: &Location,
    cal: SolarCalendar,
) -> Result<(), String> {
    let first = gregorian_to_solar(engine, cli.year, cli.month, 1, loc, cal)
        .map_err(|e| e.to_string())?;
    println!(
        "{} solar calendar — {} {} ({})",
        cal.name(),
        cal.month_name(first.month),
        first.year,
        cal.era_name()
    );
    println!("Gregorian {:04}-{:02}\n", cli.year, cli.month);
    println!("{:<12} {:<5} {}", "Date", "Day", "Solar Date");

    for d in 1..=days_in_month(cli.year, cli.month) {
        let sd = gregorian_to_solar(engine, cli.year, cli.month, d, loc, cal)
            .map_err(|e| e.to_string())?;
        let vaar = Vaar::from_dow(day_of_week(gregorian_to_jd(cli.year, cli.month, d)));
        println!(
            "{:04}-{:02}-{:02}   {:<5} {} {}, {}",
            cli.year,
            cli.month,
            d,
            vaar.abbrev(),
            cal.month_name(sd.month),
            sd.day,
            sd.year
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let first_day = cli.day.unwrap_or(1);
    if validate_gregorian(cli.year, cli.month, first_day).is_err() {
        return bad_args("date outside the supported range (years 1500-2200, valid month/day)");
    }
    if cli.json && cli.day.is_none() {
        return bad_args("--json requires -d DAY");
    }

    let cal = match cli.solar.as_deref() {
        None => None,
        Some(name) => match SolarCalendar::from_cli_name(name) {
            Some(c) => Some(c),
            None => {
                return bad_args("unknown solar calendar; expected tamil, bengali, odia, or malayalam");
            }
        },
    };

    let lat_lon = match cli.location.as_deref() {
        None => None,
        Some(s) => match parse_lat_lon(s) {
            Some(pair) => Some(pair),
            None => return bad_args("invalid location; expected LAT,LON"),
        },
    };

    let loc = match drik_config::resolve(
        cli.config.as_deref(),
        cli.preset.as_deref(),
        Overrides {
            lat_lon,
            utc_offset: cli.utc_offset,
        },
    ) {
        Ok(loc) => loc,
        Err(e) => return bad_args(&e.to_string()),
    };

    let mut engine = Engine::new();
    let result = match (cal, cli.day) {
        (None, Some(d)) => print_lunisolar_day(&mut engine, &cli, d, &loc),
        (None, None) => print_lunisolar_month(&mut engine, &cli, &loc),
        (Some(c), Some(d)) => print_solar_day(&mut engine, &cli, d, &loc, c),
        (Some(c), None) => print_solar_month(&mut engine, &cli, &loc, c),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(msg) => {
            eprintln!("error: {msg}");
            ExitCode::FAILURE
        }
    }
}
