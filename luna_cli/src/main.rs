use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use luna_core::*;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "luna")]
#[command(about = "Personal menstrual cycle log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override the config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Seed the prediction RNG for reproducible output
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive cycle tracking session (default)
    Track,

    /// Show the fertile window for a given next-period start date
    Fertility {
        /// Next period start date (dd-mm-yyyy)
        date: String,

        /// Emit the window as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the effective configuration
    Config {
        /// Write the effective configuration to the default config path
        #[arg(long)]
        write: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    luna_core::logging::init();

    let cli = Cli::parse();

    let config = match cli.config.as_deref() {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.validate()?;

    match cli.command {
        Some(Commands::Fertility { date, json }) => cmd_fertility(&date, json),
        Some(Commands::Config { write }) => cmd_config(&config, write),
        Some(Commands::Track) | None => cmd_track(&config, cli.seed),
    }
}

/// A seeded generator when requested, fresh OS randomness otherwise.
fn session_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(seed) => {
            tracing::debug!("Seeding prediction RNG with {}", seed);
            Box::new(StdRng::seed_from_u64(seed))
        }
        None => Box::new(rand::thread_rng()),
    }
}

fn cmd_track(config: &Config, seed: Option<u64>) -> Result<()> {
    let mut tracker = CycleTracker::from_config(config);
    let mut rng = session_rng(seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print_menu()?;
        let Some(choice) = lines.next().transpose()? else {
            break; // stdin closed
        };

        match choice.trim() {
            "1" => add_cycle_flow(&mut tracker, &mut lines)?,
            "2" => show_predictions(&tracker, rng.as_mut()),
            "3" => show_log(&tracker),
            "4" => show_irregular(&tracker),
            "5" | "q" | "quit" => break,
            "" => {}
            other => println!("Unrecognized choice: {}", other),
        }
    }

    println!("Goodbye.");
    Ok(())
}

fn print_menu() -> Result<()> {
    println!();
    println!("1. Add period cycle");
    println!("2. Predict future periods");
    println!("3. Show cycle log");
    println!("4. Check irregular cycles");
    println!("5. Quit");
    print!("Enter your choice: ");
    io::stdout().flush()?;
    Ok(())
}

fn add_cycle_flow(
    tracker: &mut CycleTracker,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<()> {
    let Some(start) = prompt_date("Enter start date (dd-mm-yyyy): ", lines)? else {
        return Ok(());
    };
    let Some(end) = prompt_date("Enter end date (dd-mm-yyyy): ", lines)? else {
        return Ok(());
    };
    let Some(symptom_line) =
        prompt_line("Enter symptoms (comma-separated, blank for none): ", lines)?
    else {
        return Ok(());
    };

    let symptoms: Vec<String> = symptom_line
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect();

    let mut sink = ConsoleAdvisories::new();
    match tracker.add_cycle(start, end, symptoms, &mut sink) {
        Ok(()) => {
            let length = luna_core::date::days_between(start, end);
            println!(
                "Cycle recorded ({} days). Average cycle length is now {} days.",
                length,
                tracker.average_cycle_length()
            );
        }
        Err(err) => println!("Cycle not recorded: {}", err),
    }

    Ok(())
}

fn show_predictions(tracker: &CycleTracker, rng: &mut dyn RngCore) {
    match tracker.predict_future_periods(rng) {
        Ok(periods) => {
            println!();
            println!("----- Predicted Future Periods -----");
            for (i, period) in periods.iter().enumerate() {
                println!("Predicted Period {}: {}", i + 1, format_date(period.start));
                println!(
                    "Ovulation Date: {}",
                    format_date(period.fertility.ovulation)
                );
                println!(
                    "Fertile Window: {} to {}",
                    format_date(period.fertility.fertile_start),
                    format_date(period.fertility.fertile_end)
                );
            }
        }
        Err(_) => println!("No period data available to predict future periods."),
    }
}

fn show_log(tracker: &CycleTracker) {
    if tracker.cycles().is_empty() {
        println!("No cycles recorded yet.");
        return;
    }

    let rule = "-".repeat(55);
    println!("{}", rule);
    println!(
        "| {:<10} | {:<10} | {:<25} |",
        "Start Date", "End Date", "Symptoms"
    );
    println!("{}", rule);
    for cycle in tracker.cycles() {
        let symptoms = if cycle.symptoms.is_empty() {
            "None".to_string()
        } else {
            cycle.symptoms.join(", ")
        };
        println!(
            "| {:<10} | {:<10} | {:<25} |",
            format_date(cycle.start),
            format_date(cycle.end),
            symptoms
        );
    }
    println!("{}", rule);
}

fn show_irregular(tracker: &CycleTracker) {
    if tracker.cycles().len() < 2 {
        println!("Not enough data to check for irregular cycles.");
        return;
    }

    let flagged = tracker.check_irregular_cycles();
    if flagged.is_empty() {
        println!("No irregular cycles detected.");
        return;
    }

    for span in flagged {
        println!(
            "Warning: Cycle from {} to {} is irregular ({} day gap).",
            format_date(span.from_start),
            format_date(span.to_start),
            span.gap_days
        );
        println!("Consider tracking your symptoms or consulting a healthcare professional.");
    }
}

fn cmd_fertility(date: &str, json: bool) -> Result<()> {
    let start = parse_date(date)?;
    let window = fertility_for(start);

    if json {
        println!("{}", serde_json::to_string_pretty(&window)?);
    } else {
        println!("Ovulation Date: {}", format_date(window.ovulation));
        println!(
            "Fertile Window: {} to {}",
            format_date(window.fertile_start),
            format_date(window.fertile_end)
        );
    }

    Ok(())
}

fn cmd_config(config: &Config, write: bool) -> Result<()> {
    if write {
        config.save()?;
        println!(
            "Wrote configuration to {}",
            Config::default_config_path().display()
        );
    } else {
        let rendered = toml::to_string_pretty(config)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        print!("{}", rendered);
    }
    Ok(())
}

/// Prints advisories as they arrive, with a banner before the first one.
struct ConsoleAdvisories {
    banner_shown: bool,
}

impl ConsoleAdvisories {
    fn new() -> Self {
        Self {
            banner_shown: false,
        }
    }
}

impl AdvisorySink for ConsoleAdvisories {
    fn notify(&mut self, advisory: &Advisory) {
        if !self.banner_shown {
            println!("----- Health Reminders -----");
            self.banner_shown = true;
        }
        println!("Tip: {}", advisory.tip);
    }
}

fn prompt_date(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<NaiveDate>> {
    loop {
        print!("{}", prompt);
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            return Ok(None);
        };

        match parse_date(&line) {
            Ok(date) => return Ok(Some(date)),
            Err(err) => println!("{}", err),
        }
    }
}

fn prompt_line(
    prompt: &str,
    lines: &mut impl Iterator<Item = io::Result<String>>,
) -> Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;
    Ok(lines.next().transpose()?)
}
