//! `onroad` -- on-road price and EMI quotation CLI.
//!
//! Subcommands wrap the `onroad-core` calculators for one-off quotes from
//! the shell; `onroad serve` starts the HTTP JSON API.

mod serve;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use rust_decimal::Decimal;

use onroad_core::{
    emi, locality, onroad, tariff, AmortizationRow, CityRecord, EmiQuote, EmiTerms, FuelClass,
    FuelType, Money, OnRoadBreakdown, PricingError, ResolutionKind, RtoState, BRACKET_FLOORS,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "onroad", version, about = "On-road price and EMI quotation engine")]
struct Cli {
    /// Output format: text or json
    #[arg(long, global = true, default_value = "text", value_enum)]
    output: OutputFormat,

    /// Suppress warnings and notes on stderr
    #[arg(long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Quote the on-road price for one vehicle
    Quote {
        /// Ex-showroom price in rupees; accepts "₹8,49,000" and plain numbers
        #[arg(long)]
        price: String,

        /// Fuel type label (petrol, diesel, cng, electric, hybrid, or a
        /// catalog variant like "EV" or "CNG + Petrol")
        #[arg(long)]
        fuel: String,

        /// Registration city, state, or "City, State"
        #[arg(long)]
        city: String,
    },

    /// Quote the monthly installment for a vehicle loan
    Emi {
        /// Vehicle price being financed, in rupees
        #[arg(long)]
        price: String,

        /// Down payment as a percentage of the price
        #[arg(long, default_value = "0")]
        down_payment: String,

        /// Loan tenure in whole years
        #[arg(long)]
        years: u32,

        /// Annual interest rate in percent
        #[arg(long)]
        rate: String,

        /// Print the year-by-year amortization schedule
        #[arg(long)]
        schedule: bool,
    },

    /// List registration tax schedules per state
    States {
        /// Show a single state instead of the whole table
        #[arg(long)]
        state: Option<String>,
    },

    /// List or search the known registration cities
    Cities {
        /// Case-insensitive substring matched against city and state names
        #[arg(long)]
        query: Option<String>,

        /// List only the popular cities surfaced first in pickers
        #[arg(long)]
        popular: bool,
    },

    /// Start the HTTP API server
    Serve {
        /// Port to listen on
        #[arg(long, default_value = "8080")]
        port: u16,

        /// Path to TLS certificate PEM file (requires --tls-key)
        #[arg(long)]
        tls_cert: Option<PathBuf>,

        /// Path to TLS private key PEM file (requires --tls-cert)
        #[arg(long)]
        tls_key: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Quote { price, fuel, city } => {
            cmd_quote(&price, &fuel, &city, cli.output, cli.quiet)
        }
        Commands::Emi {
            price,
            down_payment,
            years,
            rate,
            schedule,
        } => cmd_emi(&price, &down_payment, years, &rate, schedule, cli.output, cli.quiet),
        Commands::States { state } => cmd_states(state.as_deref(), cli.output, cli.quiet),
        Commands::Cities { query, popular } => cmd_cities(query.as_deref(), popular, cli.output),
        Commands::Serve {
            port,
            tls_cert,
            tls_key,
        } => {
            if tls_cert.is_some() != tls_key.is_some() {
                eprintln!("error: --tls-cert and --tls-key must both be provided");
                process::exit(1);
            }
            let rt = tokio::runtime::Runtime::new().expect("failed to create tokio runtime");
            if let Err(e) = rt.block_on(serve::start_server(port, tls_cert, tls_key)) {
                eprintln!("Server error: {}", e);
                process::exit(1);
            }
        }
    }
}

fn cmd_quote(price: &str, fuel: &str, city: &str, output: OutputFormat, quiet: bool) {
    let breakdown = price.parse::<Money>().and_then(|price| {
        let fuel = fuel.parse::<FuelType>()?;
        onroad::quote(price, fuel, city)
    });

    match breakdown {
        Ok(breakdown) => match output {
            OutputFormat::Json => print_json(&breakdown),
            OutputFormat::Text => print_breakdown(&breakdown, quiet),
        },
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    }
}

fn cmd_emi(
    price: &str,
    down_payment: &str,
    years: u32,
    rate: &str,
    schedule: bool,
    output: OutputFormat,
    quiet: bool,
) {
    let outcome = build_terms(price, down_payment, years, rate).and_then(|terms| {
        let quote = emi::quote(&terms)?;
        let rows = if schedule {
            Some(emi::schedule(&terms)?)
        } else {
            None
        };
        Ok((quote, rows))
    });

    let (quote, rows) = match outcome {
        Ok(pair) => pair,
        Err(e) => {
            report_error(&e.to_string(), output, quiet);
            process::exit(1);
        }
    };

    match output {
        OutputFormat::Json => {
            let mut value = serde_json::json!(&quote);
            if let Some(rows) = &rows {
                value["schedule"] = serde_json::json!(rows);
            }
            print_json(&value);
        }
        OutputFormat::Text => print_emi(&quote, rows.as_deref()),
    }
}

fn build_terms(
    price: &str,
    down_payment: &str,
    years: u32,
    rate: &str,
) -> Result<EmiTerms, PricingError> {
    Ok(EmiTerms {
        principal: price.parse::<Money>()?,
        down_payment_percent: parse_percent(down_payment, "down payment")?,
        tenure_years: years,
        annual_rate_percent: parse_percent(rate, "interest rate")?,
    })
}

/// Parse a percentage argument; a trailing `%` is tolerated.
fn parse_percent(raw: &str, what: &str) -> Result<Decimal, PricingError> {
    raw.trim()
        .trim_end_matches('%')
        .parse::<Decimal>()
        .map_err(|_| PricingError::InvalidInput {
            message: format!("{} '{}' is not a number", what, raw),
        })
}

fn cmd_states(filter: Option<&str>, output: OutputFormat, quiet: bool) {
    let states: Vec<RtoState> = match filter {
        Some(raw) => match raw.parse::<RtoState>() {
            Ok(state) => vec![state],
            Err(e) => {
                report_error(&e.to_string(), output, quiet);
                process::exit(1);
            }
        },
        None => RtoState::ALL.to_vec(),
    };

    match output {
        OutputFormat::Json => print_json(&states_value(&states)),
        OutputFormat::Text => {
            println!("Price brackets: {}", bracket_legend());
            for state in states {
                println!();
                println!("{}", state.name());
                for class in FuelClass::ALL {
                    let levies: Vec<String> = tariff::brackets_for(state, class)
                        .iter()
                        .map(|bracket| bracket.levy.to_string())
                        .collect();
                    println!("  {:<9} {}", class.name(), levies.join(" | "));
                }
            }
        }
    }
}

fn cmd_cities(query: Option<&str>, popular: bool, output: OutputFormat) {
    let records: Vec<&CityRecord> = match (query, popular) {
        (Some(q), _) => locality::search(q),
        (None, true) => locality::popular_cities(),
        (None, false) => locality::all_cities().iter().collect(),
    };

    match output {
        OutputFormat::Json => print_json(&serde_json::json!({"cities": records})),
        OutputFormat::Text => {
            for record in &records {
                println!("{:<18} {}", record.city, record.state.name());
            }
        }
    }
}

/// The `/pricing/states` catalog document, shared by the CLI and the server.
pub(crate) fn states_value(states: &[RtoState]) -> serde_json::Value {
    let entries: Vec<serde_json::Value> = states
        .iter()
        .map(|&state| {
            let mut entry = serde_json::json!({"state": state.name()});
            for class in FuelClass::ALL {
                let levies: Vec<String> = tariff::brackets_for(state, class)
                    .iter()
                    .map(|bracket| bracket.levy.to_string())
                    .collect();
                entry[class.name()] = serde_json::json!(levies);
            }
            entry
        })
        .collect();

    serde_json::json!({
        "bracketFloors": BRACKET_FLOORS,
        "states": entries,
    })
}

/// "0-5L | 5-10L | ... | 40L+", derived from the bracket floors.
fn bracket_legend() -> String {
    let lakh = |rupees: u64| rupees / 100_000;
    let mut parts = Vec::with_capacity(BRACKET_FLOORS.len());
    for (i, floor) in BRACKET_FLOORS.iter().enumerate() {
        match BRACKET_FLOORS.get(i + 1) {
            Some(next) => parts.push(format!("{}-{}L", lakh(*floor), lakh(*next))),
            None => parts.push(format!("{}L+", lakh(*floor))),
        }
    }
    parts.join(" | ")
}

fn print_breakdown(breakdown: &OnRoadBreakdown, quiet: bool) {
    if breakdown.locality.kind == ResolutionKind::Fallback && !quiet {
        eprintln!(
            "note: unrecognized city '{}', quoting {} rates",
            breakdown.locality.city,
            breakdown.locality.state.name()
        );
    }

    println!(
        "On-road price, registered in {} ({})",
        breakdown.locality.city,
        breakdown.locality.state.name()
    );
    println!();
    print_line("Ex-showroom price", breakdown.ex_showroom_price);
    print_line("Registration tax", breakdown.registration_tax);
    print_line("Road safety cess", breakdown.road_safety_tax);
    print_line("Insurance (est.)", breakdown.insurance_estimate);
    if breakdown.tcs.is_positive() {
        print_line("TCS", breakdown.tcs);
    }
    print_line("Other charges", breakdown.other_charges);
    print_line("Hypothecation", breakdown.hypothecation);
    print_line("FASTag", breakdown.fastag);
    println!("  {:-<40}", "");
    print_line("Total on-road price", breakdown.total_on_road_price);
    println!();
    println!("  about {}", breakdown.total_on_road_price.format_lakh());
}

fn print_emi(quote: &EmiQuote, rows: Option<&[AmortizationRow]>) {
    print_line("Principal", quote.principal);
    print_line("Down payment", quote.down_payment);
    print_line("Loan amount", quote.loan_amount);
    println!(
        "  {:<22} {:>16}",
        "Tenure",
        format!("{} months", quote.tenure_months)
    );
    print_line("Monthly installment", quote.monthly_installment);
    print_line("Total payment", quote.total_payment);
    print_line("Total interest", quote.total_interest);

    if let Some(rows) = rows {
        println!();
        println!(
            "  {:>6}  {:>16}  {:>15}  {:>14}",
            "After", "Principal paid", "Interest paid", "Balance"
        );
        for row in rows {
            println!(
                "  {:>6}  {:>16}  {:>15}  {:>14}",
                row.months,
                format!("₹{}", row.principal_paid.format_inr()),
                format!("₹{}", row.interest_paid.format_inr()),
                format!("₹{}", row.balance.format_inr())
            );
        }
    }
}

fn print_line(label: &str, amount: Money) {
    println!(
        "  {:<22} {:>16}",
        label,
        format!("₹{}", amount.format_inr())
    );
}

fn print_json<T: serde::Serialize>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: failed to serialize output: {}", e);
            process::exit(1);
        }
    }
}

/// Report an error to stderr, respecting output format and quiet mode.
pub(crate) fn report_error(msg: &str, output: OutputFormat, quiet: bool) {
    if quiet {
        return;
    }
    match output {
        OutputFormat::Text => eprintln!("error: {}", msg),
        OutputFormat::Json => eprintln!("{{\"error\": \"{}\"}}", msg.replace('"', "\\\"")),
    }
}
