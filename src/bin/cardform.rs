//! CLI demo for the card form core.
//!
//! # Usage
//!
//! ```bash
//! # Classify a (partial) card number
//! cardform detect 4111111111111111
//! cardform detect 37 --output json
//!
//! # Show the card-front preview line for a half-typed number
//! cardform preview 411111 --mask '*'
//!
//! # Render the whole form as HTML
//! cardform render --number 4111111111111111 --name "JANE DOE" --ccv-focused
//! ```

use cardform::{detect, mask, policy, CardFieldValues, CardInputState, FormConfig, RuleTable};
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "cardform")]
#[command(author, version, about = "Credit card input form toolkit")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a card number prefix
    Detect {
        /// Card number, possibly partial (separators allowed)
        number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the masked card-front preview line
    Preview {
        /// Card number, possibly partial
        number: String,

        /// Mask character for digits not yet entered
        #[arg(short, long, default_value = "\u{2022}")]
        mask: char,
    },

    /// Render the form to HTML
    Render {
        /// Card number
        #[arg(long)]
        number: Option<String>,

        /// Cardholder name
        #[arg(long)]
        name: Option<String>,

        /// Expiry month
        #[arg(long)]
        month: Option<String>,

        /// Expiry year
        #[arg(long)]
        year: Option<String>,

        /// Card verification value
        #[arg(long)]
        ccv: Option<String>,

        /// Render with the CCV field focused (card back showing)
        #[arg(long)]
        ccv_focused: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(serde::Serialize)]
struct DetectReport<'a> {
    brand: &'a str,
    known: bool,
    number_capacity: usize,
    ccv_capacity: usize,
    groups: &'a [u8],
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Detect { number, output } => {
            let rule = detect(Some(&number));
            let report = DetectReport {
                brand: rule.brand.name(),
                known: rule.brand.is_known(),
                number_capacity: policy::number_capacity(rule),
                ccv_capacity: policy::ccv_capacity(rule),
                groups: rule.groups,
            };
            match output {
                OutputFormat::Text => {
                    println!("Brand:           {}", report.brand);
                    println!("Number capacity: {} digits", report.number_capacity);
                    println!("CCV capacity:    {} digits", report.ccv_capacity);
                    let groups: Vec<String> =
                        report.groups.iter().map(|g| g.to_string()).collect();
                    println!("Grouping:        {}", groups.join("-"));
                }
                OutputFormat::Json => match serde_json::to_string_pretty(&report) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("error: {}", e);
                        std::process::exit(1);
                    }
                },
            }
        }

        Commands::Preview { number, mask: mask_char } => {
            let rule = detect(Some(&number));
            println!("{}", mask::preview_line(&number, rule, mask_char));
        }

        Commands::Render {
            number,
            name,
            month,
            year,
            ccv,
            ccv_focused,
        } => {
            let values = CardFieldValues {
                number,
                name,
                month,
                year,
                ccv,
            };
            let mut state = CardInputState::new();
            if ccv_focused {
                state.focus_ccv();
            }
            let tree = cardform::render(
                &FormConfig::default(),
                &values,
                &state,
                &RuleTable::default(),
            );
            println!("{}", tree.to_html());
        }
    }
}
