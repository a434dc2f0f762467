use std::io::Write;

use anyhow::Context;
use clap::Parser;
use currency::CurrencyFormat;
use report::TipReport;
use tracing_subscriber::EnvFilter;

mod currency;
mod form;
mod input;
mod report;
mod session;
mod tip;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Config {
    #[arg(
        long,
        long_help = "The bill amount. Text that is not a number counts as 0. Prompts for every field interactively when omitted.",
        value_name = "AMOUNT",
        env = "TIP_CALCULATOR_AMOUNT"
    )]
    amount: Option<String>,

    #[arg(
        long,
        long_help = "The tip percentage, e.g. 20 for 20%. Defaults to 15 when omitted; text that is not a number counts as 0.",
        value_name = "PERCENT",
        env = "TIP_CALCULATOR_TIP_PERCENT"
    )]
    tip_percent: Option<String>,

    #[arg(
        long,
        long_help = "Round the tip up to the next whole currency unit. The environment variable accepts true/false, yes/no, on/off and 1/0.",
        env = "TIP_CALCULATOR_ROUND_UP",
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    round_up: bool,

    #[arg(
        long,
        long_help = "Locale used to format the tip, e.g. en-US or de_DE.UTF-8. Defaults to the host locale from LC_ALL, LC_MONETARY or LANG.",
        value_name = "LOCALE",
        env = "TIP_CALCULATOR_LOCALE"
    )]
    locale: Option<String>,

    #[arg(long, default_value = "text", value_name = "FORMAT")]
    output: OutputFormat,

    #[arg(long, default_value = "compact", value_name = "FORMAT")]
    log_format: LogFormat,
}

#[derive(Clone, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, clap::ValueEnum)]
enum LogFormat {
    Compact,
    Json,
}

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Set up logging
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    match config.log_format {
        LogFormat::Compact => {
            let format = tracing_subscriber::fmt::format().compact();
            tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
        LogFormat::Json => {
            let format = tracing_subscriber::fmt::format().json();
            tracing_subscriber::fmt()
                .event_format(format)
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    };

    let format = match &config.locale {
        Some(tag) => CurrencyFormat::for_locale(tag)
            .with_context(|| format!("Resolving currency format for locale {tag}"))?,
        None => CurrencyFormat::host(),
    };
    tracing::debug!(locale = format.locale, "Currency format selected");

    let report = match &config.amount {
        Some(amount) => {
            let amount = input::normalize(amount);
            let tip_percent = config.tip_percent.as_deref().map(input::normalize);
            tracing::debug!(%amount, ?tip_percent, round_up = config.round_up, "Calculating tip");

            let report = TipReport::new(amount, tip_percent, config.round_up, &format);
            if let OutputFormat::Text = config.output {
                println!("{}", form::tip_amount_label(&report.formatted));
            }
            report
        }
        None => {
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let form = session::run(stdin.lock(), stdout.lock(), &format)
                .context("Running interactive session")?;

            TipReport::new(form.amount(), Some(form.tip_percent()), form.round_up(), &format)
        }
    };

    if let OutputFormat::Json = config.output {
        let mut stdout = std::io::stdout().lock();
        serde_json::to_writer(&mut stdout, &report).context("Writing JSON report")?;
        writeln!(stdout)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::Config;

    // Single test so nothing else reads the variable while it is set.
    #[test]
    fn round_up_flag() {
        let config = Config::try_parse_from(["tip-calculator", "--round-up"]).unwrap();
        assert!(config.round_up);

        let config = Config::try_parse_from(["tip-calculator"]).unwrap();
        assert!(!config.round_up);

        for (value, expected) in [("1", true), ("yes", true), ("on", true), ("0", false)] {
            unsafe { std::env::set_var("TIP_CALCULATOR_ROUND_UP", value) };
            let config = Config::try_parse_from(["tip-calculator"]).unwrap();
            assert_eq!(config.round_up, expected, "TIP_CALCULATOR_ROUND_UP={value}");
        }
        unsafe { std::env::remove_var("TIP_CALCULATOR_ROUND_UP") };
    }
}
