use anyhow::Result;
use clap::Parser;

use quick_ledger::cli::{add_entry, SET_ACCT_MESSAGE};
use quick_ledger::config::paths::expand_home;
use quick_ledger::config::{ConfigResolver, Overrides, QlPaths};
use quick_ledger::terminal::Terminal;
use quick_ledger::QlError;

#[derive(Parser)]
#[command(
    name = "ql",
    version,
    about = "ql: Quick `ledger' entry creation tool.",
    long_about = "ql asks for a merchant, an expense category, an account and an \
                  amount, then appends the transaction to your ledger file. The \
                  ledger file is remembered in ~/.qlrc after the first run."
)]
struct Cli {
    /// Ledger file to append to for this run only
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    ledger_file: Option<String>,

    /// Account to post against for this run only, used verbatim
    #[arg(short, long)]
    account: Option<String>,

    /// Not implemented
    #[arg(short, long)]
    merchant: Option<String>,

    /// Add accounts to ql's configuration file (not implemented)
    #[arg(long = "set-acct")]
    set_acct: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.set_acct {
        println!("{}", SET_ACCT_MESSAGE);
        return Ok(());
    }

    if let Some(merchant) = &cli.merchant {
        log::debug!("ignoring reserved --merchant {}", merchant);
    }

    let paths = QlPaths::new()?;
    let resolver = ConfigResolver::new(paths);
    let mut terminal = Terminal::new()?;

    let overrides = Overrides {
        ledger_file: cli.ledger_file.as_deref().map(expand_home),
        account: cli.account,
    };
    let today = chrono::Local::now().date_naive();

    match add_entry(&resolver, overrides, &mut terminal, today) {
        Ok(_) => Ok(()),
        Err(QlError::Cancelled) => {
            println!("\nUser exit.");
            std::process::exit(QlError::Cancelled.exit_code());
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(e.exit_code());
        }
    }
}
