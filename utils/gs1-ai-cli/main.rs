use clap::Parser;
use gs1_ai_core::Context;
use log::info;
use snafu::{prelude::*, Whatever};
use std::process::ExitCode;

type Result<T, E = Whatever> = std::result::Result<T, E>;

/// Parses a GS1 AI payload — a raw element string, a bracketed AI
/// string, or a GS1 Digital Link URI — and prints its extracted AIs.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Cli {
    /// `#`-prefixed element string, `(ai)value…` bracketed string, or an
    /// `http(s)://` Digital Link URI
    input: String,

    /// Accept AIs not present in the registry as opaque CSET82 data
    #[arg(long)]
    permit_unknown_ais: bool,

    /// Repair a mismatched mod-10 check digit instead of rejecting it
    #[arg(long)]
    add_check_digit: bool,

    /// Print the human-readable interpretation (HRI) lines
    #[arg(long)]
    hri: bool,

    /// Prefix HRI lines with the AI's title
    #[arg(long)]
    include_titles: bool,
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "gs1_ai_cli=info");
    }
    pretty_env_logger::try_init().with_whatever_context(|_| "could not initialize logger")?;

    let mut ctx = Context::new();
    ctx.set_permit_unknown_ais(cli.permit_unknown_ais);
    ctx.set_add_check_digit(cli.add_check_digit);
    ctx.set_include_data_titles_in_hri(cli.include_titles);

    if cli.input.starts_with("http://") || cli.input.starts_with("https://") {
        info!("Parsing as a Digital Link URI");
        let _ = ctx.parse_dl_uri(&cli.input);
    } else if cli.input.starts_with('(') {
        info!("Parsing as a bracketed AI string");
        let _ = ctx.set_gs1_data_str(&cli.input);
    } else {
        info!("Parsing as a raw data string");
        let _ = ctx.set_data_str(&cli.input);
    }

    if ctx.has_error() {
        let markup = ctx.err_markup();
        if markup.is_empty() {
            whatever!("{}", ctx.err_msg());
        } else {
            whatever!("{} ({markup})", ctx.err_msg());
        }
    }

    println!("Element string: {}", ctx.get_data_str());
    for ai in ctx.get_extracted_ais() {
        println!("  ({}) {} = {}", ai.ai(), ai.title(), ai.value(ctx.get_data_str()));
    }

    if !ctx.dl_ignored_query_params().is_empty() {
        println!("Ignored query parameters: {}", ctx.dl_ignored_query_params().join(", "));
    }

    if cli.hri {
        println!("HRI:");
        for line in ctx.hri() {
            println!("  {line}");
        }
    }

    Ok(())
}
