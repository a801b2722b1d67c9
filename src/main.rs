use clap::{Parser, Subcommand};

mod cmd;
mod tax;

/// Autogest is a CLI tool for managing your personal finances in Spain
#[derive(Parser, Debug)]
#[command(name = "autogest", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Calculate the year income tax for a net yield using the Spanish income tax brackets
    Renta(cmd::renta::RentaCommand),
    /// Calculate the deductions for a list of invoices
    Deductions(cmd::deductions::DeductionsCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Renta(renta) => renta.exec(),
        Command::Deductions(deductions) => deductions.exec(),
    }
}
