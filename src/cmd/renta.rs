//! Renta command - annual income tax calculation and report

use crate::tax::income::{calculate_income_tax, IncomeTaxReport};
use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;
use tabled::{
    settings::{object::Rows, Alignment, Modify, Style},
    Table, Tabled,
};

const TEMPLATE: &str = include_str!("income_tax.txt");

#[derive(Args, Debug)]
#[command(after_help = "Example: autogest renta 30000 6000 -d 5750")]
pub struct RentaCommand {
    /// The total yield to calculate the income tax for
    yield_total: Decimal,

    /// The amount of tax already paid
    tax_paid: Decimal,

    /// The amount of money to deduct from the total yield
    #[arg(short = 'd', long = "to-deduct", default_value = "0")]
    to_deduct: Decimal,

    /// Output as JSON instead of the rendered report
    #[arg(long)]
    json: bool,

    /// Also print the per-bracket breakdown
    #[arg(long)]
    breakdown: bool,
}

/// Report data for JSON output
#[derive(Debug, Serialize)]
struct RentaData {
    yield_total: String,
    tax_paid: String,
    to_deduct: String,
    income_tax: String,
}

impl RentaCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let report = calculate_income_tax(self.yield_total, self.tax_paid, self.to_deduct);

        if self.json {
            self.print_json(&report)?;
        } else {
            println!("{}", render_report(&report));
        }

        if self.breakdown {
            self.print_breakdown(&report);
        }
        Ok(())
    }

    fn print_json(&self, report: &IncomeTaxReport) -> anyhow::Result<()> {
        let data = RentaData {
            yield_total: format!("{:.2}", report.yield_total),
            tax_paid: format!("{:.2}", report.tax_paid),
            to_deduct: format!("{:.2}", report.to_deduct),
            income_tax: format!("{:.2}", report.income_tax),
        };
        println!("{}", serde_json::to_string_pretty(&data)?);
        Ok(())
    }

    fn print_breakdown(&self, report: &IncomeTaxReport) {
        let rows: Vec<BracketRow> = report
            .slices
            .iter()
            .map(|s| BracketRow {
                up_to: format!("{:.2}", s.up_to),
                rate: format!("{:.2}", s.rate),
                amount: format_eur(s.amount),
                tax: format_eur(s.tax),
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Rows::new(1..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
    }
}

/// Row for the bracket breakdown table
#[derive(Debug, Clone, Tabled)]
struct BracketRow {
    #[tabled(rename = "Up To")]
    up_to: String,

    #[tabled(rename = "Rate")]
    rate: String,

    #[tabled(rename = "Taxed Amount")]
    amount: String,

    #[tabled(rename = "Tax")]
    tax: String,
}

fn render_report(report: &IncomeTaxReport) -> String {
    TEMPLATE
        .replace("__YIELD_TOTAL__", &format_eur(report.yield_total))
        .replace("__TAX_PAID__", &format_eur(report.tax_paid))
        .replace("__TO_DEDUCT__", &format_eur(report.to_deduct))
        .replace("__INCOME_TAX__", &format_eur(report.income_tax))
}

fn format_eur(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format!("-{:.2} EUR", amount.abs())
    } else {
        format!("{:.2} EUR", amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn report_renders_all_four_values() {
        let report = calculate_income_tax(dec!(30000), dec!(6000), dec!(5750));
        let rendered = render_report(&report);
        assert!(rendered.contains("30000.00 EUR"));
        assert!(rendered.contains("6000.00 EUR"));
        assert!(rendered.contains("5750.00 EUR"));
        assert!(rendered.contains("-559.44 EUR"));
        assert!(!rendered.contains("__"), "unreplaced placeholder: {rendered}");
    }

    #[test]
    fn format_eur_signs() {
        assert_eq!(format_eur(dec!(4201.63)), "4201.63 EUR");
        assert_eq!(format_eur(dec!(-559.44)), "-559.44 EUR");
        assert_eq!(format_eur(dec!(0)), "0.00 EUR");
    }
}
