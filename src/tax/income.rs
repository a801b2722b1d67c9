use crate::tax::es::{highest_limit, EXCESS_TAX_RATE, TAX_RATES};
use rust_decimal::Decimal;

/// Income tax calculation result, with the inputs echoed back for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncomeTaxReport {
    pub yield_total: Decimal,
    pub tax_paid: Decimal,
    pub to_deduct: Decimal,
    /// Per-bracket slices that were actually taxed
    pub slices: Vec<TaxedSlice>,
    /// Computed liability minus tax already paid; negative means refund due
    pub income_tax: Decimal,
}

/// One taxed slice of the net yield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaxedSlice {
    /// Upper limit of the bracket this slice falls in
    pub up_to: Decimal,
    pub rate: Decimal,
    /// Portion of the net yield taxed at `rate`
    pub amount: Decimal,
    pub tax: Decimal,
}

/// Calculate the annual income tax balance for a net yield using the
/// Spanish income tax brackets.
///
/// The net yield is the total yield minus the deductible amount, both
/// rounded to cents first. Each bracket taxes only the slice between the
/// previous limit and its own; income above the top bracket is taxed at
/// the excess rate. The balance reconciles the liability against tax
/// already withheld, so a negative result is a refund.
pub fn calculate_income_tax(
    yield_total: Decimal,
    tax_paid: Decimal,
    to_deduct: Decimal,
) -> IncomeTaxReport {
    let yield_net = yield_total.round_dp(2) - to_deduct.round_dp(2);

    let mut slices: Vec<TaxedSlice> = Vec::new();
    let mut gross_tax = Decimal::ZERO;
    let mut previous_limit = Decimal::ZERO;

    for bracket in TAX_RATES {
        if yield_net > bracket.limit {
            // the whole slice up to this bracket's limit is taxed at its rate
            let amount = bracket.limit - previous_limit;
            let tax = amount * bracket.rate;
            log::debug!(
                "bracket up to {}: {} @ {} = {}",
                bracket.limit,
                amount,
                bracket.rate,
                tax
            );
            slices.push(TaxedSlice {
                up_to: bracket.limit,
                rate: bracket.rate,
                amount,
                tax,
            });
            gross_tax += tax;
            previous_limit = bracket.limit;
        } else {
            // the net yield falls within this bracket; tax the remainder and stop
            let amount = yield_net - previous_limit;
            let tax = amount * bracket.rate;
            log::debug!(
                "bracket up to {}: {} @ {} = {} (final)",
                bracket.limit,
                amount,
                bracket.rate,
                tax
            );
            slices.push(TaxedSlice {
                up_to: bracket.limit,
                rate: bracket.rate,
                amount,
                tax,
            });
            gross_tax += tax;
            break;
        }
    }

    // Anything above the top bracket is taxed at the excess rate
    if yield_net > highest_limit() {
        let amount = yield_net - highest_limit();
        let tax = amount * EXCESS_TAX_RATE;
        log::debug!(
            "excess above {}: {} @ {} = {}",
            highest_limit(),
            amount,
            EXCESS_TAX_RATE,
            tax
        );
        slices.push(TaxedSlice {
            up_to: yield_net,
            rate: EXCESS_TAX_RATE,
            amount,
            tax,
        });
        gross_tax += tax;
    }

    let income_tax = (gross_tax.round_dp(2) - tax_paid.round_dp(2)).round_dp(2);

    IncomeTaxReport {
        yield_total,
        tax_paid,
        to_deduct,
        slices,
        income_tax,
    }
}
