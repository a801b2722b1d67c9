use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// A single IRPF bracket: the slice of income between the previous
/// bracket's limit and `limit` is taxed at `rate`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub limit: Decimal,
    pub rate: Decimal,
}

/// State IRPF scale for general income, ascending by limit.
///
/// The calculation walks the slices in this order and relies on the
/// adjacency of consecutive limits, so this is an ordered sequence,
/// not a map.
pub const TAX_RATES: [Bracket; 5] = [
    Bracket {
        limit: dec!(12450),
        rate: dec!(0.19),
    },
    Bracket {
        limit: dec!(20199),
        rate: dec!(0.24),
    },
    Bracket {
        limit: dec!(35199),
        rate: dec!(0.30),
    },
    Bracket {
        limit: dec!(59999),
        rate: dec!(0.37),
    },
    Bracket {
        limit: dec!(299999),
        rate: dec!(0.45),
    },
];

/// Rate applied to income above the highest bracket limit.
pub const EXCESS_TAX_RATE: Decimal = dec!(0.47);

/// Upper limit of the top bracket.
pub fn highest_limit() -> Decimal {
    TAX_RATES[TAX_RATES.len() - 1].limit
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schedule_is_ascending() {
        for pair in TAX_RATES.windows(2) {
            assert!(
                pair[0].limit < pair[1].limit,
                "limits must be strictly increasing: {} >= {}",
                pair[0].limit,
                pair[1].limit
            );
        }
    }

    #[test]
    fn rates_are_sane() {
        for bracket in TAX_RATES {
            assert!(bracket.rate > Decimal::ZERO && bracket.rate < Decimal::ONE);
        }
        for pair in TAX_RATES.windows(2) {
            assert!(pair[0].rate <= pair[1].rate);
        }
        assert!(EXCESS_TAX_RATE > TAX_RATES[TAX_RATES.len() - 1].rate);
    }

    #[test]
    fn published_figures() {
        assert_eq!(TAX_RATES[0].limit, dec!(12450));
        assert_eq!(TAX_RATES[0].rate, dec!(0.19));
        assert_eq!(TAX_RATES[4].limit, dec!(299999));
        assert_eq!(TAX_RATES[4].rate, dec!(0.45));
        assert_eq!(EXCESS_TAX_RATE, dec!(0.47));
        assert_eq!(highest_limit(), dec!(299999));
    }
}
