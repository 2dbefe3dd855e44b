//! Labour + tax arithmetic of a bill.

pub const DEFAULT_TAX_RATE: f64 = 15.0;

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum TotalsError {
    #[error("labour amount must be greater than zero")]
    NonPositiveLabour,
    #[error("tax rate must be between 0 and 100 percent, got {0}")]
    TaxRateOutOfRange(f64),
    #[error("labour amount is too large")]
    Overflow,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvoiceTotals {
    pub labour: f64,
    /// Percent, 0..=100
    pub tax_rate: f64,
    pub tax: f64,
    pub total: f64,
}

impl InvoiceTotals {
    pub fn compute(labour: f64, tax_rate: f64) -> Result<Self, TotalsError> {
        if !labour.is_finite() || labour <= 0.0 {
            return Err(TotalsError::NonPositiveLabour);
        }
        if !(0.0..=100.0).contains(&tax_rate) {
            return Err(TotalsError::TaxRateOutOfRange(tax_rate));
        }
        let tax = labour * (tax_rate / 100.0);
        let total = labour + tax;
        if !tax.is_finite() || !total.is_finite() {
            return Err(TotalsError::Overflow);
        }
        Ok(Self {
            labour,
            tax_rate,
            tax,
            total,
        })
    }

    /// Preview shown while the form is being edited; never fails.
    pub fn preview(labour: f64, tax_rate: f64) -> Self {
        Self::compute(labour, tax_rate).unwrap_or(Self {
            labour: 0.0,
            tax_rate,
            tax: 0.0,
            total: 0.0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rate() {
        let t = InvoiceTotals::compute(200.0, DEFAULT_TAX_RATE).unwrap();
        assert_eq!(t.tax, 30.0);
        assert_eq!(t.total, 230.0);
    }

    #[test]
    fn test_zero_rate() {
        let t = InvoiceTotals::compute(99.5, 0.0).unwrap();
        assert_eq!(t.tax, 0.0);
        assert_eq!(t.total, 99.5);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert_eq!(
            InvoiceTotals::compute(0.0, 15.0),
            Err(TotalsError::NonPositiveLabour)
        );
        assert_eq!(
            InvoiceTotals::compute(-10.0, 15.0),
            Err(TotalsError::NonPositiveLabour)
        );
        assert_eq!(
            InvoiceTotals::compute(f64::NAN, 15.0),
            Err(TotalsError::NonPositiveLabour)
        );
        assert_eq!(
            InvoiceTotals::compute(100.0, 101.0),
            Err(TotalsError::TaxRateOutOfRange(101.0))
        );
    }

    #[test]
    fn test_huge_labour_is_rejected() {
        assert_eq!(
            InvoiceTotals::compute(1e308, 100.0),
            Err(TotalsError::Overflow)
        );
        assert_eq!(InvoiceTotals::compute(f64::MAX, 0.0).unwrap().total, f64::MAX);
        assert_eq!(InvoiceTotals::preview(1e308, 100.0).total, 0.0);
    }

    #[test]
    fn test_preview_of_empty_form() {
        let t = InvoiceTotals::preview(0.0, 15.0);
        assert_eq!(t.total, 0.0);
        assert_eq!(t.tax_rate, 15.0);
    }
}
