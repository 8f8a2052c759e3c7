//! Loan amortization: fixed payment formula and month-by-month schedule

/// Fixed monthly payment of an amortizing loan
///
/// Returns 0 when there is nothing to amortize (`principal <= 0`) or no term
/// to amortize over. A 0% loan degrades to straight-line repayment.
pub fn monthly_loan_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    if principal <= 0.0 || years == 0 {
        return 0.0;
    }
    let r = annual_rate_pct / 100.0 / 12.0;
    let n = (years * 12) as i32;
    if r == 0.0 {
        return principal / n as f64;
    }
    principal * r * (1.0 + r).powi(n) / ((1.0 + r).powi(n) - 1.0)
}

/// Month-by-month amortization state for an active loan
///
/// The amortizing payment excludes borrower insurance: insurance is priced on
/// the initial loan amount and never reduces principal.
#[derive(Debug, Clone)]
pub struct LoanSchedule {
    /// Outstanding principal
    remaining_debt: f64,

    /// Monthly interest rate
    monthly_rate: f64,

    /// Fixed amortizing payment
    payment: f64,

    /// Loan term in months
    term_months: u32,

    /// Payments made so far
    months_elapsed: u32,
}

impl LoanSchedule {
    /// Start a schedule at month 0, before any payment
    pub fn new(principal: f64, annual_rate_pct: f64, years: u32) -> Self {
        Self {
            remaining_debt: principal.max(0.0),
            monthly_rate: annual_rate_pct / 100.0 / 12.0,
            payment: monthly_loan_payment(principal, annual_rate_pct, years),
            term_months: years * 12,
            months_elapsed: 0,
        }
    }

    /// Outstanding principal, 0 once repaid or past the term
    pub fn remaining_debt(&self) -> f64 {
        self.remaining_debt
    }

    /// Fixed amortizing payment (insurance excluded)
    pub fn payment(&self) -> f64 {
        self.payment
    }

    /// Apply one monthly payment
    pub fn amortize_month(&mut self) {
        if self.remaining_debt > 0.0 && self.months_elapsed < self.term_months {
            let interest = self.remaining_debt * self.monthly_rate;
            let principal_portion = self.payment - interest;
            self.remaining_debt = (self.remaining_debt - principal_portion).max(0.0);
        } else {
            // Past the term, whatever rounding residue is left is settled
            self.remaining_debt = 0.0;
        }
        self.months_elapsed += 1;
    }
}
