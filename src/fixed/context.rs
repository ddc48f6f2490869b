/*
    Fixed-width contexts
*/

use num_bigint::BigUint;

use super::*;
use crate::Context;

impl FixedContext {
    /// Creates a new context for `width`-bit registers
    /// with `policy` set to `Policy::Lsb`.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            policy: Policy::Lsb,
        }
    }

    /// Sets the truncation policy.
    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the register width.
    pub fn width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Returns the register width.
    pub fn bit_width(&self) -> usize {
        self.width
    }

    /// Returns the truncation policy.
    pub fn truncation_policy(&self) -> Policy {
        self.policy
    }
}

impl Context for FixedContext {
    fn fit(&self, exact: BigUint) -> Result<BigUint, DomainError> {
        match self.policy {
            Policy::Lsb => lsb_trunc(exact, self.width),
            Policy::Msb => msb_trunc(exact, self.width),
            Policy::LsbApprox => lsb_trunc_approx(exact, self.width),
        }
    }
}

// 64-bit register with `Policy::Lsb`
impl Default for FixedContext {
    fn default() -> Self {
        Self::new(64)
    }
}
