//! Terminal-specific styling concerns that sit alongside color: which
//! [`Layer`] a color targets, and what color [`Fidelity`] a terminal or
//! runtime environment supports.
//!
//! SGR parameter emission for a given [`Colorant`](crate::termco::Colorant)
//! and [`Layer`] lives on `Colorant` itself (see
//! [`Colorant::sgr_parameters`](crate::termco::Colorant::sgr_parameters) and
//! [`Colorant::display`](crate::termco::Colorant::display)); this module only
//! defines the two enumerations that parameterize it.

mod context;

pub use context::{Fidelity, Layer};
