//! An untyped λ-calculus term engine: free variables, capture-avoiding substitution, and
//! β/η-normalization.

use anyhow::Context;

pub mod combinator;
pub mod reduce;
pub mod scenario;
pub mod subst;
pub mod term;
pub mod var;

pub use reduce::{NormalizeError, Normalizer, Steps};
pub use scenario::Scenario;
pub use term::{mk_abs, mk_app, mk_var, Term, TermAbs, TermApp};
pub use var::{VarName, VarSet};

/// Normalizes the term of a named scenario.
pub fn process(name: &str, normalizer: &Normalizer, eta: bool) -> anyhow::Result<Term> {
    let scenario: Scenario = name.parse()?;
    let m = scenario.term();
    log::info!("{scenario}: {m}");
    let result = if eta {
        normalizer.beta_eta_normalize(&m)
    } else {
        normalizer.normalize(&m)
    };
    let n = result.with_context(|| format!("failed to normalize `{scenario}`"))?;
    log::info!("normal form: {n}");
    Ok(n)
}
