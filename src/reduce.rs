//! β- and η-normalization.

use crate::term::{mk_abs, mk_app, Term};

use thiserror::Error;

impl Term {
    /// Returns [true] if `self` contains no β-redex.
    pub fn is_beta_normal(&self) -> bool {
        match self {
            Term::Var(_) => true,
            Term::Abs(inner) => inner.body.is_beta_normal(),
            Term::App(inner) => {
                !inner.fun.is_abs() && inner.fun.is_beta_normal() && inner.arg.is_beta_normal()
            }
        }
    }

    /// Contracts the leftmost-outermost β-redex that is not under a binder.
    ///
    /// Returns `self` unchanged if there is no such redex. In particular an abstraction is
    /// returned as it is; reduce its body to go further.
    pub fn outer_left_most_beta_simp(&self) -> Term {
        self.beta_step().unwrap_or_else(|| self.clone())
    }

    /// Returns [None] if [Term::outer_left_most_beta_simp] makes no progress.
    pub fn beta_step(&self) -> Option<Term> {
        match self {
            Term::Var(_) | Term::Abs(_) => None,
            Term::App(inner) => {
                if let Term::Abs(abs) = &inner.fun {
                    return Some(abs.body.substitute(&inner.arg, abs.param));
                }
                if !inner.fun.is_beta_normal() {
                    let fun = inner.fun.beta_step()?;
                    Some(mk_app(fun, inner.arg.clone()))
                } else if !inner.arg.is_beta_normal() {
                    let arg = inner.arg.beta_step()?;
                    Some(mk_app(inner.fun.clone(), arg))
                } else {
                    None
                }
            }
        }
    }

    /// Rewrites `λ x, f x` to `f` when `x ∉ FV(f)`, in one pass over the term.
    pub fn eta_normalize(&self) -> Term {
        match self {
            Term::Var(_) => self.clone(),
            Term::Abs(inner) => {
                if let Term::App(app) = &inner.body {
                    if app.arg == Term::Var(inner.param) && !app.fun.has_free(inner.param) {
                        return app.fun.clone();
                    }
                }
                let body = inner.body.eta_normalize();
                if inner.body.ptr_eq(&body) {
                    self.clone()
                } else {
                    mk_abs(inner.param, body)
                }
            }
            Term::App(inner) => {
                let fun = inner.fun.eta_normalize();
                let arg = inner.arg.eta_normalize();
                if inner.fun.ptr_eq(&fun) && inner.arg.ptr_eq(&arg) {
                    self.clone()
                } else {
                    mk_app(fun, arg)
                }
            }
        }
    }

    /// The reduction sequence of [Term::outer_left_most_beta_simp] starting from `self`, ending
    /// once no step applies.
    ///
    /// The sequence is infinite for terms such as `(λx. x x) (λx. x x)`; bound it with
    /// [Iterator::take].
    pub fn steps(&self) -> Steps {
        Steps {
            next: Some(self.clone()),
        }
    }
}

pub struct Steps {
    next: Option<Term>,
}

impl Iterator for Steps {
    type Item = Term;

    fn next(&mut self) -> Option<Self::Item> {
        let m = self.next.take()?;
        self.next = m.beta_step();
        Some(m)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NormalizeError {
    #[error("no normal form reached within {limit} reduction steps")]
    StepLimitExceeded { limit: usize },
}

/// Computes β-normal forms in normal order under a step budget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Normalizer {
    pub max_steps: Option<usize>,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer {
            max_steps: Some(Normalizer::DEFAULT_MAX_STEPS),
        }
    }
}

impl Normalizer {
    pub const DEFAULT_MAX_STEPS: usize = 1000;

    pub fn new(max_steps: usize) -> Self {
        Normalizer {
            max_steps: Some(max_steps),
        }
    }

    pub fn unbounded() -> Self {
        Normalizer { max_steps: None }
    }

    pub fn normalize(&self, m: &Term) -> Result<Term, NormalizeError> {
        let mut steps = 0;
        let n = self.normalize_help(m, &mut steps)?;
        log::debug!("normalized in {steps} steps (size {} → {})", m.size(), n.size());
        Ok(n)
    }

    pub fn beta_eta_normalize(&self, m: &Term) -> Result<Term, NormalizeError> {
        Ok(self.normalize(m)?.eta_normalize())
    }

    fn normalize_help(&self, m: &Term, steps: &mut usize) -> Result<Term, NormalizeError> {
        let mut m = m.clone();
        loop {
            if let Term::Abs(inner) = &m {
                let body = self.normalize_help(&inner.body, steps)?;
                return Ok(mk_abs(inner.param, body));
            }
            if m.is_beta_normal() {
                return Ok(m);
            }
            let Some(n) = m.beta_step() else {
                // The head is a variable and every redex left sits under a binder.
                let Term::App(inner) = &m else {
                    unreachable!("only applications can be stuck");
                };
                let fun = self.normalize_help(&inner.fun, steps)?;
                let arg = self.normalize_help(&inner.arg, steps)?;
                return Ok(mk_app(fun, arg));
            };
            *steps += 1;
            if let Some(limit) = self.max_steps {
                if *steps > limit {
                    return Err(NormalizeError::StepLimitExceeded { limit });
                }
            }
            if log::log_enabled!(log::Level::Trace) {
                log::trace!("step {steps}: {n}");
            }
            m = n;
        }
    }
}
