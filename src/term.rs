//! Named representation of untyped λ-terms.
//!
//! Terms are immutable trees. Subterms are shared through [Arc], so cloning a term is cheap and
//! every transformation builds a new term while leaving its input intact.

use crate::var::{VarName, VarSet};

use std::fmt::Display;
use std::sync::Arc;

/// Equality is structural. Use [Term::alpha_eq] to compare up to renaming of bound variables.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Term {
    Var(VarName),
    Abs(Arc<TermAbs>),
    App(Arc<TermApp>),
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TermAbs {
    pub param: VarName,
    pub body: Term,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TermApp {
    pub fun: Term,
    pub arg: Term,
}

pub fn mk_var(name: VarName) -> Term {
    Term::Var(name)
}

pub fn mk_abs(param: VarName, body: Term) -> Term {
    Term::Abs(Arc::new(TermAbs { param, body }))
}

pub fn mk_app(fun: Term, arg: Term) -> Term {
    Term::App(Arc::new(TermApp { fun, arg }))
}

/// Diagnostic rendering: `x0`, `(lam x0 x0)`, `(x0 x1)`.
impl Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Var(name) => write!(f, "{name}"),
            Term::Abs(inner) => write!(f, "(lam {} {})", inner.param, inner.body),
            Term::App(inner) => write!(f, "({} {})", inner.fun, inner.arg),
        }
    }
}

impl Term {
    pub(crate) fn ptr_eq(&self, other: &Term) -> bool {
        match (self, other) {
            (Term::Var(a), Term::Var(b)) => a == b,
            (Term::Abs(a), Term::Abs(b)) => Arc::ptr_eq(a, b),
            (Term::App(a), Term::App(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    pub fn is_abs(&self) -> bool {
        matches!(self, Term::Abs(_))
    }

    /// Returns `λ x₁ ⋯ xₙ, self`.
    pub fn abs(&self, params: impl IntoIterator<Item = VarName>) -> Term {
        let params: Vec<_> = params.into_iter().collect();
        let mut m = self.clone();
        for &x in params.iter().rev() {
            m = mk_abs(x, m);
        }
        m
    }

    /// Returns the application `self l₁ ⋯ lₙ`.
    pub fn apply(&self, args: impl IntoIterator<Item = Term>) -> Term {
        let mut fun = self.clone();
        for arg in args {
            fun = mk_app(fun, arg);
        }
        fun
    }

    /// FV(self)
    pub fn free_vars(&self) -> VarSet {
        match self {
            Term::Var(name) => VarSet::singleton(*name),
            Term::Abs(inner) => inner.body.free_vars().remove(inner.param),
            Term::App(inner) => inner.fun.free_vars().union(&inner.arg.free_vars()),
        }
    }

    /// x ∈ FV(self)
    pub fn has_free(&self, name: VarName) -> bool {
        match self {
            Term::Var(x) => *x == name,
            Term::Abs(inner) => inner.param != name && inner.body.has_free(name),
            Term::App(inner) => inner.fun.has_free(name) || inner.arg.has_free(name),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.free_vars().is_empty()
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        match self {
            Term::Var(_) => 1,
            Term::Abs(inner) => 1 + inner.body.size(),
            Term::App(inner) => 1 + inner.fun.size() + inner.arg.size(),
        }
    }

    pub fn alpha_eq(&self, other: &Term) -> bool {
        self.alpha_eq_help(other, &mut vec![])
    }

    // `binders` pairs up the enclosing binders of both sides, innermost last.
    fn alpha_eq_help(&self, other: &Term, binders: &mut Vec<(VarName, VarName)>) -> bool {
        match (self, other) {
            (&Term::Var(x), &Term::Var(y)) => {
                match binders.iter().rev().find(|(a, b)| *a == x || *b == y) {
                    Some(&(a, b)) => a == x && b == y,
                    None => x == y,
                }
            }
            (Term::Abs(inner1), Term::Abs(inner2)) => {
                binders.push((inner1.param, inner2.param));
                let eq = inner1.body.alpha_eq_help(&inner2.body, binders);
                binders.pop();
                eq
            }
            (Term::App(inner1), Term::App(inner2)) => {
                inner1.fun.alpha_eq_help(&inner2.fun, binders)
                    && inner1.arg.alpha_eq_help(&inner2.arg, binders)
            }
            _ => false,
        }
    }
}
