//! Well-known closed terms.

use crate::term::{mk_abs, mk_app, mk_var, Term};
use crate::var::VarName;

use once_cell::sync::Lazy;

const A: VarName = VarName::new(0);
const B: VarName = VarName::new(1);
const C: VarName = VarName::new(2);
const D: VarName = VarName::new(3);

/// λx. x
pub static I: Lazy<Term> = Lazy::new(|| mk_abs(A, mk_var(A)));

/// λx y. x
pub static K: Lazy<Term> = Lazy::new(|| mk_var(A).abs([A, B]));

/// λx y z. x z (y z)
pub static S: Lazy<Term> = Lazy::new(|| {
    mk_var(A)
        .apply([mk_var(C), mk_app(mk_var(B), mk_var(C))])
        .abs([A, B, C])
});

/// λx. x x
pub static OMEGA_HALF: Lazy<Term> = Lazy::new(|| mk_abs(A, mk_app(mk_var(A), mk_var(A))));

/// (λx. x x) (λx. x x), which has no normal form.
pub static OMEGA: Lazy<Term> = Lazy::new(|| mk_app(OMEGA_HALF.clone(), OMEGA_HALF.clone()));

/// λf. (λx. f (x x)) (λx. f (x x))
pub static Y: Lazy<Term> = Lazy::new(|| {
    let half = mk_abs(B, mk_app(mk_var(A), mk_app(mk_var(B), mk_var(B))));
    mk_abs(A, mk_app(half.clone(), half))
});

pub static TRUE: Lazy<Term> = Lazy::new(|| mk_var(A).abs([A, B]));

pub static FALSE: Lazy<Term> = Lazy::new(|| mk_var(B).abs([A, B]));

/// λn f x. f (n f x)
pub static SUCC: Lazy<Term> = Lazy::new(|| {
    mk_app(mk_var(B), mk_var(A).apply([mk_var(B), mk_var(C)])).abs([A, B, C])
});

/// λm n f x. m f (n f x)
pub static PLUS: Lazy<Term> = Lazy::new(|| {
    mk_var(A)
        .apply([mk_var(C), mk_var(B).apply([mk_var(C), mk_var(D)])])
        .abs([A, B, C, D])
});

/// λm n f. m (n f)
pub static MULT: Lazy<Term> =
    Lazy::new(|| mk_app(mk_var(A), mk_app(mk_var(B), mk_var(C))).abs([A, B, C]));

/// The Church numeral `λf x. fⁿ x`.
pub fn church(n: usize) -> Term {
    let mut body = mk_var(B);
    for _ in 0..n {
        body = mk_app(mk_var(A), body);
    }
    body.abs([A, B])
}

/// Reads back a β-normal Church numeral, whatever its binder names.
pub fn church_to_usize(m: &Term) -> Option<usize> {
    let Term::Abs(outer) = m else {
        return None;
    };
    let Term::Abs(inner) = &outer.body else {
        return None;
    };
    let (f, x) = (outer.param, inner.param);
    if f == x {
        return None;
    }
    let mut n = 0;
    let mut body = &inner.body;
    while let Term::App(app) = body {
        if app.fun != Term::Var(f) {
            return None;
        }
        n += 1;
        body = &app.arg;
    }
    (*body == Term::Var(x)).then_some(n)
}
