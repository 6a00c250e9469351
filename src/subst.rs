//! Capture-avoiding substitution and renaming.

use crate::term::{mk_abs, mk_app, mk_var, Term};
use crate::var::{VarName, VarSet};

impl Term {
    /// self[destination := source]
    ///
    /// Every abstraction the substitution enters is rebound to
    /// `newName({param} ∪ FV(body) ∪ FV(source))` first. An abstraction without a free
    /// `destination` is returned as it is.
    pub fn substitute(&self, source: &Term, destination: VarName) -> Term {
        match self {
            &Term::Var(name) => {
                if name == destination {
                    source.clone()
                } else {
                    self.clone()
                }
            }
            Term::Abs(inner) => {
                if inner.param == destination || !inner.body.has_free(destination) {
                    // shadowed, or nothing to replace
                    return self.clone();
                }
                let avoid = VarSet::singleton(inner.param)
                    .union(&inner.body.free_vars())
                    .union(&source.free_vars());
                let param = avoid.new_name();
                if log::log_enabled!(log::Level::Trace) {
                    log::trace!("rebinding {} as {param}", inner.param);
                }
                let body = inner.body.substitute(&mk_var(param), inner.param);
                mk_abs(param, body.substitute(source, destination))
            }
            Term::App(inner) => {
                let fun = inner.fun.substitute(source, destination);
                let arg = inner.arg.substitute(source, destination);
                if inner.fun.ptr_eq(&fun) && inner.arg.ptr_eq(&arg) {
                    self.clone()
                } else {
                    mk_app(fun, arg)
                }
            }
        }
    }

    /// Renames `from` to `into` without capturing anything.
    ///
    /// Free occurrences of `from` become `into`. A binder of `from` is rebound to `into` when
    /// `into` is not free in its body, and left alone otherwise. A binder of `into` that would
    /// capture a renamed occurrence is first moved to a fresh name.
    pub fn rename_var(&self, from: VarName, into: VarName) -> Term {
        if from == into {
            return self.clone();
        }
        self.rename_var_help(from, into)
    }

    fn rename_var_help(&self, from: VarName, into: VarName) -> Term {
        match self {
            &Term::Var(name) => {
                if name == from {
                    mk_var(into)
                } else {
                    self.clone()
                }
            }
            Term::Abs(inner) => {
                if inner.param == from {
                    if inner.body.has_free(into) {
                        return self.clone();
                    }
                    return mk_abs(into, inner.body.substitute(&mk_var(into), from));
                }
                if inner.param == into && inner.body.has_free(from) {
                    let param = inner
                        .body
                        .free_vars()
                        .add(from)
                        .add(into)
                        .new_name();
                    let body = inner.body.substitute(&mk_var(param), into);
                    return mk_abs(param, body.rename_var_help(from, into));
                }
                let body = inner.body.rename_var_help(from, into);
                if inner.body.ptr_eq(&body) {
                    self.clone()
                } else {
                    mk_abs(inner.param, body)
                }
            }
            Term::App(inner) => {
                let fun = inner.fun.rename_var_help(from, into);
                let arg = inner.arg.rename_var_help(from, into);
                if inner.fun.ptr_eq(&fun) && inner.arg.ptr_eq(&arg) {
                    self.clone()
                } else {
                    mk_app(fun, arg)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: VarName = VarName::new(0);
    const Y: VarName = VarName::new(1);
    const Z: VarName = VarName::new(2);

    #[test]
    fn substitute_variable() {
        assert_eq!(mk_var(X).substitute(&mk_var(Z), X), mk_var(Z));
        assert_eq!(mk_var(Y).substitute(&mk_var(Z), X), mk_var(Y));
        let m = mk_app(mk_var(X), mk_app(mk_var(Y), mk_var(X)));
        insta::assert_snapshot!(m.substitute(&mk_var(Z), X), @"(x2 (x1 x2))");
    }

    #[test]
    fn substitute_shadowed() {
        let m = mk_abs(X, mk_app(mk_var(X), mk_var(Y)));
        let n = m.substitute(&mk_var(Z), X);
        assert!(n.ptr_eq(&m));
    }

    #[test]
    fn substitute_avoids_capture() {
        // (λx. y x)[y := x]
        let m = mk_abs(X, mk_app(mk_var(Y), mk_var(X)));
        let n = m.substitute(&mk_var(X), Y);
        insta::assert_snapshot!(n.to_string(), @"(lam x2 (x0 x2))");
        let Term::Abs(inner) = &n else {
            panic!("expected an abstraction: {n}");
        };
        assert_ne!(inner.param, X);
        assert!(n.has_free(X));
        assert!(n.alpha_eq(&mk_abs(Y, mk_app(mk_var(X), mk_var(Y)))));
    }

    #[test]
    fn substitute_renames_nested_binders() {
        // (λy. λx. z y x)[z := x y]
        let m = mk_abs(Y, mk_abs(X, mk_var(Z).apply([mk_var(Y), mk_var(X)])));
        let source = mk_app(mk_var(X), mk_var(Y));
        let n = m.substitute(&source, Z);
        let w = VarName::new(10);
        let v = VarName::new(11);
        let expected = mk_abs(w, mk_abs(v, source.apply([mk_var(w), mk_var(v)])));
        assert!(n.alpha_eq(&expected), "{n}");
        insta::assert_snapshot!(n.free_vars(), @"{x0, x1}");
    }

    #[test]
    fn substitute_skips_binders_without_destination() {
        // (λx. λy. x y)[z := y]: z does not occur, so nothing is rebound
        let m = mk_abs(X, mk_abs(Y, mk_app(mk_var(X), mk_var(Y))));
        assert!(m.substitute(&mk_var(Y), Z).ptr_eq(&m));

        // a deep chain with `destination` free at the bottom stays cheap
        let mut m = mk_app(mk_var(Z), mk_var(X));
        for _ in 0..64 {
            m = mk_abs(X, m);
        }
        let n = m.substitute(&mk_var(Y), Z);
        assert_eq!(n.size(), m.size());
        insta::assert_snapshot!(n.free_vars(), @"{x1}");
    }

    #[test]
    fn substitute_leaves_input_untouched() {
        let m = mk_abs(X, mk_app(mk_var(Y), mk_var(X)));
        let before = m.clone();
        let _ = m.substitute(&mk_var(X), Y);
        assert_eq!(m, before);
    }

    #[test]
    fn rename_free_variable() {
        let m = mk_app(mk_var(X), mk_abs(Y, mk_app(mk_var(X), mk_var(Y))));
        insta::assert_snapshot!(m.rename_var(X, Z), @"(x2 (lam x1 (x2 x1)))");
        assert!(m.rename_var(X, X).ptr_eq(&m));
    }

    #[test]
    fn rename_binder() {
        let m = mk_abs(X, mk_app(mk_var(X), mk_var(Y)));
        let n = m.rename_var(X, Z);
        insta::assert_snapshot!(n.to_string(), @"(lam x2 (x2 x1))");
        assert!(n.alpha_eq(&m));

        // renaming the binder to `y` would capture the free `y`
        let n = m.rename_var(X, Y);
        assert_eq!(n, m);
    }

    #[test]
    fn rename_under_binder_of_target_name() {
        // (λy. x y)[x ↦ y] must not capture the renamed x
        let m = mk_abs(Y, mk_app(mk_var(X), mk_var(Y)));
        let n = m.rename_var(X, Y);
        insta::assert_snapshot!(n.to_string(), @"(lam x2 (x1 x2))");
        assert!(n.has_free(Y));
        assert!(n.alpha_eq(&mk_abs(Z, mk_app(mk_var(Y), mk_var(Z)))));
    }
}
