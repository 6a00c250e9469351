use lambda_core::combinator::{church, church_to_usize, I, OMEGA, PLUS};
use lambda_core::{mk_abs, mk_app, mk_var, NormalizeError, Normalizer, Term, VarName, VarSet};

#[ctor::ctor]
fn init() {
    let _ = env_logger::builder().is_test(true).try_init();
}

const X: VarName = VarName::new(0);
const Y: VarName = VarName::new(1);
const Z: VarName = VarName::new(2);
const F: VarName = VarName::new(3);

#[test]
fn fresh_names_are_not_members() {
    let sets = [
        VarSet::empty(),
        VarSet::singleton(Z),
        [X, F, Y].into_iter().collect::<VarSet>(),
        mk_app(mk_var(F), mk_abs(X, mk_var(Y))).free_vars(),
    ];
    for s in sets {
        assert!(!s.has(s.new_name()), "{s}");
    }
}

#[test]
fn bound_parameter_is_never_free() {
    let bodies = [
        mk_var(X),
        mk_var(Y),
        mk_app(mk_var(X), mk_var(Y)),
        mk_abs(X, mk_var(X)),
        mk_app(mk_abs(Y, mk_var(X)), mk_var(X)),
    ];
    for body in bodies {
        let m = mk_abs(X, body);
        assert!(!m.free_vars().has(X), "{m}");
    }
}

#[test]
fn substitution_keeps_source_variables_free() {
    // (λx. y x)[y := x]
    let target = mk_abs(X, mk_app(mk_var(Y), mk_var(X)));
    let result = target.substitute(&mk_var(X), Y);
    let Term::Abs(abs) = &result else {
        panic!("expected an abstraction: {result}");
    };
    assert_ne!(abs.param, X);
    assert_eq!(abs.body, mk_app(mk_var(X), mk_var(abs.param)));
    assert_eq!(result.free_vars(), VarSet::singleton(X));
}

#[test]
fn two_step_reduction() {
    // (λx. x) ((λy. y) z)
    let w = mk_app(mk_abs(Y, mk_var(Y)), mk_var(Z));
    let m = mk_app(mk_abs(X, mk_var(X)), w.clone());

    let m1 = m.outer_left_most_beta_simp();
    assert_eq!(m1, w);
    let m2 = m1.outer_left_most_beta_simp();
    assert_eq!(m2, mk_var(Z));
    assert_eq!(m2.outer_left_most_beta_simp(), m2);

    let seq: Vec<Term> = m.steps().collect();
    assert_eq!(seq, vec![m.clone(), w, mk_var(Z)]);
}

#[test]
fn self_application_does_not_terminate() {
    let half = mk_abs(X, mk_app(mk_var(X), mk_var(X)));
    let m = mk_app(half.clone(), half);
    assert!(m.alpha_eq(&OMEGA));
    for n in m.steps().take(100) {
        assert!(!n.is_beta_normal());
        assert!(n.alpha_eq(&OMEGA));
    }
    assert_eq!(
        Normalizer::new(100).normalize(&m),
        Err(NormalizeError::StepLimitExceeded { limit: 100 })
    );
}

#[test]
fn eta_law() {
    let f = mk_app(mk_var(F), mk_var(Z));
    let m = mk_abs(X, mk_app(f.clone(), mk_var(X)));
    assert!(m.eta_normalize().alpha_eq(&f));

    // x is free in the function part, so the abstraction stays
    let g = mk_app(mk_var(F), mk_var(X));
    let m = mk_abs(X, mk_app(g, mk_var(X)));
    assert_eq!(m.eta_normalize(), m);
}

#[test]
fn church_addition() {
    let m = PLUS.apply([church(3), church(4)]);
    let n = Normalizer::default().normalize(&m).unwrap();
    assert!(n.is_beta_normal());
    assert_eq!(church_to_usize(&n), Some(7));
    assert!(n.alpha_eq(&church(7)));
}

#[test]
fn identity_is_eta_stable() {
    let n = Normalizer::default().beta_eta_normalize(&I).unwrap();
    assert!(n.alpha_eq(&I));
}

#[test]
fn rename_produces_equivalent_term() {
    // λx. λy. x y z
    let m = mk_var(X).apply([mk_var(Y), mk_var(Z)]).abs([X, Y]);
    let n = m.rename_var(X, F);
    assert!(n.alpha_eq(&m), "{n}");
    assert_eq!(n.free_vars(), m.free_vars());
}

#[test]
fn shared_terms_across_threads() {
    let m = PLUS.apply([church(1), church(1)]);
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let m = m.clone();
            std::thread::spawn(move || Normalizer::default().normalize(&m).unwrap())
        })
        .collect();
    for handle in handles {
        let n = handle.join().unwrap();
        assert_eq!(church_to_usize(&n), Some(2));
    }
}
