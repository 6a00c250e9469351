//! Named terms for the command line.

use crate::combinator::{church, K, MULT, OMEGA, PLUS, S};
use crate::term::{mk_abs, mk_app, mk_var, Term};
use crate::var::VarName;

use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    /// (λx. x) ((λy. y) z)
    IdApp,
    /// S K K
    Skk,
    /// 2 + 3 on Church numerals
    ChurchAdd,
    /// 2 × 3 on Church numerals
    ChurchMult,
    /// (λx. x x) (λx. x x)
    Omega,
    /// λx. (λy. f y) x
    Eta,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown scenario `{0}`")]
pub struct UnknownScenarioError(pub String);

impl Scenario {
    pub const ALL: [Scenario; 6] = [
        Scenario::IdApp,
        Scenario::Skk,
        Scenario::ChurchAdd,
        Scenario::ChurchMult,
        Scenario::Omega,
        Scenario::Eta,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::IdApp => "id-app",
            Scenario::Skk => "skk",
            Scenario::ChurchAdd => "church-add",
            Scenario::ChurchMult => "church-mult",
            Scenario::Omega => "omega",
            Scenario::Eta => "eta",
        }
    }

    pub fn term(self) -> Term {
        let x = VarName::new(0);
        let y = VarName::new(1);
        let z = VarName::new(2);
        let f = VarName::new(3);
        match self {
            Scenario::IdApp => mk_app(
                mk_abs(x, mk_var(x)),
                mk_app(mk_abs(y, mk_var(y)), mk_var(z)),
            ),
            Scenario::Skk => S.apply([K.clone(), K.clone()]),
            Scenario::ChurchAdd => PLUS.apply([church(2), church(3)]),
            Scenario::ChurchMult => MULT.apply([church(2), church(3)]),
            Scenario::Omega => OMEGA.clone(),
            Scenario::Eta => mk_abs(x, mk_app(mk_abs(y, mk_app(mk_var(f), mk_var(y))), mk_var(x))),
        }
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = UnknownScenarioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| UnknownScenarioError(s.to_owned()))
    }
}
