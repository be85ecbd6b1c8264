// src/noyau/expr.rs
//
// AST numérique (f64) restreint :
// - Num : littéral décimal
// - Pi / Euler : constantes
// - Var : LA variable libre x (une seule, fixée au parse)
// - opérateurs + - * / ^ et fonctions sur liste blanche
//
// IMPORTANT (SAFE):
// - eval() est pure : aucun état partagé, appelable en parallèle.
// - tout résultat non fini (NaN, ±inf) est une erreur de domaine,
//   jamais une valeur substituée en silence.

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    Num(f64),
    Pi,
    Euler,

    Var, // x

    Sqrt(Box<Expr>),
    Exp(Box<Expr>),
    Ln(Box<Expr>),

    Sin(Box<Expr>),
    Cos(Box<Expr>),
    Tan(Box<Expr>),

    Add(Box<Expr>, Box<Expr>),
    Sub(Box<Expr>, Box<Expr>),
    Mul(Box<Expr>, Box<Expr>),
    Div(Box<Expr>, Box<Expr>),
    Pow(Box<Expr>, Box<Expr>),
}

impl Expr {
    /// Évalue l’expression avec x lié à la valeur donnée.
    ///
    /// Erreurs de domaine :
    /// - division par zéro
    /// - √ d’un négatif, ln d’un non-positif
    /// - tout intermédiaire non fini (ex: 0^-1, exp(1000), (-4)^0.5)
    pub fn eval(&self, x: f64) -> Result<f64, String> {
        use Expr::*;

        let v = match self {
            Num(v) => *v,
            Pi => std::f64::consts::PI,
            Euler => std::f64::consts::E,
            Var => x,

            Add(a, b) => a.eval(x)? + b.eval(x)?,
            Sub(a, b) => a.eval(x)? - b.eval(x)?,
            Mul(a, b) => a.eval(x)? * b.eval(x)?,

            Div(a, b) => {
                let num = a.eval(x)?;
                let den = b.eval(x)?;
                if den == 0.0 {
                    return Err("division par zéro".into());
                }
                num / den
            }

            Pow(a, b) => {
                let base = a.eval(x)?;
                let expo = b.eval(x)?;
                base.powf(expo)
            }

            Sqrt(e) => {
                let v = e.eval(x)?;
                if v < 0.0 {
                    return Err("√ : argument négatif".into());
                }
                v.sqrt()
            }

            Exp(e) => e.eval(x)?.exp(),

            Ln(e) => {
                let v = e.eval(x)?;
                if v <= 0.0 {
                    return Err("ln : argument non positif".into());
                }
                v.ln()
            }

            Sin(e) => e.eval(x)?.sin(),
            Cos(e) => e.eval(x)?.cos(),
            Tan(e) => e.eval(x)?.tan(),
        };

        if !v.is_finite() {
            return Err("résultat non fini".into());
        }
        Ok(v)
    }
}

/* ------------------------ Affichage debug (pas “joli” final) ------------------------ */

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Expr::*;
        match self {
            Num(v) => write!(f, "{v}"),
            Pi => write!(f, "π"),
            Euler => write!(f, "e"),
            Var => write!(f, "x"),
            Sqrt(e) => write!(f, "√({e})"),
            Exp(e) => write!(f, "exp({e})"),
            Ln(e) => write!(f, "ln({e})"),
            Sin(e) => write!(f, "sin({e})"),
            Cos(e) => write!(f, "cos({e})"),
            Tan(e) => write!(f, "tan({e})"),
            Add(a, b) => write!(f, "({a}+{b})"),
            Sub(a, b) => write!(f, "({a}-{b})"),
            Mul(a, b) => write!(f, "({a}*{b})"),
            Div(a, b) => write!(f, "({a}/{b})"),
            Pow(a, b) => write!(f, "({a}^{b})"),
        }
    }
}
