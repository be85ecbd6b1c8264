//! Noyau numérique — sommes de Riemann
//!
//! Organisation interne :
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard + construction Expr
//! - expr.rs    : AST f64 + évaluation au point
//! - eval.rs    : compilation d’une formule en Fonction
//! - riemann.rs : moteur (partition, échantillonnage, somme signée)
//! - courbe.rs  : points de courbe pour l’affichage (500 points)
//! - format.rs  : arrondi à 3 décimales (encadré S_n / Δx)

pub mod courbe;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod riemann;
pub mod rpn;

#[cfg(test)]
mod tests_riemann;


// API publique minimale
pub use eval::{compiler_fonction, Fonction};
pub use riemann::{
    somme_riemann, somme_riemann_texte, ErreurRiemann, Mode, Rectangle, ResultatRiemann,
};
