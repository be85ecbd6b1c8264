//! Calculatrice de sommes de Riemann
//!
//! - `noyau` : évaluateur d’expressions (jetons → RPN → Expr) + moteur de
//!   sommes de Riemann (partition, échantillonnage, somme signée)
//! - `app`   : état + vue egui (natif + web)

pub mod app;
pub mod noyau;
