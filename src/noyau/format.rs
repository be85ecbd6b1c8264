// src/noyau/format.rs
//
// Affichage numérique pour l’encadré de résultat.
// Convention historique : S_n et Δx arrondis à 3 décimales.

/// Arrondi à 3 décimales, zéros de fin retirés
/// (au moins un chiffre après le point : 1 -> "1.0", 0.625 -> "0.625").
pub fn arrondi_3(v: f64) -> String {
    if !v.is_finite() {
        return "indéfini".to_string();
    }

    // normalise -0.0 -> 0.0
    let v = if v == 0.0 { 0.0 } else { v };

    let mut s = format!("{v:.3}");
    while s.ends_with('0') && !s.ends_with(".0") {
        s.pop();
    }
    s
}

/// Texte de l’encadré (coin haut-gauche du tracé) : somme + pas.
pub fn annotation(n: usize, somme: f64, delta_x: f64) -> String {
    format!("S_{n} = {}\nΔx = {}", arrondi_3(somme), arrondi_3(delta_x))
}
