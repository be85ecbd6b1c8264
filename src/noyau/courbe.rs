// src/noyau/courbe.rs
//
// Échantillonnage de la courbe pour l’affichage.
// 500 points répartis uniformément sur [min(a,b), max(a,b)] — même
// convention que le tracé historique. Les points où f échoue (pôle,
// hors domaine) sont simplement omis : la courbe reste traçable (ex: 1/x).

use super::eval::Fonction;

/// Nombre de points de la courbe (contrat d’affichage).
pub const POINTS_COURBE: usize = 500;

/// Échantillonne f sur l’intervalle d’affichage, en ordre de x croissant.
/// Retourne AU PLUS `POINTS_COURBE` couples [x, f(x)], tous finis.
pub fn echantillonner_courbe(fonction: &Fonction, a: f64, b: f64) -> Vec<[f64; 2]> {
    let (debut, fin) = if a <= b { (a, b) } else { (b, a) };

    let mut points = Vec::with_capacity(POINTS_COURBE);
    if !debut.is_finite() || !fin.is_finite() {
        return points;
    }

    let pas = (fin - debut) / (POINTS_COURBE - 1) as f64;

    for k in 0..POINTS_COURBE {
        let x = debut + k as f64 * pas;
        if let Ok(y) = fonction.valeur(x) {
            points.push([x, y]);
        }
    }

    points
}
