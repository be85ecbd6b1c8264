//! Tests du moteur : scénarios concrets + propriétés d’échantillonnage.
//!
//! Rappels du contrat :
//! - convention sigma : i de 1 à n inclus, xᵢ = a + i·Δx
//! - a > b permis : Δx négatif, aires signées inversées
//! - erreur de domaine => AUCUN résultat partiel
//! - déterminisme : mêmes entrées => résultat identique au bit près

use super::courbe::{echantillonner_courbe, POINTS_COURBE};
use super::eval::compiler_fonction;
use super::format::{annotation, arrondi_3};
use super::riemann::{
    somme_riemann, somme_riemann_texte, ErreurRiemann, Mode, Rectangle, ResultatRiemann,
};

fn calcule(n: usize, expr: &str, a: f64, b: f64, mode: Mode) -> ResultatRiemann {
    let f = compiler_fonction(expr).unwrap_or_else(|e| panic!("compile {expr:?}: {e}"));
    somme_riemann(n, &f, a, b, mode)
        .unwrap_or_else(|e| panic!("somme_riemann(n={n}, {expr:?}, {a}, {b}): {e}"))
}

fn proche(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-12, "a={a} b={b}");
}

/* ------------------------ Scénarios concrets ------------------------ */

#[test]
fn scenario_constante() {
    // ∫₀¹ 1 dx, n=1, borne droite : un seul rectangle ((0,0), 1, 1)
    let r = calcule(1, "1", 0.0, 1.0, Mode::Droite);

    assert_eq!(r.delta_x, 1.0);
    assert_eq!(r.somme, 1.0);
    assert_eq!(
        r.rectangles,
        vec![Rectangle {
            origine_x: 0.0,
            origine_y: 0.0,
            largeur: 1.0,
            hauteur: 1.0,
        }]
    );
}

#[test]
fn scenario_identite_gauche() {
    // ∫₀² x dx, n=2, borne gauche : points 0 et 1, hauteurs 0 et 1, somme 1
    let r = calcule(2, "x", 0.0, 2.0, Mode::Gauche);

    assert_eq!(r.delta_x, 1.0);
    proche(r.somme, 1.0);

    let hauteurs: Vec<f64> = r.rectangles.iter().map(|rect| rect.hauteur).collect();
    assert_eq!(hauteurs, vec![0.0, 1.0]);
}

#[test]
fn scenario_carre_milieu() {
    // ∫₋₁¹ x² dx, n=4, milieu : points ±0.75, ±0.25 ; somme = 0.625
    let r = calcule(4, "x^2", -1.0, 1.0, Mode::Milieu);

    assert_eq!(r.delta_x, 0.5);
    proche(r.somme, 0.625);

    let hauteurs: Vec<f64> = r.rectangles.iter().map(|rect| rect.hauteur).collect();
    proche(hauteurs[0], 0.5625);
    proche(hauteurs[1], 0.0625);
    proche(hauteurs[2], 0.0625);
    proche(hauteurs[3], 0.5625);
}

#[test]
fn scenario_pole_echantillonne() {
    // 1/x sur [-1, 1] : dès qu’un point d’échantillonnage tombe sur x=0,
    // le calcul ENTIER avorte en identifiant le point et l’indice fautifs.
    //
    // milieu, n=1 : point (−1+1)/2 = 0
    let f = compiler_fonction("1/x").unwrap();
    match somme_riemann(1, &f, -1.0, 1.0, Mode::Milieu) {
        Err(ErreurRiemann::Domaine {
            indice,
            point,
            cause,
        }) => {
            assert_eq!(indice, 1);
            assert_eq!(point, 0.0);
            assert!(cause.contains("division par zéro"), "cause={cause}");
        }
        autre => panic!("erreur de domaine attendue, obtenu {autre:?}"),
    }

    // borne gauche, n=2 : x₁ = −1 + Δx = 0 au deuxième rectangle
    match somme_riemann(2, &f, -1.0, 1.0, Mode::Gauche) {
        Err(ErreurRiemann::Domaine { indice, point, .. }) => {
            assert_eq!(indice, 2);
            assert_eq!(point, 0.0);
        }
        autre => panic!("erreur de domaine attendue, obtenu {autre:?}"),
    }
}

/* ------------------------ Propriétés d’échantillonnage ------------------------ */

#[test]
fn propriete_gauche_droite_decalees() {
    // Avec f = x, la hauteur EST le point échantillonné :
    // Gauche_i == Droite_{i-1} pour i > 1.
    let gauche = calcule(7, "x", 0.0, 2.0, Mode::Gauche);
    let droite = calcule(7, "x", 0.0, 2.0, Mode::Droite);

    for i in 1..7 {
        assert_eq!(
            gauche.rectangles[i].hauteur,
            droite.rectangles[i - 1].hauteur,
            "décalage d’indice i={i}"
        );
    }
}

#[test]
fn propriete_milieu_moyenne() {
    // Milieu_i == (Gauche_i + Droite_i) / 2 pour chaque i (f = x).
    let gauche = calcule(9, "x", -3.0, 5.0, Mode::Gauche);
    let milieu = calcule(9, "x", -3.0, 5.0, Mode::Milieu);
    let droite = calcule(9, "x", -3.0, 5.0, Mode::Droite);

    for i in 0..9 {
        proche(
            milieu.rectangles[i].hauteur,
            (gauche.rectangles[i].hauteur + droite.rectangles[i].hauteur) / 2.0,
        );
    }
}

#[test]
fn propriete_longueur() {
    for n in [1usize, 2, 3, 10, 137] {
        let r = calcule(n, "x^2", -2.0, 2.0, Mode::Milieu);
        assert_eq!(r.rectangles.len(), n);
    }
}

#[test]
fn propriete_bornes_inversees() {
    // Inverser les bornes nie Δx exactement, et (pour f régulière)
    // la somme change de signe.
    let endroit = calcule(5, "x^2", 0.0, 1.0, Mode::Milieu);
    let envers = calcule(5, "x^2", 1.0, 0.0, Mode::Milieu);

    assert_eq!(envers.delta_x, -endroit.delta_x);
    proche(envers.somme, -endroit.somme);

    // chaque aire signée change aussi de signe
    for (r1, r2) in endroit.rectangles.iter().zip(envers.rectangles.iter().rev()) {
        proche(r1.aire(), -r2.aire());
    }
}

#[test]
fn propriete_idempotence() {
    // Fonction pure : deux appels identiques => résultats identiques au bit près.
    let r1 = calcule(10, "3 * (x^2) + 1.5 * (x^3)", -4.0, 4.0, Mode::Droite);
    let r2 = calcule(10, "3 * (x^2) + 1.5 * (x^3)", -4.0, 4.0, Mode::Droite);
    assert_eq!(r1, r2);
}

#[test]
fn propriete_somme_egale_somme_des_aires() {
    let r = calcule(10, "3 * (x^2) + 1.5 * (x^3)", -4.0, 4.0, Mode::Droite);
    let total: f64 = r.rectangles.iter().map(|rect| rect.aire()).sum();
    assert!((r.somme - total).abs() < 1e-9, "somme={} Σaires={total}", r.somme);
}

/* ------------------------ Erreurs de configuration ------------------------ */

#[test]
fn mode_inconnu_config() {
    match somme_riemann_texte(4, "x", 0.0, 1.0, "Top") {
        Err(ErreurRiemann::Config(m)) => assert!(m.contains("mode"), "m={m}"),
        autre => panic!("erreur Config attendue, obtenu {autre:?}"),
    }
}

#[test]
fn n_nul_config() {
    let f = compiler_fonction("x").unwrap();
    match somme_riemann(0, &f, 0.0, 1.0, Mode::Gauche) {
        Err(ErreurRiemann::Config(m)) => assert!(m.contains("n doit"), "m={m}"),
        autre => panic!("erreur Config attendue, obtenu {autre:?}"),
    }
}

#[test]
fn bornes_non_finies_config() {
    let f = compiler_fonction("x").unwrap();
    for (a, b) in [(f64::NAN, 1.0), (0.0, f64::INFINITY), (f64::NEG_INFINITY, 0.0)] {
        match somme_riemann(3, &f, a, b, Mode::Milieu) {
            Err(ErreurRiemann::Config(_)) => {}
            autre => panic!("erreur Config attendue pour ({a}, {b}), obtenu {autre:?}"),
        }
    }
}

#[test]
fn syntaxe_via_frontiere_texte() {
    match somme_riemann_texte(2, "x +", 0.0, 1.0, "Left") {
        Err(ErreurRiemann::Syntaxe(_)) => {}
        autre => panic!("erreur Syntaxe attendue, obtenu {autre:?}"),
    }
}

#[test]
fn libelles_modes() {
    for m in Mode::TOUS {
        assert_eq!(Mode::depuis_libelle(m.libelle()), Ok(m));
        assert_eq!(Mode::depuis_libelle(m.libelle_fr()), Ok(m));
    }
    assert_eq!(Mode::depuis_libelle("MIDDLE"), Ok(Mode::Milieu));
    assert_eq!(Mode::depuis_libelle("  right "), Ok(Mode::Droite));
    assert!(matches!(
        Mode::depuis_libelle("Top"),
        Err(ErreurRiemann::Config(_))
    ));
}

/* ------------------------ Courbe d’affichage ------------------------ */

#[test]
fn courbe_complete() {
    let f = compiler_fonction("x^2").unwrap();
    let pts = echantillonner_courbe(&f, 0.0, 1.0);

    assert_eq!(pts.len(), POINTS_COURBE);
    assert_eq!(pts[0], [0.0, 0.0]);

    let dernier = pts[POINTS_COURBE - 1];
    proche(dernier[0], 1.0);
    proche(dernier[1], 1.0);
}

#[test]
fn courbe_omet_les_points_hors_domaine() {
    // ln(x) sur [-1, 1] : la moitié négative (250 points) est omise.
    let f = compiler_fonction("ln(x)").unwrap();
    let pts = echantillonner_courbe(&f, -1.0, 1.0);

    assert_eq!(pts.len(), 250);
    for p in &pts {
        assert!(p[0] > 0.0 && p[1].is_finite());
    }
}

#[test]
fn courbe_bornes_inversees() {
    // L’intervalle d’affichage est [min, max] : bornes inversées, mêmes points.
    let f = compiler_fonction("x^2").unwrap();
    assert_eq!(
        echantillonner_courbe(&f, -1.0, 1.0),
        echantillonner_courbe(&f, 1.0, -1.0)
    );
}

/* ------------------------ Arrondi d’affichage ------------------------ */

#[test]
fn arrondi_trois_decimales() {
    assert_eq!(arrondi_3(0.625), "0.625");
    assert_eq!(arrondi_3(1.0), "1.0");
    assert_eq!(arrondi_3(0.5), "0.5");
    assert_eq!(arrondi_3(2.0 / 3.0), "0.667");
    assert_eq!(arrondi_3(-0.0), "0.0");
}

#[test]
fn annotation_somme_et_pas() {
    assert_eq!(annotation(10, 21.12, 0.8), "S_10 = 21.12\nΔx = 0.8");
}
