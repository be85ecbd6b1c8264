// src/noyau/riemann.rs
//
// Moteur de sommes de Riemann.
//
// Contrat :
// - partition régulière de [a, b] en n sous-intervalles, Δx = (b-a)/n
// - convention sigma : i de 1 à n inclus, xᵢ = a + i·Δx
// - mode d’échantillonnage : borne gauche, milieu ou borne droite
// - a > b est PERMIS : Δx devient négatif et les aires changent de signe
//   (convention d’aire signée conservée)
// - fonction pure : aucun état entre deux appels, résultat frais à chaque fois

use std::fmt;

use super::eval::{compiler_fonction, Fonction};

/// Point échantillonné dans chaque sous-intervalle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Gauche,
    Milieu,
    Droite,
}

impl Mode {
    pub const TOUS: [Mode; 3] = [Mode::Gauche, Mode::Milieu, Mode::Droite];

    /// Libellé frontière (contrat avec l’appelant) : "Left" | "Middle" | "Right".
    pub fn libelle(self) -> &'static str {
        match self {
            Mode::Gauche => "Left",
            Mode::Milieu => "Middle",
            Mode::Droite => "Right",
        }
    }

    /// Libellé d’affichage (UI française).
    pub fn libelle_fr(self) -> &'static str {
        match self {
            Mode::Gauche => "Gauche",
            Mode::Milieu => "Milieu",
            Mode::Droite => "Droite",
        }
    }

    /// Parse un libellé de mode, insensible à la casse.
    /// Accepte l’anglais (contrat frontière) et le français (UI).
    /// Tout autre libellé est une erreur de configuration.
    pub fn depuis_libelle(s: &str) -> Result<Mode, ErreurRiemann> {
        match s.trim().to_lowercase().as_str() {
            "left" | "gauche" => Ok(Mode::Gauche),
            "middle" | "milieu" => Ok(Mode::Milieu),
            "right" | "droite" => Ok(Mode::Droite),
            autre => Err(ErreurRiemann::Config(format!(
                "mode d’échantillonnage inconnu: '{autre}'"
            ))),
        }
    }
}

/// Rectangle d’approximation, tel qu’attendu par un traceur :
/// origine (coin sur l’axe des x), largeur Δx, hauteur f(point).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rectangle {
    pub origine_x: f64,
    pub origine_y: f64, // toujours 0 (base sur l’axe des x)
    pub largeur: f64,
    pub hauteur: f64,
}

impl Rectangle {
    /// Aire SIGNÉE : largeur (Δx, possiblement négatif) × hauteur.
    pub fn aire(&self) -> f64 {
        self.largeur * self.hauteur
    }
}

/// Résultat d’un calcul : valeur propriété de l’appelant, immuable,
/// sans cache ni cycle de vie au-delà de l’appel qui l’a produit.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultatRiemann {
    pub somme: f64,
    pub delta_x: f64,
    /// Exactement n rectangles, en ordre d’indice croissant.
    pub rectangles: Vec<Rectangle>,
}

/// Taxonomie d’erreurs du moteur.
#[derive(Clone, Debug, PartialEq)]
pub enum ErreurRiemann {
    /// Mode inconnu, n nul, borne non finie : rejeté AVANT toute évaluation.
    Config(String),
    /// La formule ne compile pas (texte fautif dans le message).
    Syntaxe(String),
    /// Échec d’évaluation à un point d’échantillonnage précis :
    /// tout le calcul avorte, aucun résultat partiel.
    Domaine {
        indice: usize,
        point: f64,
        cause: String,
    },
}

impl fmt::Display for ErreurRiemann {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErreurRiemann::Config(m) => write!(f, "configuration invalide: {m}"),
            ErreurRiemann::Syntaxe(m) => write!(f, "expression invalide: {m}"),
            ErreurRiemann::Domaine {
                indice,
                point,
                cause,
            } => write!(
                f,
                "évaluation impossible au point x = {point} (rectangle {indice}): {cause}"
            ),
        }
    }
}

/// Calcule la n-ième somme de Riemann de f sur [a, b] selon le mode.
///
/// Postconditions :
/// - `rectangles.len() == n`, ordre d’indice croissant
/// - `somme == Σ rectangles[i].aire()` (tolérance flottante)
/// - déterministe : mêmes entrées => résultat identique au bit près
pub fn somme_riemann(
    n: usize,
    fonction: &Fonction,
    a: f64,
    b: f64,
    mode: Mode,
) -> Result<ResultatRiemann, ErreurRiemann> {
    if n == 0 {
        return Err(ErreurRiemann::Config("n doit être ≥ 1".into()));
    }
    if !a.is_finite() || !b.is_finite() {
        return Err(ErreurRiemann::Config(format!(
            "bornes non finies: a = {a}, b = {b}"
        )));
    }

    let delta_x = (b - a) / n as f64;

    let mut somme = 0.0_f64;
    let mut rectangles = Vec::with_capacity(n);

    // Σ de i = 1 à n : f(xᵢ*)·Δx, avec xᵢ* choisi dans [xᵢ₋₁, xᵢ] selon le mode.
    for i in 1..=n {
        let x_prec = a + (i - 1) as f64 * delta_x;
        let x_i = a + i as f64 * delta_x;

        let point = match mode {
            Mode::Gauche => x_prec,
            Mode::Droite => x_i,
            Mode::Milieu => (x_prec + x_i) / 2.0,
        };

        let hauteur = fonction
            .valeur(point)
            .map_err(|cause| ErreurRiemann::Domaine {
                indice: i,
                point,
                cause,
            })?;

        somme += hauteur * delta_x;

        rectangles.push(Rectangle {
            origine_x: x_prec,
            origine_y: 0.0,
            largeur: delta_x,
            hauteur,
        });
    }

    Ok(ResultatRiemann {
        somme,
        delta_x,
        rectangles,
    })
}

/// Frontière texte : (n, expression, a, b, libellé de mode) -> résultat.
///
/// Ordre des vérifications : mode (Config), compilation (Syntaxe),
/// puis le moteur (Config sur n/bornes, Domaine pendant la boucle).
pub fn somme_riemann_texte(
    n: usize,
    expression: &str,
    a: f64,
    b: f64,
    libelle_mode: &str,
) -> Result<ResultatRiemann, ErreurRiemann> {
    let mode = Mode::depuis_libelle(libelle_mode)?;
    let fonction = compiler_fonction(expression).map_err(ErreurRiemann::Syntaxe)?;
    somme_riemann(n, &fonction, a, b, mode)
}
