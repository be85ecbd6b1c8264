//! src/app/etat.rs
//!
//! État UI (sans vue, sans calcul).
//!
//! Rôle : contenir l’état de la calculatrice (champs texte, mode, dernier
//! tracé, erreur, démarche) et offrir des opérations simples (C/AC)
//! sans logique d’affichage ni d’évaluation.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parse de formule, pas de moteur).
//! - Un tracé est une valeur fraîche remplacée EN BLOC à chaque calcul :
//!   aucun contexte de dessin global partagé entre deux demandes.
//! - Sur erreur, le dernier tracé valide est CONSERVÉ (on ne vide pas
//!   l’écran sur une faute de frappe).

use crate::noyau::riemann::{Mode, ResultatRiemann};

/// Valeurs par défaut (mêmes que la démo historique).
const FONCTION_DEFAUT: &str = "3 * (x^2) + 1.5 * (x^3)";
const A_DEFAUT: &str = "-4";
const B_DEFAUT: &str = "4";
const N_DEFAUT: &str = "10";

/// Garde-fou : borne UI sur n (anti-gel). Le moteur, lui, accepte tout n ≥ 1.
pub const N_MAX: usize = 100_000;

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub ast: String,
    pub note: String,
}

/// Données d’un tracé complet, recréées à chaque calcul.
#[derive(Clone, Debug)]
pub struct Trace {
    /// Texte source de la formule (rappel au-dessus du tracé).
    pub fonction_texte: String,
    pub n: usize,
    pub a: f64,
    pub b: f64,
    pub resultat: ResultatRiemann,
    /// Points [x, f(x)] de la courbe (au plus 500, trous aux pôles).
    pub courbe: Vec<[f64; 2]>,
}

#[derive(Clone, Debug)]
pub struct AppRiemann {
    // --- entrées utilisateur (texte brut, parsé au moment du calcul) ---
    pub entree_fonction: String,
    pub entree_a: String,
    pub entree_b: String,
    pub entree_n: String,
    pub mode: Mode,

    // --- sorties ---
    pub trace: Option<Trace>, // dernier tracé valide
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus au champ fonction après une action.
    pub focus_fonction: bool,
}

impl Default for AppRiemann {
    fn default() -> Self {
        Self {
            entree_fonction: FONCTION_DEFAUT.to_string(),
            entree_a: A_DEFAUT.to_string(),
            entree_b: B_DEFAUT.to_string(),
            entree_n: N_DEFAUT.to_string(),
            mode: Mode::Droite, // même défaut que la démo
            trace: None,
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_fonction: true,
        }
    }
}

impl AppRiemann {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise aux valeurs de la démo (entrées + résultats).
    pub fn reset_total(&mut self) {
        *self = Self::default();
    }

    /// C : efface seulement le champ fonction (sans toucher au tracé).
    pub fn clear_fonction(&mut self) {
        self.entree_fonction.clear();
        self.focus_fonction = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `trace` (dernier tracé valide).
    /// - On coupe la démarche (non fiable si le calcul échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_fonction = true;
    }

    /// Utilitaire : déposer un tracé frais (l’ancien est remplacé en bloc).
    pub fn set_trace(&mut self, trace: Trace, demarche: Demarche) {
        self.erreur.clear();
        self.trace = Some(trace);
        self.demarche = demarche;
        self.focus_fonction = true;
    }
}
