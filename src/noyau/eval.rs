//! Noyau — compilation d’une formule (pipeline réel)
//!
//! tokenize -> RPN -> Expr
//!
//! La compilation se fait UNE fois; l’évaluation point par point passe
//! ensuite par `Fonction::valeur` (pure, réentrante). Aucun identifiant
//! n’est résolu à l’évaluation : tout ce qui n’est pas x / constante /
//! fonction de la liste blanche est rejeté dès le parse.

use super::expr::Expr;
use super::jetons::{format_jetons, tokenize};
use super::rpn::{from_rpn, to_rpn};

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub ast: String,
    pub note: String,
}

/// Une formule compilée : fonction pure ℝ -> ℝ de la variable x.
#[derive(Clone, Debug)]
pub struct Fonction {
    texte: String,
    expr: Expr,
    demarche: DemarcheNoyau,
}

impl Fonction {
    /// Évalue f(x). Erreur de domaine possible (division par zéro, √ négatif, ...).
    pub fn valeur(&self, x: f64) -> Result<f64, String> {
        self.expr.eval(x)
    }

    /// Le texte source de la formule (tel que saisi, espaces bord retirés).
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Démarche (jetons + RPN en texte) pour le panneau d’explication.
    pub fn demarche(&self) -> &DemarcheNoyau {
        &self.demarche
    }
}

/// API publique : compile une formule en `Fonction`.
///
/// Erreurs (avec le texte fautif dans le message) :
/// - entrée vide
/// - caractère inattendu / nombre invalide (tokenize)
/// - parenthèses déséquilibrées, expression mal formée (RPN)
/// - identifiant hors liste blanche (from_rpn)
pub fn compiler_fonction(texte: &str) -> Result<Fonction, String> {
    let s = texte.trim();
    if s.is_empty() {
        return Err("Entrée vide".into());
    }

    // 1) Jetons
    let jetons = tokenize(s)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);

    // 3) AST (Expr)
    let expr = from_rpn(&rpn)?;
    let ast_txt = format!("{expr}");

    Ok(Fonction {
        texte: s.to_string(),
        expr,
        demarche: DemarcheNoyau {
            jetons: jetons_txt,
            rpn: rpn_txt,
            ast: ast_txt,
            note: "Pipeline: jetons → RPN → Expr → éval f64 au point.".into(),
        },
    })
}
