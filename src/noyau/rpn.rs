// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> AST
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis reconstruire Expr
//
// Règles:
// - Ident(name):
//    - si name ∈ {sin, cos, tan, sqrt, exp, ln} => fonction unaire (postfixée en RPN)
//    - si name == "x" => la variable libre
//    - sinon => REJET au parse (aucune résolution d’identifiant ambiant)
// - '^' est un jeton de grammaire à part entière (associatif à droite) :
//   aucune réécriture textuelle "^ -> puissance" en amont.
// - Moins unaire:
//    - si '-' arrive quand on n’attend PAS une valeur, on injecte 0 : "-x" => "0 x -"
//
// NOTE:
// - Les fonctions sont traitées comme des opérateurs “collés” à leur argument
//   et sont sorties après la parenthèse fermante.

use super::expr::Expr;
use super::jetons::Jeton;

fn precedence(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Minus => 1,
        Jeton::Star | Jeton::Slash => 2,
        Jeton::Caret => 3,
        _ => 0,
    }
}

fn is_right_associative(j: &Jeton) -> bool {
    matches!(j, Jeton::Caret)
}

/// Identificateurs reconnus comme fonctions (unaire).
fn is_fonction_ident(name: &str) -> bool {
    matches!(name, "sin" | "cos" | "tan" | "sqrt" | "exp" | "ln")
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Ident("sin"), LPar, Pi, Slash, Num(2), RPar]
///   rpn:    [Pi, Num(2), Slash, Ident("sin")]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, String> {
    let mut out: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    // “valeur” = un atome ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for jeton in jetons.iter().cloned() {
        match jeton {
            Jeton::Num(_) | Jeton::Pi | Jeton::Euler => {
                out.push(jeton);
                prev_was_value = true;
            }

            Jeton::Ident(name) => {
                if is_fonction_ident(&name) {
                    // fonction : on la garde sur la pile (elle sortira après son argument)
                    ops.push(Jeton::Ident(name));
                    prev_was_value = false;
                } else {
                    // variable/atome : sortie directe (la validation se fait en from_rpn)
                    out.push(Jeton::Ident(name));
                    prev_was_value = true;
                }
            }

            Jeton::LPar => {
                ops.push(jeton);
                prev_was_value = false;
            }

            Jeton::RPar => {
                // dépile jusqu’à '('
                let mut trouve = false;
                while let Some(top) = ops.pop() {
                    if matches!(top, Jeton::LPar) {
                        trouve = true;
                        break;
                    }
                    out.push(top);
                }
                if !trouve {
                    return Err("parenthèse fermante sans ouvrante".into());
                }

                // si une fonction est au sommet, on la sort aussi
                if let Some(Jeton::Ident(name)) = ops.last() {
                    if is_fonction_ident(name.as_str()) {
                        out.push(ops.pop().unwrap());
                    }
                }

                prev_was_value = true;
            }

            Jeton::Plus | Jeton::Star | Jeton::Slash | Jeton::Caret => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et on ne traverse pas une fonction (fonction reste collée à son argument)
                // - et la précédence/associativité exige de sortir l'opérateur du haut
                while let Some(top) = ops.last() {
                    if matches!(top, Jeton::LPar) {
                        break;
                    }
                    if let Jeton::Ident(name) = top {
                        if is_fonction_ident(name.as_str()) {
                            break;
                        }
                    }

                    let p_top = precedence(top);
                    let p_jeton = precedence(&jeton);

                    let doit_pop = if is_right_associative(&jeton) {
                        p_top > p_jeton
                    } else {
                        p_top >= p_jeton
                    };

                    if doit_pop {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(jeton);
                prev_was_value = false;
            }

            Jeton::Minus => {
                // moins unaire : si pas de valeur avant, injecte 0
                if !prev_was_value {
                    out.push(Jeton::Num(0.0));
                }

                while let Some(top) = ops.last() {
                    if matches!(top, Jeton::LPar) {
                        break;
                    }
                    if let Jeton::Ident(name) = top {
                        if is_fonction_ident(name.as_str()) {
                            break;
                        }
                    }
                    if precedence(top) >= precedence(&Jeton::Minus) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(Jeton::Minus);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::LPar) {
            return Err("parenthèses non fermées".into());
        }
        out.push(op);
    }

    Ok(out)
}

/// Construit une Expr à partir d’une RPN.
///
/// - Ident(name):
///     - si name ∈ {sin,cos,tan,sqrt,exp,ln} => fonction unaire
///     - si name == "x" => Expr::Var
///     - sinon => erreur (seule la variable x est liée; tout autre identifiant
///       est rejeté ICI, jamais résolu à l’évaluation)
pub fn from_rpn(rpn: &[Jeton]) -> Result<Expr, String> {
    let mut st: Vec<Expr> = Vec::new();

    for jeton in rpn.iter().cloned() {
        match jeton {
            Jeton::Num(v) => st.push(Expr::Num(v)),
            Jeton::Pi => st.push(Expr::Pi),
            Jeton::Euler => st.push(Expr::Euler),

            Jeton::Plus | Jeton::Minus | Jeton::Star | Jeton::Slash | Jeton::Caret => {
                let b = st.pop().ok_or("expression invalide")?;
                let a = st.pop().ok_or("expression invalide")?;

                let e = match jeton {
                    Jeton::Plus => Expr::Add(Box::new(a), Box::new(b)),
                    Jeton::Minus => Expr::Sub(Box::new(a), Box::new(b)),
                    Jeton::Star => Expr::Mul(Box::new(a), Box::new(b)),
                    Jeton::Slash => Expr::Div(Box::new(a), Box::new(b)),
                    Jeton::Caret => Expr::Pow(Box::new(a), Box::new(b)),
                    _ => unreachable!(),
                };

                st.push(e);
            }

            Jeton::Ident(name) => {
                if is_fonction_ident(name.as_str()) {
                    let x = st.pop().ok_or("fonction sans argument")?;
                    let e = match name.as_str() {
                        "sqrt" => Expr::Sqrt(Box::new(x)),
                        "exp" => Expr::Exp(Box::new(x)),
                        "ln" => Expr::Ln(Box::new(x)),
                        "sin" => Expr::Sin(Box::new(x)),
                        "cos" => Expr::Cos(Box::new(x)),
                        "tan" => Expr::Tan(Box::new(x)),
                        _ => unreachable!(),
                    };
                    st.push(e);
                } else if name == "x" {
                    st.push(Expr::Var);
                } else {
                    return Err(format!(
                        "identifiant inconnu: '{name}' (seule la variable x est permise)"
                    ));
                }
            }

            Jeton::LPar | Jeton::RPar => return Err("parenthèse inattendue en RPN".into()),
        }
    }

    if st.len() != 1 {
        return Err("expression invalide".into());
    }
    Ok(st.pop().unwrap())
}
