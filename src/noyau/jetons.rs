// src/noyau/jetons.rs

/// Jetons du langage de formules (arithmétique réelle sur une variable).
#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),
    Pi,
    Euler,

    // Fonctions + variable (tout ce qui n’est pas constante / opérateur / nombre)
    // NOTE: le parse (RPN->Expr) décidera si c’est une fonction (sin/cos/...) ou la variable x.
    Ident(String),

    Plus,
    Minus,
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5)
/// - opérateurs + - * / ^
/// - parenthèses ( )
/// - π ou pi, e (constante d’Euler)
/// - identifiants [a-zA-Z_][a-zA-Z0-9_]* (normalisés en minuscules)
/// - √ (équivaut à ident("sqrt"))
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, String> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses
        if c == '(' {
            out.push(Jeton::LPar);
            i += 1;
            continue;
        }
        if c == ')' {
            out.push(Jeton::RPar);
            i += 1;
            continue;
        }

        // Opérateurs
        match c {
            '+' => {
                out.push(Jeton::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Jeton::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Jeton::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Jeton::Slash);
                i += 1;
                continue;
            }
            '^' => {
                out.push(Jeton::Caret);
                i += 1;
                continue;
            }
            _ => {}
        }

        // π : le caractère unicode direct
        if c == 'π' {
            out.push(Jeton::Pi);
            i += 1;
            continue;
        }

        // Racine carrée unicode : √  => ident("sqrt")
        if c == '√' {
            out.push(Jeton::Ident("sqrt".to_string()));
            i += 1;
            continue;
        }

        // Identifiants ASCII : [a-zA-Z_][a-zA-Z0-9_]*
        if c.is_ascii_alphabetic() || c == '_' {
            let start = i;
            i += 1;
            while i < chars.len() && (chars[i].is_ascii_alphanumeric() || chars[i] == '_') {
                i += 1;
            }
            let word: String = chars[start..i].iter().collect();
            let w = word.to_lowercase();

            // Normalisation : "pi"/"PI" devient Jeton::Pi, "e" devient Jeton::Euler.
            // Le reste (sin, sqrt, x, ...) sera trié par le parse.
            if w == "pi" {
                out.push(Jeton::Pi);
            } else if w == "e" {
                out.push(Jeton::Euler);
            } else {
                out.push(Jeton::Ident(w));
            }
            continue;
        }

        // Nombre décimal : chiffres, point optionnel, chiffres (".5" accepté)
        if c.is_ascii_digit() || (c == '.' && i + 1 < chars.len() && chars[i + 1].is_ascii_digit())
        {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            if i < chars.len() && chars[i] == '.' {
                i += 1;
                while i < chars.len() && chars[i].is_ascii_digit() {
                    i += 1;
                }
            }
            let txt: String = chars[start..i].iter().collect();
            let v: f64 = txt
                .parse()
                .map_err(|_| format!("nombre invalide: '{txt}'"))?;

            out.push(Jeton::Num(v));
            continue;
        }

        return Err(format!("caractère inattendu: '{c}'"));
    }

    Ok(out)
}

/// Format utilitaire (debug/“démarche”) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(v) => format!("{v}"),
            Jeton::Pi => "π".to_string(),
            Jeton::Euler => "e".to_string(),
            Jeton::Ident(name) => name.clone(),

            Jeton::Plus => "+".to_string(),
            Jeton::Minus => "-".to_string(),
            Jeton::Star => "*".to_string(),
            Jeton::Slash => "/".to_string(),
            Jeton::Caret => "^".to_string(),

            Jeton::LPar => "(".to_string(),
            Jeton::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
