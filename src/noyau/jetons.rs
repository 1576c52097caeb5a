// src/noyau/jetons.rs
//
// Assainissement + moins unaire + jetonisation.
//
// Règles:
// - Assainir d'abord : tout caractère hors chiffres / '.' / opérateurs
//   "+ - * / % ^ !" / parenthèses est JETÉ, jamais signalé ("abc" => "").
// - Moins unaire : un '-' en tête de chaîne assainie, ou juste après '(',
//   devient '!'. Ailleurs '-' reste la soustraction binaire, même après un
//   autre opérateur ("3*-2" n'est pas réécrit — limitation conservée).
// - Les chiffres et '.' consécutifs forment UN littéral f64; un littéral
//   illisible (ex: "1..2") => ErreurEval::ValeurAnormale.

use super::erreur::{ErreurEval, ResultatNoyau};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Jeton {
    Num(f64),

    Plus,
    Moins,
    Etoile,
    Barre,
    Pourcent, // %
    Caret,    // ^
    Negation, // ! (moins unaire réécrit)

    ParG,
    ParD,
}

/// Garde seulement les caractères que le noyau comprend.
fn assainir(s: &str) -> String {
    s.chars()
        .filter(|&c| {
            c.is_ascii_digit()
                || matches!(c, '.' | '+' | '-' | '*' | '/' | '%' | '^' | '!' | '(' | ')')
        })
        .collect()
}

/// Réécrit le moins unaire en '!'.
///
/// Déclencheurs (les SEULS, voir en-tête du fichier):
/// - '-' en position 0
/// - '-' immédiatement après '('
fn reecrire_negation(s: &str) -> String {
    let mut sortie = String::with_capacity(s.len());
    let mut prec: Option<char> = None;

    for c in s.chars() {
        if c == '-' && matches!(prec, None | Some('(')) {
            sortie.push('!');
        } else {
            sortie.push(c);
        }
        prec = Some(c);
    }

    sortie
}

/// Jetonise une expression brute : assainir -> moins unaire -> jetons.
pub fn jetonner(s: &str) -> ResultatNoyau<Vec<Jeton>> {
    let propre = reecrire_negation(&assainir(s));

    let mut out: Vec<Jeton> = Vec::new();
    let mut tampon = String::new();

    // vide le tampon numérique courant vers `out`
    fn flush(tampon: &mut String, out: &mut Vec<Jeton>) -> ResultatNoyau<()> {
        if tampon.is_empty() {
            return Ok(());
        }
        let v: f64 = tampon
            .parse()
            .map_err(|_| ErreurEval::ValeurAnormale)?;
        out.push(Jeton::Num(v));
        tampon.clear();
        Ok(())
    }

    for c in propre.chars() {
        if c.is_ascii_digit() || c == '.' {
            tampon.push(c);
            continue;
        }

        flush(&mut tampon, &mut out)?;

        let j = match c {
            '+' => Jeton::Plus,
            '-' => Jeton::Moins,
            '*' => Jeton::Etoile,
            '/' => Jeton::Barre,
            '%' => Jeton::Pourcent,
            '^' => Jeton::Caret,
            '!' => Jeton::Negation,
            '(' => Jeton::ParG,
            ')' => Jeton::ParD,
            // impossible après assainir(); on ignore (défensif)
            _ => continue,
        };
        out.push(j);
    }

    flush(&mut tampon, &mut out)?;

    Ok(out)
}

/// Liste de jetons en texte, séparés par UN espace.
///
/// Invariant : jamais deux espaces consécutifs. Le séparateur est porteur en
/// RPN : c'est lui qui distingue deux littéraux adjacents ("1 2" vs "12").
pub fn format_jetons(jetons: &[Jeton]) -> String {
    let mut out = Vec::new();
    for j in jetons {
        let s = match j {
            Jeton::Num(v) => v.to_string(),

            Jeton::Plus => "+".to_string(),
            Jeton::Moins => "-".to_string(),
            Jeton::Etoile => "*".to_string(),
            Jeton::Barre => "/".to_string(),
            Jeton::Pourcent => "%".to_string(),
            Jeton::Caret => "^".to_string(),
            Jeton::Negation => "!".to_string(),

            Jeton::ParG => "(".to_string(),
            Jeton::ParD => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
