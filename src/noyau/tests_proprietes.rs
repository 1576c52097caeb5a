//! Tests propriétés : contrat observable du noyau, au-delà des cas unitaires.
//!
//! - toute expression binaire pleinement parenthésée à deux littéraux vaut
//!   le calcul flottant direct de l'opérateur
//! - idempotence : même entrée => même sortie (fonction pure)
//! - invariants du format RPN (UN espace séparateur)

use super::eval::{eval_expression, evaluer, evaluer_texte};

/// Applique l'opérateur directement en f64 (référence).
fn direct(x: f64, op: char, y: f64) -> f64 {
    match op {
        '+' => x + y,
        '-' => x - y,
        '*' => x * y,
        '/' => x / y,
        '%' => x % y,
        '^' => x.powf(y),
        _ => unreachable!("opérateur inconnu dans le test"),
    }
}

#[test]
fn binaires_pleinement_parentheses() {
    // paires sans piège d'écriture (le littéral doit se réécrire tel quel)
    let paires: &[(f64, f64)] = &[
        (7.0, 2.0),
        (1.5, 0.25),
        (10.0, 3.0),
        (2.0, 8.0),
        (0.0, 5.0),
        (9.0, 0.5),
    ];

    for &(x, y) in paires {
        for op in ['+', '-', '*', '/', '%', '^'] {
            let expr = format!("({x}{op}{y})");
            let attendu = direct(x, op, y);
            let obtenu = evaluer(&expr)
                .unwrap_or_else(|e| panic!("evaluer({expr:?}) erreur: {e}"));
            assert_eq!(obtenu, attendu, "expr={expr:?}");
        }
    }
}

#[test]
fn idempotence() {
    for s in ["1+2", "(1+2)*3-2", "2^3^2", "-5+2", "", "abc", "3*-2", "1/0"] {
        let a = evaluer_texte(s);
        let b = evaluer_texte(s);
        assert_eq!(a, b, "entrée={s:?}");
    }
}

#[test]
fn priorites_croisees() {
    // + - (1) < * / (2) < % ^ ! (3)
    assert_eq!(evaluer("1+2*3"), Ok(7.0));
    assert_eq!(evaluer("2*3^2"), Ok(18.0));
    // '%' plus prioritaire que '*' : 2*3%4 == 2*(3%4)
    assert_eq!(evaluer("2*3%4"), Ok(6.0));
    // associativité gauche de '^'
    assert_eq!(evaluer("2^3^2"), Ok(64.0));
}

#[test]
fn espaces_et_bruit_assainis() {
    // espaces/lettres jetés AVANT la réécriture du moins unaire :
    // " - 5" s'assainit en "-5" => négation bien déclenchée
    assert_eq!(evaluer(" - 5 + 2 "), Ok(-3.0));
    assert_eq!(evaluer("x1+y2"), Ok(3.0));
}

#[test]
fn parentheses_mal_appariees_recuperees() {
    // jamais une erreur de parenthésage : récupération silencieuse
    assert_eq!(evaluer("(1+2"), Ok(3.0));
    assert_eq!(evaluer("1+2)"), Ok(3.0));
    assert_eq!(evaluer("((1+2)*3"), Ok(9.0));
}

#[test]
fn demarche_format_stable() {
    let (_, d) = eval_expression("10%3+2").unwrap();
    assert_eq!(d.jetons, "10 % 3 + 2");
    assert_eq!(d.rpn, "10 3 % 2 +");
    for champ in [&d.jetons, &d.rpn] {
        assert!(!champ.starts_with(' ') && !champ.ends_with(' '));
        assert!(!champ.contains("  "));
    }
}
