//! Noyau — évaluation (pipeline réel)
//!
//! jetonner (assainir + moins unaire) -> RPN -> balayage pile f64 -> décimal
//!
//! Politique d'échec : trois catégories typées (erreur.rs), retournées en
//! valeur. L'opérande manquante d'un opérateur binaire N'EST PAS une erreur :
//! récupération en place (0 injecté, ou opérande rempilée) puis arrêt
//! anticipé du balayage — résultat partiel au mieux.
//!
//! Pureté : aucun état partagé; chaque appel n'utilise que des piles locales
//! (appels concurrents sûrs sans verrou).

use log::debug;

use super::erreur::{ErreurEval, ResultatNoyau};
use super::jetons::{format_jetons, jetonner, Jeton};
use super::rpn::vers_rpn;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

/// API publique : évalue une expression et retourne:
/// - le résultat en décimal (Display de f64 : "3", "-3", "inf", "NaN", …)
/// - la démarche (jetons + RPN en texte, pour le panneau d'explication)
pub fn eval_expression(expr_str: &str) -> ResultatNoyau<(String, DemarcheNoyau)> {
    // 1) Jetons (assainis, moins unaire réécrit)
    let jetons = jetonner(expr_str)?;
    let jetons_txt = format_jetons(&jetons);

    // 2) RPN
    let rpn = vers_rpn(&jetons);
    let rpn_txt = format_jetons(&rpn);

    debug!("jetons=[{jetons_txt}] rpn=[{rpn_txt}]");

    // 3) Balayage pile f64
    let valeur = evaluer_rpn(&rpn)?;

    // 4) Démarche
    let d = DemarcheNoyau {
        jetons: jetons_txt,
        rpn: rpn_txt,
        note: "Pipeline: assainir → moins unaire (!) → jetons → RPN → pile f64.".into(),
    };

    Ok((valeur.to_string(), d))
}

/// Contrat structuré : la valeur f64, ou une des trois erreurs typées.
pub fn evaluer(expr_str: &str) -> ResultatNoyau<f64> {
    let jetons = jetonner(expr_str)?;
    evaluer_rpn(&vers_rpn(&jetons))
}

/// Contrat "texte" historique : TOUJOURS une chaîne.
/// Soit le décimal du résultat, soit le message d'erreur (Display).
/// À l'appelant de distinguer les deux (ex: en tentant un parse numérique).
pub fn evaluer_texte(expr_str: &str) -> String {
    match evaluer(expr_str) {
        Ok(v) => v.to_string(),
        Err(e) => e.to_string(),
    }
}

/// Balayage d'une RPN sur pile de f64.
fn evaluer_rpn(rpn: &[Jeton]) -> ResultatNoyau<f64> {
    let mut pile: Vec<f64> = Vec::new();

    'balayage: for &j in rpn {
        match j {
            Jeton::Num(v) => pile.push(v),

            // unaire : une seule opérande; pile vide => plus rien à faire
            Jeton::Negation => match pile.pop() {
                Some(x) => pile.push(-x),
                None => break 'balayage,
            },

            Jeton::Plus
            | Jeton::Moins
            | Jeton::Etoile
            | Jeton::Barre
            | Jeton::Pourcent
            | Jeton::Caret => {
                // binaire : récupération en place si opérande manquante
                let y = match pile.pop() {
                    Some(v) => v,
                    None => {
                        pile.push(0.0);
                        break 'balayage;
                    }
                };
                let x = match pile.pop() {
                    Some(v) => v,
                    None => {
                        pile.push(y);
                        break 'balayage;
                    }
                };

                let r = match j {
                    Jeton::Plus => x + y,
                    Jeton::Moins => x - y,
                    Jeton::Etoile => x * y,
                    // division par zéro : ±inf/NaN flottant natif, pas une erreur
                    Jeton::Barre => x / y,
                    Jeton::Pourcent => x % y,
                    Jeton::Caret => x.powf(y),
                    _ => unreachable!(),
                };
                pile.push(r);
            }

            // structurels : absents d'une RPN; ignorés (défensif)
            Jeton::ParG | Jeton::ParD => {}
        }
    }

    match pile.as_slice() {
        [] => Err(ErreurEval::ResultatPerdu),
        [seul] => Ok(*seul),
        _ => Err(ErreurEval::CalculInacheve),
    }
}
