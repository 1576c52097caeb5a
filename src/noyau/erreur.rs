// src/noyau/erreur.rs
//
// Erreurs du noyau.
//
// Contrat:
// - trois catégories seulement, toutes retournées en valeur (jamais de panique
//   qui traverse le noyau)
// - l'opérande manquante d'un opérateur binaire n'est PAS une erreur :
//   elle est récupérée en place dans eval.rs (voir là-bas)

use thiserror::Error;

/// Résultat standard du noyau.
pub type ResultatNoyau<T> = Result<T, ErreurEval>;

/// Les trois issues d'échec possibles d'une évaluation.
///
/// Le message `Display` est le contrat "texte" historique : un appelant qui
/// passe par `evaluer_texte` reçoit ce message tel quel à la place du décimal.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurEval {
    /// Un littéral numérique du flux ne se lit pas comme un f64 (ex: "1..2").
    #[error("valeur numérique anormale rencontrée")]
    ValeurAnormale,

    /// Plus d'une valeur reste sur la pile après le balayage
    /// (réduction incomplète, ex: opérateurs manquants).
    #[error("le calcul ne s'est pas terminé")]
    CalculInacheve,

    /// Aucune valeur sur la pile après le balayage
    /// (entrée vide, ou assainie à vide).
    #[error("le résultat a été perdu")]
    ResultatPerdu,
}
