//! Noyau flottant RPN
//!
//! Organisation interne :
//! - erreur.rs : taxonomie d'erreurs du noyau (typées, jamais paniquées)
//! - jetons.rs : assainissement + moins unaire (!) + jetonisation
//! - rpn.rs    : shunting-yard (infixe -> postfixe)
//! - eval.rs   : balayage de la RPN sur pile f64 + pipeline complet

pub mod erreur;
pub mod eval;
pub mod jetons;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_robustesse;

// API publique minimale
pub use erreur::ErreurEval;
pub use eval::{eval_expression, evaluer, evaluer_texte};
