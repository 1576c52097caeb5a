// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfixe)
//
// Règles:
// - priorités : + - = 1 ; * / = 2 ; % ^ ! = 3
// - priorité ÉGALE dépile => associativité GAUCHE pour tous, y compris '^'
//   ("2^3^2" == "(2^3)^2" == 64 — contrat conservé tel quel)
// - '(' / ')' : structurels seulement, aucune entrée dans la table
// - jamais d'erreur ici : une '(' orpheline en fin de balayage est jetée
//   (récupération silencieuse, cohérente avec la politique d'eval.rs)

use super::jetons::Jeton;

fn priorite(j: &Jeton) -> i32 {
    match j {
        Jeton::Plus | Jeton::Moins => 1,
        Jeton::Etoile | Jeton::Barre => 2,
        Jeton::Pourcent | Jeton::Caret | Jeton::Negation => 3,
        _ => 0,
    }
}

/// Convertit une suite de jetons infixe en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [ParG, Num(1), Plus, Num(2), ParD, Etoile, Num(3)]
///   rpn:    [Num(1), Num(2), Plus, Num(3), Etoile]
pub fn vers_rpn(jetons: &[Jeton]) -> Vec<Jeton> {
    let mut sortie: Vec<Jeton> = Vec::new();
    let mut ops: Vec<Jeton> = Vec::new();

    for &j in jetons {
        match j {
            Jeton::Num(_) => sortie.push(j),

            Jeton::ParG => ops.push(j),

            Jeton::ParD => {
                // dépile jusqu'à '(' ; la '(' est jetée, pas émise
                while let Some(haut) = ops.pop() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    sortie.push(haut);
                }
            }

            // opérateurs, '!' compris
            _ => {
                // dépile tant que:
                // - on n'est pas bloqué par '('
                // - et la priorité du sommet est >= celle du jeton courant
                while let Some(haut) = ops.last() {
                    if matches!(haut, Jeton::ParG) {
                        break;
                    }
                    if priorite(haut) >= priorite(&j) {
                        sortie.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(j);
            }
        }
    }

    // vide la pile ops ; '(' orpheline jetée
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG) {
            continue;
        }
        sortie.push(op);
    }

    sortie
}
