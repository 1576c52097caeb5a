//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l'état de la calculatrice (entrée, résultat, erreur,
//! démarche) et offrir des opérations simples (C/CLR/AC) sans logique
//! d'affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de noyau, pas de parsing).
//! - Actions déterministes, sans effet de bord caché.

#[derive(Clone, Default, Debug)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
    pub note: String,
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String, // décimal (Display f64 : "3", "-3", "inf", "NaN", …)
    pub erreur: String,   // message d'erreur du noyau (si l'évaluation échoue)

    // --- démarche (panneau d'explication) ---
    pub demarche: Demarche,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l'entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions "boutons" (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.focus_entree = true;
    }

    /// C : effacer seulement l'entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    fn clear_demarche(&mut self) {
        self.demarche = Demarche::default();
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l'entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX :
    /// - On CONSERVE `resultat` (dernier résultat) pour ne pas "effacer
    ///   l'écran" sur une faute.
    /// - On coupe la démarche (non fiable si l'évaluation échoue).
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.clear_demarche();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet (décimal + démarche).
    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }
}
