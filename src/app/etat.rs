//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : contenir l’état de la calculatrice (entrée, résultat, erreur,
//! démarche, calculatrice + son historique) et offrir des opérations simples
//! (C/CLR/AC, réglages) sans logique d’affichage.
//!
//! - Aucune évaluation ici (pas de parsing) : c’est vue.rs qui appelle le noyau.
//! - L’historique n’est jamais effacé, même par AC.

use calculatrice_piles::noyau::{Calculatrice, Config, Demarche, Grammaire, PolitiqueCaracteres};

/// Titre unique (natif + web).
pub const TITRE_APP: &str = "Calculatrice à piles";

/// Garde-fou : nombre de lignes d’historique affichées (le journal, lui, garde tout).
pub const HISTORIQUE_MAX_AFFICHE: usize = 200;

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultat: String,
    pub erreur: String,

    // --- démarche (panneau d’explication) ---
    pub demarche: Demarche,

    // --- noyau (historique inclus) ---
    pub calculatrice: Calculatrice,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultat: String::new(),
            erreur: String::new(),
            demarche: Demarche::default(),
            calculatrice: Calculatrice::new(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppCalc {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : entrée + résultats + réglages par défaut (historique conservé).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.calculatrice.set_config(Config::default());
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultat + erreur + démarche (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultat.clear();
        self.erreur.clear();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    /// DEL : retire le dernier symbole (et les espaces qui le précèdent).
    pub fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.focus_entree = true;
    }

    /// On CONSERVE `resultat` (dernier résultat) pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.demarche = Demarche::default();
        self.focus_entree = true;
    }

    pub fn set_resultat(&mut self, resultat: impl Into<String>, demarche: Demarche) {
        self.erreur.clear();
        self.resultat = resultat.into();
        self.demarche = demarche;
        self.focus_entree = true;
    }

    /* ------------------------ Réglages ------------------------ */

    pub fn mode_restreint(&self) -> bool {
        self.calculatrice.config().grammaire == Grammaire::Restreinte
    }

    pub fn set_mode_restreint(&mut self, oui: bool) {
        let mut cfg = self.calculatrice.config();
        cfg.grammaire = if oui {
            Grammaire::Restreinte
        } else {
            Grammaire::Complete
        };
        self.calculatrice.set_config(cfg);
        self.focus_entree = true;
    }

    pub fn mode_strict(&self) -> bool {
        self.calculatrice.config().caracteres == PolitiqueCaracteres::Refuser
    }

    pub fn set_mode_strict(&mut self, oui: bool) {
        let mut cfg = self.calculatrice.config();
        cfg.caracteres = if oui {
            PolitiqueCaracteres::Refuser
        } else {
            PolitiqueCaracteres::Ignorer
        };
        self.calculatrice.set_config(cfg);
        self.focus_entree = true;
    }
}
