//! Noyau — point d’entrée (pipeline réel)
//!
//! [grammaire restreinte] -> jetons -> crochets (porte) -> deux piles -> historique
//!
//! Toute erreur interne (`ErreurCalcul`) devient ici un `Echec` uniforme ;
//! la cause précise part dans les logs.

use super::config::{Config, Grammaire};
use super::crochets::check_brackets;
use super::erreurs::{Echec, ErreurCalcul};
use super::eval::evaluate_tokens_trace;
use super::format::{format_etape, format_valeur};
use super::historique::{EntreeHistorique, Historique};
use super::jetons::{format_tokens, tokenize};
use super::restreint::verifie_forme_plate;

/// Démarche d’une évaluation : jetons lus + opérations appliquées.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub etapes: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct Calculatrice {
    config: Config,
    historique: Historique,
}

impl Calculatrice {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_config(config: Config) -> Self {
        Self {
            config,
            historique: Historique::new(),
        }
    }

    pub fn config(&self) -> Config {
        self.config
    }

    /// Change la configuration ; l’historique est conservé.
    pub fn set_config(&mut self, config: Config) {
        self.config = config;
    }

    pub fn evaluate(&mut self, expression: &str) -> Result<f64, Echec> {
        self.evaluer_avec_demarche(expression).map(|(v, _)| v)
    }

    /// Comme `evaluate`, avec la démarche en plus (succès seulement).
    pub fn evaluer_avec_demarche(&mut self, expression: &str) -> Result<(f64, Demarche), Echec> {
        let mut demarche = Demarche::default();
        let issue = self.pipeline(expression, &mut demarche);

        match &issue {
            Ok(v) => log::debug!("« {expression} » = {}", format_valeur(*v)),
            Err(e) => log::warn!("« {expression} » : {e}"),
        }

        let issue = issue.map_err(Echec::from);
        self.historique.ajoute(expression, issue);
        issue.map(|v| (v, demarche))
    }

    fn pipeline(&self, expression: &str, demarche: &mut Demarche) -> Result<f64, ErreurCalcul> {
        if self.config.grammaire == Grammaire::Restreinte {
            verifie_forme_plate(expression)?;
        }

        // 1) Jetons
        let jetons = tokenize(expression, self.config.caracteres)?;
        demarche.jetons = format_tokens(&jetons);
        log::debug!("jetons: {}", demarche.jetons);

        // 2) Porte : crochets
        if !check_brackets(&jetons) {
            return Err(ErreurCalcul::CrochetsMalformes);
        }

        // 3) Deux piles
        let mut etapes = Vec::new();
        let resultat = evaluate_tokens_trace(&jetons, &mut etapes);
        demarche.etapes = etapes.iter().map(format_etape).collect();
        resultat
    }

    /// Copie de l’historique, plus récent d’abord.
    pub fn get_history(&self) -> Vec<EntreeHistorique> {
        self.historique.instantane()
    }

    pub fn historique(&self) -> &Historique {
        &self.historique
    }
}
