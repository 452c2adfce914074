//! Historique des évaluations.
//!
//! Ajout seulement (succès comme échec), jamais de retrait.
//! Lecture : du plus récent au plus ancien.

use super::erreurs::Echec;

#[derive(Clone, Debug, PartialEq)]
pub struct EntreeHistorique {
    pub expression: String,
    pub issue: Result<f64, Echec>,
}

impl EntreeHistorique {
    pub fn new(expression: impl Into<String>, issue: Result<f64, Echec>) -> Self {
        Self {
            expression: expression.into(),
            issue,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Historique {
    // ordre chronologique (le plus récent en dernier)
    entrees: Vec<EntreeHistorique>,
}

impl Historique {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ajoute(&mut self, expression: impl Into<String>, issue: Result<f64, Echec>) {
        self.entrees.push(EntreeHistorique::new(expression, issue));
    }

    /// Copie indépendante, plus récent d’abord.
    pub fn instantane(&self) -> Vec<EntreeHistorique> {
        self.recentes().cloned().collect()
    }

    /// Parcours sans copie, plus récent d’abord.
    pub fn recentes(&self) -> impl Iterator<Item = &EntreeHistorique> + '_ {
        self.entrees.iter().rev()
    }

    pub fn derniere(&self) -> Option<&EntreeHistorique> {
        self.entrees.last()
    }

    pub fn len(&self) -> usize {
        self.entrees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entrees.is_empty()
    }
}
