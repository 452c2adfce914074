//! Configuration du noyau.
//!
//! Défaut = comportement de référence : grammaire complète, caractères
//! inconnus ignorés en silence.

/// Grammaire acceptée par `Calculatrice::evaluate`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Grammaire {
    /// Entiers multi-chiffres, + - * /, ( ) et { }, précédence.
    #[default]
    Complete,
    /// Forme plate `<chiffre> <op> <chiffre>` uniquement.
    Restreinte,
}

/// Que faire d’un caractère hors alphabet ?
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PolitiqueCaracteres {
    #[default]
    Ignorer,
    Refuser,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub grammaire: Grammaire,
    pub caracteres: PolitiqueCaracteres,
}

impl Config {
    pub fn restreinte() -> Self {
        Self {
            grammaire: Grammaire::Restreinte,
            ..Self::default()
        }
    }

    pub fn stricte() -> Self {
        Self {
            caracteres: PolitiqueCaracteres::Refuser,
            ..Self::default()
        }
    }
}
