//! Erreurs du noyau.
//!
//! - `ErreurPile`   : pop/peek sur pile vide
//! - `ErreurCalcul` : taxonomie interne (précise, visible dans les logs)
//! - `Echec`        : signal d’échec uniforme vu par l’appelant de `evaluate`

use std::fmt;

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErreurPile {
    #[error("pile vide")]
    Vide,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErreurCalcul {
    #[error("crochets mal formés (non appariés, styles différents ou non fermés)")]
    CrochetsMalformes,
    #[error("division par zéro")]
    DivisionParZero,
    #[error("nombre d’opérandes incohérent avec les opérateurs")]
    Arite,
    #[error("état interne incohérent: {0}")]
    PileVide(#[from] ErreurPile),
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),
    #[error("grammaire restreinte: attendu <chiffre> <op> <chiffre>")]
    GrammaireRestreinte,
    #[error("entier trop grand pour un réel fini")]
    Depassement,
}

/// Marqueur d’échec indifférencié (contrat externe + historique).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Echec;

impl fmt::Display for Echec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Error")
    }
}

impl std::error::Error for Echec {}

impl From<ErreurCalcul> for Echec {
    fn from(_: ErreurCalcul) -> Self {
        Echec
    }
}
