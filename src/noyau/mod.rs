//! Noyau : évaluateur d’expressions à deux piles + historique
//!
//! Organisation interne :
//! - pile.rs         : pile LIFO générique (crochets, opérateurs, opérandes)
//! - jetons.rs       : tokenisation (entiers multi-chiffres, + - * /, ( ) { })
//! - crochets.rs     : validation structurelle des crochets
//! - eval.rs         : précédence à deux piles (shunting-yard)
//! - restreint.rs    : grammaire plate `<chiffre> <op> <chiffre>`
//! - historique.rs   : journal (expression, issue), plus récent d’abord
//! - calculatrice.rs : pipeline complet + historique
//! - config.rs       : grammaire + politique des caractères
//! - erreurs.rs      : taxonomie interne + échec uniforme
//! - format.rs       : affichage des réels / issues / étapes

pub mod calculatrice;
pub mod config;
pub mod crochets;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod historique;
pub mod jetons;
pub mod pile;
pub mod restreint;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use calculatrice::{Calculatrice, Demarche};
pub use config::{Config, Grammaire, PolitiqueCaracteres};
pub use erreurs::{Echec, ErreurCalcul, ErreurPile};
pub use historique::{EntreeHistorique, Historique};
