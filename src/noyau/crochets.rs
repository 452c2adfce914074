// src/noyau/crochets.rs
//
// Validation structurelle des crochets (avant toute arithmétique).
// Invariant : la pile contient, de bas en haut, les styles encore ouverts
// dans leur ordre d’apparition.

use super::jetons::{Crochet, Tok};
use super::pile::Pile;

/// true ssi chaque fermant referme le dernier ouvrant de même style
/// et qu’aucun ouvrant ne reste à la fin.
pub fn check_brackets(tokens: &[Tok]) -> bool {
    let mut pile: Pile<Crochet> = Pile::new();

    for tok in tokens {
        match tok {
            Tok::Ouvrant(style) => pile.push(*style),
            Tok::Fermant(style) => match pile.pop() {
                Ok(ouvert) if ouvert == *style => {}
                // fermant orphelin ou style différent
                _ => return false,
            },
            Tok::Entier(_) | Tok::Op(_) => {}
        }
    }

    pile.is_empty()
}
