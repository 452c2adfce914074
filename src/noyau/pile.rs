// src/noyau/pile.rs
//
// Pile LIFO générique.
// Une seule implémentation pour les trois usages du noyau :
// - styles de crochets (validation)
// - opérateurs + marqueurs d’ouverture (évaluation)
// - opérandes réels (évaluation)

use super::erreurs::ErreurPile;

#[derive(Clone, Debug, PartialEq)]
pub struct Pile<T> {
    elements: Vec<T>,
}

impl<T> Default for Pile<T> {
    fn default() -> Self {
        Self {
            elements: Vec::new(),
        }
    }
}

impl<T> Pile<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: T) {
        self.elements.push(item);
    }

    /// Retire et renvoie le sommet. Pile vide => `ErreurPile::Vide`.
    pub fn pop(&mut self) -> Result<T, ErreurPile> {
        self.elements.pop().ok_or(ErreurPile::Vide)
    }

    /// Sommet sans le retirer. Pile vide => `ErreurPile::Vide`.
    pub fn peek(&self) -> Result<&T, ErreurPile> {
        self.elements.last().ok_or(ErreurPile::Vide)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }
}
