//! Calculatrice à piles — bibliothèque
//!
//! Évalue `+ - * /` sur des entiers (multi-chiffres) avec ( ) et { },
//! précédence usuelle, associativité à gauche, et tient un historique
//! (expression, issue) du plus récent au plus ancien.
//!
//! ```
//! use calculatrice_piles::noyau::{Calculatrice, Echec};
//!
//! let mut calc = Calculatrice::new();
//! assert_eq!(calc.evaluate("{2 + 3} * 4"), Ok(20.0));
//! assert_eq!(calc.evaluate("{2 + 3) * 4"), Err(Echec));
//! assert_eq!(calc.get_history().len(), 2);
//! ```

pub mod noyau;
