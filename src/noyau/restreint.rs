// src/noyau/restreint.rs
//
// Grammaire restreinte : `<chiffre> <op> <chiffre>`, espaces permis.
// Pré-validation seulement ; le calcul passe ensuite par le même noyau.

use super::erreurs::ErreurCalcul;
use super::jetons::Operateur;

pub fn verifie_forme_plate(s: &str) -> Result<(), ErreurCalcul> {
    let compact: Vec<char> = s.chars().filter(|c| *c != ' ').collect();

    match compact.as_slice() {
        [a, op, b]
            if a.is_ascii_digit()
                && Operateur::depuis_char(*op).is_some()
                && b.is_ascii_digit() =>
        {
            Ok(())
        }
        _ => Err(ErreurCalcul::GrammaireRestreinte),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepte_forme_plate() {
        for s in ["1+2", "9 / 3", " 0*0 ", "7 - 8"] {
            assert_eq!(verifie_forme_plate(s), Ok(()), "{s:?}");
        }
    }

    #[test]
    fn refuse_le_reste() {
        for s in [
            "", "5", "12+3", "1+2+3", "(1+2)", "{1}+2", "1+", "+1", "1x2", "a+b", "1\t+2",
        ] {
            assert_eq!(
                verifie_forme_plate(s),
                Err(ErreurCalcul::GrammaireRestreinte),
                "{s:?}"
            );
        }
    }
}
