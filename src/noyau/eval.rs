//! Noyau — évaluation à deux piles (shunting-yard évalué à la volée).
//!
//! Pré-condition : les jetons ont passé `check_brackets`. Si ce n’est pas
//! le cas, le résultat est une erreur, jamais une panique.
//!
//! Chaque opération appliquée est consignée dans `etapes` (démarche).

use num_bigint::BigUint;
use num_traits::ToPrimitive;

use super::erreurs::ErreurCalcul;
use super::jetons::{Crochet, Operateur, Tok};
use super::pile::Pile;

/// Contenu de la pile d’opérateurs : jamais de fermant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ElementOp {
    Op(Operateur),
    Ouvrant(Crochet),
}

/// Une opération binaire appliquée : `gauche op droite = valeur`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Etape {
    pub gauche: f64,
    pub op: Operateur,
    pub droite: f64,
    pub valeur: f64,
}

/// + - : 1 ; * / : 2 ; marqueur d’ouverture : 0 (sentinelle).
fn precedence(e: &ElementOp) -> u8 {
    match e {
        ElementOp::Op(Operateur::Plus | Operateur::Moins) => 1,
        ElementOp::Op(Operateur::Fois | Operateur::Divise) => 2,
        ElementOp::Ouvrant(_) => 0,
    }
}

pub fn evaluate_tokens(tokens: &[Tok]) -> Result<f64, ErreurCalcul> {
    let mut etapes = Vec::new();
    evaluate_tokens_trace(tokens, &mut etapes)
}

/// Comme `evaluate_tokens`, en consignant les opérations dans `etapes`.
/// En cas d’erreur, `etapes` contient ce qui a été appliqué avant l’abandon.
pub fn evaluate_tokens_trace(tokens: &[Tok], etapes: &mut Vec<Etape>) -> Result<f64, ErreurCalcul> {
    let mut operateurs: Pile<ElementOp> = Pile::new();
    let mut operandes: Pile<f64> = Pile::new();

    for tok in tokens {
        match tok {
            Tok::Entier(n) => operandes.push(vers_reel(n)?),

            Tok::Op(op) => {
                let entrant = ElementOp::Op(*op);

                // associativité à gauche : à précédence égale, le haut sort d’abord
                while let Ok(&ElementOp::Op(haut)) = operateurs.peek() {
                    if precedence(&ElementOp::Op(haut)) < precedence(&entrant) {
                        break;
                    }
                    operateurs.pop()?;
                    applique(haut, &mut operandes, etapes)?;
                }

                operateurs.push(entrant);
            }

            Tok::Ouvrant(style) => operateurs.push(ElementOp::Ouvrant(*style)),

            Tok::Fermant(style) => loop {
                // pile vidée sans ouvrant => ErreurPile (état interne incohérent)
                match operateurs.pop()? {
                    ElementOp::Op(op) => applique(op, &mut operandes, etapes)?,
                    ElementOp::Ouvrant(ouvert) if ouvert == *style => break,
                    ElementOp::Ouvrant(_) => return Err(ErreurCalcul::CrochetsMalformes),
                }
            },
        }
    }

    while !operateurs.is_empty() {
        match operateurs.pop()? {
            ElementOp::Op(op) => applique(op, &mut operandes, etapes)?,
            ElementOp::Ouvrant(_) => return Err(ErreurCalcul::CrochetsMalformes),
        }
    }

    let resultat = operandes.pop().map_err(|_| ErreurCalcul::Arite)?;
    if !operandes.is_empty() {
        return Err(ErreurCalcul::Arite);
    }
    Ok(resultat)
}

/// Dépile droite puis gauche, applique, rempile le résultat.
fn applique(
    op: Operateur,
    operandes: &mut Pile<f64>,
    etapes: &mut Vec<Etape>,
) -> Result<(), ErreurCalcul> {
    let droite = operandes.pop().map_err(|_| ErreurCalcul::Arite)?;
    let gauche = operandes.pop().map_err(|_| ErreurCalcul::Arite)?;

    let valeur = apply_operator(op, gauche, droite)?;
    log::trace!("{gauche} {} {droite} = {valeur}", op.symbole());

    etapes.push(Etape {
        gauche,
        op,
        droite,
        valeur,
    });
    operandes.push(valeur);
    Ok(())
}

/// Arithmétique réelle native ; seule la division par zéro exact échoue.
pub fn apply_operator(op: Operateur, gauche: f64, droite: f64) -> Result<f64, ErreurCalcul> {
    match op {
        Operateur::Plus => Ok(gauche + droite),
        Operateur::Moins => Ok(gauche - droite),
        Operateur::Fois => Ok(gauche * droite),
        Operateur::Divise => {
            if droite == 0.0 {
                Err(ErreurCalcul::DivisionParZero)
            } else {
                Ok(gauche / droite)
            }
        }
    }
}

fn vers_reel(n: &BigUint) -> Result<f64, ErreurCalcul> {
    n.to_f64()
        .filter(|v| v.is_finite())
        .ok_or(ErreurCalcul::Depassement)
}
