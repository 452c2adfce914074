// src/noyau/jetons.rs

use num_bigint::BigUint;

use super::config::PolitiqueCaracteres;
use super::erreurs::ErreurCalcul;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
}

impl Operateur {
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
        }
    }
}

/// Style littéral d’un crochet.
/// ( ) et { } sont le même *genre* de jeton, mais le style est conservé
/// pour rejeter `{ ... )`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Crochet {
    Rond,
    Accolade,
}

impl Crochet {
    pub fn ouvrant(self) -> char {
        match self {
            Self::Rond => '(',
            Self::Accolade => '{',
        }
    }

    pub fn fermant(self) -> char {
        match self {
            Self::Rond => ')',
            Self::Accolade => '}',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Entier(BigUint),
    Op(Operateur),
    Ouvrant(Crochet),
    Fermant(Crochet),
}

/// Tokenize une chaîne en jetons.
/// - espaces ignorés
/// - chiffres consécutifs => un seul entier (vidé avant le symbole qui suit)
/// - opérateurs + - * /
/// - crochets ( ) { }
/// - autre caractère : ignoré ou refusé selon `politique`
pub fn tokenize(s: &str, politique: PolitiqueCaracteres) -> Result<Vec<Tok>, ErreurCalcul> {
    let mut out = Vec::new();
    let mut chiffres = String::new();

    for c in s.chars() {
        if c.is_ascii_digit() {
            chiffres.push(c);
            continue;
        }

        // tout non-chiffre termine l’entier en cours
        vide_entier(&mut chiffres, &mut out);

        if c.is_whitespace() {
            continue;
        }

        let tok = match c {
            '(' => Tok::Ouvrant(Crochet::Rond),
            '{' => Tok::Ouvrant(Crochet::Accolade),
            ')' => Tok::Fermant(Crochet::Rond),
            '}' => Tok::Fermant(Crochet::Accolade),
            _ => match Operateur::depuis_char(c) {
                Some(op) => Tok::Op(op),
                None => match politique {
                    PolitiqueCaracteres::Ignorer => continue,
                    PolitiqueCaracteres::Refuser => {
                        return Err(ErreurCalcul::CaractereInvalide(c))
                    }
                },
            },
        };
        out.push(tok);
    }
    vide_entier(&mut chiffres, &mut out);

    Ok(out)
}

fn vide_entier(chiffres: &mut String, out: &mut Vec<Tok>) {
    if chiffres.is_empty() {
        return;
    }
    // que des chiffres ASCII ici : parse_bytes ne peut pas échouer
    if let Some(n) = BigUint::parse_bytes(chiffres.as_bytes(), 10) {
        out.push(Tok::Entier(n));
    }
    chiffres.clear();
}

/// Format utilitaire (démarche) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Entier(n) => n.to_string(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::Ouvrant(c) => c.ouvrant().to_string(),
            Tok::Fermant(c) => c.fermant().to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
