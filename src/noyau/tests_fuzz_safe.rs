//! Tests fuzz safe : robustesse + déterminisme + limites contrôlées.
//!
//! - RNG déterministe (seed fixe)
//! - profondeur bornée
//! - budget temps global
//! - oracle : évaluation directe de l’arbre généré (mêmes opérations,
//!   donc mêmes réels au bit près)

use std::time::{Duration, Instant};

use super::jetons::Operateur;
use super::Calculatrice;

/* ------------------------ RNG déterministe minimal ------------------------ */

#[derive(Clone)]
struct Rng {
    state: u64,
}
impl Rng {
    fn new(seed: u64) -> Self {
        Self { state: seed }
    }
    fn next_u32(&mut self) -> u32 {
        // LCG simple (déterministe)
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }
    fn pick(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.next_u32() % n
        }
    }
    fn coin(&mut self) -> bool {
        (self.next_u32() & 1) == 1
    }
}

/* ------------------------ Budget anti-gel ------------------------ */

fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Arbres + oracle ------------------------ */

enum Arbre {
    Feuille(u32),
    Noeud(Box<Arbre>, Operateur, Box<Arbre>),
}

fn gen_op(rng: &mut Rng) -> Operateur {
    match rng.pick(4) {
        0 => Operateur::Plus,
        1 => Operateur::Moins,
        2 => Operateur::Fois,
        _ => Operateur::Divise,
    }
}

fn gen_arbre(rng: &mut Rng, profondeur: u32) -> Arbre {
    if profondeur == 0 || rng.pick(3) == 0 {
        // petits entiers, 0 inclus (divisions par zéro voulues)
        return Arbre::Feuille(rng.pick(13));
    }
    let a = gen_arbre(rng, profondeur - 1);
    let op = gen_op(rng);
    let b = gen_arbre(rng, profondeur - 1);
    Arbre::Noeud(Box::new(a), op, Box::new(b))
}

fn prec(op: Operateur) -> u8 {
    match op {
        Operateur::Plus | Operateur::Moins => 1,
        Operateur::Fois | Operateur::Divise => 2,
    }
}

/// None = division par zéro quelque part dans l’arbre.
fn oracle(a: &Arbre) -> Option<f64> {
    match a {
        Arbre::Feuille(n) => Some(f64::from(*n)),
        Arbre::Noeud(g, op, d) => {
            let g = oracle(g)?;
            let d = oracle(d)?;
            match op {
                Operateur::Plus => Some(g + d),
                Operateur::Moins => Some(g - d),
                Operateur::Fois => Some(g * d),
                Operateur::Divise => (d != 0.0).then(|| g / d),
            }
        }
    }
}

fn ecrire_groupe(a: &Arbre, rng: &mut Rng, out: &mut String) {
    let (o, f) = if rng.coin() { ('(', ')') } else { ('{', '}') };
    out.push(o);
    ecrire(a, rng, out);
    out.push(f);
}

/// Écriture infixe : crochets là où la précédence (associativité à gauche)
/// l’exige, plus quelques crochets superflus au hasard.
fn ecrire(a: &Arbre, rng: &mut Rng, out: &mut String) {
    match a {
        Arbre::Feuille(n) => out.push_str(&n.to_string()),
        Arbre::Noeud(g, op, d) => {
            let p = prec(*op);
            let besoin_g = matches!(g.as_ref(), Arbre::Noeud(_, og, _) if prec(*og) < p);
            let besoin_d = matches!(d.as_ref(), Arbre::Noeud(_, od, _) if prec(*od) <= p);

            if besoin_g || rng.pick(5) == 0 {
                ecrire_groupe(g, rng, out);
            } else {
                ecrire(g, rng, out);
            }

            if rng.coin() {
                out.push(' ');
            }
            out.push(op.symbole());
            if rng.coin() {
                out.push(' ');
            }

            if besoin_d || rng.pick(5) == 0 {
                ecrire_groupe(d, rng, out);
            } else {
                ecrire(d, rng, out);
            }
        }
    }
}

/* ------------------------ Campagnes ------------------------ */

#[test]
fn fuzz_conforme_a_l_oracle() {
    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(0xC0FFEE);
    let mut calc = Calculatrice::new();

    for i in 0..2_000 {
        budget(start, max);

        let arbre = gen_arbre(&mut rng, 5);
        let mut s = String::new();
        ecrire(&arbre, &mut rng, &mut s);

        match (oracle(&arbre), calc.evaluate(&s)) {
            (Some(attendu), Ok(v)) => assert!(
                v == attendu || (v.is_nan() && attendu.is_nan()),
                "expr={s:?} attendu={attendu} obtenu={v}"
            ),
            (None, Err(_)) => {}
            (o, r) => panic!("expr={s:?} oracle={o:?} evaluate={r:?}"),
        }

        assert_eq!(calc.historique().len(), i + 1);
    }
}

#[test]
fn fuzz_soupe_de_caracteres_sans_panique() {
    const ALPHABET: &[char] = &[
        '0', '1', '2', '7', '9', '+', '-', '*', '/', '(', ')', '{', '}', ' ', 'x', '.',
    ];

    let start = Instant::now();
    let max = Duration::from_secs(5);
    let mut rng = Rng::new(42);
    let mut calc = Calculatrice::new();

    for i in 0..5_000 {
        budget(start, max);

        let n = rng.pick(16);
        let s: String = (0..n)
            .map(|_| ALPHABET[rng.pick(ALPHABET.len() as u32) as usize])
            .collect();

        // succès => crochets forcément équilibrés
        if calc.evaluate(&s).is_ok() {
            let mut profondeur = 0i32;
            for c in s.chars() {
                match c {
                    '(' | '{' => profondeur += 1,
                    ')' | '}' => profondeur -= 1,
                    _ => {}
                }
                assert!(profondeur >= 0, "expr={s:?}");
            }
            assert_eq!(profondeur, 0, "expr={s:?}");
        }

        assert_eq!(calc.historique().len(), i + 1);
        assert_eq!(
            calc.historique().derniere().map(|e| e.expression.as_str()),
            Some(s.as_str())
        );
    }
}
