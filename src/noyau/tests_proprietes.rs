//! Propriétés observables du contrat `evaluate` / `get_history`.

use super::{Calculatrice, Echec, EntreeHistorique};

fn eval(s: &str) -> Result<f64, Echec> {
    Calculatrice::new().evaluate(s)
}

#[test]
fn gauche_a_droite_pour_plus_moins() {
    assert_eq!(eval("10 - 3 - 2"), Ok(5.0));
    assert_eq!(eval("1 - 2 + 3"), Ok(2.0));
    assert_eq!(eval("20 - 5 - 5 - 5"), Ok(5.0));
}

#[test]
fn precedence_et_groupement() {
    assert_eq!(eval("2 + 3 * 4"), Ok(14.0));
    assert_eq!(eval("(2 + 3) * 4"), Ok(20.0));
    assert_eq!(eval("2 * 3 + 4 * 5"), Ok(26.0));
    assert_eq!(eval("100 / 10 / 5"), Ok(2.0));
}

#[test]
fn styles_de_crochets_suivis() {
    assert_eq!(eval("{2 + 3} * 4"), Ok(20.0));
    assert_eq!(eval("{2 + 3) * 4"), Err(Echec));
    assert_eq!(eval("(2 + 3} * 4"), Err(Echec));
    assert_eq!(eval("{(2 + 3) * 4}"), Ok(20.0));
}

#[test]
fn division_par_zero_partout() {
    assert_eq!(eval("8 / 0"), Err(Echec));
    assert_eq!(eval("(8 / 0) + 1"), Err(Echec));
    assert_eq!(eval("1 + {2 * (3 / (4 - 4))}"), Err(Echec));
}

#[test]
fn crochets_desequilibres() {
    assert_eq!(eval("(1 + 2"), Err(Echec));
    assert_eq!(eval("1 + 2)"), Err(Echec));
    // échec même si l’arithmétique serait fautive : la porte passe avant
    assert_eq!(eval("(8 / 0"), Err(Echec));
}

#[test]
fn historique_plus_recent_d_abord() {
    let mut c = Calculatrice::new();
    assert_eq!(c.evaluate("1+1"), Ok(2.0));
    assert_eq!(c.evaluate("2+2"), Ok(4.0));
    assert_eq!(
        c.get_history(),
        vec![
            EntreeHistorique::new("2+2", Ok(4.0)),
            EntreeHistorique::new("1+1", Ok(2.0)),
        ]
    );

    assert_eq!(c.evaluate("5/0"), Err(Echec));
    let h = c.get_history();
    assert_eq!(h[0], EntreeHistorique::new("5/0", Err(Echec)));
    assert_eq!(h.len(), 3);
}

#[test]
fn get_history_idempotent_et_copie() {
    let mut c = Calculatrice::new();
    c.evaluate("1+1").unwrap();
    c.evaluate("3*(").unwrap_err();

    let a = c.get_history();
    let b = c.get_history();
    assert_eq!(a, b);

    let mut modifiee = c.get_history();
    modifiee[0].expression.push_str("!!");
    modifiee[1].issue = Err(Echec);
    modifiee.reverse();

    assert_eq!(c.get_history(), a);
}

#[test]
fn entiers_multi_chiffres() {
    assert_eq!(eval("12 + 3"), Ok(15.0));
    assert_eq!(eval("100*100"), Ok(10000.0));
    assert_eq!(eval("007 + 1"), Ok(8.0));
}

#[test]
fn echec_uniforme() {
    // toutes les causes internes donnent le même signal
    let causes = ["(1", "1/0", "1 +", "", "{}"];
    for s in causes {
        assert_eq!(eval(s), Err(Echec), "{s:?}");
    }
    assert_eq!(Echec.to_string(), "Error");
}
