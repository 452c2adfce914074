// src/noyau/format.rs

use super::erreurs::Echec;
use super::eval::Etape;

/// Au-delà, l’écriture positionnelle devient illisible : on passe en 1e20.
const LIMITE_POSITIONNELLE: f64 = 1e16;

/// Réel lisible : entiers avec ".0" (3 -> "3.0"), sinon écriture courte.
pub fn format_valeur(v: f64) -> String {
    if !v.is_finite() {
        return format!("{v}");
    }
    if v.abs() >= LIMITE_POSITIONNELLE {
        return format!("{v:e}");
    }
    if v.fract() == 0.0 {
        format!("{v:.1}")
    } else {
        format!("{v}")
    }
}

/// Issue d’une évaluation (historique, affichage).
pub fn format_issue(issue: &Result<f64, Echec>) -> String {
    match issue {
        Ok(v) => format_valeur(*v),
        Err(e) => e.to_string(),
    }
}

/// "3.0 * 4.0 = 12.0"
pub fn format_etape(e: &Etape) -> String {
    format!(
        "{} {} {} = {}",
        format_valeur(e.gauche),
        e.op.symbole(),
        format_valeur(e.droite),
        format_valeur(e.valeur)
    )
}
