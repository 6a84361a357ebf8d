// src/noyau/format.rs
//
// Affichage du résultat :
// - quasi-entier (|v - round(v)| < epsilon_entier) -> entier nu ("42", "-3")
// - sinon forme générale à N chiffres significatifs, comme "%.Ng" en C :
//   fixe si -4 <= exposant < N, scientifique sinon ("1.5e-07"),
//   zéros finaux et point final retirés.
//
// Affichage volontairement avec perte (10 chiffres par défaut).

use num_traits::ToPrimitive;

use super::reglages::Reglages;

pub fn format_resultat(v: f64, reglages: &Reglages) -> String {
    let arrondi = v.round();
    if (v - arrondi).abs() < reglages.epsilon_entier {
        // hors plage i64 : pas d’entier nu, on retombe sur la forme générale
        if let Some(n) = arrondi.to_i64() {
            return n.to_string();
        }
    }
    format_general(v, reglages.chiffres_significatifs)
}

/// Équivalent de "%.{p}g" (p >= 1).
pub fn format_general(v: f64, chiffres: usize) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }

    let p = chiffres.max(1);

    // L’exposant retenu est celui APRÈS arrondi à p chiffres (9.99999999996 -> 1e1).
    let sci = format!("{:.*e}", p - 1, v);
    let (mantisse, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if exp < -4 || exp >= p as i32 {
        let signe = if exp < 0 { '-' } else { '+' };
        format!(
            "{}e{signe}{:02}",
            sans_zeros_finaux(mantisse),
            exp.unsigned_abs()
        )
    } else {
        let decimales = (p as i32 - 1 - exp).max(0) as usize;
        let fixe = format!("{:.*}", decimales, v);
        sans_zeros_finaux(&fixe).to_string()
    }
}

fn sans_zeros_finaux(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}
