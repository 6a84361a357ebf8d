// src/noyau/parentheses.rs
//
// Correction automatique des parenthèses (avant analyse) :
// - ')' qui fait passer le solde sous zéro -> erreur (aucune réparation)
// - '(' restées ouvertes -> autant de ')' ajoutées en fin d’expression

use super::erreur::ErreurCalcul;

/// Retourne le texte éventuellement complété par des ')' finales.
pub fn normalize_parens(s: &str) -> Result<String, ErreurCalcul> {
    let mut solde: usize = 0;

    for (pos, c) in s.chars().enumerate() {
        match c {
            '(' => solde += 1,
            ')' => {
                solde = solde
                    .checked_sub(1)
                    .ok_or(ErreurCalcul::ParenthesesDesequilibrees { pos })?;
            }
            _ => {}
        }
    }

    let mut out = String::with_capacity(s.len() + solde);
    out.push_str(s);
    if solde > 0 {
        log::trace!("parenthèses: {solde} ')' ajoutée(s) en fin d’expression");
        out.extend(std::iter::repeat(')').take(solde));
    }
    Ok(out)
}
