//! Noyau : évaluation (pipeline réel)
//!
//! parenthèses (correction) -> analyse à pile explicite (valeur f64) -> affichage
//!
//! Toute erreur, à n’importe quelle étape, devient la sentinelle "ERR" :
//! aucun code, aucune position ne sortent vers l’appelant.

use super::analyse::Analyseur;
use super::erreur::ErreurCalcul;
use super::format::format_resultat;
use super::parentheses::normalize_parens;
use super::reglages::{Reglages, SENTINELLE};

/// Démarche d’une évaluation réussie (pour le mode détaillé et les tests).
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub entree: String,
    pub normalisee: String,
    pub valeur: f64,
    pub affichage: String,
}

/// API publique : texte -> texte, totale (jamais de panique).
/// Retourne un nombre formaté ("42", "0.5", "1.5e-07") ou "ERR".
pub fn eval_expression(expr_str: &str) -> String {
    eval_avec(expr_str, &Reglages::default())
}

/// Même contrat que `eval_expression`, avec réglages explicites.
pub fn eval_avec(expr_str: &str, reglages: &Reglages) -> String {
    match eval_detail(expr_str, reglages) {
        Ok(e) => e.affichage,
        Err(e) => {
            log::debug!("{expr_str:?} -> {SENTINELLE} ({e})");
            SENTINELLE.to_string()
        }
    }
}

/// Évaluation avec erreur typée.
pub fn eval_detail(expr_str: &str, reglages: &Reglages) -> Result<Evaluation, ErreurCalcul> {
    // 1) Parenthèses
    let normalisee = normalize_parens(expr_str)?;

    // 2) Valeur (le curseur vit le temps de cet appel)
    let chars: Vec<char> = normalisee.chars().collect();
    let valeur = Analyseur::new(&chars, reglages).analyser_tout()?;

    // 3) Affichage
    let affichage = format_resultat(valeur, reglages);

    Ok(Evaluation {
        entree: expr_str.to_string(),
        normalisee,
        valeur,
        affichage,
    })
}
