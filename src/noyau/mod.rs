//! Noyau flottant
//!
//! Organisation interne :
//! - parentheses.rs : correction des parenthèses (avant analyse)
//! - jetons.rs      : curseur + littéraux numériques
//! - analyse.rs     : expr / terme / facteur, boucle à pile explicite
//! - format.rs      : affichage entier nu ou "%.10g"
//! - eval.rs        : pipeline complet + sentinelle "ERR"
//! - erreur.rs      : taxonomie interne des échecs
//! - reglages.rs    : tolérances + garde-fous

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod parentheses;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalcul;
pub use eval::{eval_avec, eval_detail, eval_expression, Evaluation};
pub use reglages::{Reglages, SENTINELLE};
