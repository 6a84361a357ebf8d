//! Calculatrice flottante : noyau d’évaluation
//!
//! Contrat unique vers l’hôte : `eval_expression(texte) -> texte`,
//! totale : nombre formaté ("42", "0.5", "1.5e-07") ou "ERR".
//!
//! ```
//! use calculatrice_flottante::eval_expression;
//!
//! assert_eq!(eval_expression("1+2*3"), "7");
//! assert_eq!(eval_expression("(((1+1"), "2");
//! assert_eq!(eval_expression("3/(2-2)"), "ERR");
//! ```

pub mod noyau;

pub use noyau::{eval_avec, eval_detail, eval_expression, ErreurCalcul, Evaluation, Reglages};
