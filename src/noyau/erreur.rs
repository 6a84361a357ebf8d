// src/noyau/erreur.rs
//
// Taxonomie interne des échecs.
// Côté appelant, tout se replie sur la sentinelle "ERR" (voir eval.rs) :
// les variantes et positions ne servent qu’au debug et aux tests.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ErreurCalcul {
    /// ')' sans '(' correspondante avant elle.
    #[error("parenthèse fermante sans ouvrante (position {pos})")]
    ParenthesesDesequilibrees { pos: usize },

    /// Nombre sans chiffre, ou conversion impossible (débordement inclus).
    #[error("nombre invalide (position {pos})")]
    LitteralInvalide { pos: usize },

    /// Opérande, ')' ou fin d’expression attendus mais absents.
    #[error("syntaxe: {attendu} attendu (position {pos})")]
    Syntaxe { attendu: &'static str, pos: usize },

    /// Expression complète suivie de caractères non consommés.
    #[error("caractère inattendu: '{c}' (position {pos})")]
    ResteNonConsomme { c: char, pos: usize },

    #[error("division par zéro")]
    DivisionParZero,

    /// Résultat intermédiaire infini ou NaN.
    #[error("dépassement de capacité")]
    Depassement,
}
