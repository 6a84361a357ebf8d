//! Réglages du noyau (tolérances + garde-fous).
//!
//! Contrat : aucune lecture d’environnement ici, les valeurs par défaut sont figées.

/// Chaîne unique renvoyée à l’appelant pour toute erreur.
pub const SENTINELLE: &str = "ERR";

/// Diviseur considéré nul si |d| < EPSILON_DIVISION.
pub const EPSILON_DIVISION: f64 = 1e-12;

/// Valeur affichée comme entier si |v - round(v)| < EPSILON_ENTIER.
pub const EPSILON_ENTIER: f64 = 1e-10;

/// Chiffres significatifs de l’affichage décimal (équivalent "%.10g").
pub const CHIFFRES_DEFAUT: usize = 10;

#[derive(Clone, Debug, PartialEq)]
pub struct Reglages {
    pub epsilon_division: f64,
    pub epsilon_entier: f64,
    pub chiffres_significatifs: usize,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            epsilon_division: EPSILON_DIVISION,
            epsilon_entier: EPSILON_ENTIER,
            chiffres_significatifs: CHIFFRES_DEFAUT,
        }
    }
}

impl Reglages {
    /// Garde-fou : au moins 1 chiffre significatif (comme "%.0g" qui vaut "%.1g").
    pub fn avec_chiffres(mut self, chiffres: usize) -> Self {
        self.chiffres_significatifs = chiffres.max(1);
        self
    }
}
