// src/noyau/jetons.rs
//
// Lecteur bas niveau : curseur sur l’entrée + littéraux numériques.
//
// Invariant : 0 <= pos <= len à tout moment observable.
// Le curseur n’avance que vers la droite ; après une erreur sa position
// n’a plus de sens (l’appelant s’arrête).

use super::erreur::ErreurCalcul;

#[derive(Clone, Debug)]
pub struct Curseur<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Curseur<'a> {
    pub fn new(chars: &'a [char]) -> Self {
        Self { chars, pos: 0 }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn fin(&self) -> bool {
        self.pos >= self.chars.len()
    }

    /// Caractère sous le curseur (sans sauter les espaces).
    pub fn courant(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    pub fn avancer(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    pub fn sauter_espaces(&mut self) {
        while matches!(self.courant(), Some(c) if est_espace(c)) {
            self.pos += 1;
        }
    }

    /// Saute les espaces puis consomme `c` s’il est là.
    pub fn consommer(&mut self, c: char) -> bool {
        self.sauter_espaces();
        if self.courant() == Some(c) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn sauter_chiffres(&mut self) -> bool {
        let debut = self.pos;
        while matches!(self.courant(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos > debut
    }

    /// Littéral décimal : chiffres [ '.' chiffres* ] ou '.' chiffres.
    /// Au moins un chiffre d’un côté du point ; pas d’exposant, pas de signe.
    pub fn parse_number(&mut self) -> Result<f64, ErreurCalcul> {
        self.sauter_espaces();
        // fin d’entrée ou caractère qui ne peut pas ouvrir un nombre
        if !matches!(self.courant(), Some(c) if c.is_ascii_digit() || c == '.') {
            return Err(ErreurCalcul::Syntaxe {
                attendu: "nombre",
                pos: self.pos,
            });
        }

        let debut = self.pos;
        let mut a_chiffre = self.sauter_chiffres();

        if self.courant() == Some('.') {
            self.pos += 1;
            a_chiffre |= self.sauter_chiffres();
        }

        if !a_chiffre {
            return Err(ErreurCalcul::LitteralInvalide { pos: debut });
        }

        let texte: String = self.chars[debut..self.pos].iter().collect();
        let v: f64 = texte
            .parse()
            .map_err(|_| ErreurCalcul::LitteralInvalide { pos: debut })?;

        // Hors plage f64 : trop grand (inf) ou trop petit (0 / sous-normal alors
        // que le texte contient un chiffre non nul).
        let non_nul = texte.chars().any(|c| matches!(c, '1'..='9'));
        if !v.is_finite() || (non_nul && v.abs() < f64::MIN_POSITIVE) {
            return Err(ErreurCalcul::LitteralInvalide { pos: debut });
        }

        Ok(v)
    }
}

/// Espaces au sens de `isspace` en locale "C" : ' ', \t, \n, \v, \f, \r.
/// Les autres espaces Unicode (insécable, cadratin...) ne sont PAS des séparateurs.
fn est_espace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}
