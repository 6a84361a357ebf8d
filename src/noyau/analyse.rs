// src/noyau/analyse.rs
//
// Évaluation directe (pas d’AST) de la grammaire :
//
//   expr    := terme   (('+' | '-') terme)*
//   terme   := facteur (('*' | '/') facteur)*
//   facteur := ('+' | '-') facteur | '(' expr ')' | nombre   suivi de '%'*
//
// Boucle à pile explicite plutôt que descente récursive : chaque '(' empile
// un Niveau (somme + produit + signe en attente), chaque ')' le dépile.
// L’imbrication n’est limitée que par la mémoire, jamais par la pile native.
//
// Règles :
// - '%' postfixé : divise par 100, autant de fois qu’écrit (50%% = 0.005)
// - unaire : --5 = -(-5), appliqué après les '%' du facteur (-50% = -0.5)
// - diviseur |d| < epsilon_division -> DivisionParZero (jamais inf/NaN)
// - tout résultat intermédiaire non fini -> Depassement
// - gauche -> droite, mêmes opérations f64 et même ordre qu’une descente récursive

use super::erreur::ErreurCalcul;
use super::jetons::Curseur;
use super::reglages::Reglages;

/// Un niveau de parenthèses en cours d’évaluation.
#[derive(Clone, Copy, Debug, Default)]
struct Niveau {
    /// expr : valeur à gauche de l’opérateur '+'/'-' en attente
    somme: Option<(f64, char)>,
    /// terme : valeur à gauche de l’opérateur '*'/'/' en attente
    produit: Option<(f64, char)>,
    /// nombre impair de '-' unaires devant le facteur courant
    negatif: bool,
}

pub struct Analyseur<'a, 'r> {
    cur: Curseur<'a>,
    reglages: &'r Reglages,
}

impl<'a, 'r> Analyseur<'a, 'r> {
    pub fn new(chars: &'a [char], reglages: &'r Reglages) -> Self {
        Self {
            cur: Curseur::new(chars),
            reglages,
        }
    }

    /// Analyse l’entrée entière : une expression, puis uniquement des espaces.
    pub fn analyser_tout(mut self) -> Result<f64, ErreurCalcul> {
        let v = self.expr()?;

        self.cur.sauter_espaces();
        if let Some(c) = self.cur.courant() {
            return Err(ErreurCalcul::ResteNonConsomme {
                c,
                pos: self.cur.pos(),
            });
        }
        Ok(v)
    }

    fn expr(&mut self) -> Result<f64, ErreurCalcul> {
        let mut pile: Vec<Niveau> = Vec::new();
        let mut niv = Niveau::default();

        loop {
            // 1) facteur primaire : signes et '(' empilés, puis un nombre
            let mut v = loop {
                self.cur.sauter_espaces();
                let pos = self.cur.pos();
                match self.cur.courant() {
                    Some(signe @ ('+' | '-')) => {
                        self.cur.avancer();
                        if signe == '-' {
                            niv.negatif = !niv.negatif;
                        }
                    }
                    Some('(') => {
                        self.cur.avancer();
                        pile.push(niv);
                        niv = Niveau::default();
                    }
                    Some(c) if c.is_ascii_digit() || c == '.' => break self.cur.parse_number()?,
                    _ => {
                        return Err(ErreurCalcul::Syntaxe {
                            attendu: "opérande",
                            pos,
                        })
                    }
                }
            };

            // 2) remontée : '%', signe, terme, expr ; ')' ferme un niveau
            loop {
                // '%' postfixé, lié plus fort que tout opérateur binaire
                while self.cur.consommer('%') {
                    v /= 100.0;
                    log::trace!("pourcentage appliqué -> {v}");
                }
                if niv.negatif {
                    v = -v;
                    niv.negatif = false;
                }

                let facteur = v;
                let produit = match niv.produit.take() {
                    None => facteur,
                    Some((g, '*')) => fini(g * facteur)?,
                    Some((g, _)) => {
                        if facteur.abs() < self.reglages.epsilon_division {
                            return Err(ErreurCalcul::DivisionParZero);
                        }
                        fini(g / facteur)?
                    }
                };

                self.cur.sauter_espaces();
                if let Some(op @ ('*' | '/')) = self.cur.courant() {
                    self.cur.avancer();
                    niv.produit = Some((produit, op));
                    break;
                }

                let somme = match niv.somme.take() {
                    None => produit,
                    Some((g, '+')) => fini(g + produit)?,
                    Some((g, _)) => fini(g - produit)?,
                };

                if let Some(op @ ('+' | '-')) = self.cur.courant() {
                    self.cur.avancer();
                    niv.somme = Some((somme, op));
                    break;
                }

                // expr terminée à ce niveau
                let Some(parent) = pile.pop() else {
                    return Ok(somme);
                };
                if !self.cur.consommer(')') {
                    return Err(ErreurCalcul::Syntaxe {
                        attendu: "')'",
                        pos: self.cur.pos(),
                    });
                }
                niv = parent;
                v = somme;
            }
        }
    }
}

fn fini(v: f64) -> Result<f64, ErreurCalcul> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(ErreurCalcul::Depassement)
    }
}
